use crate::Result;

use activerow_core::{
    schema::{Inflector, Table},
    Error,
};

use std::{collections::HashMap, sync::Arc};

/// Per-class table names and column catalogs.
///
/// Class and table names are associated in both directions, either
/// explicitly or by derivation through the inflector. Column catalogs are
/// introspected once per class and kept for the life of the `Db`.
#[derive(Debug, Default)]
pub struct Metadata {
    inflector: Inflector,

    class_to_table: HashMap<String, String>,

    table_to_class: HashMap<String, String>,

    /// Column catalogs by class name
    tables: HashMap<String, Arc<Table>>,
}

impl Metadata {
    pub fn inflector(&self) -> &Inflector {
        &self.inflector
    }

    /// Associates `class` with `table` in both directions.
    ///
    /// Fails once the class's columns have been introspected from a
    /// different table.
    pub fn register(&mut self, class: &str, table: &str) -> Result<()> {
        if let Some(cached) = self.tables.get(class) {
            if cached.name != table {
                return Err(Error::configuration(format!(
                    "class `{class}` is already mapped to table `{}`",
                    cached.name
                )));
            }
        }

        if let Some(previous) = self.class_to_table.insert(class.to_string(), table.to_string()) {
            if previous != table && self.table_to_class.get(&previous).is_some_and(|c| c == class) {
                self.table_to_class.remove(&previous);
            }
        }
        self.table_to_class.insert(table.to_string(), class.to_string());

        Ok(())
    }

    pub fn table_name_for(&mut self, class: &str) -> Result<String> {
        if let Some(table) = self.class_to_table.get(class) {
            return Ok(table.clone());
        }

        let singular = self.inflector.decamelize(class)?;
        let table = self.inflector.pluralize(&singular);
        self.register(class, &table)?;
        Ok(table)
    }

    pub fn class_for_table(&mut self, table: &str) -> Result<String> {
        if let Some(class) = self.table_to_class.get(table) {
            return Ok(class.clone());
        }

        let singular = self.inflector.singularize(table);
        let class = self.inflector.camelize(&singular)?;
        self.register(&class, table)?;
        Ok(class)
    }

    pub fn cached(&self, class: &str) -> Option<Arc<Table>> {
        self.tables.get(class).cloned()
    }

    /// Caches the catalog of `class`. A catalog already cached wins.
    pub(crate) fn insert_table(&mut self, class: &str, table: Table) -> Arc<Table> {
        self.tables
            .entry(class.to_string())
            .or_insert_with(|| Arc::new(table))
            .clone()
    }
}
