mod persist;

use crate::{relation, Db, Related, Result, Value};

use activerow_core::{
    driver::Row,
    schema::{Column, Table},
    Error,
};
use indexmap::IndexMap;

use std::{cmp::Ordering, collections::HashMap, sync::Arc};

/// Form field prefix of the hidden companion of a checkbox. The companion
/// carries the unchecked value and is ignored when the checkbox itself was
/// submitted.
const CHECKBOX_PREFIX: &str = "_check_";

static NULL: Value = Value::Null;

/// One row of a table, or one row about to be inserted.
///
/// A record holds two maps over the same keys, its table's columns:
/// `clean`, the last state confirmed by the database, and `dirty`, the
/// current state callers modify. Saving writes only the columns where the
/// two differ.
#[derive(Debug, Clone)]
pub struct Record {
    class: String,

    table: Arc<Table>,

    clean: IndexMap<String, Value>,

    dirty: IndexMap<String, Value>,

    /// Resolved associations by name
    related: HashMap<String, Related>,
}

impl Record {
    /// Creates an unbound record of `class`. Every column is null.
    pub fn new(db: &Db, class: &str) -> Result<Record> {
        let table = db.columns_for(class)?;
        Ok(Record::with_table(class, table))
    }

    pub(crate) fn with_table(class: &str, table: Arc<Table>) -> Record {
        let nulls = table
            .column_names()
            .map(|name| (name.to_string(), Value::Null))
            .collect::<IndexMap<_, _>>();

        Record {
            class: class.to_string(),
            table,
            clean: nulls.clone(),
            dirty: nulls,
            related: HashMap::new(),
        }
    }

    /// Creates a record from a database row.
    pub(crate) fn from_row(class: &str, table: Arc<Table>, row: Row) -> Record {
        let mut record = Record::with_table(class, table);
        record.set_all_and_resync(row);
        record
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn table_name(&self) -> &str {
        &self.table.name
    }

    /// The current value of column `name`.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.table.column(name)?;
        Ok(self.dirty_value(name))
    }

    /// The last database-confirmed value of column `name`.
    pub fn clean_value(&self, name: &str) -> Result<&Value> {
        self.table.column(name)?;
        Ok(self.clean.get(name).unwrap_or(&NULL))
    }

    /// Sets column `name`, coercing `value` for the column. Only the current
    /// state changes.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = self.table.column(name)?.coerce(value);
        self.dirty.insert(name.to_string(), value);
        Ok(())
    }

    /// Sets several columns from a form submission.
    ///
    /// A `_check_<column>` key is the hidden companion of a checkbox: it is
    /// ignored when `<column>` is also present and otherwise stands for
    /// `<column>`. Unknown columns do not stop the remaining keys from being
    /// applied; their errors are returned.
    pub fn set_all<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>) -> Vec<Error>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let values = values
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<IndexMap<String, Value>>();

        let mut errors = vec![];

        for (key, value) in &values {
            let name = match key.strip_prefix(CHECKBOX_PREFIX) {
                Some(name) if values.contains_key(name) => continue,
                Some(name) => name,
                None => key.as_str(),
            };

            if let Err(err) = self.set(name, value.clone()) {
                log::warn!("ignoring unknown column; class={} key={key:?}", self.class);
                errors.push(err);
            }
        }

        errors
    }

    /// Resets both states to `row`. Columns missing from the row are null.
    pub(crate) fn set_all_and_resync(&mut self, row: Row) {
        for value in self.clean.values_mut().chain(self.dirty.values_mut()) {
            *value = Value::Null;
        }

        for (key, raw) in row {
            match self.table.get_column(&key) {
                Some(column) => {
                    let value = column.coerce(raw);
                    self.clean.insert(key.clone(), value.clone());
                    self.dirty.insert(key, value);
                }
                None => {
                    log::warn!(
                        "ignoring unknown column in row; table={} column={key:?}",
                        self.table.name
                    );
                }
            }
        }
    }

    /// Renders column `name` for an HTML page.
    pub fn display(&self, name: &str) -> Result<String> {
        let column = self.table.column(name)?;
        Ok(column.display(self.dirty_value(name)))
    }

    /// Renders the HTML form fragment for column `name`.
    pub fn form(&self, name: &str, comparison: Option<&Value>) -> Result<String> {
        let column = self.table.column(name)?;
        Ok(column.form_fragment(self.dirty_value(name), comparison))
    }

    /// The descriptor of column `name`.
    pub fn column_inspect(&self, name: &str) -> Result<&Column> {
        self.table.column(name)
    }

    /// Column names in catalog order.
    pub fn column_names(&self) -> Vec<&str> {
        self.table.column_names().collect()
    }

    /// Column names in alphabetical order.
    pub fn sorted_column_names(&self) -> Vec<&str> {
        let mut names = self.column_names();
        names.sort_unstable();
        names
    }

    /// Returns `true` once the first primary key column holds a
    /// database-confirmed value.
    pub fn is_persisted(&self) -> bool {
        self.primary_key_value().is_some_and(|(_, value)| !value.is_null())
    }

    pub fn is_modified(&self) -> bool {
        !self.changed_columns().is_empty()
    }

    /// Columns whose current value differs from the database-confirmed one,
    /// in catalog order.
    pub fn changed_columns(&self) -> Vec<&str> {
        self.table
            .column_names()
            .filter(|name| self.clean.get(*name) != self.dirty.get(*name))
            .collect()
    }

    /// Orders records by their first primary key column.
    pub fn cmp_by_primary_key(&self, other: &Record) -> Ordering {
        let lhs = self.primary_key_value().map(|(_, value)| value).unwrap_or(&NULL);
        let rhs = other.primary_key_value().map(|(_, value)| value).unwrap_or(&NULL);
        cmp_values(lhs, rhs)
    }

    /// Resolves the association `name`, loading it on first use or when
    /// `force` is set.
    pub fn resolve(&mut self, db: &Db, name: &str, force: bool) -> Result<&Related> {
        if force || !self.related.contains_key(name) {
            let relation = db.relation(&self.class, name)?;
            let related = relation::load(db, self, &relation)?;
            self.related.insert(name.to_string(), related);
        }

        Ok(&self.related[name])
    }

    /// The first primary key column and its database-confirmed value.
    pub(crate) fn primary_key_value(&self) -> Option<(&Column, &Value)> {
        let column = self.table.primary_key_columns().next()?;
        Some((column, self.clean.get(&column.name).unwrap_or(&NULL)))
    }

    pub(crate) fn dirty_value(&self, name: &str) -> &Value {
        self.dirty.get(name).unwrap_or(&NULL)
    }
}

fn cmp_values(lhs: &Value, rhs: &Value) -> Ordering {
    match (lhs, rhs) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::I64(lhs), Value::I64(rhs)) => lhs.cmp(rhs),
        (Value::Date(lhs), Value::Date(rhs)) => lhs.cmp(rhs),
        _ => match (lhs.as_f64(), rhs.as_f64()) {
            (Some(lhs), Some(rhs)) => lhs.total_cmp(&rhs),
            _ => lhs.to_string().cmp(&rhs.to_string()),
        },
    }
}
