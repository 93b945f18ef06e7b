use super::Column;
use crate::{Error, Result};

use indexmap::IndexMap;

/// A table's name and its ordered column catalog.
///
/// Columns keep the order in which the database reports them (ordinal
/// position); that order drives generated statements and statement names.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns, keyed by name
    pub columns: IndexMap<String, Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            name: name.into(),
            columns: columns
                .into_iter()
                .map(|column| (column.name.clone(), column))
                .collect(),
        }
    }

    /// Returns the named column, or a bad column error naming this table.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| Error::bad_column(&self.name, name))
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Position of the named column in catalog order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.values().filter(|column| column.primary_key)
    }

    /// Primary key column names, in catalog order.
    pub fn primary_key(&self) -> Vec<&str> {
        self.primary_key_columns()
            .map(|column| column.name.as_str())
            .collect()
    }

    /// Positions of the primary key columns, in catalog order.
    pub fn primary_key_positions(&self) -> Vec<usize> {
        self.columns
            .values()
            .enumerate()
            .filter(|(_, column)| column.primary_key)
            .map(|(index, _)| index)
            .collect()
    }
}
