use crate::stmt::Value;

use indexmap::IndexMap;
use std::sync::Arc;

/// A result row keyed by column name, in result column order.
pub type Row = IndexMap<String, Value>;

/// The complete, eagerly drained result of executing a statement.
///
/// Every value arrives in its text wire form; `None` is SQL `NULL`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Arc<[String]>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResultSet {
    pub fn new(columns: impl Into<Arc<[String]>>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            columns: columns.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as column-name keyed mappings.
    pub fn into_maps(self) -> Vec<Row> {
        let columns = self.columns;
        self.rows
            .into_iter()
            .map(|row| {
                columns
                    .iter()
                    .cloned()
                    .zip(row.into_iter().map(Value::from))
                    .collect()
            })
            .collect()
    }

    /// Rows as positional value sequences.
    pub fn into_positional(self) -> Vec<Vec<Value>> {
        self.rows
            .into_iter()
            .map(|row| row.into_iter().map(Value::from).collect())
            .collect()
    }
}
