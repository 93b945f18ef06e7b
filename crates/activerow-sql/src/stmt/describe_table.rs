use super::Param;

/// Catalog query listing a table's columns in ordinal order: name, backend
/// type, default expression, nullability and primary key membership.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeTable {
    pub table: Param,
}

impl DescribeTable {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: Param::new(Some(table.into()), "text"),
        }
    }
}
