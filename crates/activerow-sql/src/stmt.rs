mod describe_table;
pub use describe_table::DescribeTable;

mod expr;
pub use expr::{ColumnRef, Equals, Expr, Param};

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Direction, Join, OrderBy, Select};

mod update;
pub use update::Update;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    DescribeTable(DescribeTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Every identifier the statement references, deduplicated, in order of
    /// first appearance. All of them must be quoted before serializing.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut idents = Vec::new();

        match self {
            Statement::DescribeTable(_) => {}
            Statement::Insert(stmt) => stmt.collect_identifiers(&mut idents),
            Statement::Select(stmt) => stmt.collect_identifiers(&mut idents),
            Statement::Update(stmt) => stmt.collect_identifiers(&mut idents),
        }

        let mut seen = std::collections::HashSet::new();
        idents.retain(|ident| seen.insert(*ident));
        idents
    }

    /// Parameter values in placeholder order: the value of `$1` first.
    pub fn params(&self) -> Vec<Option<String>> {
        let mut params = Vec::new();

        match self {
            Statement::DescribeTable(stmt) => params.push(stmt.table.value.clone()),
            Statement::Insert(stmt) => stmt.collect_params(&mut params),
            Statement::Select(stmt) => stmt.collect_params(&mut params),
            Statement::Update(stmt) => stmt.collect_params(&mut params),
        }

        params
    }
}

impl From<DescribeTable> for Statement {
    fn from(value: DescribeTable) -> Self {
        Statement::DescribeTable(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
