use super::{ColumnRef, Equals, Param};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Result columns. Each is returned under its bare column name.
    pub columns: Vec<ColumnRef>,
    pub from: String,
    pub join: Option<Join>,
    pub filter: Vec<Equals>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<Param>,
    pub offset: Option<Param>,
}

/// `INNER JOIN table ON on`
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: String,
    pub on: Equals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: ColumnRef,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Select {
    pub fn new(from: impl Into<String>, columns: Vec<ColumnRef>) -> Self {
        Self {
            columns,
            from: from.into(),
            join: None,
            filter: vec![],
            order_by: vec![],
            limit: None,
            offset: None,
        }
    }

    pub(crate) fn collect_identifiers<'a>(&'a self, idents: &mut Vec<&'a str>) {
        for column in &self.columns {
            column.collect_identifiers(idents);
        }
        idents.push(&self.from);
        if let Some(join) = &self.join {
            idents.push(&join.table);
            join.on.collect_identifiers(idents);
        }
        for filter in &self.filter {
            filter.collect_identifiers(idents);
        }
        for order_by in &self.order_by {
            order_by.column.collect_identifiers(idents);
        }
    }

    pub(crate) fn collect_params(&self, params: &mut Vec<Option<String>>) {
        for filter in &self.filter {
            filter.collect_params(params);
        }
        params.extend(self.limit.iter().map(|param| param.value.clone()));
        params.extend(self.offset.iter().map(|param| param.value.clone()));
    }
}

impl Direction {
    pub fn is_desc(self) -> bool {
        matches!(self, Direction::Desc)
    }
}
