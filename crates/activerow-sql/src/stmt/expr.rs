/// A column reference, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub name: String,
}

/// A bound parameter: its text literal and the backend type it is cast to.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub value: Option<String>,
    pub cast: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(ColumnRef),
    Param(Param),
}

/// `lhs = rhs`. A list of these is combined with `AND`.
#[derive(Debug, Clone, PartialEq)]
pub struct Equals {
    pub lhs: ColumnRef,
    pub rhs: Expr,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    pub(crate) fn collect_identifiers<'a>(&'a self, idents: &mut Vec<&'a str>) {
        if let Some(table) = &self.table {
            idents.push(table);
        }
        idents.push(&self.name);
    }
}

impl Param {
    pub fn new(value: Option<String>, cast: impl Into<String>) -> Self {
        Self {
            value,
            cast: cast.into(),
        }
    }
}

impl Equals {
    pub fn new(lhs: ColumnRef, rhs: impl Into<Expr>) -> Self {
        Self {
            lhs,
            rhs: rhs.into(),
        }
    }

    pub(crate) fn collect_identifiers<'a>(&'a self, idents: &mut Vec<&'a str>) {
        self.lhs.collect_identifiers(idents);
        if let Expr::Column(rhs) = &self.rhs {
            rhs.collect_identifiers(idents);
        }
    }

    pub(crate) fn collect_params(&self, params: &mut Vec<Option<String>>) {
        if let Expr::Param(param) = &self.rhs {
            params.push(param.value.clone());
        }
    }
}

impl From<ColumnRef> for Expr {
    fn from(value: ColumnRef) -> Self {
        Expr::Column(value)
    }
}

impl From<Param> for Expr {
    fn from(value: Param) -> Self {
        Expr::Param(value)
    }
}
