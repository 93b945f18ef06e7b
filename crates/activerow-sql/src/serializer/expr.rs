use super::{Formatter, Ident, Placeholder, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnRef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(table) = &self.table {
            fmt!(f, Ident(table) ".");
        }
        fmt!(f, Ident(&self.name));
    }
}

impl ToSql for &stmt::Param {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Placeholder "::" self.cast.as_str());
    }
}

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Expr::Column(column) => column.to_sql(f),
            stmt::Expr::Param(param) => param.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Equals {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let lhs = &self.lhs;
        let rhs = &self.rhs;
        fmt!(f, lhs " = " rhs);
    }
}

impl ToSql for &stmt::Direction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Direction::Asc => fmt!(f, "ASC"),
            stmt::Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = &self.column;
        let direction = &self.direction;
        fmt!(f, column " " direction);
    }
}
