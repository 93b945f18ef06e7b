use super::{Comma, Delimited, Formatter, Ident, ResultColumn, Returning, ToSql};

use crate::stmt::{self, Statement};

/// Columns of a table in ordinal order. `pg_table_is_visible` resolves the
/// name through the search path the same way an unqualified identifier is.
const DESCRIBE_TABLE: &str = "SELECT a.attname::text AS name, \
format_type(a.atttypid, a.atttypmod) AS db_type, \
pg_get_expr(d.adbin, d.adrelid) AS \"default\", \
(NOT a.attnotnull)::text AS allow_null, \
COALESCE(a.attnum = ANY(i.indkey), false)::text AS primary_key \
FROM pg_catalog.pg_class c \
INNER JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace \
INNER JOIN pg_catalog.pg_attribute a ON a.attrelid = c.oid \
LEFT JOIN pg_catalog.pg_attrdef d ON d.adrelid = c.oid AND d.adnum = a.attnum \
LEFT JOIN pg_catalog.pg_index i ON i.indrelid = c.oid AND i.indisprimary \
WHERE c.relname = ";

const DESCRIBE_TABLE_TAIL: &str = " \
AND c.relkind IN ('r', 'p', 'v') \
AND n.nspname NOT IN ('pg_catalog', 'information_schema') \
AND pg_catalog.pg_table_is_visible(c.oid) \
AND a.attnum > 0 \
AND NOT a.attisdropped \
ORDER BY a.attnum";

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::DescribeTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::DescribeTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        fmt!(f, DESCRIBE_TABLE table DESCRIBE_TABLE_TAIL);
    }
}

/// ` WHERE a = $1 AND b = $2`, or nothing for an empty filter.
struct Filter<'a>(&'a [stmt::Equals]);

impl ToSql for Filter<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE " Delimited(self.0, " AND "));
        }
    }
}

struct ReturningList<'a>(&'a [String]);

impl ToSql for ReturningList<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.0.is_empty() {
            let columns = Comma(self.0.iter().map(|name| Returning(name)));
            fmt!(f, " RETURNING " columns);
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(self.columns.iter().map(ResultColumn));

        fmt!(f, "SELECT " columns " FROM " Ident(&self.from));

        if let Some(join) = &self.join {
            let on = &join.on;
            fmt!(f, " INNER JOIN " Ident(&join.table) " ON " on);
        }

        fmt!(f, Filter(&self.filter));

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order_by));
        }

        if let Some(limit) = &self.limit {
            fmt!(f, " LIMIT " limit);
        }

        if let Some(offset) = &self.offset {
            fmt!(f, " OFFSET " offset);
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "INSERT INTO " Ident(&self.table));

        if self.values.is_empty() {
            fmt!(f, " DEFAULT VALUES");
        } else {
            let columns = Comma(self.values.iter().map(|(column, _)| Ident(column)));
            let values = Comma(self.values.iter().map(|(_, value)| value));
            fmt!(f, " (" columns ") VALUES (" values ")");
        }

        fmt!(f, ReturningList(&self.returning));
    }
}

struct Assignment<'a>(&'a str, &'a stmt::Param);

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.0) " = " self.1);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );

        fmt!(f, "UPDATE " Ident(&self.table) " SET " assignments Filter(&self.filter) ReturningList(&self.returning));
    }
}
