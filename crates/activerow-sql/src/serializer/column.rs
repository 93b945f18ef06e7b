use super::{Flavor, Formatter, Ident, ToSql};

use crate::stmt::ColumnRef;

/// A column in a result list, returned as text under its bare name.
pub(super) struct ResultColumn<'a>(pub(super) &'a ColumnRef);

/// A bare returning column name.
pub(super) struct Returning<'a>(pub(super) &'a str);

impl ToSql for ResultColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let alias = Ident(&self.0.name);

        match f.serializer.flavor {
            Flavor::Postgresql => fmt!(f, self.0 "::text AS " alias),
        }
    }
}

impl ToSql for Returning<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(self.0);
        let alias = Ident(self.0);

        match f.serializer.flavor {
            Flavor::Postgresql => fmt!(f, name "::text AS " alias),
        }
    }
}
