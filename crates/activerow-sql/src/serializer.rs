#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;
use column::{Returning, ResultColumn};

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
use params::Placeholder;

// Fragment serializers
mod expr;
mod statement;

use crate::stmt::Statement;

use std::collections::HashMap;

/// Identifier -> quoted identifier, as returned by the backend.
pub type Idents = HashMap<String, String>;

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Quoted form of every identifier the statement references. Identifiers
    /// are never quoted locally.
    idents: &'a Idents,

    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Number of placeholders written so far
    placeholders: usize,
}

impl<'a> Serializer<'a> {
    /// Serializes `stmt`. Placeholders are numbered in the order given by
    /// [`Statement::params`].
    ///
    /// # Panics
    ///
    /// Panics if an identifier returned by [`Statement::identifiers`] is
    /// missing from the quoted identifier map.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            placeholders: 0,
        };

        stmt.to_sql(&mut fmt);

        debug_assert_eq!(fmt.placeholders, stmt.params().len());

        ret.push(';');
        ret
    }

    fn quoted(&self, ident: &str) -> &'a str {
        match self.idents.get(ident) {
            Some(quoted) => quoted,
            None => panic!("identifier `{ident}` has not been quoted"),
        }
    }
}
