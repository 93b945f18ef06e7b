use super::connect;
use crate::Result;

use activerow_core::{
    driver::{ConnectParams, ResultSet},
    err, Connection, Driver,
};
use activerow_sql::{self as sql, Idents};
use indexmap::IndexMap;

use std::collections::HashSet;

/// The single point of contact with the backend.
pub(super) struct Gateway {
    driver: Box<dyn Driver>,

    /// Parameters given to the builder. Defaults and the environment are
    /// merged in when the connection is opened.
    params: ConnectParams,

    /// Opened on first use
    connection: Option<Box<dyn Connection>>,

    /// Names of statements prepared on `connection`
    prepared: HashSet<String>,

    /// Identifier -> quoted identifier
    idents: Idents,
}

impl Gateway {
    pub(super) fn new(driver: Box<dyn Driver>, params: ConnectParams) -> Self {
        Self {
            driver,
            params,
            connection: None,
            prepared: HashSet::new(),
            idents: Idents::new(),
        }
    }

    fn connection(&mut self) -> Result<&mut Box<dyn Connection>> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => {
                let params = connect::resolve_params(
                    &self.params,
                    &connect::default_params(),
                    std::env::var(connect::DATABASE_URL).ok(),
                )?;
                self.driver.connect(&params)?
            }
        };

        Ok(self.connection.insert(connection))
    }

    pub(super) fn is_prepared(&self, name: &str) -> bool {
        self.prepared.contains(name)
    }

    pub(super) fn execute(
        &mut self,
        sql: &str,
        params: &[Option<String>],
        name: Option<&str>,
    ) -> Result<ResultSet> {
        let name = name.unwrap_or_default();

        if name.is_empty() || !self.is_prepared(name) {
            self.prepare(name, sql, params.len())?;
        }

        self.connection()?.execute(name, params)
    }

    pub(super) fn run(&mut self, name: &str, stmt: &sql::Statement) -> Result<ResultSet> {
        let params = stmt.params();

        if !self.is_prepared(name) {
            self.quote_missing(&stmt.identifiers())?;
            let sql = sql::Serializer::postgresql(&self.idents).serialize(stmt);
            self.prepare(name, &sql, params.len())?;
        }

        self.connection()?.execute(name, &params)
    }

    fn prepare(&mut self, name: &str, sql: &str, params: usize) -> Result<()> {
        log::debug!("prepare; name={name:?} sql={sql}");

        self.connection()?.prepare(name, sql, params)?;

        if !name.is_empty() {
            self.prepared.insert(name.to_string());
        }

        Ok(())
    }

    pub(super) fn quote_identifiers(&mut self, names: &[&str]) -> Result<IndexMap<String, String>> {
        self.quote_missing(names)?;

        names
            .iter()
            .map(|name| match self.idents.get(*name) {
                Some(quoted) => Ok((name.to_string(), quoted.clone())),
                None => Err(err!("identifier `{name}` was not quoted")),
            })
            .collect()
    }

    /// Quotes every identifier of `names` not yet in the cache, in one round
    /// trip. Cached identifiers are never quoted again.
    fn quote_missing(&mut self, names: &[&str]) -> Result<()> {
        let mut missing = Vec::new();
        for name in names {
            if !self.idents.contains_key(*name) && !missing.contains(name) {
                missing.push(*name);
            }
        }

        if missing.is_empty() {
            return Ok(());
        }

        let quoted = self.connection()?.quote_identifiers(&missing)?;

        if quoted.len() != missing.len() {
            return Err(err!(
                "quoting returned {} identifiers for {} names",
                quoted.len(),
                missing.len()
            ));
        }

        for (name, quoted) in missing.into_iter().zip(quoted) {
            self.idents.insert(name.to_string(), quoted);
        }

        Ok(())
    }
}
