use std::collections::HashMap;

use postgres::{Client, Error, Statement};

/// Server-side statements by name.
///
/// The empty name is the unnamed statement; preparing it again replaces it.
#[derive(Debug, Default)]
pub struct StatementCache {
    map: HashMap<String, Statement>,
}

impl StatementCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Statement> {
        self.map.get(name)
    }

    /// Prepares `query` and stores it under `name`, replacing a previous
    /// statement with the same name. Parameter types are left for the server
    /// to infer from the query.
    pub fn prepare(
        &mut self,
        client: &mut Client,
        name: &str,
        query: &str,
    ) -> Result<&Statement, Error> {
        let statement = client.prepare(query)?;

        if let Some(previous) = self.map.insert(name.to_string(), statement) {
            log::trace!(
                "replaced prepared statement; name={name:?} columns={}",
                previous.columns().len()
            );
        }

        Ok(&self.map[name])
    }
}
