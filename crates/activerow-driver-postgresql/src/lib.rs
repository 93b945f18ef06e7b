mod statement_cache;
use statement_cache::StatementCache;

mod value;
use value::TextParam;

use activerow_core::{
    driver::{ConnectParams, ResultSet},
    err, Connection, Driver, Error, Result,
};
use postgres::{types::ToSql, Client, Config, NoTls};

/// Quotes a batch of identifiers with `quote_ident`, preserving input order.
const QUOTE_IDENTIFIERS: &str =
    "SELECT quote_ident(x) FROM unnest($1::text[]) WITH ORDINALITY AS t(x, n) ORDER BY n";

/// The PostgreSQL driver, built on the blocking `postgres` client.
#[derive(Debug, Default)]
pub struct PostgreSQL {
    _priv: (),
}

impl PostgreSQL {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Driver for PostgreSQL {
    fn connect(&self, params: &ConnectParams) -> Result<Box<dyn Connection>> {
        let config: Config = params
            .to_conninfo()
            .parse()
            .map_err(|e| Error::configuration(format!("invalid connection parameters: {e}")))?;

        log::info!(
            "connecting to PostgreSQL; host={:?} dbname={:?}",
            params.get("host").unwrap_or("localhost"),
            params.get("dbname"),
        );

        let client = config.connect(NoTls).map_err(Error::database)?;

        Ok(Box::new(PostgreSQLConnection::new(client)))
    }
}

/// A single PostgreSQL session and the statements prepared on it.
pub struct PostgreSQLConnection {
    /// The PostgreSQL client.
    client: Client,

    statements: StatementCache,
}

impl PostgreSQLConnection {
    /// Wraps an already connected client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            statements: StatementCache::new(),
        }
    }
}

impl From<Client> for PostgreSQLConnection {
    fn from(client: Client) -> Self {
        Self::new(client)
    }
}

impl std::fmt::Debug for PostgreSQLConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgreSQLConnection")
            .field("statements", &self.statements)
            .finish_non_exhaustive()
    }
}

impl Connection for PostgreSQLConnection {
    fn prepare(&mut self, name: &str, sql: &str, params: usize) -> Result<()> {
        let statement = self
            .statements
            .prepare(&mut self.client, name, sql)
            .map_err(|err| Error::database_in(name, err))?;

        if statement.params().len() != params {
            return Err(err!(
                "statement `{name}` takes {} parameters; {params} given",
                statement.params().len()
            ));
        }

        Ok(())
    }

    fn execute(&mut self, name: &str, params: &[Option<String>]) -> Result<ResultSet> {
        let Some(statement) = self.statements.get(name) else {
            return Err(err!("statement `{name}` has not been prepared"));
        };

        let params = params
            .iter()
            .map(|param| TextParam(param.as_deref()))
            .collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        let rows = self
            .client
            .query(statement, &args)
            .map_err(|err| Error::database_in(name, err))?;

        let columns = statement
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect::<Vec<_>>();

        let rows = rows
            .iter()
            .map(|row| {
                (0..columns.len())
                    .map(|index| value::text_value(name, row, index))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ResultSet::new(columns, rows))
    }

    fn quote_identifiers(&mut self, names: &[&str]) -> Result<Vec<String>> {
        let rows = self
            .client
            .query(QUOTE_IDENTIFIERS, &[&names])
            .map_err(Error::database)?;

        rows.iter()
            .map(|row| row.try_get::<_, String>(0).map_err(Error::database))
            .collect()
    }
}
