mod params;
pub use params::ConnectParams;

mod rows;
pub use rows::{ResultSet, Row};

use crate::Result;

use std::fmt::Debug;

/// Opens connections to a database backend.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Open a connection using fully resolved connection parameters.
    fn connect(&self, params: &ConnectParams) -> Result<Box<dyn Connection>>;
}

/// A single blocking connection to the backend.
///
/// Statements are identified by name. The empty name is the unnamed
/// statement, which is replaced by every prepare.
pub trait Connection: Debug + Send + 'static {
    /// Prepare `sql` on the server under `name`. `sql` has `params`
    /// placeholders; the server infers their types and every value is sent
    /// in text form.
    fn prepare(&mut self, name: &str, sql: &str, params: usize) -> Result<()>;

    /// Execute a statement previously prepared under `name`.
    fn execute(&mut self, name: &str, params: &[Option<String>]) -> Result<ResultSet>;

    /// Quote identifiers with the backend's own quoting function, in a
    /// single round trip. The result is in the same order as `names`.
    fn quote_identifiers(&mut self, names: &[&str]) -> Result<Vec<String>>;
}
