pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::Error;

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Activerow's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
