pub mod serializer;
pub use serializer::{Idents, Serializer};

pub mod stmt;
pub use stmt::Statement;
