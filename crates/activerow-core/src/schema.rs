mod column;
pub use column::Column;

mod datatype;
pub use datatype::Datatype;

mod inflect;
pub use inflect::Inflector;

mod table;
pub use table::Table;
