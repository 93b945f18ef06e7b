mod date;
pub use date::Date;

mod value;
pub use value::Value;
