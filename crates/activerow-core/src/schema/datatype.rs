/// The semantic type of a column, derived from the backend's type name.
///
/// Several backend types collapse onto one datatype: `smallint`, `integer`
/// and `bigint` are all [`Datatype::Integer`]. Types the engine has no
/// special handling for (timestamps, intervals, arrays, ...) are
/// [`Datatype::Other`] and pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datatype {
    Boolean,
    Integer,
    Float,
    Text,
    Date,
    Other,
}

impl Datatype {
    /// Maps a type name as printed by PostgreSQL's `format_type()`.
    pub fn from_db_type(db_type: &str) -> Datatype {
        let ty = db_type.trim().to_ascii_lowercase();
        // Strip a type modifier such as `(255)` or `(10,2)`.
        let base = ty.split('(').next().unwrap_or_default().trim();

        match base {
            "boolean" | "bool" => Datatype::Boolean,
            "smallint" | "integer" | "bigint" | "int" | "int2" | "int4" | "int8" => {
                Datatype::Integer
            }
            "double precision" | "real" | "numeric" | "decimal" | "float4" | "float8" => {
                Datatype::Float
            }
            "text" | "character varying" | "varchar" | "character" | "char" | "name"
            | "citext" => Datatype::Text,
            "date" => Datatype::Date,
            _ => Datatype::Other,
        }
    }
}
