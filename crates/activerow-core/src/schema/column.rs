use super::Datatype;
use crate::stmt::{Date, Value};

/// Form fragment emitted for a checked checkbox or radio button.
const CHECKED: &str = " checked";

/// Display text for a null date.
const EMPTY_DATE: &str = "Unknown/empty";

/// Describes one column of a table and converts values for it.
///
/// A column converts between three outward representations of a value (a
/// display string, an HTML form fragment and a database literal) and the
/// typed [`Value`] held by a record. All conversions are total: unexpected
/// input falls through to a generic path instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The semantic type driving value conversion.
    pub datatype: Datatype,

    /// The type name as reported by the database, e.g. `character varying(64)`.
    pub db_type: String,

    /// The column default expression, if any.
    pub default: Option<String>,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, db_type: impl Into<String>, nullable: bool, primary_key: bool) -> Self {
        let db_type = db_type.into();
        Self {
            name: name.into(),
            datatype: Datatype::from_db_type(&db_type),
            db_type,
            default: None,
            nullable,
            primary_key,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Renders a value for display on an HTML page.
    pub fn display(&self, value: &Value) -> String {
        match self.datatype {
            Datatype::Boolean => match value {
                Value::Null => "?".to_string(),
                v if v.is_truthy() => "Yes".to_string(),
                _ => "No".to_string(),
            },
            Datatype::Date => match value {
                Value::Null => EMPTY_DATE.to_string(),
                Value::Date(date) => date.to_string(),
                other => escape_html(&other.to_string()),
            },
            _ => escape_html(&value.to_string()),
        }
    }

    /// Renders the part of an HTML form element that fills in `value`.
    ///
    /// When `comparison` is given, the fragment is the checked marker if and
    /// only if `value` loosely equals it.
    pub fn form_fragment(&self, value: &Value, comparison: Option<&Value>) -> String {
        if value.is_null() {
            return String::new();
        }

        if let Some(comparison) = comparison {
            if value.loosely_eq(comparison) {
                return CHECKED.to_string();
            }
            if self.datatype == Datatype::Boolean {
                return String::new();
            }
        }

        match self.datatype {
            Datatype::Boolean if value.is_truthy() => CHECKED.to_string(),
            Datatype::Boolean => String::new(),
            _ => format!(" value=\"{}\"", escape_html(&value.to_string())),
        }
    }

    /// Converts a value to the literal bound as a statement parameter.
    ///
    /// Null stays null; booleans become PostgreSQL's `t`/`f`; dates use their
    /// canonical `YYYY-MM-DD` form.
    pub fn to_storage_literal(&self, value: &Value) -> Option<String> {
        if value.is_null() {
            return None;
        }

        match self.datatype {
            Datatype::Boolean => Some(if value.is_truthy() { "t" } else { "f" }.to_string()),
            _ => Some(value.to_string()),
        }
    }

    /// Converts a raw value, from a database row or a form submission, into
    /// the typed representation for this column.
    ///
    /// The empty string and null coerce to null for every datatype.
    pub fn coerce(&self, raw: impl Into<Value>) -> Value {
        let raw = raw.into();

        if matches!(&raw, Value::String(s) if s.is_empty()) || raw.is_null() {
            return Value::Null;
        }

        match self.datatype {
            Datatype::Boolean => coerce_bool(raw),
            Datatype::Integer => coerce_integer(raw),
            Datatype::Float => coerce_float(raw),
            Datatype::Text => match raw {
                Value::String(_) => raw,
                other => Value::String(other.to_string()),
            },
            Datatype::Date => match raw {
                Value::Date(_) => raw,
                Value::String(s) => Date::parse(&s).into(),
                _ => Value::Null,
            },
            Datatype::Other => raw,
        }
    }
}

fn coerce_bool(raw: Value) -> Value {
    match raw {
        Value::String(s) if s == "null" => Value::Null,
        Value::String(s) if s == "f" || s == "false" => Value::Bool(false),
        other => Value::Bool(other.is_truthy()),
    }
}

fn coerce_integer(raw: Value) -> Value {
    match raw {
        Value::I64(_) => raw,
        Value::F64(v) => Value::I64(v as i64),
        Value::Bool(v) => Value::I64(v.into()),
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(v) => Value::I64(v),
                Err(_) => Value::I64(numeric_prefix(s) as i64),
            }
        }
        _ => Value::Null,
    }
}

fn coerce_float(raw: Value) -> Value {
    match raw {
        Value::F64(_) => raw,
        Value::I64(v) => Value::F64(v as f64),
        Value::Bool(v) => Value::F64(if v { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<f64>() {
                Ok(v) => Value::F64(v),
                Err(_) => Value::F64(numeric_prefix(s)),
            }
        }
        _ => Value::Null,
    }
}

/// Parses the longest leading decimal number of `s`, or zero.
fn numeric_prefix(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    s[..end].parse().unwrap_or(0.0)
}

fn escape_html(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    for ch in src.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            ch => out.push(ch),
        }
    }
    out
}
