use super::Date;

use std::fmt;

/// A typed column value held by a record.
///
/// Values arriving from the database or from a form submission are usually
/// [`Value::String`]; [`Column::coerce`] turns them into the variant that
/// matches the column's datatype.
///
/// [`Column::coerce`]: crate::schema::Column::coerce
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// Calendar date
    Date(Date),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Truthiness as understood by HTML forms and loosely typed sources:
    /// null, `false`, zero, the empty string and `"0"` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(v) => *v,
            Self::I64(v) => *v != 0,
            Self::F64(v) => *v != 0.0,
            Self::String(v) => !(v.is_empty() || v == "0"),
            Self::Date(_) => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            Self::I64(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Date> {
        match self {
            Self::Date(v) => Some(*v),
            _ => None,
        }
    }

    /// The text literal bound for this value as a statement parameter.
    pub fn to_literal(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(v) => Some(if *v { "t" } else { "f" }.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Loose comparison, used for checkbox and radio comparisons where a
    /// typed value is matched against a form-supplied one.
    ///
    /// Booleans compare by truthiness, numbers compare numerically (also
    /// against numeric strings) and everything else compares by string form.
    pub fn loosely_eq(&self, other: &Value) -> bool {
        use Value::*;

        match (self, other) {
            (Null, Null) => true,
            (Null, v) | (v, Null) => !v.is_truthy(),
            (Bool(b), v) | (v, Bool(b)) => *b == v.is_truthy(),
            (I64(a), I64(b)) => a == b,
            (I64(_) | F64(_), I64(_) | F64(_)) => self.as_f64() == other.as_f64(),
            (I64(_) | F64(_), String(s)) | (String(s), I64(_) | F64(_)) => {
                let n = if self.as_str().is_some() { other } else { self };
                match s.trim().parse::<f64>() {
                    Ok(parsed) => n.as_f64() == Some(parsed),
                    Err(_) => n.to_string() == *s,
                }
            }
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::Date(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Date> for Value {
    fn from(src: Date) -> Self {
        Self::Date(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
