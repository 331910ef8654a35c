use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ===============================
/// SQL literal value
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    /// Matches `BIGINT UNSIGNED` ids
    U64(u64),
    /// Two-decimal number, e.g. `DECIMAL(5,2)`
    Decimal(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Null,
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            SqlValue::U64(v) => write!(f, "{}", v),
            SqlValue::Decimal(v) => write!(f, "{:.2}", v),
            SqlValue::Date(d) => write!(f, "'{}'", d.format(DATE_FORMAT)),
            SqlValue::DateTime(dt) => write!(f, "'{}'", dt.format(DATETIME_FORMAT)),
            SqlValue::Null => f.write_str("NULL"),
        }
    }
}

/// ===============================
/// Render a `(v1, v2, ...)` VALUES tuple
/// ===============================
pub fn values_tuple(values: &[SqlValue]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!("({})", joined)
}
