//! Structured log events and field mappings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::Level;
use crate::error::LogError;

/// Unordered key/value mapping attached to an event.
pub type Fields = serde_json::Map<String, Value>;

/// Keys owned by the event itself; user fields never override them.
pub const RESERVED_KEYS: [&str; 4] = ["time", "level", "message", "caller"];

/// One structured, leveled log record.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub level: Level,
    pub time: DateTime<Utc>,
    pub caller: String,
    pub message: String,
    #[serde(flatten)]
    pub fields: Fields,
}

impl LogEvent {
    pub fn new(level: Level, message: &str, caller: String, mut fields: Fields) -> Self {
        for key in RESERVED_KEYS {
            fields.remove(key);
        }

        Self {
            level,
            time: Utc::now(),
            caller,
            message: message.to_string(),
            fields,
        }
    }

    /// Serializes the event as one newline-terminated JSON object.
    pub fn to_record(&self) -> Result<Vec<u8>, LogError> {
        let mut record = serde_json::to_vec(self)?;
        record.push(b'\n');
        Ok(record)
    }
}

/// Merges field mappings in order; later mappings win on key collision.
pub fn merge_fields(mappings: &[Fields]) -> Fields {
    let mut merged = Fields::new();

    for mapping in mappings {
        for (key, value) in mapping {
            merged.insert(key.clone(), value.clone());
        }
    }

    merged
}

/// Converts any serializable value into a field value.
///
/// Values that cannot be represented as JSON become `null`.
pub fn to_field_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Builds a [`Fields`] mapping from `key => value` pairs.
///
/// ```
/// use request_logger::fields;
///
/// let fields = fields! { "method" => "GET", "status" => 200 };
/// assert_eq!(fields["status"], 200);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::logging::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::logging::Fields::new();
        $(
            map.insert(
                ::std::string::String::from($key),
                $crate::logging::to_field_value(&$value),
            );
        )+
        map
    }};
}
