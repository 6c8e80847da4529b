// Field helpers for catalog records written by hand or by older tools.

// Accepts any JSON value and keeps its string form; null becomes empty and arrays or objects
// keep their JSON text.
pub mod lenient_string {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok(String::new()),
            other => Ok(other.to_string()),
        }
    }
}
