//! Dynamic row record

use std::collections::HashMap;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use super::Value;
use crate::error::FieldError;

/// A dynamic record of named field values.
///
/// Records are the crate's built-in row type: fields live in a
/// `HashMap<String, Value>` and can nest further records, which is what
/// dotted accessor paths such as `"user.name"` traverse. Typed getter
/// methods provide checked access.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Record;
///
/// let record = Record::new()
///     .set("id", 1i64)
///     .set("name", "John Doe")
///     .set("user", Record::new().set("name", "jdoe"));
///
/// assert_eq!(record.get_string("name").unwrap(), Some("John Doe"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object, converting nested values.
    pub fn from_json(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            fields: map
                .iter()
                .map(|(key, value)| (key.clone(), Value::from(value)))
                .collect(),
        }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets a float field value. Integers are widened.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as f64)),
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets a DateTime field value.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }

    /// Gets a nested Record field value.
    pub fn get_record(&self, field: &str) -> Result<Option<&Record>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Record(r)) => Ok(Some(r)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "record",
                other.type_name(),
            )),
        }
    }
}

impl fmt::Display for Record {
    /// Renders as `{key: value, ...}` with keys in sorted order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.fields.keys().collect();
        keys.sort();
        f.write_str("{")?;
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, self.fields[key])?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::new()
            .set("name", "Jane")
            .set("age", 31i64)
            .set("score", 9.5)
            .set("nickname", Value::Null);

        assert_eq!(record.get_string("name").unwrap(), Some("Jane"));
        assert_eq!(record.get_int("age").unwrap(), Some(31));
        assert_eq!(record.get_float("age").unwrap(), Some(31.0));
        assert_eq!(record.get_float("score").unwrap(), Some(9.5));
        assert_eq!(record.get_string("nickname").unwrap(), None);
    }

    #[test]
    fn test_getter_errors() {
        let record = Record::new().set("age", 31i64);

        assert_eq!(
            record.get_string("missing"),
            Err(FieldError::missing("missing"))
        );
        assert_eq!(
            record.get_string("age"),
            Err(FieldError::type_mismatch("age", "string", "int"))
        );
    }

    #[test]
    fn test_from_json_nested() {
        let json = serde_json::json!({
            "id": 1,
            "user": { "name": "John Doe" }
        });
        let record = Record::from_json(json.as_object().unwrap());

        let user = record.get_record("user").unwrap().unwrap();
        assert_eq!(user.get_string("name").unwrap(), Some("John Doe"));
        assert_eq!(record.get_int("id").unwrap(), Some(1));
    }

    #[test]
    fn test_display_sorted_keys() {
        let record = Record::new().set("b", 2i64).set("a", "x");
        assert_eq!(record.to_string(), "{a: x, b: 2}");
    }
}
