//! Row access and accessor-path resolution

use super::Record;
use super::Value;

/// Trait for records that can be displayed as rows in a table.
///
/// Only top-level field lookup is required; dotted accessor paths are
/// resolved by [`resolve_path`] on top of it.
///
/// # Example
///
/// ```
/// use datatable_lib::model::{TableRow, Value};
///
/// #[derive(Clone)]
/// struct Employee {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for Employee {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Returns the value of a top-level field, or `None` if the row has no
    /// such field.
    fn field(&self, name: &str) -> Option<Value>;
}

impl TableRow for Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl TableRow for serde_json::Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_object()
            .and_then(|map| map.get(name))
            .map(Value::from)
    }
}

/// Resolves a dotted accessor path against a row.
///
/// Each segment after the first indexes into the previous value (record
/// field or list position). Any missing segment yields [`Value::Null`].
pub fn resolve_path<T: TableRow + ?Sized>(row: &T, path: &str) -> Value {
    let mut segments = path.split('.');
    let Some(mut current) = segments.next().and_then(|first| row.field(first)) else {
        return Value::Null;
    };
    for segment in segments {
        let next = current.get(segment).cloned();
        match next {
            Some(value) => current = value,
            None => return Value::Null,
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "user": { "name": "John Doe", "tags": ["a", "b"] },
            "contact": null
        })
    }

    #[test]
    fn test_resolve_top_level() {
        assert_eq!(resolve_path(&sample(), "id"), Value::Int(1));
    }

    #[test]
    fn test_resolve_nested() {
        assert_eq!(
            resolve_path(&sample(), "user.name"),
            Value::from("John Doe")
        );
        assert_eq!(resolve_path(&sample(), "user.tags.1"), Value::from("b"));
    }

    #[test]
    fn test_resolve_miss_is_null() {
        assert_eq!(resolve_path(&sample(), "user.email"), Value::Null);
        assert_eq!(resolve_path(&sample(), "contact.email"), Value::Null);
        assert_eq!(resolve_path(&sample(), "nope"), Value::Null);
        assert_eq!(resolve_path(&sample(), ""), Value::Null);
    }

    #[test]
    fn test_resolve_record_row() {
        let row = Record::new().set("meta", Record::new().set("status", "active"));
        assert_eq!(resolve_path(&row, "meta.status"), Value::from("active"));
    }
}
