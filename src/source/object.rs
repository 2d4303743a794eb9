//! Style objects: ordered key/value style descriptions.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::class_name::ClassName;
use crate::error::StyleError;

/// The value side of a [`StyleObject`] entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PropertyValue {
    /// No value. The entry is skipped (or, under `composes`, resolves to nothing).
    #[default]
    Undefined,
    /// A string value, used verbatim.
    Str(String),
    /// A number. Gets a `px` unit unless it is zero or the property is unitless.
    Number(f64),
    /// Fallback values, emitted as repeated declarations in order.
    List(Vec<PropertyValue>),
    /// A nested block (pseudo-selector, at-rule or descendant selector).
    Object(StyleObject),
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Str(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Str(s)
    }
}

impl From<ClassName> for PropertyValue {
    fn from(class: ClassName) -> Self {
        PropertyValue::Str(class.into())
    }
}

impl From<&ClassName> for PropertyValue {
    fn from(class: &ClassName) -> Self {
        PropertyValue::Str(class.as_str().to_string())
    }
}

impl From<StyleObject> for PropertyValue {
    fn from(object: StyleObject) -> Self {
        PropertyValue::Object(object)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        PropertyValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropertyValue>, const N: usize> From<[T; N]> for PropertyValue {
    fn from(items: [T; N]) -> Self {
        PropertyValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Undefined, Into::into)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(n: $ty) -> Self {
                    PropertyValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<JsonValue> for PropertyValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null | JsonValue::Bool(_) => PropertyValue::Undefined,
            JsonValue::Number(n) => n
                .as_f64()
                .map_or(PropertyValue::Undefined, PropertyValue::Number),
            JsonValue::String(s) => PropertyValue::Str(s),
            JsonValue::Array(items) => {
                PropertyValue::List(items.into_iter().map(PropertyValue::from).collect())
            }
            JsonValue::Object(map) => PropertyValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, PropertyValue::from(value)))
                    .collect(),
            ),
        }
    }
}

/// An insertion-ordered style description.
///
/// Keys are property names in any casing (`fontSize` or `font-size`),
/// selectors (`:hover`, `& > p`), at-rules (`@media(...)`) or the
/// directives `composes` and `label`. Setting a key that already exists
/// replaces its value in place.
///
/// # Example
///
/// ```rust
/// use classy::StyleObject;
///
/// let style = StyleObject::new()
///     .set("display", ["flex", "block"])
///     .set("fontSize", 20)
///     .set(":hover", StyleObject::new().set("color", "blue"));
///
/// assert_eq!(style.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    entries: IndexMap<String, PropertyValue>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an entry, returning the updated object for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an entry, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.get(key)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a style object from JSON, keeping key order.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotAnObject`] unless `value` is a JSON object.
    pub fn from_json(value: JsonValue) -> Result<Self, StyleError> {
        match value {
            JsonValue::Object(map) => Ok(map
                .into_iter()
                .map(|(key, value)| (key, PropertyValue::from(value)))
                .collect()),
            other => Err(StyleError::NotAnObject {
                found: json_kind(&other).to_string(),
            }),
        }
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = StyleObject::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl TryFrom<JsonValue> for StyleObject {
    type Error = StyleError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        StyleObject::from_json(value)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
