//! Dynamic values interpolated into style templates.

use crate::class_name::ClassName;
use crate::util::format_number;

/// A runtime value placed between the literal segments of a [`Template`](super::Template).
///
/// Values are stringified when the template is interpolated. Absent and
/// boolean values contribute nothing, so an `Option<&str>` that is `None`
/// leaves no stray text behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DynamicValue {
    /// No value. Interpolates as the empty string.
    #[default]
    Undefined,
    /// An explicit null. Interpolates as the empty string.
    Null,
    /// A boolean. Interpolates as the empty string.
    Bool(bool),
    /// A number, printed without a trailing `.0` when integral. NaN and
    /// infinities interpolate as the empty string.
    Number(f64),
    /// Literal text.
    Str(String),
    /// A previously generated class, typically used after `composes:`.
    Class(ClassName),
}

impl DynamicValue {
    /// Returns the text this value contributes to an interpolated template.
    pub fn to_css_string(&self) -> String {
        match self {
            DynamicValue::Undefined | DynamicValue::Null | DynamicValue::Bool(_) => String::new(),
            DynamicValue::Number(n) if n.is_finite() => format_number(*n),
            DynamicValue::Number(_) => String::new(),
            DynamicValue::Str(s) => s.clone(),
            DynamicValue::Class(class) => class.as_str().to_string(),
        }
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        DynamicValue::Str(s.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        DynamicValue::Str(s)
    }
}

impl From<&String> for DynamicValue {
    fn from(s: &String) -> Self {
        DynamicValue::Str(s.clone())
    }
}

impl From<bool> for DynamicValue {
    fn from(b: bool) -> Self {
        DynamicValue::Bool(b)
    }
}

impl From<ClassName> for DynamicValue {
    fn from(class: ClassName) -> Self {
        DynamicValue::Class(class)
    }
}

impl From<&ClassName> for DynamicValue {
    fn from(class: &ClassName) -> Self {
        DynamicValue::Class(class.clone())
    }
}

impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DynamicValue::Undefined, Into::into)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DynamicValue {
                fn from(n: $ty) -> Self {
                    DynamicValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);
