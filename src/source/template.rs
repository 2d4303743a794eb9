//! Tagged style templates.

use super::value::DynamicValue;

/// A style template: literal segments with dynamic values between them.
///
/// This mirrors a tagged template call, where `segments` holds the literal
/// text and `values[i]` sits between `segments[i]` and `segments[i + 1]`.
///
/// # Example
///
/// ```rust
/// use classy::Template;
///
/// // Built piece by piece...
/// let a = Template::new()
///     .text("color: ")
///     .value("blue")
///     .text("; font-size: ")
///     .value(20)
///     .text("px;");
///
/// // ...or from parallel slices, like a tagged template call.
/// let b = Template::from_parts(&["color: ", "; font-size: ", "px;"], ["blue", "20"]);
/// assert_eq!(a.segments(), b.segments());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    segments: Vec<String>,
    values: Vec<DynamicValue>,
}

impl Template {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a template from literal segments and the values between them.
    ///
    /// Values beyond the last segment are kept and interpolated after it.
    pub fn from_parts<S, I, V>(segments: &[S], values: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: Into<DynamicValue>,
    {
        Self {
            segments: segments.iter().map(|s| s.as_ref().to_string()).collect(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends literal text.
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        if self.segments.len() > self.values.len() {
            if let Some(last) = self.segments.last_mut() {
                last.push_str(text.as_ref());
            }
        } else {
            self.segments.push(text.as_ref().to_string());
        }
        self
    }

    /// Appends a dynamic value.
    pub fn value(mut self, value: impl Into<DynamicValue>) -> Self {
        if self.segments.len() == self.values.len() {
            self.segments.push(String::new());
        }
        self.values.push(value.into());
        self
    }

    /// Returns the literal segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the dynamic values.
    pub fn values(&self) -> &[DynamicValue] {
        &self.values
    }

    /// Returns true if the template has no text and no values.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.is_empty()) && self.values.is_empty()
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Template::new().text(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Template::new().text(text)
    }
}
