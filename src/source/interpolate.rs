//! Value interpolation: turning a [`StyleSource`] into a single style text or object.

use super::{StyleObject, StyleSource, Template};

/// A style source with every dynamic value resolved.
///
/// Templates become plain text; objects pass through untouched. Nothing
/// downstream of this point knows that a value was ever dynamic.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolated<'a> {
    /// Style text from a template.
    Text(String),
    /// A style object, borrowed from the source.
    Object(&'a StyleObject),
}

/// Resolves dynamic values in a style source.
pub fn interpolate(source: &StyleSource) -> Interpolated<'_> {
    match source {
        StyleSource::Template(template) => Interpolated::Text(interpolate_template(template)),
        StyleSource::Object(object) => Interpolated::Object(object),
    }
}

/// Concatenates segments and stringified values positionally.
///
/// A value lands exactly where it was placed, so a value that forms a whole
/// property name or a whole property value keeps that role once the text is
/// parsed.
pub fn interpolate_template(template: &Template) -> String {
    let mut text = String::new();
    let mut values = template.values().iter();

    for segment in template.segments() {
        text.push_str(segment);
        if let Some(value) = values.next() {
            text.push_str(&value.to_css_string());
        }
    }

    // Values without a trailing segment still belong to the text
    for value in values {
        text.push_str(&value.to_css_string());
    }

    text
}
