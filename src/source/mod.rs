//! Style inputs.
//!
//! This module provides the two calling conventions the compiler accepts:
//!
//! - [`Template`]: literal segments with [`DynamicValue`]s between them
//! - [`StyleObject`]: ordered key/value styles with [`PropertyValue`]s
//!
//! Both converge on [`StyleSource`], and [`interpolate`] resolves every
//! dynamic value before any parsing happens.

mod interpolate;
mod object;
mod template;
mod value;

pub use interpolate::{interpolate, interpolate_template, Interpolated};
pub use object::{PropertyValue, StyleObject};
pub use template::Template;
pub use value::DynamicValue;

/// A style description in either calling convention.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSource {
    /// A tagged template.
    Template(Template),
    /// A style object.
    Object(StyleObject),
}

impl From<Template> for StyleSource {
    fn from(template: Template) -> Self {
        StyleSource::Template(template)
    }
}

impl From<StyleObject> for StyleSource {
    fn from(object: StyleObject) -> Self {
        StyleSource::Object(object)
    }
}
