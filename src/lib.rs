//! # Classy - content-addressed CSS classes from style templates and objects
//!
//! Classy turns style descriptions into short class names backed by rules in
//! a live, in-memory stylesheet. Identical styles always produce the same
//! class, and each distinct rule is inserted once.
//!
//! ## Two calling conventions
//!
//! Styles can be written as a [`Template`] (literal text with dynamic values
//! between the segments, like a tagged template) or as a [`StyleObject`]
//! (ordered key/value pairs with nested selectors and fallback lists):
//!
//! ```rust
//! use classy::{Compiler, StyleObject, Template};
//!
//! let mut compiler = Compiler::new();
//!
//! let from_template = compiler
//!     .css(Template::new().text("color: ").value("blue").text("; font-size: 20px;"))
//!     .unwrap();
//! let from_object = compiler
//!     .css_object(StyleObject::new().set("color", "blue").set("fontSize", 20))
//!     .unwrap();
//!
//! assert_eq!(from_template, from_object);
//! ```
//!
//! ## Composition
//!
//! A `composes` directive pulls the declarations of earlier classes in ahead
//! of the rule's own. References that are undefined or unknown are ignored:
//!
//! ```rust
//! use classy::{Compiler, DynamicValue, Template};
//!
//! let mut compiler = Compiler::new();
//! let flex = compiler.css("display: flex;").unwrap();
//!
//! let centered = compiler
//!     .css(
//!         Template::new()
//!             .text("composes: ")
//!             .value(&flex)
//!             .text(" ")
//!             .value(DynamicValue::Undefined)
//!             .text("; justify-content: center;"),
//!     )
//!     .unwrap();
//!
//! let rule = compiler.sheet().get(centered.as_str()).unwrap();
//! assert!(rule.css_text().ends_with("{display:flex;justify-content:center}"));
//! ```
//!
//! ## Nested blocks and fallbacks
//!
//! Object keys starting with `:`, `@` or containing `&` become nested blocks;
//! list values become repeated declarations:
//!
//! ```rust
//! use classy::{Compiler, StyleObject};
//!
//! let mut compiler = Compiler::new();
//! let class = compiler
//!     .css_object(
//!         StyleObject::new()
//!             .set("display", ["flex", "block"])
//!             .set(":hover", StyleObject::new().set("color", "blue"))
//!             .set("@media(min-width: 420px)", StyleObject::new().set("color", "green")),
//!     )
//!     .unwrap();
//!
//! let css = compiler.css_text();
//! assert!(css.contains(&format!(".{}{{display:flex;display:block}}", class)));
//! assert!(css.contains(&format!(".{}:hover{{color:blue}}", class)));
//! assert!(css.contains(&format!("@media(min-width: 420px){{.{}{{color:green}}}}", class)));
//! ```
//!
//! ## The default compiler
//!
//! The free functions [`css`], [`css_object`], [`flush`] and friends share a
//! process-wide [`Compiler`]. Each call holds its lock for the whole
//! compile, so concurrent callers never materialize the same rule twice.
//! Applications that want isolated stylesheets own a [`Compiler`] directly.

pub mod compose;
pub mod hash;
pub mod rule;
pub mod sheet;
pub mod source;

mod class_name;
mod compiler;
mod error;
mod options;
mod util;

use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

pub use class_name::ClassName;
pub use compiler::Compiler;
pub use error::StyleError;
pub use hash::RuleHash;
pub use options::{CompilerOptions, DEFAULT_CLASS_PREFIX};
pub use sheet::{MaterializedRule, RuleKind, StyleSheet};
pub use source::{DynamicValue, PropertyValue, StyleObject, StyleSource, Template};
pub use util::to_base36;

static DEFAULT_COMPILER: Lazy<Mutex<Compiler>> = Lazy::new(|| Mutex::new(Compiler::new()));

/// Runs `f` with exclusive access to the process-wide compiler.
///
/// A panic inside a previous holder does not poison the compiler for later
/// callers: every operation leaves it consistent before returning.
///
/// The lock is not reentrant. Calling [`css`], [`flush`] or any other
/// crate-level function from inside `f` deadlocks; use the `&mut Compiler`
/// passed to `f` instead.
pub fn with_compiler<R>(f: impl FnOnce(&mut Compiler) -> R) -> R {
    let mut guard = DEFAULT_COMPILER
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

/// Compiles a style template with the default compiler.
///
/// # Example
///
/// ```rust
/// let class = classy::css("display: flex;").unwrap();
/// assert!(class.as_str().starts_with("css-"));
/// assert_eq!(classy::css(""), None);
/// ```
pub fn css(template: impl Into<Template>) -> Option<ClassName> {
    let template = template.into();
    with_compiler(|compiler| compiler.css(template))
}

/// Compiles a style object with the default compiler.
pub fn css_object(object: impl Into<StyleObject>) -> Option<ClassName> {
    let object = object.into();
    with_compiler(|compiler| compiler.css_object(object))
}

/// Composes existing classes into one with the default compiler.
pub fn merge<C: AsRef<str>>(classes: &[C]) -> Option<ClassName> {
    with_compiler(|compiler| compiler.merge(classes))
}

/// Registers an `@keyframes` animation with the default compiler.
pub fn keyframes(frames: impl Into<StyleObject>) -> Option<String> {
    let frames = frames.into();
    with_compiler(|compiler| compiler.keyframes(frames))
}

/// Registers global rules with the default compiler.
pub fn inject_global(rules: impl Into<StyleObject>) -> bool {
    let rules = rules.into();
    with_compiler(|compiler| compiler.inject_global(rules))
}

/// Clears the default compiler's stylesheet.
pub fn flush() {
    with_compiler(Compiler::flush);
}

/// Returns a copy of the default compiler's live rules, in insertion order.
pub fn snapshot() -> Vec<MaterializedRule> {
    with_compiler(|compiler| compiler.snapshot().to_vec())
}

/// Returns the default compiler's stylesheet as CSS text.
pub fn css_text() -> String {
    with_compiler(|compiler| compiler.css_text())
}
