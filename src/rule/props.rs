//! Property name normalization and numeric units.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::util::format_number;

/// Properties whose numeric values take no unit.
static UNITLESS_PROPERTIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "animation-iteration-count",
        "border-image-outset",
        "border-image-slice",
        "border-image-width",
        "box-flex",
        "box-flex-group",
        "box-ordinal-group",
        "column-count",
        "columns",
        "flex",
        "flex-grow",
        "flex-positive",
        "flex-shrink",
        "flex-negative",
        "flex-order",
        "grid-area",
        "grid-row",
        "grid-row-end",
        "grid-row-span",
        "grid-row-start",
        "grid-column",
        "grid-column-end",
        "grid-column-span",
        "grid-column-start",
        "font-weight",
        "line-clamp",
        "line-height",
        "opacity",
        "order",
        "orphans",
        "tab-size",
        "widows",
        "z-index",
        "zoom",
        "fill-opacity",
        "flood-opacity",
        "stop-opacity",
        "stroke-dasharray",
        "stroke-dashoffset",
        "stroke-miterlimit",
        "stroke-opacity",
        "stroke-width",
    ]
    .into_iter()
    .collect()
});

const VENDOR_PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-", "-o-"];

/// Converts a property name to hyphenated lower case.
///
/// Camel-cased names gain a hyphen before each capital (`justifyContent` ->
/// `justify-content`, `WebkitTransition` -> `-webkit-transition`). `ms`
/// prefixed names get their leading hyphen back (`msTransform` ->
/// `-ms-transform`). Custom properties are returned untouched.
///
/// # Example
///
/// ```rust
/// use classy::rule::hyphenate;
///
/// assert_eq!(hyphenate("fontSize"), "font-size");
/// assert_eq!(hyphenate("font-size"), "font-size");
/// assert_eq!(hyphenate("--brandColor"), "--brandColor");
/// ```
pub fn hyphenate(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}

/// Returns true if numbers for this (hyphenated) property take no unit.
pub fn is_unitless(property: &str) -> bool {
    if property.starts_with("--") {
        return true;
    }
    let unprefixed = VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| property.strip_prefix(prefix))
        .unwrap_or(property);
    UNITLESS_PROPERTIES.contains(unprefixed)
}

/// Formats a numeric value for a property, adding `px` where a unit is needed.
///
/// Zero never gets a unit.
pub fn add_unit(property: &str, value: f64) -> String {
    if value == 0.0 || is_unitless(property) {
        format_number(value)
    } else {
        format!("{}px", format_number(value))
    }
}
