//! Rule parsing for style text and style objects.
//!
//! # Style text
//!
//! Text is read as a sequence of `property: value` statements separated by
//! `;`. Tokenizing is delegated to `cssparser`, so a `;` or `:` inside
//! quotes, `url(...)` or `calc(...)` never splits a statement. Two
//! statements are directives rather than declarations:
//!
//! | Statement | Effect |
//! |-----------|--------|
//! | `composes: a b` | composes the classes `a` and `b`; an empty value composes nothing |
//! | `label: name` | appends `-name` to the generated class |
//!
//! Statements without a `property:` prefix are dropped. Styling input is
//! usually assembled from interpolated values, so a bad statement costs one
//! declaration rather than the whole rule.
//!
//! # Style objects
//!
//! | Key | Value | Effect |
//! |-----|-------|--------|
//! | `composes` | class, list, object or undefined | compose references |
//! | `label` | string | class label |
//! | `:hover`, `@media(...)`, `& > p` | object | nested block |
//! | any other | object | nested descendant block `& key` |
//! | any other | string / number | declaration (numbers get `px` where needed) |
//! | any other | list | one declaration per item, in order |

use cssparser::{Delimiter, ParseError, Parser, ParserInput};
use log::{debug, trace};

use super::props::{add_unit, hyphenate};
use super::{Block, ComposeRef, Declaration, ParsedRule};
use crate::source::{Interpolated, PropertyValue, StyleObject};
use crate::util::sanitize_label;

const COMPOSES: &str = "composes";
const LABEL: &str = "label";

/// Parses an interpolated style source.
pub fn parse(source: &Interpolated<'_>) -> ParsedRule {
    match source {
        Interpolated::Text(text) => parse_text(text),
        Interpolated::Object(object) => parse_object(object),
    }
}

/// Parses style text into a rule.
///
/// # Example
///
/// ```rust
/// use classy::rule::parse_text;
///
/// let rule = parse_text("display: flex; justifyContent: center; oops;");
/// assert_eq!(rule.root.declarations.len(), 2);
/// assert_eq!(rule.root.declarations[1].property, "justify-content");
/// ```
pub fn parse_text(text: &str) -> ParsedRule {
    let mut rule = ParsedRule::default();
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);

    while !parser.is_exhausted() {
        match parser.parse_until_after(Delimiter::Semicolon, parse_statement) {
            Ok((property, value)) => push_statement(&mut rule, &property, &value),
            Err(err) => trace!("dropping malformed style statement: {:?}", err.kind),
        }
    }

    rule
}

/// Reads one `property: value` statement, keeping the raw value text.
fn parse_statement<'i>(parser: &mut Parser<'i, '_>) -> Result<(String, String), ParseError<'i, ()>> {
    let property = parser.expect_ident()?.to_string();
    parser.expect_colon()?;

    let start = parser.position();
    while parser.next_including_whitespace_and_comments().is_ok() {}
    let value = parser.slice_from(start).trim().to_string();

    Ok((property, value))
}

fn push_statement(rule: &mut ParsedRule, property: &str, value: &str) {
    match property {
        COMPOSES => push_class_refs(&mut rule.composes, value),
        LABEL => push_label(&mut rule.labels, value),
        _ if value.is_empty() => trace!("dropping empty value for '{}'", property),
        _ => rule
            .root
            .declarations
            .push(Declaration::new(hyphenate(property), value)),
    }
}

/// Splits a `composes` value into class references.
///
/// An empty value (for example an interpolated undefined) becomes a single
/// [`ComposeRef::Undefined`].
fn push_class_refs(composes: &mut Vec<ComposeRef>, value: &str) {
    let before = composes.len();
    composes.extend(
        value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|name| !name.is_empty())
            .map(|name| ComposeRef::Class(name.to_string())),
    );
    if composes.len() == before {
        composes.push(ComposeRef::Undefined);
    }
}

fn push_label(labels: &mut Vec<String>, value: &str) {
    let label = sanitize_label(value);
    if !label.is_empty() {
        labels.push(label);
    }
}

/// Parses a style object into a rule.
///
/// # Example
///
/// ```rust
/// use classy::rule::parse_object;
/// use classy::StyleObject;
///
/// let rule = parse_object(
///     &StyleObject::new()
///         .set("display", ["flex", "block"])
///         .set(":hover", StyleObject::new().set("color", "blue")),
/// );
/// assert_eq!(rule.root.declarations.len(), 2);
/// assert_eq!(rule.root.blocks[0].selector.as_deref(), Some(":hover"));
/// ```
pub fn parse_object(object: &StyleObject) -> ParsedRule {
    let mut rule = ParsedRule::default();

    for (key, value) in object.iter() {
        match key {
            COMPOSES => push_compose_value(&mut rule.composes, value),
            LABEL => match value {
                PropertyValue::Str(label) => push_label(&mut rule.labels, label),
                _ => trace!("ignoring non-string label"),
            },
            _ => push_entry(&mut rule.root, key, value),
        }
    }

    rule
}

/// Parses an object whose keys are selectors and whose values are style objects.
///
/// Used for global styles (`body`, `a:hover`) and keyframes (`from`, `50%`),
/// where keys are taken verbatim instead of being nested under a class.
pub fn parse_selector_map(object: &StyleObject) -> Block {
    let mut root = Block::default();

    for (selector, value) in object.iter() {
        match value {
            PropertyValue::Object(inner) => root.blocks.push(parse_block(selector.trim(), inner)),
            _ => trace!("ignoring non-object entry '{}' in selector map", selector),
        }
    }

    root
}

fn push_compose_value(composes: &mut Vec<ComposeRef>, value: &PropertyValue) {
    match value {
        PropertyValue::Undefined => composes.push(ComposeRef::Undefined),
        PropertyValue::Str(names) => push_class_refs(composes, names),
        PropertyValue::Number(_) => {
            debug!("ignoring numeric compose reference");
            composes.push(ComposeRef::Undefined);
        }
        PropertyValue::List(items) => {
            for item in items {
                push_compose_value(composes, item);
            }
        }
        PropertyValue::Object(object) => {
            composes.push(ComposeRef::Rule(Box::new(parse_object(object))));
        }
    }
}

fn parse_block(selector: &str, object: &StyleObject) -> Block {
    let mut block = Block::nested(selector);
    for (key, value) in object.iter() {
        match key {
            COMPOSES | LABEL => debug!("ignoring '{}' inside nested block '{}'", key, selector),
            _ => push_entry(&mut block, key, value),
        }
    }
    block
}

fn push_entry(block: &mut Block, key: &str, value: &PropertyValue) {
    let key = key.trim();

    if let PropertyValue::Object(inner) = value {
        block.blocks.push(parse_block(&nested_selector(key), inner));
        return;
    }
    if is_selector_key(key) {
        trace!("ignoring non-object value for selector '{}'", key);
        return;
    }

    let property = hyphenate(key);
    push_values(block, &property, value);
}

fn push_values(block: &mut Block, property: &str, value: &PropertyValue) {
    match value {
        PropertyValue::Undefined => {}
        PropertyValue::Str(s) => {
            let s = s.trim();
            if !s.is_empty() {
                block.declarations.push(Declaration::new(property, s));
            }
        }
        PropertyValue::Number(n) if !n.is_finite() => {
            trace!("dropping non-finite number for '{}'", property)
        }
        PropertyValue::Number(n) => block
            .declarations
            .push(Declaration::new(property, add_unit(property, *n))),
        PropertyValue::List(items) => {
            for item in items {
                push_values(block, property, item);
            }
        }
        PropertyValue::Object(_) => {
            trace!("ignoring nested object in value list for '{}'", property)
        }
    }
}

fn is_selector_key(key: &str) -> bool {
    key.starts_with(':') || key.starts_with('@') || key.contains('&')
}

/// Normalizes the selector of a nested block.
///
/// Pseudo-selectors, at-rules and `&` selectors are kept as written; any
/// other key is treated as a descendant selector.
fn nested_selector(key: &str) -> String {
    if is_selector_key(key) {
        key.to_string()
    } else {
        format!("& {}", key)
    }
}
