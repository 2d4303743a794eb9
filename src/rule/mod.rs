//! Canonical rule representation.
//!
//! A [`ParsedRule`] is what every style input becomes once parsed: a list of
//! [`ComposeRef`]s, optional labels, and a root [`Block`] of ordered
//! [`Declaration`]s with nested blocks for pseudo-selectors and at-rules.

mod parse;
mod props;

pub use parse::{parse, parse_object, parse_selector_map, parse_text};
pub use props::{add_unit, hyphenate, is_unitless};

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// An ordered group of declarations under one selector.
///
/// The root block of a rule has no selector. Nested blocks carry a selector
/// such as `:hover`, `& > p` or `@media(min-width: 420px)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Block {
    pub selector: Option<String>,
    pub declarations: Vec<Declaration>,
    pub blocks: Vec<Block>,
}

impl Block {
    /// Creates an empty nested block with the given selector.
    pub fn nested(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            ..Self::default()
        }
    }

    /// Returns true if neither this block nor any nested block declares anything.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.blocks.iter().all(Block::is_empty)
    }

    /// Counts declarations in this block and all nested blocks.
    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
            + self
                .blocks
                .iter()
                .map(Block::declaration_count)
                .sum::<usize>()
    }

    /// Appends `other`'s contents after this block's own.
    ///
    /// Declarations are appended in order. A nested block whose selector
    /// already exists here is merged into the first such block; others are
    /// appended. Nothing is reordered or deduplicated, so the later of two
    /// declarations for the same property still wins by source order.
    pub fn merge(&mut self, other: &Block) {
        self.declarations.extend(other.declarations.iter().cloned());
        for nested in &other.blocks {
            match self
                .blocks
                .iter_mut()
                .find(|existing| existing.selector == nested.selector)
            {
                Some(existing) => existing.merge(nested),
                None => self.blocks.push(nested.clone()),
            }
        }
    }
}

/// A reference to a rule whose declarations should be composed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeRef {
    /// An absent reference. Contributes nothing.
    Undefined,
    /// A class name produced earlier by the compiler.
    Class(String),
    /// An inline rule that has not been materialized.
    Rule(Box<ParsedRule>),
}

/// A parsed style rule, before composition is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRule {
    pub composes: Vec<ComposeRef>,
    pub labels: Vec<String>,
    pub root: Block,
}

impl ParsedRule {
    /// Returns true if the rule declares nothing and composes nothing.
    ///
    /// Undefined compose references do not count.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
            && self
                .composes
                .iter()
                .all(|compose| matches!(compose, ComposeRef::Undefined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(declarations: &[(&str, &str)]) -> Block {
        Block {
            declarations: declarations
                .iter()
                .map(|(p, v)| Declaration::new(*p, *v))
                .collect(),
            ..Block::default()
        }
    }

    #[test]
    fn test_empty_block_with_empty_nested_blocks() {
        let mut root = Block::default();
        root.blocks.push(Block::nested(":hover"));
        assert!(root.is_empty());

        root.blocks[0]
            .declarations
            .push(Declaration::new("color", "blue"));
        assert!(!root.is_empty());
        assert_eq!(root.declaration_count(), 1);
    }

    #[test]
    fn test_merge_appends_declarations_in_order() {
        let mut base = block(&[("display", "flex"), ("color", "red")]);
        base.merge(&block(&[("color", "blue")]));

        let properties: Vec<(&str, &str)> = base
            .declarations
            .iter()
            .map(|d| (d.property.as_str(), d.value.as_str()))
            .collect();
        assert_eq!(
            properties,
            [("display", "flex"), ("color", "red"), ("color", "blue")]
        );
    }

    #[test]
    fn test_merge_joins_blocks_with_same_selector() {
        let mut hover_a = Block::nested(":hover");
        hover_a.declarations.push(Declaration::new("color", "red"));
        let mut hover_b = Block::nested(":hover");
        hover_b.declarations.push(Declaration::new("color", "blue"));
        let mut focus = Block::nested(":focus");
        focus.declarations.push(Declaration::new("outline", "none"));

        let mut base = Block::default();
        base.blocks.push(hover_a);
        let mut other = Block::default();
        other.blocks.push(focus);
        other.blocks.push(hover_b);
        base.merge(&other);

        assert_eq!(base.blocks.len(), 2);
        assert_eq!(base.blocks[0].selector.as_deref(), Some(":hover"));
        assert_eq!(base.blocks[0].declarations.len(), 2);
        assert_eq!(base.blocks[0].declarations[1].value, "blue");
        assert_eq!(base.blocks[1].selector.as_deref(), Some(":focus"));
    }

    #[test]
    fn test_rule_with_only_undefined_composes_is_empty() {
        let rule = ParsedRule {
            composes: vec![ComposeRef::Undefined],
            ..ParsedRule::default()
        };
        assert!(rule.is_empty());

        let rule = ParsedRule {
            composes: vec![ComposeRef::Class("css-1".to_string())],
            ..ParsedRule::default()
        };
        assert!(!rule.is_empty());
    }
}
