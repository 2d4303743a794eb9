//! Canonical serialization and hashing of resolved rules.
//!
//! The canonical form is a length-prefixed serialization of a rule's kind,
//! labels and block tree. Each field is written as `{tag}{len}:{text}`, so no
//! value can be mistaken for a separator. Identical trees always serialize to
//! identical bytes, whichever calling convention produced them.

use serde::Serialize;

use crate::rule::Block;
use crate::sheet::RuleKind;
use crate::util::to_base36;

/// A 64-bit digest of a rule's canonical form.
///
/// Displays as lower-case base 36, which is the form used in class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RuleHash(u64);

impl RuleHash {
    /// Wraps a raw hash value.
    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw hash value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RuleHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_base36(self.0))
    }
}

/// Serializes a resolved rule for hashing.
pub fn canonicalize(kind: RuleKind, block: &Block, labels: &[String]) -> String {
    let mut out = String::new();
    write_field(&mut out, 'k', kind.as_str());
    for label in labels {
        write_field(&mut out, 'l', label);
    }
    write_block(&mut out, block);
    out
}

/// Hashes a resolved rule.
pub fn hash_rule(kind: RuleKind, block: &Block, labels: &[String]) -> RuleHash {
    RuleHash(seahash::hash(canonicalize(kind, block, labels).as_bytes()))
}

fn write_block(out: &mut String, block: &Block) {
    out.push('{');
    if let Some(selector) = &block.selector {
        write_field(out, 's', selector);
    }
    for declaration in &block.declarations {
        write_field(out, 'p', &declaration.property);
        write_field(out, 'v', &declaration.value);
    }
    for nested in &block.blocks {
        write_block(out, nested);
    }
    out.push('}');
}

fn write_field(out: &mut String, tag: char, text: &str) {
    out.push(tag);
    out.push_str(&text.len().to_string());
    out.push(':');
    out.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{parse_object, parse_text};
    use crate::source::StyleObject;

    #[test]
    fn test_canonical_form_layout() {
        let block = parse_text("color: red;").root;
        assert_eq!(
            canonicalize(RuleKind::Class, &block, &[]),
            "k5:class{p5:colorv3:red}"
        );
    }

    #[test]
    fn test_same_content_same_hash_across_conventions() {
        let text = parse_text("display: flex; fontSize: 20px;").root;
        let object = parse_object(
            &StyleObject::new()
                .set("display", "flex")
                .set("font-size", 20),
        )
        .root;

        assert_eq!(
            hash_rule(RuleKind::Class, &text, &[]),
            hash_rule(RuleKind::Class, &object, &[])
        );
    }

    #[test]
    fn test_order_changes_hash() {
        let a = parse_text("color: red; display: flex;").root;
        let b = parse_text("display: flex; color: red;").root;
        assert_ne!(
            hash_rule(RuleKind::Class, &a, &[]),
            hash_rule(RuleKind::Class, &b, &[])
        );
    }

    #[test]
    fn test_kind_and_labels_change_hash() {
        let block = parse_text("opacity: 0;").root;
        let class = hash_rule(RuleKind::Class, &block, &[]);
        assert_ne!(class, hash_rule(RuleKind::Keyframes, &block, &[]));
        assert_ne!(class, hash_rule(RuleKind::Class, &block, &["fade".to_string()]));
    }

    #[test]
    fn test_length_prefix_prevents_ambiguity() {
        let a = parse_text("a: bc;").root;
        let b = parse_text("ab: c;").root;
        assert_ne!(
            canonicalize(RuleKind::Class, &a, &[]),
            canonicalize(RuleKind::Class, &b, &[])
        );
    }

    #[test]
    fn test_display_is_base36() {
        assert_eq!(RuleHash::from_value(71).to_string(), "1z");
    }
}
