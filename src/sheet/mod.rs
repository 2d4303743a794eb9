//! The live stylesheet.
//!
//! This module provides [`StyleSheet`], the ordered registry of every rule
//! materialized since the last flush, together with the pieces that feed it:
//!
//! - [`MaterializedRule`]: one inserted rule with its generated CSS text
//! - [`RuleCache`]: hash to name lookup that short-circuits repeated work
//! - CSS emission for classes, keyframes and global rules
//!
//! # Ordering
//!
//! Rules are append-only. Each insertion receives the next insertion index,
//! starting at 0. [`StyleSheet::flush`] removes every rule and restarts the
//! count, but nothing about hashing changes: a rule requested again after a
//! flush gets its previous name and a fresh index.
//!
//! # Thread Safety
//!
//! The stylesheet is not thread-safe. The crate-level functions share one
//! instance behind a mutex; independent instances can be owned directly.

mod cache;
pub(crate) mod emit;

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::hash::RuleHash;
use crate::rule::Block;

pub use cache::RuleCache;

/// What a materialized rule was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// A generated class (`css`, `css_object`, `merge`).
    Class,
    /// An `@keyframes` animation.
    Keyframes,
    /// Rules for global selectors.
    Global,
}

impl RuleKind {
    /// Returns the lower-case name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Class => "class",
            RuleKind::Keyframes => "keyframes",
            RuleKind::Global => "global",
        }
    }
}

/// A rule inserted into the live stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterializedRule {
    hash: RuleHash,
    kind: RuleKind,
    name: String,
    css_text: String,
    insertion_index: usize,
    #[serde(skip)]
    block: Block,
}

impl MaterializedRule {
    /// Returns the hash of the rule's canonical form.
    pub fn hash(&self) -> RuleHash {
        self.hash
    }

    /// Returns what the rule was created for.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns the class name, animation name or global rule id.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the generated CSS, one rule per line.
    pub fn css_text(&self) -> &str {
        &self.css_text
    }

    /// Returns the position of this rule among rules inserted since the last flush.
    pub fn insertion_index(&self) -> usize {
        self.insertion_index
    }

    /// Returns the resolved block the CSS was generated from.
    pub fn block(&self) -> &Block {
        &self.block
    }
}

/// Ordered registry of materialized rules.
///
/// This is the only place rules are inserted or removed.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: Vec<MaterializedRule>,
    by_name: HashMap<String, usize>,
}

impl StyleSheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule and returns its insertion index.
    pub fn insert(
        &mut self,
        hash: RuleHash,
        kind: RuleKind,
        name: impl Into<String>,
        block: Block,
        css_text: impl Into<String>,
    ) -> usize {
        let name = name.into();
        let insertion_index = self.rules.len();
        debug!(
            "inserting {} rule '{}' at index {}",
            kind.as_str(),
            name,
            insertion_index
        );

        self.by_name.insert(name.clone(), insertion_index);
        self.rules.push(MaterializedRule {
            hash,
            kind,
            name,
            css_text: css_text.into(),
            insertion_index,
            block,
        });
        insertion_index
    }

    /// Removes every rule and restarts insertion order.
    pub fn flush(&mut self) {
        debug!("flushing {} rules", self.rules.len());
        self.rules.clear();
        self.by_name.clear();
    }

    /// Returns the live rules in insertion order.
    pub fn snapshot(&self) -> &[MaterializedRule] {
        &self.rules
    }

    /// Looks up a live rule by name.
    pub fn get(&self, name: &str) -> Option<&MaterializedRule> {
        self.by_name.get(name).and_then(|&i| self.rules.get(i))
    }

    /// Returns true if a rule with this name is live.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the number of live rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are live.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the whole stylesheet as CSS text, in insertion order.
    pub fn css_text(&self) -> String {
        self.rules
            .iter()
            .map(MaterializedRule::css_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(sheet: &mut StyleSheet, name: &str, css: &str) -> usize {
        sheet.insert(
            RuleHash::from_value(name.len() as u64),
            RuleKind::Class,
            name,
            Block::default(),
            css,
        )
    }

    #[test]
    fn test_insertion_indexes_increase() {
        let mut sheet = StyleSheet::new();
        assert_eq!(insert(&mut sheet, "a", ".a{color:red}"), 0);
        assert_eq!(insert(&mut sheet, "b", ".b{color:blue}"), 1);
        assert_eq!(sheet.len(), 2);

        let names: Vec<&str> = sheet.snapshot().iter().map(|r| r.name()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(sheet.snapshot()[1].insertion_index(), 1);
    }

    #[test]
    fn test_get_and_contains() {
        let mut sheet = StyleSheet::new();
        insert(&mut sheet, "a", ".a{color:red}");

        assert!(sheet.contains("a"));
        assert_eq!(sheet.get("a").map(|r| r.css_text()), Some(".a{color:red}"));
        assert!(sheet.get("b").is_none());
    }

    #[test]
    fn test_flush_resets_order() {
        let mut sheet = StyleSheet::new();
        insert(&mut sheet, "a", ".a{color:red}");
        insert(&mut sheet, "b", ".b{color:blue}");

        sheet.flush();
        assert!(sheet.is_empty());
        assert!(!sheet.contains("a"));
        assert_eq!(sheet.css_text(), "");

        assert_eq!(insert(&mut sheet, "b", ".b{color:blue}"), 0);
        assert_eq!(sheet.get("b").map(|r| r.insertion_index()), Some(0));
    }

    #[test]
    fn test_css_text_joins_rules() {
        let mut sheet = StyleSheet::new();
        insert(&mut sheet, "a", ".a{color:red}");
        insert(&mut sheet, "empty", "");
        insert(&mut sheet, "b", ".b{color:blue}\n.b:hover{color:green}");

        assert_eq!(
            sheet.css_text(),
            ".a{color:red}\n.b{color:blue}\n.b:hover{color:green}"
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut sheet = StyleSheet::new();
        insert(&mut sheet, "a", ".a{color:red}");

        let json = serde_json::to_value(sheet.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "hash": 1,
                "kind": "class",
                "name": "a",
                "css_text": ".a{color:red}",
                "insertion_index": 0
            }])
        );
    }
}
