//! Composition resolution.
//!
//! Expands the `composes` references of a [`ParsedRule`] into one flat
//! [`Block`]. Composed declarations come first, in reference order, followed
//! by the rule's own declarations, so a property declared by the rule itself
//! overrides the same property from a composed rule by source order.
//!
//! Resolution never fails:
//!
//! - undefined references contribute nothing
//! - class names that are not live in the stylesheet contribute nothing
//! - a class name already expanded in the same pass is skipped, so cyclic or
//!   repeated references terminate

use std::collections::HashSet;

use log::{debug, trace};

use crate::rule::{Block, ComposeRef, ParsedRule};
use crate::sheet::{RuleKind, StyleSheet};

/// Expands every compose reference of `rule` against the live stylesheet.
pub fn resolve(rule: &ParsedRule, sheet: &StyleSheet) -> Block {
    let mut visited = HashSet::new();
    expand(rule, sheet, &mut visited)
}

fn expand(rule: &ParsedRule, sheet: &StyleSheet, visited: &mut HashSet<String>) -> Block {
    let mut block = Block::default();

    for compose in &rule.composes {
        match compose {
            ComposeRef::Undefined => {}
            ComposeRef::Class(name) => {
                if !visited.insert(name.clone()) {
                    trace!("class '{}' already composed in this pass", name);
                    continue;
                }
                match sheet.get(name).filter(|r| r.kind() == RuleKind::Class) {
                    // Materialized blocks are already flat
                    Some(materialized) => block.merge(materialized.block()),
                    None => debug!("composed class '{}' is not in the stylesheet", name),
                }
            }
            ComposeRef::Rule(inner) => {
                let antecedent = expand(inner, sheet, visited);
                block.merge(&antecedent);
            }
        }
    }

    block.merge(&rule.root);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::RuleHash;
    use crate::rule::{parse_text, Declaration};

    fn sheet_with(name: &str, declarations: &[(&str, &str)]) -> StyleSheet {
        let mut sheet = StyleSheet::new();
        sheet.insert(
            RuleHash::from_value(1),
            RuleKind::Class,
            name,
            Block {
                declarations: declarations
                    .iter()
                    .map(|(p, v)| Declaration::new(*p, *v))
                    .collect(),
                ..Block::default()
            },
            String::new(),
        );
        sheet
    }

    fn properties(block: &Block) -> Vec<String> {
        block
            .declarations
            .iter()
            .map(|d| format!("{}:{}", d.property, d.value))
            .collect()
    }

    #[test]
    fn test_composed_declarations_come_first() {
        let sheet = sheet_with("css-a", &[("display", "flex")]);
        let rule = parse_text("composes: css-a; justify-content: center;");

        let block = resolve(&rule, &sheet);
        assert_eq!(
            properties(&block),
            ["display:flex", "justify-content:center"]
        );
    }

    #[test]
    fn test_own_declaration_follows_composed_one() {
        let sheet = sheet_with("css-a", &[("color", "red")]);
        let rule = parse_text("composes: css-a; color: blue;");

        let block = resolve(&rule, &sheet);
        assert_eq!(properties(&block), ["color:red", "color:blue"]);
    }

    #[test]
    fn test_unknown_and_undefined_references_are_noops() {
        let sheet = StyleSheet::new();
        let mut rule = parse_text("composes: css-missing; color: blue;");
        rule.composes.push(ComposeRef::Undefined);

        let block = resolve(&rule, &sheet);
        assert_eq!(properties(&block), ["color:blue"]);
    }

    #[test]
    fn test_repeated_reference_expands_once() {
        let sheet = sheet_with("css-a", &[("display", "flex")]);
        let rule = parse_text("composes: css-a css-a;");

        let block = resolve(&rule, &sheet);
        assert_eq!(properties(&block), ["display:flex"]);
    }

    #[test]
    fn test_inline_rule_references_resolve_recursively() {
        let sheet = sheet_with("css-a", &[("display", "flex")]);
        let inner = parse_text("composes: css-a; color: red;");
        let rule = ParsedRule {
            composes: vec![ComposeRef::Rule(Box::new(inner))],
            root: parse_text("width: 10px;").root,
            ..ParsedRule::default()
        };

        let block = resolve(&rule, &sheet);
        assert_eq!(
            properties(&block),
            ["display:flex", "color:red", "width:10px"]
        );
    }

    #[test]
    fn test_class_repeated_inside_inline_rule_expands_once() {
        let sheet = sheet_with("css-a", &[("display", "flex")]);
        // The inline rule composes css-a again after the outer rule already did
        let inner = parse_text("composes: css-a; color: red;");
        let rule = ParsedRule {
            composes: vec![
                ComposeRef::Class("css-a".to_string()),
                ComposeRef::Rule(Box::new(inner)),
            ],
            ..ParsedRule::default()
        };

        let block = resolve(&rule, &sheet);
        assert_eq!(properties(&block), ["display:flex", "color:red"]);
    }

    #[test]
    fn test_non_class_rules_are_not_composable() {
        let mut sheet = StyleSheet::new();
        sheet.insert(
            RuleHash::from_value(2),
            RuleKind::Keyframes,
            "animation-1",
            parse_text("opacity: 0;").root,
            String::new(),
        );
        let rule = parse_text("composes: animation-1; color: red;");

        let block = resolve(&rule, &sheet);
        assert_eq!(properties(&block), ["color:red"]);
    }
}
