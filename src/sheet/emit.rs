//! CSS text generation from resolved blocks.

use cssparser::{ParseError, Parser, ParserInput};
use log::trace;

use crate::rule::{Block, Declaration};

/// Emits the CSS rules for a class, given its selector (`.name`).
///
/// Root declarations go under the selector; nested blocks are emitted after
/// it in block order, with at-rules wrapping the rules they contain.
pub(crate) fn class_rules(selector: &str, block: &Block) -> Vec<String> {
    let mut rules = Vec::new();
    emit_block(block, selector, &[], &mut rules);
    rules
}

/// Emits rules for a block whose nested selectors are global.
pub(crate) fn global_rules(block: &Block) -> Vec<String> {
    let mut rules = Vec::new();
    emit_block(block, "", &[], &mut rules);
    rules
}

/// Emits a single `@keyframes` rule from a block of frame selectors.
pub(crate) fn keyframes_rule(name: &str, block: &Block) -> String {
    let frames: String = block
        .blocks
        .iter()
        .filter(|frame| !frame.declarations.is_empty())
        .map(|frame| {
            format!(
                "{}{{{}}}",
                frame.selector.as_deref().unwrap_or_default(),
                declarations(&frame.declarations)
            )
        })
        .collect();
    format!("@keyframes {}{{{}}}", name, frames)
}

fn emit_block(block: &Block, selector: &str, at_rules: &[String], out: &mut Vec<String>) {
    if !block.declarations.is_empty() {
        let body = declarations(&block.declarations);
        // Without a selector the declarations belong to the at-rule itself
        // (`@font-face{...}`)
        let mut rule = if selector.is_empty() {
            body
        } else {
            format!("{}{{{}}}", selector, body)
        };
        if at_rules.is_empty() && selector.is_empty() {
            trace!("dropping declarations without a selector");
        } else {
            for at_rule in at_rules.iter().rev() {
                rule = format!("{}{{{}}}", at_rule, rule);
            }
            out.push(rule);
        }
    }

    for nested in &block.blocks {
        let nested_selector = nested.selector.as_deref().unwrap_or_default();
        if nested_selector.starts_with('@') {
            let mut wrapped = at_rules.to_vec();
            wrapped.push(nested_selector.to_string());
            emit_block(nested, selector, &wrapped, out);
        } else {
            emit_block(nested, &join_selectors(selector, nested_selector), at_rules, out);
        }
    }
}

fn declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{}:{}", d.property, d.value))
        .collect::<Vec<_>>()
        .join(";")
}

/// Splits a selector list on its top-level commas.
///
/// Commas inside functional pseudo-classes (`:not(.a, .b)`), attribute
/// selectors and strings belong to the selector that contains them.
fn split_selector_list(list: &str) -> Vec<&str> {
    let mut input = ParserInput::new(list);
    let mut parser = Parser::new(&mut input);
    let result: Result<Vec<&str>, ParseError<'_, ()>> = parser.parse_comma_separated(|p| {
        let start = p.position();
        while p.next_including_whitespace_and_comments().is_ok() {}
        Ok(p.slice_from(start).trim())
    });
    result.unwrap_or_else(|_| vec![list.trim()])
}

/// Combines a parent selector with a nested one.
///
/// `&` stands for the parent. Without `&`, pseudo-selectors attach directly
/// (`.a` + `:hover` -> `.a:hover`) and anything else becomes a descendant.
/// Selector lists on either side are expanded pairwise.
fn join_selectors(parent: &str, nested: &str) -> String {
    let parents = split_selector_list(parent);

    split_selector_list(nested)
        .into_iter()
        .flat_map(|child| {
            parents.iter().map(move |parent| {
                if child.contains('&') {
                    child.replace('&', parent).trim().to_string()
                } else if parent.is_empty() {
                    child.to_string()
                } else if child.starts_with(':') {
                    format!("{}{}", parent, child)
                } else {
                    format!("{} {}", parent, child)
                }
            })
        })
        .collect::<Vec<_>>()
        .join(",")
}
