//! The compiler: the single entry point from style input to class name.

use log::trace;

use crate::class_name::ClassName;
use crate::compose;
use crate::error::StyleError;
use crate::hash::{hash_rule, RuleHash};
use crate::options::CompilerOptions;
use crate::rule::{self, Block, ComposeRef, ParsedRule};
use crate::sheet::{emit, MaterializedRule, RuleCache, RuleKind, StyleSheet};
use crate::source::{interpolate, StyleObject, StyleSource, Template};

/// Compiles style templates and style objects into class names.
///
/// A compiler owns its stylesheet and rule cache. Each distinct rule is
/// materialized once; asking for the same styles again returns the same
/// class without touching the stylesheet.
///
/// # Example
///
/// ```rust
/// use classy::{Compiler, StyleObject, Template};
///
/// let mut compiler = Compiler::new();
///
/// let base = compiler.css("display: flex;").unwrap();
/// let centered = compiler
///     .css(Template::new().text("composes: ").value(&base).text("; justifyContent: center;"))
///     .unwrap();
///
/// // The same declarations from an object produce the same class
/// let again = compiler
///     .css_object(StyleObject::new().set("display", "flex"))
///     .unwrap();
/// assert_eq!(base, again);
///
/// assert_eq!(compiler.snapshot().len(), 2);
/// assert!(compiler.css_text().contains(&format!(
///     ".{}{{display:flex;justify-content:center}}",
///     centered
/// )));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompilerOptions,
    sheet: StyleSheet,
    cache: RuleCache,
}

impl Compiler {
    /// Creates a compiler with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`CompilerOptions::validate`].
    pub fn with_options(options: CompilerOptions) -> Result<Self, StyleError> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::default()
        })
    }

    /// Returns the compiler's options.
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compiles a style template.
    ///
    /// Returns `None` when the template declares nothing, in which case the
    /// stylesheet is left untouched.
    pub fn css(&mut self, template: impl Into<Template>) -> Option<ClassName> {
        self.compile(StyleSource::Template(template.into()))
    }

    /// Compiles a style object.
    ///
    /// Returns `None` when the object declares nothing.
    pub fn css_object(&mut self, object: impl Into<StyleObject>) -> Option<ClassName> {
        self.compile(StyleSource::Object(object.into()))
    }

    /// Compiles a style source in either calling convention.
    pub fn compile(&mut self, source: StyleSource) -> Option<ClassName> {
        let rule = rule::parse(&interpolate(&source));
        self.materialize_class(&rule)
    }

    /// Composes existing classes, in order, into a single class.
    ///
    /// Names that are not live in the stylesheet are ignored. Returns `None`
    /// if nothing resolves.
    pub fn merge<C: AsRef<str>>(&mut self, classes: &[C]) -> Option<ClassName> {
        let rule = ParsedRule {
            composes: classes
                .iter()
                .map(|class| ComposeRef::Class(class.as_ref().to_string()))
                .collect(),
            ..ParsedRule::default()
        };
        self.materialize_class(&rule)
    }

    /// Registers an `@keyframes` animation and returns its generated name.
    ///
    /// Keys of `frames` are frame selectors (`from`, `to`, `50%`) and values
    /// are style objects. Returns `None` if no frame declares anything.
    ///
    /// # Example
    ///
    /// ```rust
    /// use classy::{Compiler, StyleObject};
    ///
    /// let mut compiler = Compiler::new();
    /// let fade = compiler
    ///     .keyframes(
    ///         StyleObject::new()
    ///             .set("from", StyleObject::new().set("opacity", 0))
    ///             .set("to", StyleObject::new().set("opacity", 1)),
    ///     )
    ///     .unwrap();
    ///
    /// assert!(fade.starts_with("animation-"));
    /// let spin = compiler.css_object(StyleObject::new().set("animation", format!("{} 1s", fade)));
    /// assert!(spin.is_some());
    /// ```
    pub fn keyframes(&mut self, frames: impl Into<StyleObject>) -> Option<String> {
        let block = rule::parse_selector_map(&frames.into());
        if block.is_empty() {
            return None;
        }

        let hash = hash_rule(RuleKind::Keyframes, &block, &[]);
        let name = self.get_or_insert(RuleKind::Keyframes, hash, block, |hash, block| {
            let name = format!("animation-{}", hash);
            let css_text = emit::keyframes_rule(&name, block);
            (name, css_text)
        });
        Some(name)
    }

    /// Registers rules for global selectors.
    ///
    /// Keys of `rules` are selectors (`body`, `a:hover`, `html, body`) and
    /// values are style objects. Returns true if the rules were newly
    /// inserted, false if they were empty or already live.
    pub fn inject_global(&mut self, rules: impl Into<StyleObject>) -> bool {
        let block = rule::parse_selector_map(&rules.into());
        if block.is_empty() {
            return false;
        }

        let hash = hash_rule(RuleKind::Global, &block, &[]);
        let live = self.sheet.len();
        self.get_or_insert(RuleKind::Global, hash, block, |hash, block| {
            (
                format!("global-{}", hash),
                emit::global_rules(block).join("\n"),
            )
        });
        self.sheet.len() > live
    }

    /// Removes every rule from the stylesheet and clears the cache.
    ///
    /// Class names stay stable: compiling the same styles after a flush
    /// returns the same class and inserts it again.
    pub fn flush(&mut self) {
        self.sheet.flush();
        self.cache.clear();
    }

    /// Returns the live rules in insertion order.
    pub fn snapshot(&self) -> &[MaterializedRule] {
        self.sheet.snapshot()
    }

    /// Returns the whole stylesheet as CSS text.
    pub fn css_text(&self) -> String {
        self.sheet.css_text()
    }

    /// Returns the stylesheet.
    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    fn materialize_class(&mut self, rule: &ParsedRule) -> Option<ClassName> {
        if rule.is_empty() {
            trace!("empty rule, no class generated");
            return None;
        }

        let block = compose::resolve(rule, &self.sheet);
        if block.is_empty() {
            trace!("rule resolved to no declarations, no class generated");
            return None;
        }

        let labels: &[String] = if self.options.labels {
            &rule.labels
        } else {
            &[]
        };
        let hash = hash_rule(RuleKind::Class, &block, labels);
        let prefix = self.options.prefix.clone();

        let name = self.get_or_insert(RuleKind::Class, hash, block, |hash, block| {
            let class = ClassName::generate(&prefix, hash, labels);
            trace!(
                "materializing '{}' with {} declarations",
                class,
                block.declaration_count()
            );
            let css_text = emit::class_rules(&class.selector(), block).join("\n");
            (class.into(), css_text)
        });
        Some(ClassName::from(name))
    }

    /// Returns the cached name for `hash`, or materializes the rule.
    ///
    /// `build` produces the name and CSS text on a miss. Lookup and insertion
    /// both happen under `&mut self`, so a hash is materialized at most once
    /// between flushes.
    fn get_or_insert<F>(&mut self, kind: RuleKind, hash: RuleHash, block: Block, build: F) -> String
    where
        F: FnOnce(RuleHash, &Block) -> (String, String),
    {
        if let Some(name) = self.cache.lookup(hash) {
            trace!("cache hit for '{}'", name);
            return name.to_string();
        }

        let (name, css_text) = build(hash, &block);
        self.sheet.insert(hash, kind, name.clone(), block, css_text);
        self.cache.store(hash, name.clone());
        name
    }
}
