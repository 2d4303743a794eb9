//! Tests for the crate-level functions backed by the process-wide compiler.
//!
//! These share global state, so each test is serialized and starts from a
//! flushed stylesheet.

use classy::{RuleKind, StyleObject, Template};
use pretty_assertions::assert_eq;
use serial_test::serial;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
    classy::flush();
}

#[test]
#[serial]
fn test_css_materializes_once() {
    setup();

    let a = classy::css("display: flex;").unwrap();
    let b = classy::css_object(StyleObject::new().set("display", "flex")).unwrap();

    assert_eq!(a, b);
    assert_eq!(classy::snapshot().len(), 1);
    assert_eq!(classy::css_text(), format!(".{}{{display:flex}}", a));
}

#[test]
#[serial]
fn test_flush_clears_default_sheet() {
    setup();

    let class = classy::css("color: red;").unwrap();
    assert!(!classy::snapshot().is_empty());

    classy::flush();
    assert!(classy::snapshot().is_empty());
    assert_eq!(classy::css_text(), "");

    assert_eq!(classy::css("color: red;"), Some(class));
    assert_eq!(classy::snapshot()[0].insertion_index(), 0);
}

#[test]
#[serial]
fn test_merge_keyframes_and_globals() {
    setup();

    let flex = classy::css("display: flex;").unwrap();
    let red = classy::css("color: red;").unwrap();
    let merged = classy::merge(&[&flex, &red]).unwrap();
    assert_eq!(classy::css("display: flex; color: red;"), Some(merged));

    let fade = classy::keyframes(
        StyleObject::new()
            .set("from", StyleObject::new().set("opacity", 0))
            .set("to", StyleObject::new().set("opacity", 1)),
    )
    .unwrap();
    assert!(classy::inject_global(
        StyleObject::new().set("body", StyleObject::new().set("margin", 0))
    ));

    let kinds: Vec<RuleKind> = classy::snapshot().iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        [
            RuleKind::Class,
            RuleKind::Class,
            RuleKind::Class,
            RuleKind::Keyframes,
            RuleKind::Global,
        ]
    );
    assert!(classy::css_text().contains(&format!("@keyframes {}{{", fade)));
    assert!(classy::css_text().ends_with("body{margin:0}"));
}

#[test]
#[serial]
fn test_with_compiler_exposes_the_shared_instance() {
    setup();

    let class = classy::css(Template::new().text("width: ").value(10).text("px;")).unwrap();
    let live = classy::with_compiler(|compiler| compiler.sheet().contains(class.as_str()));
    assert!(live);
}

#[test]
#[serial]
fn test_concurrent_callers_share_one_rule() {
    setup();

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| classy::css("display: grid;").unwrap()))
        .collect();
    let classes: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(classes.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(classy::snapshot().len(), 1);
}

#[test]
#[serial]
fn test_snapshot_serializes_to_json() {
    setup();

    let class = classy::css("display: flex;").unwrap();
    let json = serde_json::to_value(classy::snapshot()).unwrap();

    assert_eq!(json[0]["name"], class.as_str());
    assert_eq!(json[0]["kind"], "class");
    assert_eq!(json[0]["insertion_index"], 0);
    assert_eq!(json[0]["css_text"], format!(".{}{{display:flex}}", class));
}
