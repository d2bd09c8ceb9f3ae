//! Behavioral tests for `StylesheetHandle`.

mod common;

use std::sync::Arc;

use common::{LOCAL_CSS, page_document, selectors};
use regex::Regex;
use rulekit::prelude::*;

#[test]
fn title_resolution_matches_rule_count() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::title("local"));
    let sheet = &document.style_sheets()[1];
    assert_eq!(handle.get_rules().unwrap().len(), sheet.len());
}

#[test]
fn unmatched_reference_is_a_safe_no_op() {
    let document = page_document();
    let local_rules = StylesheetHandle::new(&document, &SheetRef::title("local"))
        .get_rules_by_selector_hint(SelectorHint::All);

    for reference in [
        SheetRef::href("missing.css"),
        SheetRef::title("missing"),
        SheetRef::default(),
    ] {
        let handle = StylesheetHandle::new(&document, &reference);
        assert!(handle.get_rules().is_none());

        handle.insert_rule(".x", "color: red;");
        handle.delete_rules(Some(".class1"), BackCount::All);
        handle.delete_rules(None, BackCount::All);
        handle.set_rule(".class1", "color: red;", 0);
        handle.inject_rules(&local_rules);

        assert_eq!(handle.to_string(), "");
    }

    let lens: Vec<_> = document.style_sheets().iter().map(|s| s.len()).collect();
    assert_eq!(lens, vec![3, 2, 0]);
}

#[test]
fn hint_modes() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::title("local"));
    handle.insert_rule(".class1", "color: black;");

    assert_eq!(selectors(&handle), vec![".class1 p", "div.class1", ".class1"]);
    assert_eq!(handle.get_rules_by_selector_hint(None::<&str>).len(), 3);
    assert_eq!(handle.get_rules_by_selector_hint(SelectorHint::exact(".class1")).len(), 1);
    assert_eq!(handle.get_rules_by_selector_hint("class1").len(), 3);
    assert_eq!(
        handle
            .get_rules_by_selector_hint(Regex::new(r"^div").unwrap())
            .len(),
        1
    );
}

#[test]
fn hint_result_is_not_live() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::title("local"));
    let rules = handle.get_rules_by_selector_hint(SelectorHint::All);
    handle.insert_rule(".late", "color: red;");
    assert_eq!(rules.len(), 2);
}

#[test]
fn delete_keeps_the_earliest_definition() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::title("otherLocal"));
    handle.insert_rule(".class12", "color: black;");
    handle.insert_rule(".class12", "color: red;");
    handle.insert_rule(".class12", "color: yellow;");

    handle.delete_rules(Some(".class12"), 2);

    let rules = handle.get_rules_by_selector_hint(SelectorHint::exact(".class12"));
    assert_eq!(rules.len(), 1);
    assert_eq!(handle.style_property(&rules[0], "color").as_deref(), Some("black"));
}

#[test]
fn non_positive_count_deletes_every_match() {
    for count in [0, -1, -100] {
        let document = page_document();
        let handle = StylesheetHandle::new(&document, &SheetRef::title("otherLocal"));
        for _ in 0..4 {
            handle.insert_rule(".dup", "color: black;");
        }
        handle.insert_rule(".keep", "color: red;");

        handle.delete_rules(Some(".dup"), count);
        assert_eq!(selectors(&handle), vec![".keep"]);
    }
}

#[test]
fn fractional_count_truncates() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::title("otherLocal"));
    for _ in 0..3 {
        handle.insert_rule(".dup", "color: black;");
    }
    handle.delete_rules(Some(".dup"), 2.7);
    assert_eq!(handle.get_rules().unwrap().len(), 1);
}

#[test]
fn set_rule_yields_one_rule_with_new_declarations() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::title("local"));
    handle.set_rule("div.class1", "margin-left: 8px; color: teal;", 1);

    let rules = handle.get_rules_by_selector_hint(SelectorHint::exact("div.class1"));
    assert_eq!(rules.len(), 1);
    assert_eq!(
        handle.styles_in_rule_as_str(&rules[0], None),
        "margin-left: 8px;\ncolor: teal;\n"
    );
}

#[test]
fn set_rule_with_count_one_keeps_older_definitions() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::title("otherLocal"));
    handle.insert_rule(".a", "color: black;");
    handle.insert_rule(".a", "color: red;");

    handle.set_rule(".a", "color: blue;", 1);
    assert_eq!(handle.to_string(), ".a {\n color: black;\n}\n.a {\n color: blue;\n}");

    handle.set_rule(".a", "color: green;", 0);
    assert_eq!(handle.to_string(), ".a {\n color: green;\n}");
}

#[test]
fn read_without_value_never_mutates() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
    let before = handle.to_string();
    let rule = handle.get_rules().unwrap().get(0).unwrap();

    assert_eq!(handle.style_property(&rule, "font-weight").as_deref(), Some("bold"));
    assert_eq!(handle.style_property(&rule, "FONT_WEIGHT").as_deref(), Some("bold"));
    assert_eq!(handle.to_string(), before);
}

#[test]
fn refusing_guard_never_mutates() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
    let before = handle.to_string();
    let rule = handle.get_rules().unwrap().get(0).unwrap();

    let refuse = |_: &StylesheetHandle, _: &str, _: &str, _: &CssRuleRef| false;
    assert_eq!(
        handle
            .access_style_property(&rule, "color", Some("red"), Some(&refuse))
            .as_deref(),
        Some("green")
    );
    assert_eq!(handle.to_string(), before);
}

#[test]
fn accepting_guard_mutates_and_returns_prior_value() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
    let rule = handle.get_rules().unwrap().get(1).unwrap();

    let accept = |_: &StylesheetHandle, old: &str, _: &str, _: &CssRuleRef| old == "yellow";
    assert_eq!(
        handle
            .access_style_property(&rule, "background-color", Some("navy"), Some(&accept))
            .as_deref(),
        Some("yellow")
    );
    assert_eq!(rule.css_text(), ".class2 { background-color: navy; }");
}

#[test]
fn writing_an_undeclared_property_appends_it() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
    let rule = handle.get_rules().unwrap().get(1).unwrap();

    assert_eq!(handle.set_style_property(&rule, "z-index", "2").as_deref(), Some(""));
    assert_eq!(rule.css_text(), ".class2 { background-color: yellow; z-index: 2; }");
}

#[test]
fn unknown_property_is_never_written() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
    let rule = handle.get_rules().unwrap().get(1).unwrap();

    assert_eq!(handle.set_style_property(&rule, "not-a-property", "1"), None);
    assert_eq!(rule.style().len(), 1);
}

#[test]
fn value_that_breaks_the_declaration_is_never_written() {
    let document = page_document();
    let source = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
    let target = StylesheetHandle::new(&document, &SheetRef::title("otherLocal"));
    let rule = source.get_rules().unwrap().get(0).unwrap();
    let before = rule.css_text();

    for value in ["red; background-color: blue", "x } q { margin: 0", "red !important"] {
        assert_eq!(
            source.set_style_property(&rule, "color", value).as_deref(),
            Some("green")
        );
    }
    assert_eq!(rule.css_text(), before);

    target.clone_from_handle(&source);
    assert_eq!(target.to_string(), source.to_string());
}

#[test]
fn custom_property_by_css_name() {
    let mut document = Document::new();
    document.add_style_sheet(StyleSheet::internal("vars", ":root { --accent: teal; }"));
    let handle = StylesheetHandle::new(&document, &SheetRef::title("vars"));
    let rule = handle.get_rules().unwrap().get(0).unwrap();

    assert_eq!(
        handle.set_style_property(&rule, "--accent", "navy").as_deref(),
        Some("teal")
    );
    assert_eq!(handle.style_property(&rule, "--gap").as_deref(), Some(""));
    assert_eq!(rule.css_text(), ":root { --accent: navy; }");
}

#[test]
fn clone_round_trip() {
    let document = page_document();
    let a = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
    let b = StylesheetHandle::new(&document, &SheetRef::title("local"));

    b.clone_from_handle(&a);
    assert_eq!(b.to_string(), a.to_string());

    // The copies are new rule objects.
    let a_first = a.get_rules().unwrap().get(0).unwrap();
    assert!(!b.includes_rule(&a_first));
}

#[test]
fn clone_from_itself_keeps_rules() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::title("local"));
    let before = handle.to_string();
    handle.clone_from_handle(&handle.clone());
    assert_eq!(handle.to_string(), before);
}

#[test]
fn dump_reconstructs_the_rule_list() {
    let document = page_document();
    let handle = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
    let dump = handle.to_string();

    let mut reparsed = Document::new();
    reparsed.add_style_sheet(StyleSheet::internal("reparsed", &dump));
    let copy = StylesheetHandle::new(&reparsed, &SheetRef::title("reparsed"));

    let pairs = |h: &StylesheetHandle| -> Vec<(String, String)> {
        h.get_rules_by_selector_hint(SelectorHint::All)
            .iter()
            .map(|r| (r.selector_text().to_string(), r.style().css_text()))
            .collect()
    };
    assert_eq!(pairs(&copy), pairs(&handle));
}

#[test]
fn handles_share_the_live_rule_list() {
    let document = page_document();
    let first = StylesheetHandle::new(&document, &SheetRef::title("local"));
    let second = StylesheetHandle::new(&document, &SheetRef::title("local"));
    let rules = first.get_rules().unwrap();

    second.insert_rule(".shared", "color: red;");
    assert_eq!(rules.len(), 3);

    let shared = first.get_rules_by_selector_hint(SelectorHint::exact(".shared")).remove(0);
    assert!(second.includes_rule(&shared));

    document.style_sheets()[1]
        .insert_rule(".direct { color: blue }", 0)
        .unwrap();
    assert_eq!(selectors(&second)[0], ".direct");
}

#[test]
fn legacy_sheet_uses_add_rule() {
    let mut document = Document::new();
    document.add_style_sheet(StyleSheet::internal("old", LOCAL_CSS).with_api(SheetApi::Legacy));
    let handle = StylesheetHandle::new(&document, &SheetRef::title("old"));

    handle.set_rule("div.class1", "margin-left: 1px;", 1);
    assert_eq!(selectors(&handle), vec![".class1 p", "div.class1"]);
    assert_eq!(
        handle.to_string(),
        ".class1 p {\n color: red;\n}\ndiv.class1 {\n margin-left: 1px;\n}"
    );
}

#[test]
fn handle_from_manifest() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css/tinker.css"), common::TINKER_CSS).unwrap();
    let manifest = dir.path().join("page.toml");
    std::fs::write(
        &manifest,
        r#"
        [[stylesheet]]
        href = "css/tinker.css"

        [[stylesheet]]
        title = "local"
        css = ".class1 p { color: red; }"
        "#,
    )
    .unwrap();

    let document = Document::from_manifest_file(&manifest).unwrap();
    let linked = StylesheetHandle::new(&document, &SheetRef::href("css/tinker.css"));
    assert!(Arc::ptr_eq(linked.sheet().unwrap(), &document.style_sheets()[0]));
    assert_eq!(linked.get_rules().unwrap().len(), 3);

    let reference: SheetRef = toml::from_str("title = \"local\"").unwrap();
    let local = StylesheetHandle::new(&document, &reference);
    assert_eq!(local.to_string(), ".class1 p {\n color: red;\n}");
}
