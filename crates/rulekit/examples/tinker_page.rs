//! Manual test page for `StylesheetHandle`.
//!
//! Runs the page's checks in order against one document and prints the
//! outcome of each. Pass a manifest path to load the document from disk;
//! otherwise a built-in page is used.
//!
//! ```text
//! cargo run -p rulekit --example tinker_page [page.toml]
//! ```

#[path = "../tests/common/mod.rs"]
mod common;

use regex::Regex;
use rulekit::prelude::*;

/// Pass/fail tally for one run.
#[derive(Default)]
struct Report {
    passed: usize,
    failed: usize,
}

impl Report {
    fn check(&mut self, label: &str, ok: bool) {
        if ok {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        println!("{label}: {}", if ok { "passed" } else { "failed" });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let document = match std::env::args().nth(1) {
        Some(path) => Document::from_manifest_file(path)?,
        None => common::page_document(),
    };

    let mut report = Report::default();

    let ref_sheet = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
    report.check(
        "1. get reference to linked stylesheet",
        ref_sheet.get_rules().is_some_and(|r| r.len() == 3),
    );

    report.check(
        "2. test get_rules_by_selector_hint",
        ref_sheet.get_rules_by_selector_hint("\u{c}.class1").len() == 1,
    );

    let pattern = Regex::new(r"\.class1$")?;
    report.check(
        "3. test get_rules_by_selector_hint",
        ref_sheet.get_rules_by_selector_hint(pattern).len() == 1,
    );

    let local = StylesheetHandle::new(&document, &SheetRef::title("local"));
    report.check(
        "4. get reference to local stylesheet",
        local.get_rules().is_some_and(|r| r.len() == 2),
    );

    report.check(
        "5. test get_rules_by_selector_hint",
        local.get_rules_by_selector_hint("class1").len() == 2,
    );

    local.insert_rule(
        ".class10",
        "color: blue; text-shadow: 3px 2px black; background-color: red; border-radius: 12px; \
         transition-property: text-shadow, background-color, color; transition-duration: 5s;",
    );
    let class10 = local.get_rules_by_selector_hint(SelectorHint::exact(".class10"));
    report.check(
        "6. test insert_rule",
        class10
            .first()
            .and_then(|rule| local.style_property(rule, "border-radius"))
            .is_some_and(|radius| radius == "12px"),
    );

    local.insert_rule(".class12", "color: black;");
    local.insert_rule(".class12", "color: red;");
    local.insert_rule(".class12", "color: yellow;");
    report.check(
        "7. test insert_rule 3 times",
        local.get_rules_by_selector_hint("class12").len() == 3,
    );

    local.delete_rules(Some(".class12"), -1);
    report.check(
        "8. test delete_rules for all",
        local.get_rules_by_selector_hint(".class12").is_empty(),
    );

    local.insert_rule(".class12", "color: black;");
    local.insert_rule(".class12", "color: red;");
    local.insert_rule(".class12", "color: yellow;");
    local.delete_rules(Some(".class12"), 2);
    report.check(
        "9. test delete_rules for only last 2",
        local.get_rules_by_selector_hint("\u{c}.class12").len() == 1,
    );

    report.check(
        "10. test to_string",
        local
            .to_string()
            .find("transition-property: text-shadow, background-color, color;")
            .is_some_and(|p| p > 0),
    );

    let class12 = local.get_rules_by_selector_hint("\u{c}.class12");
    report.check(
        "11. test styles_in_rule_as_str",
        class12.first().is_some_and(|rule| {
            local
                .styles_in_rule_as_str(rule, Some("***"))
                .starts_with("***color: black;")
        }),
    );

    local.set_rule(".class12", "color: purple;", BackCount::default());
    let class12 = local.get_rules_by_selector_hint("\u{c}.class12");
    report.check(
        "12. test set_rule",
        class12.len() == 1
            && local
                .styles_in_rule_as_str(&class12[0], Some("+=+"))
                .starts_with("+=+color: purple;"),
    );

    let Some(rule) = local.get_rules_by_selector_hint("12").into_iter().next() else {
        report.check("13-15. test access_style_property", false);
        return summarize(&report);
    };

    report.check(
        "13. test access_style_property just for reading",
        local.style_property(&rule, "color").as_deref() == Some("purple"),
    );

    report.check(
        "14. test access_style_property with unconditional setting",
        local.access_style_property(&rule, "color", Some("green"), None).as_deref()
            == Some("purple")
            && local.style_property(&rule, "color").as_deref() == Some("green"),
    );

    let guard = |handle: &StylesheetHandle, old: &str, new: &str, target: &CssRuleRef| {
        std::ptr::eq(handle, &local)
            && old == "green"
            && new == "yellow"
            && CssRule::same(target, &rule)
    };
    report.check(
        "15. test access_style_property with conditional setting",
        local
            .access_style_property(&rule, "color", Some("yellow"), Some(&guard))
            .as_deref()
            == Some("green")
            && local.style_property(&rule, "color").as_deref() == Some("yellow"),
    );

    let other_local = StylesheetHandle::new(&document, &SheetRef::title("otherLocal"));
    other_local.inject_rules(&ref_sheet.get_rules_by_selector_hint(SelectorHint::All));
    report.check(
        "16. test get_rules_by_selector_hint on all rules and inject_rules",
        other_local.to_string() == ref_sheet.to_string(),
    );

    other_local.clone_from_handle(&ref_sheet);
    report.check(
        "17. test clone_from_handle",
        other_local.to_string() == ref_sheet.to_string(),
    );

    // This page has a single rule matching "10", so the recolor targets
    // `.class10` itself.
    let class10 = local.get_rules_by_selector_hint("10");
    if report.failed == 0
        && let Some(rule) = class10.first()
    {
        local.set_style_property(rule, "background-color", "green");
    }

    summarize(&report)
}

fn summarize(report: &Report) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    if report.failed > 0 {
        println!(
            "Not a full success: failed {} time(s) in {} checks",
            report.failed,
            report.failed + report.passed
        );
    } else {
        println!("Success!");
    }
    Ok(())
}
