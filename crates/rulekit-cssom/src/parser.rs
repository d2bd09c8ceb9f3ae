//! Rule text parser using the `cssparser` crate.
//!
//! The object model only needs to split rule text into a selector and a
//! list of declarations. Selectors are kept as source text (whitespace
//! collapsed) and declaration values are kept as written; neither is
//! validated beyond tokenization.

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::declaration::Declaration;
use crate::logging::targets;
use crate::{Error, Result};

/// A style rule split into its selector and declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    /// Selector text with whitespace runs collapsed to single spaces.
    pub selector: String,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// Parse the text of exactly one style rule: `selector { declarations }`.
///
/// Anything after the closing brace other than whitespace is an error.
///
/// # Example
///
/// ```
/// use rulekit_cssom::parser::parse_rule_text;
///
/// let rule = parse_rule_text("div  p.note { color: red; margin: 0 !important }").unwrap();
/// assert_eq!(rule.selector, "div p.note");
/// assert_eq!(rule.declarations.len(), 2);
/// assert!(rule.declarations[1].important);
/// ```
pub fn parse_rule_text(text: &str) -> Result<ParsedRule> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);

    let rule = parse_rule(&mut parser)?;

    parser.skip_whitespace();
    if !parser.is_exhausted() {
        let location = parser.current_source_location();
        return Err(Error::parse(
            "Unexpected content after rule",
            location.line + 1,
            location.column,
        ));
    }

    Ok(rule)
}

/// Check that `value` reads back as the single, normal-priority value of
/// property `name`, and return it trimmed.
///
/// Values that would split into several declarations, close the rule
/// block, carry `!important` or leave a block, string or comment open are
/// rejected.
///
/// ```
/// use rulekit_cssom::parser::parse_value;
///
/// assert_eq!(parse_value("margin", " 0 auto ").unwrap(), "0 auto");
/// assert!(parse_value("color", "red; background-color: blue").is_err());
/// assert!(parse_value("color", "x } p { margin: 0").is_err());
/// ```
pub fn parse_value(name: &str, value: &str) -> Result<String> {
    let value = value.trim();
    let rule = parse_rule_text(&format!("_ {{ {name}: {value} }}"))?;

    match rule.declarations.as_slice() {
        [declaration] if !declaration.important && declaration.value == value => {
            Ok(declaration.value.clone())
        }
        _ => Err(Error::parse(
            format!("Not a single value for '{name}'"),
            1,
            0,
        )),
    }
}

/// Parse a stylesheet into its style rules.
///
/// Rules that fail to parse are skipped with a warning, the way a browser
/// drops invalid rules while loading a sheet.
pub fn parse_stylesheet(css: &str) -> Vec<ParsedRule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        match parse_rule(&mut parser) {
            Ok(rule) => rules.push(rule),
            Err(e) => {
                tracing::warn!(target: targets::PARSER, "CSS parse error: {}", e);
                skip_to_next_rule(&mut parser);
            }
        }
    }

    rules
}

/// Parse a single rule starting at the current position.
fn parse_rule(parser: &mut Parser<'_, '_>) -> Result<ParsedRule> {
    let location = parser.current_source_location();

    let state = parser.state();
    let first = parser.next().cloned();
    parser.reset(&state);

    if let Ok(Token::AtKeyword(name)) = first {
        return Err(Error::parse(
            format!("At-rule '@{}' is not a style rule", name),
            location.line + 1,
            location.column,
        ));
    }

    let start = parser.position();
    parser
        .parse_until_before(Delimiter::CurlyBracketBlock, consume_all)
        .map_err(|e| to_error("Failed to read selector", e))?;
    let selector = collapse_whitespace(parser.slice_from(start));

    if selector.is_empty() {
        return Err(Error::parse("Empty selector", location.line + 1, location.column));
    }

    let declarations = match parser.next() {
        Ok(Token::CurlyBracketBlock) => parser
            .parse_nested_block(|block| Ok(parse_declarations(block)))
            .map_err(|e: CssParseError<'_, ()>| {
                to_error("Failed to parse declaration block", e)
            })?,
        _ => {
            return Err(Error::parse(
                format!("Expected '{{' after selector '{}'", selector),
                location.line + 1,
                location.column,
            ));
        }
    };

    Ok(ParsedRule {
        selector,
        declarations,
    })
}

/// Parse the contents of a declaration block.
///
/// Malformed declarations are dropped up to the next `;`.
fn parse_declarations(parser: &mut Parser<'_, '_>) -> Vec<Declaration> {
    let mut declarations = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        match parser.parse_until_after(Delimiter::Semicolon, parse_declaration) {
            Ok(declaration) => declarations.push(declaration),
            Err(e) => {
                tracing::warn!(
                    target: targets::PARSER,
                    "Skipping malformed declaration at {}:{}: {:?}",
                    e.location.line + 1,
                    e.location.column,
                    e.kind
                );
            }
        }
    }

    declarations
}

/// Parse `name: value [!important]` up to (not including) the `;`.
fn parse_declaration<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Declaration, CssParseError<'i, ()>> {
    let ident = parser.expect_ident()?.clone();
    let name = if ident.starts_with("--") {
        ident.to_string()
    } else {
        ident.to_ascii_lowercase()
    };

    parser.expect_colon()?;
    parser.skip_whitespace();

    let start = parser.position();
    parser.parse_until_before(Delimiter::Bang, consume_all)?;
    let value = parser.slice_from(start).trim().to_string();

    let important = parser.try_parse(cssparser::parse_important).is_ok();
    parser.expect_exhausted()?;

    if value.is_empty() {
        return Err(parser.new_custom_error(()));
    }

    Ok(Declaration {
        name,
        value,
        important,
    })
}

fn consume_all<'i>(parser: &mut Parser<'i, '_>) -> std::result::Result<(), CssParseError<'i, ()>> {
    while parser.next().is_ok() {}
    Ok(())
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            // The nested block is skipped as a unit.
            Ok(Token::CurlyBracketBlock) | Ok(Token::Semicolon) | Err(_) => return,
            _ => {}
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn to_error(context: &str, e: CssParseError<'_, ()>) -> Error {
    Error::parse(
        format!("{}: {:?}", context, e.kind),
        e.location.line + 1,
        e.location.column,
    )
}
