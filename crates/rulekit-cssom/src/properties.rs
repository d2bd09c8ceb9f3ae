//! Style property names.
//!
//! Declarations are stored under their CSS (kebab-case) names, while the
//! style map is addressed with the camelCase names scripts use
//! (`fontFamily`, `WebkitTransition`, `cssFloat`). This module converts
//! between the two forms and knows which names are recognized.

/// Vendor prefixes understood when mapping camelCase names back to CSS.
const VENDOR_PREFIXES: &[&str] = &["webkit", "moz", "ms", "o"];

/// CSS property names recognized by the style map.
///
/// Both longhands and shorthands are listed; shorthands are stored as
/// written and are never expanded.
const KNOWN_PROPERTIES: &[&str] = &[
    "align-content",
    "align-items",
    "align-self",
    "all",
    "animation",
    "animation-delay",
    "animation-direction",
    "animation-duration",
    "animation-fill-mode",
    "animation-iteration-count",
    "animation-name",
    "animation-play-state",
    "animation-timing-function",
    "appearance",
    "aspect-ratio",
    "backface-visibility",
    "background",
    "background-attachment",
    "background-blend-mode",
    "background-clip",
    "background-color",
    "background-image",
    "background-origin",
    "background-position",
    "background-repeat",
    "background-size",
    "border",
    "border-bottom",
    "border-bottom-color",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-bottom-style",
    "border-bottom-width",
    "border-collapse",
    "border-color",
    "border-image",
    "border-left",
    "border-left-color",
    "border-left-style",
    "border-left-width",
    "border-radius",
    "border-right",
    "border-right-color",
    "border-right-style",
    "border-right-width",
    "border-spacing",
    "border-style",
    "border-top",
    "border-top-color",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-top-style",
    "border-top-width",
    "border-width",
    "bottom",
    "box-shadow",
    "box-sizing",
    "caption-side",
    "caret-color",
    "clear",
    "clip",
    "clip-path",
    "color",
    "column-count",
    "column-gap",
    "column-rule",
    "column-width",
    "columns",
    "content",
    "counter-increment",
    "counter-reset",
    "cursor",
    "direction",
    "display",
    "empty-cells",
    "filter",
    "flex",
    "flex-basis",
    "flex-direction",
    "flex-flow",
    "flex-grow",
    "flex-shrink",
    "flex-wrap",
    "float",
    "font",
    "font-family",
    "font-feature-settings",
    "font-kerning",
    "font-size",
    "font-stretch",
    "font-style",
    "font-variant",
    "font-weight",
    "gap",
    "grid",
    "grid-area",
    "grid-auto-columns",
    "grid-auto-flow",
    "grid-auto-rows",
    "grid-column",
    "grid-column-end",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-start",
    "grid-template",
    "grid-template-areas",
    "grid-template-columns",
    "grid-template-rows",
    "height",
    "hyphens",
    "inset",
    "isolation",
    "justify-content",
    "justify-items",
    "justify-self",
    "left",
    "letter-spacing",
    "line-height",
    "list-style",
    "list-style-image",
    "list-style-position",
    "list-style-type",
    "margin",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "margin-top",
    "mask",
    "max-height",
    "max-width",
    "min-height",
    "min-width",
    "mix-blend-mode",
    "object-fit",
    "object-position",
    "opacity",
    "order",
    "orphans",
    "outline",
    "outline-color",
    "outline-offset",
    "outline-style",
    "outline-width",
    "overflow",
    "overflow-wrap",
    "overflow-x",
    "overflow-y",
    "padding",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "padding-top",
    "page-break-after",
    "page-break-before",
    "page-break-inside",
    "perspective",
    "perspective-origin",
    "place-content",
    "place-items",
    "pointer-events",
    "position",
    "quotes",
    "resize",
    "right",
    "row-gap",
    "scroll-behavior",
    "tab-size",
    "table-layout",
    "text-align",
    "text-decoration",
    "text-decoration-color",
    "text-decoration-line",
    "text-decoration-style",
    "text-indent",
    "text-overflow",
    "text-shadow",
    "text-transform",
    "top",
    "transform",
    "transform-origin",
    "transform-style",
    "transition",
    "transition-delay",
    "transition-duration",
    "transition-property",
    "transition-timing-function",
    "unicode-bidi",
    "user-select",
    "vertical-align",
    "visibility",
    "white-space",
    "widows",
    "width",
    "will-change",
    "word-break",
    "word-spacing",
    "word-wrap",
    "writing-mode",
    "z-index",
    "zoom",
];

/// Check whether a CSS (kebab-case) property name is recognized.
///
/// Custom properties (`--name`) are always recognized, and vendor-prefixed
/// names are recognized when their unprefixed form is.
pub fn is_known_css_name(name: &str) -> bool {
    if name.len() > 2 && name.starts_with("--") {
        return true;
    }
    let unprefixed = strip_vendor_prefix(name).unwrap_or(name);
    KNOWN_PROPERTIES.contains(&unprefixed)
}

fn strip_vendor_prefix(name: &str) -> Option<&str> {
    let rest = name.strip_prefix('-')?;
    VENDOR_PREFIXES.iter().find_map(|prefix| {
        rest.strip_prefix(*prefix)
            .and_then(|tail| tail.strip_prefix('-'))
    })
}

/// Convert a camelCase style map name into its CSS property name.
///
/// `backgroundColor` becomes `background-color`, `WebkitTransition` and
/// `webkitTransition` become `-webkit-transition`, and `cssFloat` becomes
/// `float`. Custom properties pass through untouched.
pub fn camel_to_css_name(camel: &str) -> String {
    if camel.starts_with("--") {
        return camel.to_string();
    }
    if camel == "cssFloat" {
        return "float".to_string();
    }

    let mut css = String::with_capacity(camel.len() + 4);
    for c in camel.chars() {
        if c.is_ascii_uppercase() {
            // A leading capital marks a vendor prefix and gets a dash too.
            css.push('-');
            css.push(c.to_ascii_lowercase());
        } else {
            css.push(c);
        }
    }

    // Lowercase vendor prefixes (`webkitTransition`) also map to `-webkit-`.
    if !css.starts_with('-')
        && VENDOR_PREFIXES.iter().any(|p| {
            css.strip_prefix(*p)
                .is_some_and(|tail| tail.starts_with('-'))
        })
    {
        css.insert(0, '-');
    }

    css
}
