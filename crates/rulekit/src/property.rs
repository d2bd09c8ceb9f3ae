//! Style property name normalization.

/// Convert a hyphen, underscore or space separated property name to the
/// camelCase form used by the style map.
///
/// Names without any separator are returned unchanged, so camelCase input
/// passes straight through, and so are custom property names (`--accent`),
/// which are case sensitive and addressed as written. Otherwise the name is lowercased, each run of
/// separators becomes a word break, and the first character after every
/// break is uppercased.
///
/// ```
/// use rulekit::property::normalize_property_name;
///
/// assert_eq!(normalize_property_name("font-family"), "fontFamily");
/// assert_eq!(normalize_property_name("BACKGROUND_COLOR"), "backgroundColor");
/// assert_eq!(normalize_property_name("borderTopLeftRadius"), "borderTopLeftRadius");
/// assert_eq!(normalize_property_name("-webkit-transition"), "WebkitTransition");
/// assert_eq!(normalize_property_name("--accent-Color"), "--accent-Color");
/// ```
pub fn normalize_property_name(name: &str) -> String {
    let is_separator = |c: char| matches!(c, '-' | '_' | ' ');

    if name.starts_with("--") || !name.contains(is_separator) {
        return name.to_string();
    }

    let mut camel = String::with_capacity(name.len());
    let mut at_break = false;
    for c in name.to_lowercase().chars() {
        if is_separator(c) {
            at_break = true;
        } else if at_break {
            camel.extend(c.to_uppercase());
            at_break = false;
        } else {
            camel.push(c);
        }
    }
    camel
}
