//! Style declarations attached to a rule.

use std::fmt;

use crate::logging::targets;
use crate::parser::parse_value;
use crate::properties::{camel_to_css_name, is_known_css_name};

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// CSS (kebab-case) property name.
    pub name: String,
    /// Property value as written, without the priority.
    pub value: String,
    /// Whether the declaration carried `!important`.
    pub important: bool,
}

impl Declaration {
    /// Create a normal-priority declaration.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Create an `!important` declaration.
    pub fn important(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            important: true,
            ..Self::new(name, value)
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)?;
        if self.important {
            write!(f, " !important")?;
        }
        write!(f, ";")
    }
}

/// The style map of a rule.
///
/// Declarations keep their source order. Reads and writes through
/// [`get`](Self::get) and [`set`](Self::set) use camelCase names; only
/// recognized properties are addressable that way. A recognized property
/// that is not declared reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    declarations: Vec<Declaration>,
}

impl StyleDeclaration {
    /// Create an empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a block from parsed declarations.
    ///
    /// A later declaration of the same property replaces the earlier one.
    pub fn from_declarations(declarations: impl IntoIterator<Item = Declaration>) -> Self {
        let mut block = Self::new();
        for declaration in declarations {
            block.declarations.retain(|d| d.name != declaration.name);
            block.declarations.push(declaration);
        }
        block
    }

    /// Check whether a camelCase name addresses a recognized property.
    pub fn is_supported(&self, camel: &str) -> bool {
        !camel.is_empty() && is_known_css_name(&camel_to_css_name(camel))
    }

    /// Read a property by its camelCase name.
    ///
    /// Returns `None` for unrecognized names and `Some("")` for recognized
    /// properties without a declaration.
    pub fn get(&self, camel: &str) -> Option<&str> {
        if !self.is_supported(camel) {
            return None;
        }
        let name = camel_to_css_name(camel);
        Some(self.get_property_value(&name).unwrap_or(""))
    }

    /// Write a property by its camelCase name.
    ///
    /// An empty value removes the declaration. Returns `false`, leaving the
    /// block unchanged, when the name is not recognized or the value does
    /// not parse as a single declaration value.
    pub fn set(&mut self, camel: &str, value: &str) -> bool {
        if !self.is_supported(camel) {
            return false;
        }
        let name = camel_to_css_name(camel);
        if value.trim().is_empty() {
            self.remove_property(&name);
            return true;
        }

        match parse_value(&name, value) {
            Ok(value) => {
                self.set_property(&name, &value, false);
                true
            }
            Err(e) => {
                tracing::debug!(
                    target: targets::STYLE,
                    %name,
                    value,
                    "rejected value: {}",
                    e
                );
                false
            }
        }
    }

    /// Read a declared value by CSS property name.
    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        self.find(name).map(|d| d.value.as_str())
    }

    /// Set a declaration by CSS property name, keeping its position if it
    /// already exists.
    pub fn set_property(&mut self, name: &str, value: &str, important: bool) {
        match self.declarations.iter_mut().find(|d| d.name == name) {
            Some(existing) => {
                existing.value = value.to_string();
                existing.important = important;
            }
            None => self.declarations.push(Declaration {
                name: name.to_string(),
                value: value.to_string(),
                important,
            }),
        }
    }

    /// Remove a declaration by CSS property name, returning its old value.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let index = self.declarations.iter().position(|d| d.name == name)?;
        Some(self.declarations.remove(index).value)
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate over declarations in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Serialize as `name: value; name2: value2;`.
    pub fn css_text(&self) -> String {
        self.to_string()
    }

    fn find(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{declaration}")?;
        }
        Ok(())
    }
}
