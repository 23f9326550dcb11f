//! Accessor call-site scanning.
//!
//! Built bundles reference translatable strings as property accesses on a
//! well-known identifier, e.g. `__.greeting`. Once a transpiler has rewritten
//! an ES module import, the same access shows up as `_i18n2.default.greeting`.
//! [`AccessorPattern`] matches both shapes and yields the property name.

use regex::Regex;

use super::error::ConfigError;

/// Word characters as JavaScript's `\w` sees them (ASCII only).
const WORD: &str = "[0-9A-Za-z_]";
const NON_WORD: &str = "[^0-9A-Za-z_]";

/// Name of the transpiled alias of `module_name`'s default export.
///
/// `i18n` becomes `_i18n2.default`.
pub fn compiled_alias(module_name: &str) -> String {
    format!("_{}2.default", module_name)
}

/// Compiled scan pattern for one run.
#[derive(Debug, Clone)]
pub struct AccessorPattern {
    regex: Regex,
}

impl AccessorPattern {
    /// Build a pattern matching `<non-word><accessor>.<key><non-word>` for any
    /// of the given accessor names.
    pub fn new<S: AsRef<str>>(accessor_names: &[S]) -> Result<Self, ConfigError> {
        if accessor_names.is_empty() || accessor_names.iter().any(|n| n.as_ref().is_empty()) {
            return Err(ConfigError::EmptyAccessor);
        }

        let alternatives = accessor_names
            .iter()
            .map(|name| regex::escape(name.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(r"{NON_WORD}(?:{alternatives})\.({WORD}+){NON_WORD}");

        let regex = Regex::new(&source).map_err(|source| ConfigError::InvalidAccessor {
            name: accessor_names
                .iter()
                .map(|n| n.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
            source,
        })?;

        Ok(Self { regex })
    }

    /// Pattern for the user-facing accessor plus the compiled alias of `module_name`.
    pub fn for_accessor(accessor_name: &str, module_name: &str) -> Result<Self, ConfigError> {
        Self::new(&[accessor_name.to_string(), compiled_alias(module_name)])
    }

    /// Every message key referenced in `text`, in order of appearance.
    ///
    /// Matches do not overlap: the delimiter closing one call site cannot open
    /// the next, so `__.a __.b` separated by a single character yields only `a`.
    pub fn extract<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|key| key.as_str())
            .collect()
    }
}
