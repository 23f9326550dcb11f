use glob::Pattern;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Maps a physical file name shape to a stable logical name.
///
/// `pattern` is a `glob::Pattern`: `*` also crosses `/`, and `?` and `[..]`
/// are wildcards rather than literal characters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRule {
    pub pattern: String,
    pub logical_name: String,
}

impl RoutingRule {
    pub fn new(pattern: impl Into<String>, logical_name: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            logical_name: logical_name.into(),
        }
    }
}

/// Routing rules compiled once per run. Rules are tried in configured order
/// and the first match wins.
#[derive(Debug, Clone, Default)]
pub struct GlobRouter {
    matchers: Vec<(Pattern, String)>,
}

impl GlobRouter {
    pub fn compile(rules: &[RoutingRule]) -> Result<Self, ConfigError> {
        let matchers = rules
            .iter()
            .map(|rule| {
                Pattern::new(&rule.pattern)
                    .map(|pattern| (pattern, rule.logical_name.clone()))
                    .map_err(|source| ConfigError::InvalidRoutePattern {
                        pattern: rule.pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { matchers })
    }

    /// Logical name of the first rule matching `physical_name`, if any.
    pub fn resolve(&self, physical_name: &str) -> Option<&str> {
        self.matchers
            .iter()
            .find(|(pattern, _)| pattern.matches(physical_name))
            .map(|(_, logical_name)| logical_name.as_str())
    }
}
