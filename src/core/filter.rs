//! Selection of the assets that get scanned.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Asset, error::ConfigError};

/// Decides whether an asset is scanned.
pub trait AssetFilter {
    fn accepts(&self, asset: &Asset) -> bool;
}

impl<F> AssetFilter for F
where
    F: Fn(&Asset) -> bool,
{
    fn accepts(&self, asset: &Asset) -> bool {
        self(asset)
    }
}

/// A configured file-name condition.
///
/// A plain string matches names starting with it; `{ "regex": "..." }`
/// matches names containing a match of the expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Condition {
    Prefix(String),
    Regex { regex: String },
}

#[derive(Debug, Clone)]
enum CompiledCondition {
    Prefix(String),
    Regex(Regex),
}

impl CompiledCondition {
    fn compile(condition: &Condition) -> Result<Self, ConfigError> {
        match condition {
            Condition::Prefix(prefix) => Ok(Self::Prefix(prefix.clone())),
            Condition::Regex { regex } => Regex::new(regex).map(Self::Regex).map_err(|source| {
                ConfigError::InvalidFilterRegex {
                    pattern: regex.clone(),
                    source,
                }
            }),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Prefix(prefix) => name.starts_with(prefix.as_str()),
            Self::Regex(regex) => regex.is_match(name),
        }
    }
}

fn any_match(conditions: &[CompiledCondition], name: &str) -> bool {
    conditions.iter().any(|c| c.matches(name))
}

/// File-name filter built from `test`, `include` and `exclude` condition lists.
///
/// A name passes when it matches some condition of every non-empty `test`
/// and `include` list and no `exclude` condition. With all lists empty,
/// everything passes.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    test: Vec<CompiledCondition>,
    include: Vec<CompiledCondition>,
    exclude: Vec<CompiledCondition>,
}

impl NameFilter {
    pub fn new(
        test: &[Condition],
        include: &[Condition],
        exclude: &[Condition],
    ) -> Result<Self, ConfigError> {
        let compile = |conditions: &[Condition]| {
            conditions
                .iter()
                .map(CompiledCondition::compile)
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(Self {
            test: compile(test)?,
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        if !self.test.is_empty() && !any_match(&self.test, name) {
            return false;
        }
        if !self.include.is_empty() && !any_match(&self.include, name) {
            return false;
        }
        !any_match(&self.exclude, name)
    }
}

impl AssetFilter for NameFilter {
    fn accepts(&self, asset: &Asset) -> bool {
        self.matches(&asset.name)
    }
}
