use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Errors raised while validating options, before any asset is scanned.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid routing pattern '{pattern}': {source}")]
    InvalidRoutePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Invalid filter regex '{pattern}': {source}")]
    InvalidFilterRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid accessor name '{name}': {source}")]
    InvalidAccessor {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Accessor name must not be empty")]
    EmptyAccessor,

    #[error("Default locale '{locale}' is missing from the localization source")]
    MissingDefaultLocale { locale: String },
}

/// Errors raised while loading the localization source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read localization source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse localization file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A message key that resolved to no text in either the active or the default locale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingTranslation {
    pub locale: String,
    pub file: String,
    pub key: String,
}

impl fmt::Display for MissingTranslation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.locale, self.file, self.key)
    }
}

/// Every missing translation found during one strict-mode run.
#[derive(Error, Debug)]
pub struct MissingTranslations(pub Vec<MissingTranslation>);

impl fmt::Display for MissingTranslations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} missing translation(s)", self.0.len())?;
        for missing in &self.0 {
            write!(f, "\n  {}", missing)?;
        }
        Ok(())
    }
}

/// A single locale file that could not be written.
#[derive(Error, Debug)]
#[error("Failed to write locale '{locale}' to {}: {source}", path.display())]
pub struct WriteFailure {
    pub locale: String,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Every failed locale write of one run.
#[derive(Error, Debug)]
pub struct WriteFailures(pub Vec<WriteFailure>);

impl fmt::Display for WriteFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} locale file(s) could not be written", self.0.len())?;
        for failure in &self.0 {
            write!(f, "\n  {}", failure)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    MissingTranslations(#[from] MissingTranslations),

    #[error(transparent)]
    Write(#[from] WriteFailures),

    #[error("Failed to serialize locale table: {0}")]
    Serialize(#[from] serde_json::Error),
}
