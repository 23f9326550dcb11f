//! Extraction engine: scanning built assets for accessor call sites and
//! assembling one translation table per locale.

pub mod assets;
pub mod engine;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod pattern;
pub mod resolve;
pub mod router;
pub mod source;
pub mod table;
pub mod writer;

pub use engine::{ExtractOptions, Extractor};
pub use error::{
    ConfigError, ExtractError, MissingTranslation, MissingTranslations, SourceError, WriteFailure,
    WriteFailures,
};
pub use filter::{AssetFilter, Condition, NameFilter};
pub use router::{GlobRouter, RoutingRule};
pub use source::{DirectorySource, LocalizationSource, Locales, Messages};
pub use table::{BuildOutput, FileTable, LocaleTable, LocaleTableStore};
pub use writer::{FsPersist, OUTPUT_SUFFIX, OutputTarget, Persist, WriteReport};

/// One build output artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Physical file name, relative to the build output directory.
    pub name: String,
    pub content: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
