use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
};

use tracing::debug;

use super::error::SourceError;

/// Flat `message key -> text` mapping of one locale.
pub type Messages = BTreeMap<String, String>;

/// `locale code -> messages` for every known locale.
pub type Locales = BTreeMap<String, Messages>;

/// Supplies the localization data for a run.
///
/// Called exactly once per run; later changes to the underlying data do not
/// affect a run in progress.
pub trait LocalizationSource {
    fn load(&self) -> Result<Locales, SourceError>;
}

impl<F> LocalizationSource for F
where
    F: Fn() -> Locales,
{
    fn load(&self) -> Result<Locales, SourceError> {
        Ok(self())
    }
}

/// Reads `<locale>.json` files holding flat `key -> text` objects from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LocalizationSource for DirectorySource {
    fn load(&self) -> Result<Locales, SourceError> {
        let io_error = |source| SourceError::Io {
            path: self.root.clone(),
            source,
        };

        let mut locales = Locales::new();
        for entry in fs::read_dir(&self.root).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path).map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            })?;
            let messages: Messages =
                serde_json::from_str(&content).map_err(|source| SourceError::Parse {
                    path: path.clone(),
                    source,
                })?;

            debug!(locale, keys = messages.len(), "loaded locale messages");
            locales.insert(locale.to_string(), messages);
        }

        Ok(locales)
    }
}
