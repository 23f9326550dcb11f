//! Per-locale translation tables and the pass that fills them.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    Asset,
    error::MissingTranslation,
    filter::AssetFilter,
    normalize::normalize,
    pattern::AccessorPattern,
    resolve::resolve,
    router::GlobRouter,
    source::{Locales, Messages},
};

/// `message key -> text` for one logical file. `None` marks a key that
/// resolved in neither the locale nor the default locale.
pub type FileTable = BTreeMap<String, Option<String>>;

/// `logical file name -> file table` for one locale.
pub type LocaleTable = BTreeMap<String, FileTable>;

/// Every locale's table for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTableStore {
    tables: BTreeMap<String, LocaleTable>,
}

impl LocaleTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleTable> {
        self.tables.get(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleTable)> {
        self.tables.iter().map(|(locale, table)| (locale.as_str(), table))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Text recorded for `(locale, file, key)`. The outer `None` means the key
    /// was never recorded; `Some(None)` means it was recorded unresolved.
    pub fn text(&self, locale: &str, file: &str, key: &str) -> Option<Option<&str>> {
        self.tables
            .get(locale)?
            .get(file)?
            .get(key)
            .map(Option::as_deref)
    }

    /// Record the text of `key` in `locale`'s table for `file`.
    pub fn insert(&mut self, locale: &str, file: &str, key: &str, text: Option<String>) {
        self.table_mut(locale)
            .entry(file.to_string())
            .or_default()
            .insert(key.to_string(), text);
    }

    fn table_mut(&mut self, locale: &str) -> &mut LocaleTable {
        self.tables.entry(locale.to_string()).or_default()
    }
}

/// Result of one table-building pass.
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub store: LocaleTableStore,
    /// Keys with no text in either the locale or the default locale, sorted.
    pub missing: Vec<MissingTranslation>,
    /// Number of assets that passed the filter and had at least one call site.
    pub scanned_assets: usize,
}

/// Everything the builder needs besides the data itself.
pub struct TableBuilder<'a> {
    pub pattern: &'a AccessorPattern,
    pub router: &'a GlobRouter,
    pub filter: &'a dyn AssetFilter,
    pub hashed_filenames: bool,
    pub default_locale: &'a str,
    /// Suppress the per-key warning for unresolved keys.
    pub hide_message: bool,
}

impl TableBuilder<'_> {
    /// Logical name of an asset: the first matching routing rule, else the
    /// normalized physical name.
    pub fn logical_name(&self, physical_name: &str) -> String {
        match self.router.resolve(physical_name) {
            Some(name) => name.to_string(),
            None => normalize(physical_name, self.hashed_filenames),
        }
    }

    /// Fill a fresh table store from every locale in `locales` and every
    /// accepted asset, in locale order then asset order.
    pub fn build(&self, locales: &Locales, assets: &[Asset]) -> BuildOutput {
        let empty = Messages::new();
        let default = locales.get(self.default_locale).unwrap_or(&empty);

        // Scanning does not depend on the locale, so do it once per asset.
        let scanned: Vec<(String, Vec<&str>)> = assets
            .iter()
            .filter(|asset| self.filter.accepts(asset))
            .filter_map(|asset| {
                let keys = self.pattern.extract(&asset.content);
                if keys.is_empty() {
                    return None;
                }
                let logical_name = self.logical_name(&asset.name);
                debug!(
                    asset = %asset.name,
                    logical_name = %logical_name,
                    keys = keys.len(),
                    "scanned asset"
                );
                Some((logical_name, keys))
            })
            .collect();

        let mut store = LocaleTableStore::new();
        let mut missing = BTreeSet::new();

        for (locale, messages) in locales {
            let locale_table = store.table_mut(locale);
            for (logical_name, keys) in &scanned {
                let file_table = locale_table.entry(logical_name.clone()).or_default();
                for key in keys {
                    let text = resolve(key, messages, default);
                    if text.is_none() {
                        let newly_missing = missing.insert(MissingTranslation {
                            locale: locale.clone(),
                            file: logical_name.clone(),
                            key: key.to_string(),
                        });
                        if newly_missing && !self.hide_message {
                            warn!(
                                locale = %locale,
                                file = %logical_name,
                                key = %key,
                                "missing translation"
                            );
                        }
                    }
                    file_table.insert(key.to_string(), text.map(str::to_string));
                }
            }
        }

        BuildOutput {
            store,
            missing: missing.into_iter().collect(),
            scanned_assets: scanned.len(),
        }
    }
}
