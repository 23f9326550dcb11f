use tracing::{debug, info};

use super::{
    Asset,
    error::{ConfigError, ExtractError, MissingTranslations},
    filter::{AssetFilter, NameFilter},
    pattern::AccessorPattern,
    router::{GlobRouter, RoutingRule},
    source::LocalizationSource,
    table::{BuildOutput, LocaleTableStore, TableBuilder},
    writer::{OutputTarget, Persist, WriteReport, write_tables},
};

/// Options of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Identifier whose property accesses mark translatable strings.
    pub accessor_name: String,
    /// Module whose transpiled default-export alias is matched as well.
    pub module_name: String,
    pub default_locale: String,
    pub routes: Vec<RoutingRule>,
    /// Whether physical names carry a content-hash segment before the extension.
    pub hashed_filenames: bool,
    /// Turn unresolved keys into a run failure.
    pub fail_on_missing: bool,
    /// Do not log unresolved keys.
    pub hide_message: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            accessor_name: "__".to_string(),
            module_name: String::new(),
            default_locale: "en".to_string(),
            routes: Vec::new(),
            hashed_filenames: true,
            fail_on_missing: false,
            hide_message: false,
        }
    }
}

/// Extracts per-locale text tables from built assets.
///
/// Patterns, routing rules and the filter are compiled once in [`Extractor::new`];
/// every [`Extractor::run`] snapshots the localization source and returns a
/// fresh [`LocaleTableStore`].
pub struct Extractor<S, F = NameFilter> {
    source: S,
    filter: F,
    pattern: AccessorPattern,
    router: GlobRouter,
    options: ExtractOptions,
}

impl<S: LocalizationSource> Extractor<S, NameFilter> {
    /// Extractor scanning every asset.
    pub fn new(source: S, options: ExtractOptions) -> Result<Self, ConfigError> {
        Self::with_filter(source, options, NameFilter::default())
    }
}

impl<S: LocalizationSource, F: AssetFilter> Extractor<S, F> {
    pub fn with_filter(source: S, options: ExtractOptions, filter: F) -> Result<Self, ConfigError> {
        let pattern = AccessorPattern::for_accessor(&options.accessor_name, &options.module_name)?;
        let router = GlobRouter::compile(&options.routes)?;

        Ok(Self {
            source,
            filter,
            pattern,
            router,
            options,
        })
    }

    /// Build tables without enforcing strict mode.
    pub fn build(&self, assets: &[Asset]) -> Result<BuildOutput, ExtractError> {
        let locales = self.source.load()?;
        if !locales.contains_key(&self.options.default_locale) {
            return Err(ConfigError::MissingDefaultLocale {
                locale: self.options.default_locale.clone(),
            }
            .into());
        }
        debug!(
            locales = locales.len(),
            assets = assets.len(),
            "building locale tables"
        );

        let builder = TableBuilder {
            pattern: &self.pattern,
            router: &self.router,
            filter: &self.filter,
            hashed_filenames: self.options.hashed_filenames,
            default_locale: &self.options.default_locale,
            hide_message: self.options.hide_message,
        };
        Ok(builder.build(&locales, assets))
    }

    /// Build tables, failing with every unresolved key when strict mode is on.
    pub fn run(&self, assets: &[Asset]) -> Result<LocaleTableStore, ExtractError> {
        let output = self.build(assets)?;
        if self.options.fail_on_missing && !output.missing.is_empty() {
            return Err(MissingTranslations(output.missing).into());
        }
        info!(
            locales = output.store.len(),
            scanned_assets = output.scanned_assets,
            "built locale tables"
        );
        Ok(output.store)
    }

    /// Run and write every locale's table to `target`.
    pub fn run_and_write<P: Persist>(
        &self,
        assets: &[Asset],
        target: &OutputTarget,
        persist: &P,
    ) -> Result<WriteReport, ExtractError> {
        let store = self.run(assets)?;
        write_tables(&store, target, persist)
    }
}
