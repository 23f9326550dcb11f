use std::{
    collections::BTreeSet,
    env,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::args::{ExtractCommand, Mode};
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{
        DirectorySource, ExtractError, Extractor, FsPersist, LocaleTableStore, NameFilter,
        OUTPUT_SUFFIX, OutputTarget, assets::load_assets, writer::write_tables,
    },
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let ConfigLoadResult {
        mut config,
        base_dir,
        ..
    } = load_config(&cwd)?;

    if cmd.fail_on_missing {
        config.fail_on_missing = true;
    }
    let development = cmd.mode == Mode::Development;

    let dist_root = match &cmd.dist_root {
        Some(path) => join_clean(&cwd, path),
        None => join_clean(&base_dir, Path::new(&config.dist_root)),
    };
    let messages_root = match &cmd.messages_root {
        Some(path) => join_clean(&cwd, path),
        None => join_clean(&base_dir, Path::new(&config.messages_root)),
    };
    let output_root = match &cmd.output {
        Some(path) => Some(join_clean(&cwd, path)),
        None => config
            .output_path
            .as_deref()
            .map(|path| join_clean(&base_dir, Path::new(path))),
    };
    let dev_output_root = config
        .dev_path
        .as_deref()
        .map(|path| join_clean(&base_dir, Path::new(path)));

    let filter = NameFilter::new(&config.test, &config.include, &config.exclude)?;
    let extractor = Extractor::with_filter(
        DirectorySource::new(&messages_root),
        config.extract_options(development),
        filter,
    )?;

    let loaded = load_assets(&dist_root, &[OUTPUT_SUFFIX]).with_context(|| {
        format!("Failed to read build output directory {}", dist_root.display())
    })?;
    let mut summary = ExtractSummary {
        assets_loaded: loaded.assets.len(),
        assets_skipped: loaded.skipped_count,
        ..Default::default()
    };

    let output = match extractor.build(&loaded.assets) {
        Ok(output) => output,
        Err(ExtractError::Source(err)) => {
            return Err(err).with_context(|| {
                format!("Failed to load messages from {}", messages_root.display())
            });
        }
        Err(err) => return Err(err.into()),
    };
    summary.assets_scanned = output.scanned_assets;
    summary.key_count = count_keys(&output.store);

    // Strict mode stops before anything is written.
    if config.fail_on_missing && !output.missing.is_empty() {
        summary.missing = output.missing;
        return Ok(finish(summary, cmd.verbose));
    }

    let target = OutputTarget {
        build_output_dir: dist_root,
        output_root,
        dev_output_root,
        development,
        pretty: config.pretty,
    };
    let report = write_tables(&output.store, &target, &FsPersist)?;
    summary.written = report
        .written
        .into_iter()
        .map(|(locale, path)| (locale, display_path(&cwd, path)))
        .collect();
    summary.write_failures = report.failures;

    Ok(finish(summary, cmd.verbose))
}

fn finish(summary: ExtractSummary, verbose: bool) -> CommandResult {
    CommandResult {
        summary: CommandSummary::Extract(summary),
        verbose,
    }
}

fn count_keys(store: &LocaleTableStore) -> usize {
    store
        .iter()
        .flat_map(|(_, table)| table.iter())
        .flat_map(|(file, keys)| keys.keys().map(move |key| (file, key)))
        .collect::<BTreeSet<_>>()
        .len()
}

/// `base.join(path)` without `.` components.
fn join_clean(base: &Path, path: &Path) -> PathBuf {
    base.join(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn display_path(cwd: &Path, path: PathBuf) -> PathBuf {
    if let Ok(relative) = path.strip_prefix(cwd) {
        return relative.to_path_buf();
    }
    path
}
