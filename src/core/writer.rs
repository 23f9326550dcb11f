//! Emission of the per-locale `<locale>.text.json` files.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Component, Path, PathBuf},
};

use rayon::prelude::*;
use tracing::{error, info};

use super::{
    error::{ExtractError, WriteFailure, WriteFailures},
    table::{LocaleTable, LocaleTableStore},
};

/// Suffix of every emitted locale file.
pub const OUTPUT_SUFFIX: &str = ".text.json";

/// Durably stores bytes at a path.
pub trait Persist: Sync {
    /// Write `bytes` to `path`, creating missing parent directories.
    fn persist(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Writes to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPersist;

impl Persist for FsPersist {
    fn persist(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)
    }
}

/// Where locale files go.
#[derive(Debug, Clone, Default)]
pub struct OutputTarget {
    /// The build's own output directory, used when nothing else is configured.
    pub build_output_dir: PathBuf,
    pub output_root: Option<PathBuf>,
    /// Used instead of `output_root` in development mode.
    pub dev_output_root: Option<PathBuf>,
    pub development: bool,
    /// Pretty-print instead of emitting compact JSON.
    pub pretty: bool,
}

impl OutputTarget {
    pub fn new(build_output_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_output_dir: build_output_dir.into(),
            ..Default::default()
        }
    }

    /// Directory receiving the locale files.
    pub fn resolved_root(&self) -> &Path {
        match (&self.dev_output_root, &self.output_root) {
            (Some(dev), _) if self.development => dev,
            (_, Some(root)) => root,
            _ => &self.build_output_dir,
        }
    }

    /// Path of `locale`'s file, with any `?query` suffix removed.
    pub fn locale_path(&self, locale: &str) -> PathBuf {
        let path = self
            .resolved_root()
            .join(format!("{}{}", locale, OUTPUT_SUFFIX));
        strip_query(&path)
    }
}

/// Drop a `?query` suffix from every component of `path`.
///
/// `dist?v=3/en.text.json` becomes `dist/en.text.json`. A component that is
/// nothing but a query is dropped.
pub fn strip_query(path: &Path) -> PathBuf {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => {
                let raw = part.to_string_lossy();
                match raw.split_once('?') {
                    Some(("", _)) => None,
                    Some((before, _)) => Some(PathBuf::from(before)),
                    None => Some(PathBuf::from(part)),
                }
            }
            other => Some(PathBuf::from(other.as_os_str())),
        })
        .collect()
}

/// Outcome of emitting every locale. Every locale is attempted even when
/// others fail.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<(String, PathBuf)>,
    pub failures: Vec<WriteFailure>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_result(self) -> Result<Vec<(String, PathBuf)>, WriteFailures> {
        if self.failures.is_empty() {
            Ok(self.written)
        } else {
            Err(WriteFailures(self.failures))
        }
    }
}

pub fn serialize_table(table: &LocaleTable, pretty: bool) -> Result<Vec<u8>, serde_json::Error> {
    if pretty {
        let mut bytes = serde_json::to_vec_pretty(table)?;
        bytes.push(b'\n');
        Ok(bytes)
    } else {
        serde_json::to_vec(table)
    }
}

/// Write one file per locale under `target`. Locales are written in parallel.
pub fn write_tables<P: Persist>(
    store: &LocaleTableStore,
    target: &OutputTarget,
    persist: &P,
) -> Result<WriteReport, ExtractError> {
    // Serialize up front so an unserializable table aborts before any write.
    let encoded = store
        .iter()
        .map(|(locale, table)| {
            let bytes = serialize_table(table, target.pretty)?;
            Ok((locale.to_string(), target.locale_path(locale), bytes))
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    // Locales sharing a target path would overwrite each other.
    let mut path_counts: BTreeMap<PathBuf, usize> = BTreeMap::new();
    for (_, path, _) in &encoded {
        *path_counts.entry(path.clone()).or_default() += 1;
    }
    let (encoded, collisions): (Vec<_>, Vec<_>) = encoded
        .into_iter()
        .partition(|(_, path, _)| path_counts.get(path) == Some(&1));

    let mut report = WriteReport::default();
    for (locale, path, _) in collisions {
        error!(locale = %locale, path = %path.display(), "locale table path is shared with another locale");
        report.failures.push(WriteFailure {
            locale,
            path,
            source: io::Error::new(
                io::ErrorKind::AlreadyExists,
                "another locale resolves to the same path",
            ),
        });
    }

    let results: Vec<Result<(String, PathBuf), WriteFailure>> = encoded
        .into_par_iter()
        .map(|(locale, path, bytes)| match persist.persist(&path, &bytes) {
            Ok(()) => {
                info!(locale = %locale, path = %path.display(), "wrote locale table");
                Ok((locale, path))
            }
            Err(source) => {
                error!(locale = %locale, path = %path.display(), %source, "failed to write locale table");
                Err(WriteFailure {
                    locale,
                    path,
                    source,
                })
            }
        })
        .collect();

    for result in results {
        match result {
            Ok(written) => report.written.push(written),
            Err(failure) => report.failures.push(failure),
        }
    }
    Ok(report)
}
