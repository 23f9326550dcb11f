use std::{fs, io, path::Path};

use tracing::debug;
use walkdir::WalkDir;

use super::Asset;

/// Assets found under a build output directory.
#[derive(Debug, Default)]
pub struct LoadedAssets {
    /// Sorted by name.
    pub assets: Vec<Asset>,
    /// Files that were not valid UTF-8 text, or could not be read.
    pub skipped_count: usize,
}

/// Load every text file under `root` as an asset named by its `/`-separated
/// path relative to `root`. Files whose name ends in one of `skip_suffixes`
/// are ignored.
///
/// Fails when `root` does not exist or is not a directory.
pub fn load_assets(root: &Path, skip_suffixes: &[&str]) -> io::Result<LoadedAssets> {
    if !fs::metadata(root)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            "build output path is not a directory",
        ));
    }
    let mut loaded = LoadedAssets::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "cannot access path");
                loaded.skipped_count += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if skip_suffixes.iter().any(|suffix| name.ends_with(suffix)) {
            continue;
        }

        match fs::read_to_string(path) {
            Ok(content) => loaded.assets.push(Asset { name, content }),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable asset");
                loaded.skipped_count += 1;
            }
        }
    }

    loaded.assets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(loaded)
}
