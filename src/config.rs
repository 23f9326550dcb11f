use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{Condition, ExtractOptions, RoutingRule};

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_accessor_name", alias = "objectName")]
    pub accessor_name: String,
    #[serde(default, alias = "fileName")]
    pub module_name: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_dist_root")]
    pub dist_root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_path: Option<String>,
    #[serde(default)]
    pub routes: Vec<RoutingRule>,
    /// Overrides the mode-derived default (hashed in production).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_filenames: Option<bool>,
    #[serde(default)]
    pub fail_on_missing: bool,
    #[serde(default)]
    pub hide_message: bool,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<Condition>,
}

fn default_accessor_name() -> String {
    "__".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_messages_root() -> String {
    "./locales".to_string()
}

fn default_dist_root() -> String {
    "./dist".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accessor_name: default_accessor_name(),
            module_name: String::new(),
            default_locale: default_locale(),
            messages_root: default_messages_root(),
            dist_root: default_dist_root(),
            output_path: None,
            dev_path: None,
            routes: Vec::new(),
            hashed_filenames: None,
            fail_on_missing: false,
            hide_message: false,
            pretty: false,
            test: Vec::new(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error naming the field of the first invalid glob or regex.
    pub fn validate(&self) -> Result<()> {
        if self.accessor_name.is_empty() {
            anyhow::bail!("'accessorName' must not be empty");
        }

        for route in &self.routes {
            Pattern::new(&route.pattern)
                .with_context(|| format!("Invalid glob pattern in 'routes': \"{}\"", route.pattern))?;
        }

        for (field, conditions) in [
            ("test", &self.test),
            ("include", &self.include),
            ("exclude", &self.exclude),
        ] {
            for condition in conditions {
                if let Condition::Regex { regex } = condition {
                    Regex::new(regex).with_context(|| {
                        format!("Invalid regex in '{}': \"{}\"", field, regex)
                    })?;
                }
            }
        }

        Ok(())
    }

    /// Engine options for a run in the given mode.
    pub fn extract_options(&self, development: bool) -> ExtractOptions {
        ExtractOptions {
            accessor_name: self.accessor_name.clone(),
            module_name: self.module_name.clone(),
            default_locale: self.default_locale.clone(),
            routes: self.routes.clone(),
            hashed_filenames: self.hashed_filenames.unwrap_or(!development),
            fail_on_missing: self.fail_on_missing,
            hide_message: self.hide_message,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config are resolved against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
