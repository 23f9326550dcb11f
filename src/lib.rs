//! i18n-extract - per-locale text tables from built bundles
//!
//! Scans already-built output files for accessor call sites such as
//! `__.greeting`, resolves every key against the localization data with
//! fallback to a default locale, and writes one `<locale>.text.json` table
//! per locale, keyed by logical file name and message key.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line driver (`extract`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (pattern, routing, resolution, table building, writing)
//!
//! ## Library use
//!
//! ```
//! use i18n_extract::core::{Asset, ExtractOptions, Extractor, Locales, Messages};
//!
//! let source = || {
//!     Locales::from([
//!         ("en".to_string(), Messages::from([("greeting".to_string(), "Hi".to_string())])),
//!         ("fr".to_string(), Messages::new()),
//!     ])
//! };
//! let extractor = Extractor::new(source, ExtractOptions::default()).unwrap();
//! let store = extractor
//!     .run(&[Asset::new("app.abcd1234.js", "before __.greeting after")])
//!     .unwrap();
//!
//! assert_eq!(store.text("fr", "app", "greeting"), Some(Some("Hi")));
//! ```

pub mod cli;
pub mod config;
pub mod core;
