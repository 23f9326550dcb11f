use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "locales/en.json",
        r#"{"greeting": "Hi", "farewell": "Bye"}"#,
    )?;
    test.write_file("locales/fr.json", r#"{"greeting": "Salut"}"#)?;
    test.write_file(
        "dist/app.abcd1234.js",
        "render(__.greeting);render(__.farewell);",
    )?;
    test.write_file("dist/vendor.ef567890.js", "function noop() {}")?;
    Ok(test)
}

#[test]
fn test_extract_writes_one_table_per_locale() -> Result<()> {
    let test = project()?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_snapshot!(test.read_file("dist/en.text.json")?, @r#"{"app":{"farewell":"Bye","greeting":"Hi"}}"#);
    assert_snapshot!(test.read_file("dist/fr.text.json")?, @r#"{"app":{"farewell":"Bye","greeting":"Salut"}}"#);

    let out = stdout(&output);
    assert!(out.starts_with("\u{2713} Wrote 2 locale tables (2 keys from 1 asset)\n"));
    assert!(out.contains("dist/en.text.json"));
    assert!(out.contains("dist/fr.text.json"));

    Ok(())
}

#[test]
fn test_extract_development_mode_keeps_hash_segment() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"greeting": "Hi"}"#)?;
    test.write_file("dist/app.abcd1234.js", "(__.greeting)")?;

    let output = test
        .extract_command()
        .args(["--mode", "development"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_snapshot!(test.read_file("dist/en.text.json")?, @r#"{"app.abcd1234":{"greeting":"Hi"}}"#);

    Ok(())
}

#[test]
fn test_extract_mode_from_environment() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"greeting": "Hi"}"#)?;
    test.write_file("dist/app.js", "(__.greeting)")?;
    test.write_file(
        ".i18nrc.json",
        r#"{ "devPath": "./dev-out", "outputPath": "./out" }"#,
    )?;

    let output = test
        .extract_command()
        .env("I18N_EXTRACT_MODE", "development")
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("dev-out/en.text.json").exists());
    assert!(!test.root().join("out/en.text.json").exists());

    Ok(())
}

#[test]
fn test_extract_routes_override_logical_names() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".i18nrc.json",
        r#"{ "routes": [{ "pattern": "app.*.js", "logicalName": "main" }] }"#,
    )?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let en: Value = serde_json::from_str(&test.read_file("dist/en.text.json")?)?;
    assert_eq!(en["main"]["greeting"], "Hi");
    assert!(en.get("app").is_none());

    Ok(())
}

#[test]
fn test_extract_output_override() -> Result<()> {
    let test = project()?;
    test.write_file(".i18nrc.json", r#"{ "outputPath": "./from-config" }"#)?;

    let output = test
        .extract_command()
        .args(["--output", "i18n"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("i18n/en.text.json").exists());
    assert!(!test.root().join("from-config").exists());
    assert!(!test.root().join("dist/en.text.json").exists());

    Ok(())
}

#[test]
fn test_extract_missing_translation_is_null_and_warned() -> Result<()> {
    let test = project()?;
    test.write_file("dist/admin.12345678.js", "(__.unknownKey)")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_snapshot!(test.read_file("dist/fr.text.json")?, @r#"{"admin":{"unknownKey":null},"app":{"farewell":"Bye","greeting":"Salut"}}"#);
    let err = stderr(&output);
    assert!(err.contains("missing translation"));
    assert!(err.contains("unknownKey"));

    Ok(())
}

#[test]
fn test_extract_hide_message_silences_warnings() -> Result<()> {
    let test = project()?;
    test.write_file("dist/admin.12345678.js", "(__.unknownKey)")?;
    test.write_file(".i18nrc.json", r#"{ "hideMessage": true }"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!stderr(&output).contains("unknownKey"));

    Ok(())
}

#[test]
fn test_extract_fail_on_missing() -> Result<()> {
    let test = project()?;
    test.write_file("dist/admin.12345678.js", "(__.unknownKey)")?;

    let output = test.extract_command().arg("--fail-on-missing").output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("2 missing translations - no locale tables written"));
    assert!(err.contains("[en] admin: unknownKey"));
    assert!(err.contains("[fr] admin: unknownKey"));
    assert!(!test.root().join("dist/en.text.json").exists());

    Ok(())
}

#[test]
fn test_extract_write_failure_fails_run() -> Result<()> {
    let test = project()?;
    test.write_file("blocker", "not a directory")?;
    test.write_file(".i18nrc.json", r#"{ "outputPath": "./blocker" }"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Failed to write locale 'en'"));
    assert!(err.contains("Failed to write locale 'fr'"));

    Ok(())
}

#[test]
fn test_extract_missing_build_directory_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"greeting": "Hi"}"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read build output directory"));
    assert!(!test.root().join("dist").exists());

    Ok(())
}

#[test]
fn test_extract_scans_every_asset_by_default() -> Result<()> {
    let test = project()?;
    test.write_file("dist/worker.99999999.mjs", "(__.greeting)")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let fr: Value = serde_json::from_str(&test.read_file("dist/fr.text.json")?)?;
    assert_eq!(fr["worker"]["greeting"], "Salut");

    Ok(())
}

#[test]
fn test_extract_missing_default_locale_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/fr.json", r#"{"greeting": "Salut"}"#)?;
    test.write_file("dist/app.js", "(__.greeting)")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Default locale 'en' is missing"));

    Ok(())
}

#[test]
fn test_extract_invalid_route_is_error() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".i18nrc.json",
        r#"{ "routes": [{ "pattern": "[oops", "logicalName": "x" }] }"#,
    )?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'routes'"));
    assert!(!test.root().join("dist/en.text.json").exists());

    Ok(())
}

#[test]
fn test_extract_malformed_messages_is_error() -> Result<()> {
    let test = project()?;
    test.write_file("locales/de.json", "{ not json")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Failed to load messages"));
    assert!(err.contains("de.json"));

    Ok(())
}

#[test]
fn test_extract_exclude_filter() -> Result<()> {
    let test = project()?;
    test.write_file("dist/legacy.11111111.js", "(__.greeting)")?;
    test.write_file(".i18nrc.json", r#"{ "exclude": ["legacy"] }"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let en: Value = serde_json::from_str(&test.read_file("dist/en.text.json")?)?;
    assert!(en.get("legacy").is_none());
    assert!(en.get("app").is_some());

    Ok(())
}

#[test]
fn test_extract_is_byte_stable_across_runs() -> Result<()> {
    let test = project()?;

    test.extract_command().output()?;
    let first = test.read_file("dist/fr.text.json")?;
    test.extract_command().output()?;
    let second = test.read_file("dist/fr.text.json")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("extract"));

    Ok(())
}
