use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .i18nrc.json\n");

    let content = test.read_file(".i18nrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["accessorName"], "__");
    assert_eq!(parsed["defaultLocale"], "en");
    assert!(parsed.get("routes").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".i18nrc.json already exists"));
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("locales/en.json", r#"{"greeting": "Hi"}"#)?;
    test.write_file("dist/app.abcd1234.js", "x(__.greeting);")?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("dist/en.text.json").exists());

    Ok(())
}
