use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const REPORT_FILE: &str = "translation-report.md";

#[test]
fn test_missing_key_fails() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "A", "b": "B", "c": "C"}"#),
        ("fr", r#"{"a": "A", "b": "B"}"#),
    ])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(output.stdout, @r"
    Translation Check Results
    ==================================================
    Reference locale (en): 3 keys

    Locale: fr (fr.json)
      Missing translations: 1
        - c
      Additional translations: 0

    Some translations are missing!
    ");

    Ok(())
}

#[test]
fn test_additional_keys_pass() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "A", "b": "B"}"#),
        ("de", r#"{"a": "A", "b": "B", "z": "Z"}"#),
    ])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("  Missing translations: 0\n"));
    assert!(output.stdout.contains("  Additional translations: 1\n    - z\n"));
    assert!(output.stdout.ends_with("\nAll translations are complete!\n"));

    Ok(())
}

#[test]
fn test_locales_are_sorted() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "A"}"#),
        ("zh", r#"{"a": "A"}"#),
        ("de", r#"{"a": "A"}"#),
        ("ja", r#"{"a": "A"}"#),
    ])?;

    let output = test.run(&[])?;

    let locales: Vec<&str> = output
        .stdout
        .lines()
        .filter(|line| line.starts_with("Locale: "))
        .collect();
    assert_eq!(
        locales,
        vec![
            "Locale: de (de.json)",
            "Locale: ja (ja.json)",
            "Locale: zh (zh.json)"
        ]
    );

    Ok(())
}

#[test]
fn test_markdown_report_matches_console() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "A", "b": "B", "c": "C"}"#),
        ("de", r#"{"a": "A", "b": "B", "c": "C", "x": "X", "y": "Y"}"#),
        ("fr", r#"{"b": "B"}"#),
    ])?;

    let output = test.run(&[])?;
    assert_eq!(output.code, Some(1));

    let markdown = test.read_file(REPORT_FILE)?;
    assert!(markdown.starts_with("# Translation Report\n\nGenerated: "));
    assert!(markdown.contains("Reference locale (en): 3 keys"));

    let rows: Vec<Vec<String>> = markdown
        .lines()
        .filter(|line| line.starts_with("| ") && !line.starts_with("| Locale"))
        .filter(|line| !line.starts_with("| -"))
        .map(|line| {
            line.trim_matches('|')
                .split('|')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            vec!["de", "de.json", "0", "2", "✓"],
            vec!["fr", "fr.json", "2", "0", "✘"],
        ]
    );
    assert!(output.stdout.contains(
        "Locale: de (de.json)\n  Missing translations: 0\n  Additional translations: 2\n"
    ));
    assert!(output.stdout.contains("Locale: fr (fr.json)\n  Missing translations: 2\n"));

    Ok(())
}

#[test]
fn test_markdown_report_is_overwritten() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#), ("fr", r#"{"a": "A"}"#)])?;
    test.write_file(REPORT_FILE, "stale content that should disappear")?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    let markdown = test.read_file(REPORT_FILE)?;
    assert!(!markdown.contains("stale content"));
    assert!(markdown.contains("### fr (fr.json)"));

    Ok(())
}

#[test]
fn test_no_candidates() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A", "b": "B"}"#)])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(!output.stdout.contains("Locale:"));
    assert!(test.read_file(REPORT_FILE)?.contains("No candidate locale files found."));

    Ok(())
}

#[test]
fn test_missing_reference_errors() -> Result<()> {
    let test = CliTest::with_locales(&[("fr", r#"{"a": "A"}"#)])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: File not found:"));
    assert!(output.stderr.contains("en.json"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_missing_locales_dir_errors() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: File not found:"));

    Ok(())
}

#[test]
fn test_invalid_json_errors() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#), ("fr", r#"{"a": "#)])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to parse JSON file"));
    assert!(output.stderr.contains("fr.json"));
    assert!(!test.root().join(REPORT_FILE).exists());

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "A", "b": "B"}"#),
        ("fr", r#"{"a": "A", "x": "X"}"#),
    ])?;

    let output = test.run(&["--format", "json"])?;

    assert_eq!(output.code, Some(1));
    let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(
        value,
        serde_json::json!({
            "referenceLocale": "en",
            "referenceKeyCount": 2,
            "records": [{
                "lang": "fr",
                "file": "fr.json",
                "missing": {"keys": ["b"], "count": 1},
                "additional": {"keys": ["x"], "count": 1}
            }]
        })
    );

    Ok(())
}

#[test]
fn test_verbose_notes_go_to_stderr() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#), ("fr", r#"{"a": "A"}"#)])?;

    let output = test.run(&["--verbose"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("note: Loaded 1 reference keys"));
    assert!(output.stderr.contains("note: Checked fr.json: 0 missing, 0 additional"));
    assert!(output.stderr.contains("note: Wrote markdown report to"));
    assert!(!output.stdout.contains("note:"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("--locales-dir"));
    assert!(output.stdout.contains("--primary-locale"));
    assert!(output.stdout.contains("--report"));

    Ok(())
}
