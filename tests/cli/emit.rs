use std::{io::Write, process::Stdio};

use anyhow::{Context, Result};
use pretty_assertions::assert_eq;

use crate::{BUTTON_DECLARATION, BUTTON_MODULE, CliTest, EMPTY_DECLARATION, stderr, stdout};

#[test]
fn test_emit_from_file_echoes_source() -> Result<()> {
    let test = CliTest::with_file("build/button.css.js", BUTTON_MODULE)?;

    let output = test
        .command()
        .args([
            "emit",
            "--line-ending",
            "lf",
            "--resource",
            "src/button.css",
            "build/button.css.js",
        ])
        .output()?;

    // The declaration directory must exist; create it and retry.
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to write declaration file"));

    std::fs::create_dir(test.root().join("src"))?;
    let output = test
        .command()
        .args([
            "emit",
            "--line-ending",
            "lf",
            "--resource",
            "src/button.css",
            "build/button.css.js",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), BUTTON_MODULE);
    assert_eq!(test.read_file("src/button.css.d.ts")?, BUTTON_DECLARATION);

    Ok(())
}

#[test]
fn test_emit_from_stdin() -> Result<()> {
    let test = CliTest::new()?;
    let source = "var ___CSS_LOADER_EXPORT___ = [];\nexport default ___CSS_LOADER_EXPORT___;\n";

    let mut child = test
        .command()
        .args(["emit", "--line-ending", "lf", "--resource", "global.css", "-v"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .context("stdin should be piped")?
        .write_all(source.as_bytes())?;
    let output = child.wait_with_output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), source);
    assert_eq!(stderr(&output), "created global.css.d.ts (0 class names)\n");
    assert_eq!(test.read_file("global.css.d.ts")?, EMPTY_DECLARATION);

    Ok(())
}

#[test]
fn test_emit_parse_error() -> Result<()> {
    let test = CliTest::with_file("bad.css.js", "export default {")?;

    let output = test
        .command()
        .args(["emit", "--resource", "bad.css", "bad.css.js"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to parse module"));
    assert_eq!(stdout(&output), "");
    assert!(!test.root().join("bad.css.d.ts").exists());

    Ok(())
}

#[test]
fn test_emit_passes_source_map_through() -> Result<()> {
    let test = CliTest::with_file("button.css.js", BUTTON_MODULE)?;
    let map = r#"{"version":3,"sources":["button.css"],"names":[],"mappings":"AAAA"}"#;
    test.write_file("button.css.js.map", map)?;

    let output = test
        .command()
        .args([
            "emit",
            "--line-ending",
            "lf",
            "--resource",
            "button.css",
            "--map",
            "button.css.js.map",
            "--map-out",
            "out.map",
            "button.css.js",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), BUTTON_MODULE);
    assert_eq!(test.read_file("out.map")?, map);
    assert_eq!(test.read_file("button.css.d.ts")?, BUTTON_DECLARATION);

    Ok(())
}

#[test]
fn test_emit_missing_source_map() -> Result<()> {
    let test = CliTest::with_file("button.css.js", BUTTON_MODULE)?;

    let output = test
        .command()
        .args([
            "emit",
            "--resource",
            "button.css",
            "--map",
            "missing.map",
            "button.css.js",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read source map"));
    assert!(!test.root().join("button.css.d.ts").exists());

    Ok(())
}
