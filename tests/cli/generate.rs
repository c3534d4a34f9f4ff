use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{BUTTON_DECLARATION, BUTTON_MODULE, CliTest, EMPTY_DECLARATION, stderr, stdout};

#[test]
fn test_generate_creates_declarations() -> Result<()> {
    let test = CliTest::with_file("src/button.module.css.js", BUTTON_MODULE)?;
    test.write_file(
        "src/global.css.js",
        "var ___CSS_LOADER_EXPORT___ = [];\nexport default ___CSS_LOADER_EXPORT___;\n",
    )?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("src/button.module.css.d.ts")?,
        BUTTON_DECLARATION
    );
    assert_eq!(test.read_file("src/global.css.d.ts")?, EMPTY_DECLARATION);
    assert_eq!(
        stdout(&output),
        "\u{2713} Processed 2 modules (2 created, 0 updated, 0 unchanged)\n"
    );

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("button.css.js", BUTTON_MODULE)?;

    test.generate_command().output()?;
    let modified = std::fs::metadata(test.root().join("button.css.d.ts"))?.modified()?;

    let output = test.generate_command().arg("--verbose").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("unchanged button.css.d.ts  2 class names"));
    assert!(stdout(&output).contains("(0 created, 0 updated, 1 unchanged)"));
    assert_eq!(
        std::fs::metadata(test.root().join("button.css.d.ts"))?.modified()?,
        modified
    );

    Ok(())
}

#[test]
fn test_generate_updates_stale_declaration() -> Result<()> {
    let test = CliTest::with_file("button.css.js", BUTTON_MODULE)?;
    test.write_file("button.css.d.ts", "interface Style {}\n")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("(0 created, 1 updated, 0 unchanged)"));
    assert_eq!(test.read_file("button.css.d.ts")?, BUTTON_DECLARATION);

    Ok(())
}

#[test]
fn test_generate_reports_parse_errors() -> Result<()> {
    let test = CliTest::with_file("broken.css.js", "___CSS_LOADER_EXPORT___.locals = {")?;
    test.write_file("button.css.js", BUTTON_MODULE)?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("error: Failed to parse module"));
    assert!(stderr(&output).contains("--> broken.css.js"));
    assert!(!test.root().join("broken.css.d.ts").exists());
    // Other modules are still processed.
    assert_eq!(test.read_file("button.css.d.ts")?, BUTTON_DECLARATION);

    Ok(())
}

#[test]
fn test_generate_rejects_directory_at_declaration_path() -> Result<()> {
    let test = CliTest::with_file("button.css.js", BUTTON_MODULE)?;
    std::fs::create_dir(test.root().join("button.css.d.ts"))?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not a regular file"));

    Ok(())
}

#[test]
fn test_generate_honors_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".cssdtsrc.json",
        r#"{
            "sentinel": "__STYLES__",
            "sourceRoot": "./styles",
            "ignores": ["**/legacy/**"]
        }"#,
    )?;
    test.write_file("styles/card.css.js", r#"__STYLES__.locals = { "card": "c" };"#)?;
    test.write_file("styles/legacy/old.css.js", r#"__STYLES__.locals = { "old": "o" };"#)?;
    test.write_file("other/skipped.css.js", r#"__STYLES__.locals = { "x": "x" };"#)?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.read_file("styles/card.css.d.ts")?.contains("    card: string;"));
    assert!(!test.root().join("styles/legacy/old.css.d.ts").exists());
    assert!(!test.root().join("other/skipped.css.d.ts").exists());

    Ok(())
}

#[test]
fn test_generate_crlf_line_endings() -> Result<()> {
    let test = CliTest::with_file("button.css.js", BUTTON_MODULE)?;

    let output = test
        .command()
        .args(["generate", "--line-ending", "crlf"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("button.css.d.ts")?,
        BUTTON_DECLARATION.replace('\n', "\r\n")
    );

    Ok(())
}

#[test]
fn test_generate_without_modules() -> Result<()> {
    let test = CliTest::with_file("app.js", "console.log('hi');")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} No compiled CSS modules found\n");

    Ok(())
}

#[test]
fn test_generate_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".cssdtsrc.json", r#"{ "sentinel": "not-valid" }"#)?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Invalid 'sentinel'"));

    Ok(())
}

#[test]
fn test_generate_sentinel_flag_overrides_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".cssdtsrc.json", r#"{ "sentinel": "not-valid" }"#)?;
    test.write_file("card.css.js", r#"__STYLES__.locals = { "card": "c" };"#)?;

    let output = test
        .generate_command()
        .args(["--sentinel", "__STYLES__"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.read_file("card.css.d.ts")?.contains("    card: string;"));

    Ok(())
}
