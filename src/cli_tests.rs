//! Tests for cli

use super::*;
use clap::CommandFactory;
use std::io::Write;
use tempfile::NamedTempFile;

const PAGE: &str = r##"<body>
<p>Text<a class="footnote" href="#fn1" data-left="900" data-top="100">1</a></p>
<div id="fn1"><p>Note text <code>x</code></p></div>
</body>"##;

fn page_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PAGE.as_bytes()).unwrap();
    file
}

fn preview_args(file: &NamedTempFile, footnote: &str) -> PreviewArgs {
    PreviewArgs {
        file: file.path().to_path_buf(),
        footnote: footnote.to_string(),
        viewport: (1024.0, 768.0),
        scroll: (0.0, 0.0),
        at: None,
        mobile: false,
    }
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_size() {
    assert_eq!(parse_size("1024x768").unwrap(), (1024.0, 768.0));
    assert_eq!(parse_size(" 800 x 600 ").unwrap(), (800.0, 600.0));
    assert!(parse_size("1024").is_err());
    assert!(parse_size("0x768").is_err());
    assert!(parse_size("axb").is_err());
}

#[test]
fn test_parse_point() {
    assert_eq!(parse_point("10,20.5").unwrap(), (10.0, 20.5));
    assert_eq!(parse_point("-5,0").unwrap(), (-5.0, 0.0));
    assert!(parse_point("10;20").is_err());
    assert!(parse_point("inf,0").is_err());
}

#[test]
fn test_cli_parses_preview() {
    let cli = Cli::try_parse_from([
        "footnote-tip",
        "preview",
        "page.html",
        "--footnote",
        "fn1",
        "--viewport",
        "800x600",
        "--scroll",
        "0,40",
    ])
    .unwrap();

    let Command::Preview(args) = cli.command else {
        panic!("expected preview");
    };
    assert_eq!(args.viewport, (800.0, 600.0));
    assert_eq!(args.scroll, (0.0, 40.0));
    assert_eq!(args.at, None);
    assert!(!args.mobile);
}

#[test]
fn test_preview_output() {
    let file = page_file();
    let output = run(&Command::Preview(preview_args(&file, "fn1")), &Config::default()).unwrap();

    assert!(output.contains("id: footnotediv"));
    assert!(output.contains("position: left=604 top=120"));
    assert!(output.contains("text: Note text x"));
}

#[test]
fn test_preview_with_explicit_offset() {
    let file = page_file();
    let mut args = preview_args(&file, "#fn1");
    args.at = Some((10.0, 30.0));

    let output = run(&Command::Preview(args), &Config::default()).unwrap();
    assert!(output.contains("position: left=10 top=50"));
}

#[test]
fn test_preview_on_mobile() {
    let file = page_file();
    let mut args = preview_args(&file, "fn1");
    args.mobile = true;

    let output = run(&Command::Preview(args), &Config::default()).unwrap();
    assert_eq!(output, "Mobile host: footnote tooltips are not installed\n");
}

#[test]
fn test_preview_unknown_footnote() {
    let file = page_file();
    let result = run(&Command::Preview(preview_args(&file, "fn7")), &Config::default());
    assert!(matches!(result, Err(FootnoteError::LinkNotFound(id)) if id == "fn7"));
}

#[test]
fn test_list_missing_file() {
    let command = Command::List {
        file: PathBuf::from("/definitely/not/here.html"),
    };
    assert!(matches!(run(&command, &Config::default()), Err(FootnoteError::Io(_))));
}
