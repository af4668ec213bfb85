//! Command line interface

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::FootnoteError;
use crate::host::{Capabilities, Point, Viewport};
use crate::page::{Page, Session, render_link_list, render_preview};

#[derive(Debug, Parser)]
#[command(name = "footnote-tip", version, about = "Preview footnote hover tooltips for HTML pages")]
pub struct Cli {
    /// Config file to use instead of ~/.config/footnote-tip/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List footnote links and whether their targets exist
    List {
        /// HTML file to inspect
        file: PathBuf,
    },
    /// Show the tooltip produced by hovering a footnote link
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// HTML file to inspect
    pub file: PathBuf,

    /// Footnote id or link href to hover
    #[arg(long, short)]
    pub footnote: String,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "1024x768", value_parser = parse_size)]
    pub viewport: (f64, f64),

    /// Scroll offset as LEFT,TOP
    #[arg(long, default_value = "0,0", value_parser = parse_point)]
    pub scroll: (f64, f64),

    /// Link offset as LEFT,TOP (overrides the page's own)
    #[arg(long, value_parser = parse_point)]
    pub at: Option<(f64, f64)>,

    /// Pretend to be a mobile browser
    #[arg(long)]
    pub mobile: bool,
}

/// Execute a command and return what should be printed
pub fn run(command: &Command, config: &Config) -> Result<String, FootnoteError> {
    match command {
        Command::List { file } => {
            let page = load_page(file, Viewport::default(), config)?;
            Ok(render_link_list(&page))
        }
        Command::Preview(args) => preview(args, config),
    }
}

fn preview(args: &PreviewArgs, config: &Config) -> Result<String, FootnoteError> {
    let (width, height) = args.viewport;
    let (scroll_left, scroll_top) = args.scroll;
    let viewport = Viewport::new(width, height).scrolled(scroll_left, scroll_top);

    let mut page = load_page(&args.file, viewport, config)?;
    let link = page
        .find_link(&args.footnote)
        .ok_or_else(|| FootnoteError::LinkNotFound(args.footnote.clone()))?;
    if let Some((left, top)) = args.at {
        page.set_link_offset(link, Point::new(left, top));
    }

    let capabilities = Capabilities {
        mobile: args.mobile,
    };
    let mut session = Session::new(page, capabilities, config.tooltip);
    if !session.is_installed() {
        return Ok("Mobile host: footnote tooltips are not installed\n".to_string());
    }

    session.hover_link(link, Instant::now());
    Ok(session
        .page()
        .tooltip()
        .map(render_preview)
        .unwrap_or_default())
}

fn load_page(path: &Path, viewport: Viewport, config: &Config) -> Result<Page, FootnoteError> {
    let html = std::fs::read_to_string(path)?;
    Ok(Page::parse(&html, viewport, config.page))
}

/// Parse `WIDTHxHEIGHT`
pub fn parse_size(value: &str) -> Result<(f64, f64), FootnoteError> {
    parse_two(value, 'x')
        .filter(|&(width, height)| width > 0.0 && height > 0.0)
        .ok_or_else(|| FootnoteError::InvalidGeometry {
            value: value.to_string(),
            expected: "WIDTHxHEIGHT with positive numbers",
        })
}

/// Parse `LEFT,TOP`
pub fn parse_point(value: &str) -> Result<(f64, f64), FootnoteError> {
    parse_two(value, ',').ok_or_else(|| FootnoteError::InvalidGeometry {
        value: value.to_string(),
        expected: "LEFT,TOP",
    })
}

fn parse_two(value: &str, separator: char) -> Option<(f64, f64)> {
    let (first, second) = value.split_once(separator)?;
    let first: f64 = first.trim().parse().ok()?;
    let second: f64 = second.trim().parse().ok()?;
    (first.is_finite() && second.is_finite()).then_some((first, second))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
