//! CLI definitions for scenescrape

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::path::PathBuf;

/// Build clap styles for help output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string: package version plus git SHA for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "scenescrape")]
#[command(about = "Extract scene metadata from supported pages or filenames")]
#[command(
    long_about = "Extract scene metadata (title, studio, performers, tags) as JSON.

A JSON request is read from stdin and exactly one JSON line is written to stdout.
Diagnostics go to stderr.

COMMANDS:
    scrapeURL          Input {\"url\": \"...\"}; fetches and parses a supported page
    scrapeFragment     Input {\"title\": \"...\"}; parses a filename, no network

SUPPORTED SITES:
    fxggxt.com, likegay.net, hutgay.com

EXAMPLES:
    echo '{\"url\": \"https://fxggxt.com/some-scene/\"}' | scenescrape scrapeURL
    echo '{\"title\": \"Studio - Scene Actor\"}' | scenescrape scrapeFragment"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Command to run: scrapeURL or scrapeFragment
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Config file (default: ~/.config/scenescrape/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
