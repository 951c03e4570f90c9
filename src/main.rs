use std::path::PathBuf;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use playlister::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Path to the CSV file listing tracks to import (column 0 = title,
    /// column 1 = artist; the first row is a header and is skipped)
    #[clap(long, value_name = "FILE")]
    csv: PathBuf,
}

#[tokio::main]
async fn main() {
    // Parse the CLI before touching the filesystem: a missing --csv flag
    // must not trigger any file or network I/O.
    let cli = Cli::parse();

    if let Err(e) = config::load_env() {
        warning!("No .env file loaded: {}", e);
    }

    cli::import(cli.csv).await;
}
