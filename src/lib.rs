//! CSV-to-Spotify playlist importer library.
//!
//! This library implements a small batch driver that turns a CSV track list
//! into a Spotify playlist. It covers the interactive OAuth authorization-code
//! flow (including the local callback server), the Spotify Web API calls for
//! playlist creation, track search, and track appends, and the CSV parsing
//! that feeds the batch.
//!
//! # Modules
//!
//! - `api` - HTTP handler for the local OAuth callback server
//! - `cli` - Command-line command implementations
//! - `config` - Configuration management and environment variables
//! - `server` - Local HTTP server for the OAuth callback
//! - `spotify` - Spotify Web API client implementation
//! - `tracklist` - CSV track list parsing
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod server;
pub mod spotify;
pub mod tracklist;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object, keeping Send + Sync bounds
/// for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Created playlist '{}'", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added {} of {} tracks", added, total);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program
/// with status 1.
///
/// Used for unrecoverable errors (configuration and authorization failures);
/// code after this macro will not execute.
///
/// # Example
///
/// ```
/// error!("Failed to read track list: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a single track that could not be
/// resolved or appended.
///
/// # Example
///
/// ```
/// warning!("No match found for '{} - {}'", artist, title);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
