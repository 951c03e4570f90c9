//! # CLI Module
//!
//! User-facing command implementations. The importer has a single command:
//!
//! - [`import`] - Reads the CSV track list, runs the authorization flow,
//!   creates the playlist, and resolves and appends each track in file order.
//!
//! Commands coordinate the `tracklist`, `spotify`, and `utils` modules and
//! own the user interaction: progress feedback, per-row log lines, and the
//! end-of-run summary. Fatal failures terminate through the `error!` macro;
//! per-row failures are logged and the batch continues.

mod import;

pub use import::import;
