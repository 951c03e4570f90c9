//! # Spotify Integration Module
//!
//! This module is the integration layer between the importer and the Spotify
//! Web API. It implements the interactive OAuth 2.0 authorization-code flow
//! and the small set of API operations the batch driver needs, handling HTTP
//! communication, JSON mapping, and error propagation.
//!
//! ## Core Modules
//!
//! - [`auth`] - The authorization flow: local callback server supervision,
//!   browser launch, anti-forgery state validation, code-for-token exchange,
//!   and the [`auth::Session`] handle the rest of the crate consumes.
//! - [`user`] - Current-user lookup (`GET /me`), needed to own the playlist.
//! - [`playlist`] - Playlist creation and track appends.
//! - [`search`] - Free-text track search; only the first hit is kept.
//!
//! ## Authorization Strategy
//!
//! The flow is the classic authorization-code handshake with a client secret:
//!
//! 1. A per-run random `state` value is generated
//! 2. A loopback HTTP listener is bound before the browser opens
//! 3. The user grants permissions in their browser
//! 4. The redirect delivers the code, the `state` echo is verified
//! 5. The code is exchanged server-to-server for an access token
//! 6. Exactly one outcome (session or error) reaches the caller
//!
//! ## Error Types
//!
//! API operations return `reqwest::Error`; the authorization seam returns
//! `String` so listener, validation, and exchange failures all render as
//! human-readable messages. No retries are performed anywhere; the batch
//! driver decides which failures are fatal.

pub mod auth;
pub mod playlist;
pub mod search;
pub mod user;
