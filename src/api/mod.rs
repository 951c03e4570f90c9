//! # API Module
//!
//! HTTP handlers for the short-lived local server that receives the OAuth
//! callback during the authorization flow.
//!
//! The server exposes a single endpoint:
//!
//! - [`callback`] - Handles the redirect from Spotify's authorization server,
//!   validates the anti-forgery `state` parameter, exchanges the authorization
//!   code for an access token, and delivers the outcome to the waiting flow
//!   through a one-shot completion channel.
//!
//! Built on the [Axum](https://docs.rs/axum) web framework; the handler is an
//! async function wired into Axum's routing system by [`crate::server`].

mod callback;

pub use callback::callback;
