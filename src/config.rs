//! Configuration management for the playlist importer.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the working directory. Spotify
//! API credentials are required; endpoint URLs, the OAuth scope, the redirect
//! URI, and the callback listen address all have production defaults that can
//! be overridden through the environment.

use std::env;

use crate::error;

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8008/callback";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8008";
const DEFAULT_SCOPE: &str = "playlist-modify-private";

/// Loads environment variables from a `.env` file in the working directory.
///
/// # Returns
///
/// Returns `Ok(())` if the file is successfully loaded, or an error string
/// if it is missing or cannot be parsed. Failure here is non-fatal; the
/// caller decides whether to warn.
pub fn load_env() -> Result<(), String> {
    dotenv::dotenv().map(|_| ()).map_err(|e| e.to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Reads the `SPOTIFY_CLIENT_ID` environment variable, obtained when
/// registering the application with Spotify's developer platform. A missing
/// value is a fatal configuration error.
pub fn spotify_client_id() -> String {
    match env::var("SPOTIFY_CLIENT_ID") {
        Ok(id) => id,
        Err(_) => error!("SPOTIFY_CLIENT_ID must be set"),
    }
}

/// Returns the Spotify API client secret for authentication.
///
/// Reads the `SPOTIFY_CLIENT_SECRET` environment variable. A missing value
/// is a fatal configuration error.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    match env::var("SPOTIFY_CLIENT_SECRET") {
        Ok(secret) => secret,
        Err(_) => error!("SPOTIFY_CLIENT_SECRET must be set"),
    }
}

/// Returns the address the local OAuth callback server binds to.
///
/// `SERVER_ADDRESS` overrides the default of `127.0.0.1:8008`. Must agree
/// with the port of the redirect URI registered with Spotify.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify OAuth redirect URI.
///
/// `SPOTIFY_REDIRECT_URI` overrides the default loopback callback. This must
/// match the redirect URI registered in the Spotify application settings.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string())
}

/// Returns the OAuth scope requested during authorization.
///
/// `SPOTIFY_SCOPE` overrides the default `playlist-modify-private`, which is
/// the only permission this tool needs.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string())
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
