use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::{Mutex, oneshot};

use crate::{
    config, info, server,
    types::{AuthAttempt, Token},
    utils, warning,
};

/// How long the flow waits for the user to finish the browser handshake
/// before giving up.
const AUTH_TIMEOUT: Duration = Duration::from_secs(120);

/// An authenticated API session, valid for the rest of the process run.
///
/// Wraps the token obtained by [`authorize`]; not persisted across runs.
#[derive(Debug, Clone)]
pub struct Session {
    token: Token,
}

impl Session {
    pub fn new(token: Token) -> Self {
        Session { token }
    }

    /// The bearer token sent with every API request.
    pub fn bearer(&self) -> &str {
        &self.token.access_token
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

/// Runs the interactive OAuth 2.0 authorization-code flow with Spotify.
///
/// The flow, in order:
///
/// 1. Generates a fresh anti-forgery `state` value for this invocation
/// 2. Binds the loopback callback listener (before the browser opens, so the
///    redirect cannot race the bind)
/// 3. Spawns the callback server, scoped to this flow by a shutdown signal
/// 4. Opens the authorization URL in the user's default browser; if that
///    fails the URL is printed for manual navigation
/// 5. Waits for the single outcome delivered by the callback handler
///
/// Exactly one outcome is produced per invocation: the first callback wins
/// the completion slot and later callbacks are ignored. The callback server
/// is shut down once the outcome is taken or the timeout elapses.
///
/// # Errors
///
/// Returns an error if the listener cannot bind (port already held), the
/// `state` echoed by the authorization server does not match, the token
/// exchange fails, or no callback arrives within the timeout.
pub async fn authorize() -> Result<Session, String> {
    let state_token = utils::generate_state_token();

    let (completion_tx, completion_rx) = oneshot::channel();
    let attempt = Arc::new(Mutex::new(AuthAttempt::new(
        state_token.clone(),
        completion_tx,
    )));

    let addr = config::server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("failed to bind callback listener on {}: {}", addr, e))?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server_attempt = Arc::clone(&attempt);
    tokio::spawn(async move {
        server::start_callback_server(listener, server_attempt, shutdown_rx).await;
    });

    let auth_url = format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = &config::spotify_scope(),
        state = state_token
    );

    info!("Waiting for you to approve access in your browser...");
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        );
    }

    let outcome = tokio::time::timeout(AUTH_TIMEOUT, completion_rx).await;

    // First outcome taken; release the port.
    let _ = shutdown_tx.send(());

    match outcome {
        Ok(Ok(Ok(token))) => Ok(Session::new(token)),
        Ok(Ok(Err(e))) => Err(e),
        Ok(Err(_)) => Err("authorization flow ended without delivering a result".to_string()),
        Err(_) => Err(format!(
            "no authorization callback received within {} seconds",
            AUTH_TIMEOUT.as_secs()
        )),
    }
}

/// Exchanges an authorization code for an access token.
///
/// Performs the server-to-server request against the token endpoint using
/// the `authorization_code` grant with the configured client id and secret.
/// The redirect URI must match the one sent in the authorization request.
pub async fn exchange_code(code: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id();
    let client_secret = config::spotify_client_secret();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = res.status();
    let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

    if !status.is_success() {
        let detail = json["error_description"]
            .as_str()
            .unwrap_or("no error description");
        return Err(format!("token endpoint returned {}: {}", status, detail));
    }

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
