use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::{
    net::TcpListener,
    sync::{Mutex, oneshot},
};

use crate::{api, types::AuthAttempt, warning};

/// Serves the OAuth callback on an already-bound listener until the shutdown
/// signal fires.
///
/// The router exposes exactly one route, the redirect path `/callback`. The
/// caller binds the listener itself so that bind failures surface before the
/// browser is opened, and holds the shutdown sender so the server's lifetime
/// stays scoped to the authorization step.
pub async fn start_callback_server(
    listener: TcpListener,
    attempt: Arc<Mutex<AuthAttempt>>,
    shutdown: oneshot::Receiver<()>,
) {
    let app = Router::new().route("/callback", get(api::callback).layer(Extension(attempt)));

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = shutdown.await;
        })
        .await;

    if let Err(e) = result {
        warning!("Callback server error: {}", e);
    }
}
