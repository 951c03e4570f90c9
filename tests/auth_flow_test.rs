use std::sync::Arc;

use tokio::sync::{Mutex, oneshot};

use playlister::spotify::auth::Session;
use playlister::types::{AuthAttempt, Token};

fn test_token() -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "playlist-modify-private".to_string(),
        expires_in: 3600,
        obtained_at: 0,
    }
}

#[tokio::test]
async fn test_first_completion_wins() {
    let (tx, rx) = oneshot::channel();
    let attempt = Arc::new(Mutex::new(AuthAttempt::new("state123".to_string(), tx)));

    // The first callback takes the completion sender...
    let first = attempt
        .lock()
        .await
        .take_completion()
        .expect("first resolution should get the completion sender");
    first
        .send(Ok(test_token()))
        .expect("receiver should still be waiting");

    // ...and a late second callback finds the slot empty.
    assert!(attempt.lock().await.take_completion().is_none());

    let outcome = rx.await.expect("an outcome should have been delivered");
    let token = outcome.expect("the first outcome was a token");
    assert_eq!(token.access_token, "access");
}

#[tokio::test]
async fn test_error_outcome_is_delivered() {
    let (tx, rx) = oneshot::channel();
    let mut attempt = AuthAttempt::new("state123".to_string(), tx);

    let completion = attempt.take_completion().unwrap();
    completion
        .send(Err("token exchange failed".to_string()))
        .expect("receiver should still be waiting");

    let outcome = rx.await.expect("an outcome should have been delivered");
    assert_eq!(outcome.unwrap_err(), "token exchange failed");
}

#[tokio::test]
async fn test_state_mismatch_is_detected() {
    let (tx, _rx) = oneshot::channel();
    let attempt = AuthAttempt::new("expected-state".to_string(), tx);

    assert!(attempt.matches_state("expected-state"));
    assert!(!attempt.matches_state("forged-state"));
    assert!(!attempt.matches_state(""));
}

#[tokio::test]
async fn test_session_exposes_bearer_token() {
    let session = Session::new(test_token());

    assert_eq!(session.bearer(), "access");
    assert_eq!(session.token().expires_in, 3600);
}
