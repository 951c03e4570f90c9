use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify, types::AuthAttempt, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_attempt): Extension<Arc<Mutex<AuthAttempt>>>,
) -> Html<&'static str> {
    // A denial arrives as an `error` parameter with no code.
    if let Some(denial) = params.get("error") {
        if let Some(completion) = shared_attempt.lock().await.take_completion() {
            let _ = completion.send(Err(format!("authorization server returned: {}", denial)));
        }
        return Html("<h4>Authorization was not granted.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let completion = {
        let mut attempt = shared_attempt.lock().await;

        let returned_state = params.get("state").map(String::as_str).unwrap_or("");
        if !attempt.matches_state(returned_state) {
            if let Some(completion) = attempt.take_completion() {
                let _ = completion.send(Err(
                    "state returned by the authorization server does not match the one sent"
                        .to_string(),
                ));
            }
            return Html("<h4>State mismatch. Authorization rejected.</h4>");
        }

        attempt.take_completion()
    };

    // An outcome was already delivered; late callbacks are ignored.
    let Some(completion) = completion else {
        return Html("<h4>Authorization already completed.</h4>");
    };

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            let _ = completion.send(Ok(token));
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            let _ = completion.send(Err(format!("failed to exchange authorization code: {}", e)));
            Html("<h4>Login failed.</h4>")
        }
    }
}
