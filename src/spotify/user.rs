use reqwest::Client;

use crate::{config, spotify::auth::Session, types::CurrentUserResponse};

/// Looks up the currently authenticated user.
///
/// The user id is needed to create a playlist owned by that user.
pub async fn current_user(session: &Session) -> Result<CurrentUserResponse, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(session.bearer())
        .send()
        .await?
        .error_for_status()?;

    response.json::<CurrentUserResponse>().await
}
