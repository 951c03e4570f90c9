use reqwest::Client;

use crate::{
    config,
    spotify::auth::Session,
    types::{SearchResponse, Track},
};

/// Searches the track catalog with a free-text query and returns the first
/// hit, if any. The remaining candidates are discarded.
pub async fn search_track(session: &Session, query: &str) -> Result<Option<Track>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("q", query), ("type", "track"), ("limit", "5")])
        .bearer_auth(session.bearer())
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchResponse>().await?;

    Ok(res.tracks.items.into_iter().next())
}
