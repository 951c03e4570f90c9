use reqwest::Client;

use crate::{
    config,
    spotify::auth::Session,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse,
    },
};

/// Creates a private, non-collaborative playlist owned by the given user.
///
/// Name collisions are whatever the provider does; Spotify happily creates
/// playlists with duplicate names.
pub async fn create(
    session: &Session,
    user_id: &str,
    name: String,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user}/playlists",
        uri = &config::spotify_apiurl(),
        user = user_id
    );

    let body = CreatePlaylistRequest {
        name,
        description: String::new(),
        public: false,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(session.bearer())
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Appends a single track to the playlist.
pub async fn add_track(
    session: &Session,
    playlist_id: &str,
    track_uri: String,
) -> Result<AddTrackToPlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let body = AddTrackToPlaylistRequest {
        uris: vec![track_uri],
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(session.bearer())
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTrackToPlaylistResponse>().await
}
