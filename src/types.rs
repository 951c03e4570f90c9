use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Outcome of one authorization flow: a token, or a human-readable error.
pub type AuthResult = Result<Token, String>;

/// Per-invocation state of one authorization flow.
///
/// Holds the anti-forgery `state` value the flow embedded in the
/// authorization URL and a take-once completion sender. The callback handler
/// takes the sender to deliver the single outcome; a second callback finds
/// the slot empty and is ignored.
#[derive(Debug)]
pub struct AuthAttempt {
    state: String,
    completion: Option<oneshot::Sender<AuthResult>>,
}

impl AuthAttempt {
    pub fn new(state: String, completion: oneshot::Sender<AuthResult>) -> Self {
        AuthAttempt {
            state,
            completion: Some(completion),
        }
    }

    /// Compares the `state` query parameter echoed by the authorization
    /// server against the value this flow sent.
    pub fn matches_state(&self, returned: &str) -> bool {
        self.state == returned
    }

    /// Takes the completion sender, leaving the slot empty. Returns `None`
    /// if an outcome was already delivered.
    pub fn take_completion(&mut self) -> Option<oneshot::Sender<AuthResult>> {
        self.completion.take()
    }
}

/// One data row of the input CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRequest {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// One line of the end-of-run summary for rows that were not appended.
#[derive(Tabled)]
pub struct SkippedTrackRow {
    pub artist: String,
    pub title: String,
    pub reason: String,
}
