use std::path::Path;

use rand::{Rng, distr::Alphanumeric};

use crate::types::TrackRequest;

/// Generates the opaque anti-forgery `state` value for one authorization
/// flow. 32 alphanumeric characters sampled from a cryptographic RNG.
pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Derives the playlist name from the CSV path: the file's base name with
/// the extension stripped.
pub fn playlist_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("playlist")
        .to_string()
}

/// Builds the free-text search query for a track request, artist first.
pub fn build_track_query(track: &TrackRequest) -> String {
    format!("{} {}", track.artist, track.title)
}
