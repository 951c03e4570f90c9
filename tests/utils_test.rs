use std::path::Path;

use playlister::types::TrackRequest;
use playlister::utils::*;

#[test]
fn test_generate_state_token() {
    let token = generate_state_token();

    // Should be exactly 32 characters
    assert_eq!(token.len(), 32);

    // Should contain only alphanumeric characters
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let token2 = generate_state_token();
    assert_ne!(token, token2);
}

#[test]
fn test_playlist_name_from_path() {
    // Extension is stripped
    assert_eq!(
        playlist_name_from_path(Path::new("road-trip.csv")),
        "road-trip"
    );

    // Only the base name is used
    assert_eq!(
        playlist_name_from_path(Path::new("/home/user/lists/summer.csv")),
        "summer"
    );

    // Only the last extension is stripped
    assert_eq!(
        playlist_name_from_path(Path::new("best.of.2023.csv")),
        "best.of.2023"
    );

    // No extension is fine
    assert_eq!(playlist_name_from_path(Path::new("mixtape")), "mixtape");
}

#[test]
fn test_build_track_query() {
    let track = TrackRequest {
        title: "Yesterday".to_string(),
        artist: "The Beatles".to_string(),
    };

    // Artist comes first, separated by a single space
    assert_eq!(build_track_query(&track), "The Beatles Yesterday");
}
