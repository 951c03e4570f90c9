use std::{fs, path::PathBuf};

use playlister::tracklist::read_tracklist;
use playlister::types::TrackRequest;

// Helper that writes a CSV fixture into the temp directory
fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("playlister-test-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("failed to write test fixture");
    path
}

fn track(title: &str, artist: &str) -> TrackRequest {
    TrackRequest {
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

#[test]
fn test_header_row_is_skipped() {
    let path = write_fixture(
        "header.csv",
        "title,artist\nYesterday,The Beatles\nImagine,John Lennon\n",
    );

    let tracks = read_tracklist(&path).unwrap();
    assert_eq!(tracks.len(), 2);
    assert!(!tracks.iter().any(|t| t.title == "title"));

    fs::remove_file(path).ok();
}

#[test]
fn test_rows_preserve_file_order() {
    let path = write_fixture(
        "order.csv",
        "title,artist\nYesterday,The Beatles\nImagine,John Lennon\nHey Jude,The Beatles\n",
    );

    let tracks = read_tracklist(&path).unwrap();
    assert_eq!(
        tracks,
        vec![
            track("Yesterday", "The Beatles"),
            track("Imagine", "John Lennon"),
            track("Hey Jude", "The Beatles"),
        ]
    );

    fs::remove_file(path).ok();
}

#[test]
fn test_quoted_fields_keep_embedded_commas() {
    let path = write_fixture(
        "quoted.csv",
        "title,artist\n\"Goodbye, Yellow Brick Road\",Elton John\n",
    );

    let tracks = read_tracklist(&path).unwrap();
    assert_eq!(
        tracks,
        vec![track("Goodbye, Yellow Brick Road", "Elton John")]
    );

    fs::remove_file(path).ok();
}

#[test]
fn test_extra_columns_are_ignored() {
    let path = write_fixture(
        "extra.csv",
        "title,artist,album\nYesterday,The Beatles,Help!\n",
    );

    let tracks = read_tracklist(&path).unwrap();
    assert_eq!(tracks, vec![track("Yesterday", "The Beatles")]);

    fs::remove_file(path).ok();
}

#[test]
fn test_header_only_file_yields_no_tracks() {
    let path = write_fixture("empty.csv", "title,artist\n");

    let tracks = read_tracklist(&path).unwrap();
    assert!(tracks.is_empty());

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_is_an_error() {
    let mut path = std::env::temp_dir();
    path.push("playlister-test-does-not-exist.csv");

    assert!(read_tracklist(&path).is_err());
}

#[test]
fn test_ragged_row_is_an_error() {
    let path = write_fixture("ragged.csv", "title,artist\nYesterday\n");

    assert!(read_tracklist(&path).is_err());

    fs::remove_file(path).ok();
}
