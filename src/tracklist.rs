//! CSV track list parsing.

use std::path::Path;

use crate::{Res, types::TrackRequest};

/// Reads the track list from a CSV file.
///
/// The first row is treated as a header and skipped. Column 0 is the track
/// title, column 1 the artist name; further columns are ignored. Rows are
/// returned in file order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row cannot be parsed
/// (the reader rejects rows whose field count differs from the header's).
pub fn read_tracklist(path: &Path) -> Res<Vec<TrackRequest>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut tracks = Vec::new();
    for record in reader.records() {
        let record = record?;
        tracks.push(TrackRequest {
            title: record.get(0).unwrap_or_default().to_string(),
            artist: record.get(1).unwrap_or_default().to_string(),
        });
    }

    Ok(tracks)
}
