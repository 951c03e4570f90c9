use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::time::sleep;

use crate::{
    error, info, spotify, success, tracklist,
    types::{SkippedTrackRow, TrackRequest},
    utils, warning,
};

/// Fixed inter-request delay to stay under the provider's rate limit.
const SEARCH_DELAY: Duration = Duration::from_millis(100);

/// Imports a CSV track list into a new Spotify playlist.
///
/// The playlist is named after the CSV file's base name. Rows are processed
/// strictly in file order; rows that fail to resolve or append are logged,
/// collected for the summary table, and never abort the batch.
pub async fn import(csv_path: PathBuf) {
    let tracks = match tracklist::read_tracklist(&csv_path) {
        Ok(tracks) => tracks,
        Err(e) => error!(
            "Failed to read track list from {}: {}",
            csv_path.display(),
            e
        ),
    };

    if tracks.is_empty() {
        warning!("{} contains no data rows, nothing to import.", csv_path.display());
        return;
    }
    info!("Read {} tracks from {}", tracks.len(), csv_path.display());

    let session = match spotify::auth::authorize().await {
        Ok(session) => session,
        Err(e) => error!("Authorization failed: {}", e),
    };
    success!("Authentication successful!");

    let user = match spotify::user::current_user(&session).await {
        Ok(user) => user,
        Err(e) => error!("Failed to look up current user: {}", e),
    };

    let playlist_name = utils::playlist_name_from_path(&csv_path);
    let playlist =
        match spotify::playlist::create(&session, &user.id, playlist_name.clone()).await {
            Ok(playlist) => playlist,
            Err(e) => error!("Failed to create playlist '{}': {}", playlist_name, e),
        };
    success!("Created playlist '{}'", playlist.name);

    let pb = ProgressBar::new(tracks.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );

    let mut added: usize = 0;
    let mut skipped: Vec<SkippedTrackRow> = Vec::new();

    for track in &tracks {
        pb.set_message(format!("{} - {}", track.artist, track.title));

        let result = spotify::search::search_track(&session, &utils::build_track_query(track)).await;

        // Fixed delay after every search, regardless of outcome.
        sleep(SEARCH_DELAY).await;

        match result {
            Ok(Some(hit)) => {
                match spotify::playlist::add_track(&session, &playlist.id, hit.uri).await {
                    Ok(_) => added += 1,
                    Err(e) => {
                        warning!("Failed to add '{} - {}': {}", track.artist, track.title, e);
                        skipped.push(skipped_row(track, "append failed"));
                    }
                }
            }
            Ok(None) => {
                warning!("No match found for '{} - {}'", track.artist, track.title);
                skipped.push(skipped_row(track, "not found"));
            }
            Err(e) => {
                warning!("Search failed for '{} - {}': {}", track.artist, track.title, e);
                skipped.push(skipped_row(track, "search failed"));
            }
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    if !skipped.is_empty() {
        warning!("{} tracks were skipped:", skipped.len());
        println!("{}", Table::new(&skipped));
    }
    success!(
        "Added {} of {} tracks to '{}'",
        added,
        tracks.len(),
        playlist.name
    );
}

fn skipped_row(track: &TrackRequest, reason: &str) -> SkippedTrackRow {
    SkippedTrackRow {
        artist: track.artist.clone(),
        title: track.title.clone(),
        reason: reason.to_string(),
    }
}
