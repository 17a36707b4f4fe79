//! Native modal file/folder pickers.
//!
//! Both calls block the event loop until the dialog is dismissed and
//! return `None` when the user cancels.

use std::path::PathBuf;

use crate::config::LibrarySettings;

/// Pick a single track, filtered to the configured audio extensions.
pub fn pick_track(library: &LibrarySettings) -> Option<PathBuf> {
    let extensions: Vec<String> = library
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();
    let refs: Vec<&str> = extensions.iter().map(String::as_str).collect();

    rfd::FileDialog::new()
        .set_title("Open track")
        .add_filter("Audio", &refs)
        .pick_file()
}

/// Pick a folder to load as the queue.
pub fn pick_folder() -> Option<PathBuf> {
    rfd::FileDialog::new().set_title("Open folder").pick_folder()
}
