use std::path::PathBuf;

/// A single playable audio file. Immutable once in the queue.
#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    /// What the queue list renders, usually "Artist - Title".
    pub display: String,
}
