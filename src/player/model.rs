use std::path::Path;

use crate::audio::{Backend, PlaybackStatus};
use crate::config::LibrarySettings;
use crate::library::{self, Track};

/// The player holds the known tracks and the playback cursor.
///
/// Implicit state machine: NoTrack -> Loaded -> Playing <-> Paused ->
/// Stopped -> Playing (reopen), where NoTrack is only reachable before the
/// first successful load and Stopped re-enters through a fresh open at
/// time zero.
///
/// Load failures are reported on stderr and leave the player in a degraded
/// but consistent state; callers are not informed programmatically.
pub struct Player<B: Backend> {
    backend: B,
    queue: Vec<Track>,
    current: Option<usize>,
    paused: bool,
}

impl<B: Backend> Player<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            queue: Vec::new(),
            current: None,
            paused: false,
        }
    }

    /// Replace the queue with the single given file and open it as the
    /// active source. On failure the prior queue and cursor are kept.
    pub fn load_track(&mut self, path: &Path) {
        let track = library::track_from_path(path);
        match self.backend.load(&track.path) {
            Ok(()) => {
                self.queue = vec![track];
                self.current = Some(0);
                self.paused = false;
            }
            Err(e) => {
                eprintln!("staccato: failed to open {}: {e}", path.display());
            }
        }
    }

    /// Scan `dir` (one level, configured extensions) and replace the queue
    /// with the result. A non-empty scan moves the cursor to the first
    /// track and opens it; an empty scan leaves the cursor where it was.
    pub fn load_folder(&mut self, dir: &Path, settings: &LibrarySettings) {
        let tracks = library::scan(dir, settings);
        self.queue = tracks;

        if self.queue.is_empty() {
            // The cursor may now point past the queue; every access goes
            // through `get`, so it degrades to "no current track".
            eprintln!("staccato: no matching audio files in {}", dir.display());
            return;
        }

        self.current = Some(0);
        self.paused = false;
        let path = self.queue[0].path.clone();
        if let Err(e) = self.backend.load(&path) {
            eprintln!("staccato: failed to open {}: {e}", path.display());
        }
    }

    /// Start or resume playback.
    ///
    /// Paused sources resume in place; anything else reopens the current
    /// track, so playback after a stop always begins at time zero.
    /// Idempotent while already playing.
    pub fn play(&mut self) {
        if self.paused {
            self.backend.play();
            self.paused = false;
            return;
        }

        if self.backend.status() == PlaybackStatus::Playing {
            return;
        }

        let Some(track) = self.current_track() else {
            eprintln!("staccato: no track loaded");
            return;
        };

        let path = track.path.clone();
        match self.backend.load(&path) {
            Ok(()) => self.backend.play(),
            Err(e) => eprintln!("staccato: failed to open {}: {e}", path.display()),
        }
    }

    /// Pause, only if currently playing.
    pub fn pause(&mut self) {
        if self.backend.status() == PlaybackStatus::Playing {
            self.backend.pause();
            self.paused = true;
        }
    }

    /// Stop, only if currently playing or paused. Clears the paused flag,
    /// so the next `play` reopens from the start.
    pub fn stop(&mut self) {
        if matches!(
            self.backend.status(),
            PlaybackStatus::Playing | PlaybackStatus::Paused
        ) {
            self.backend.stop();
            self.paused = false;
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.queue.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn status(&self) -> PlaybackStatus {
        self.backend.status()
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}
