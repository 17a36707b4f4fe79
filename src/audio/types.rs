/// Playback status as reported by the audio backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No active source (never loaded, stopped, or finished).
    Stopped,
    /// The active source is producing audio.
    Playing,
    /// The active source exists but is paused.
    Paused,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self::Stopped
    }
}
