use std::error::Error;
use std::path::Path;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::sink::create_sink;
use super::types::PlaybackStatus;

/// The seam between the player and the audio output library.
///
/// One source is active at a time; `load` replaces it. Playback itself runs
/// on the output library's internal thread, so every call here returns
/// immediately.
pub trait Backend {
    /// Open `path` as the active source, replacing any previous one.
    /// The new source starts paused at time zero.
    fn load(&mut self, path: &Path) -> Result<(), Box<dyn Error>>;
    /// Resume or start the active source. No-op without one.
    fn play(&mut self);
    /// Pause the active source. No-op without one.
    fn pause(&mut self);
    /// Drop the active source entirely.
    fn stop(&mut self);
    /// Current status of the active source.
    fn status(&self) -> PlaybackStatus;
}

/// Production backend: one `rodio` output stream, one `Sink` per loaded track.
pub struct RodioBackend {
    stream: OutputStream,
    sink: Option<Sink>,
}

impl RodioBackend {
    /// Open the default output device. Fatal to startup when none exists.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);
        Ok(Self { stream, sink: None })
    }
}

impl Backend for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        let new_sink = create_sink(&self.stream, path)?;
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.sink = Some(new_sink);
        Ok(())
    }

    fn play(&mut self) {
        if let Some(ref s) = self.sink {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(ref s) = self.sink {
            s.pause();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn status(&self) -> PlaybackStatus {
        match self.sink {
            // A sink that ran out of queued audio counts as stopped, which is
            // what makes a finished track restartable from time zero.
            Some(ref s) if !s.empty() => {
                if s.is_paused() {
                    PlaybackStatus::Paused
                } else {
                    PlaybackStatus::Playing
                }
            }
            _ => PlaybackStatus::Stopped,
        }
    }
}
