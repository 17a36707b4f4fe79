//! Utility for creating `rodio` sinks from file paths.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at the start of the source.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

/// Create a paused `Sink` for the file at `path`, positioned at time zero.
///
/// Open and decode failures are returned so the caller can degrade with a
/// diagnostic instead of tearing the program down.
pub(super) fn create_sink(handle: &OutputStream, path: &Path) -> Result<Sink, Box<dyn Error>> {
    let file = File::open(path)?;
    let source = Decoder::new(BufReader::new(file))?;

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
