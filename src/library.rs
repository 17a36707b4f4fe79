//! Track model and the one-directory scan that feeds the queue.

mod model;
mod scan;

pub use model::Track;
pub use scan::{scan, track_from_path};
