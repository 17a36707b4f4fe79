//! Audio backend boundary.
//!
//! The `Backend` trait is the seam between the player and the output
//! library; `RodioBackend` is the production implementation.

mod backend;
mod sink;
mod types;

pub use backend::{Backend, RodioBackend};
pub use types::PlaybackStatus;
