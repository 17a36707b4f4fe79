//! Player model: the queue, the playback cursor and the translation of
//! intent (play/pause/stop/load) into calls on the audio backend.

mod model;

pub use model::Player;
