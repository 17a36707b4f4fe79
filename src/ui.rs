//! Fixed widget layout, button hit-testing and rendering.
//!
//! The layout is a pure function of the frame area so the event loop can
//! hit-test clicks against the same rectangles the renderer draws.

mod layout;
mod render;

pub use layout::{ButtonId, ScreenLayout, hit_test, screen_layout};
pub use render::draw;

#[cfg(test)]
mod tests;
