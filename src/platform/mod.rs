//! Platform abstraction layer
//!
//! Handles the host-facing pieces of the frame loop:
//! - Window creation and event polling (quit signal)
//! - Frame pacing

pub mod clock;
pub mod window;

pub use clock::FrameClock;
pub use window::{Platform, Signal};
