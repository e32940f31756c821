//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to a runtime.
//! Intended usage:
//! - one `FrameClock` per scene host
//! - call `step(dt)` once per frame with the host's frame delta (a display
//!   callback, a fixed offline step, or a test)

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
