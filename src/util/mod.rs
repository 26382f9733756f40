//! Shared utilities for the frame driver.

/// Frame pacing, timestamps and smoothed FPS.
pub mod frame_timing;
