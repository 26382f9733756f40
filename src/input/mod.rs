//! Input handling: event types, the logical action vocabulary, and the
//! processor that turns raw key events into per-frame snapshots.

/// Platform-agnostic input events.
pub mod event;
/// Bindable camera actions.
pub mod keyboard;
/// Converts raw events into per-frame snapshots.
pub mod processor;
/// Held/pressed actions for one frame.
pub mod snapshot;

pub use event::InputEvent;
pub use keyboard::CameraAction;
pub use processor::InputProcessor;
pub use snapshot::InputSnapshot;
