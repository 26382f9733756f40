use serde::{Deserialize, Serialize};

/// Logical camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.free_fly]
/// move_forward = "KeyW"
/// pitch_up = "ArrowUp"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraAction {
    /// Translate along the view direction.
    MoveForward,
    /// Translate against the view direction.
    MoveBackward,
    /// Translate along `-right`.
    StrafeLeft,
    /// Translate along `right`.
    StrafeRight,
    /// Translate along world up.
    MoveUp,
    /// Translate against world up.
    MoveDown,
    /// Turn left (free-fly) / azimuth step (orbit) / pan +x (pan).
    YawLeft,
    /// Turn right (free-fly) / azimuth step (orbit) / pan -x (pan).
    YawRight,
    /// Look up (free-fly) / elevation step (orbit) / pan -y (pan).
    PitchUp,
    /// Look down (free-fly) / elevation step (orbit) / pan +y (pan).
    PitchDown,
    /// Shrink the orbit radius.
    ZoomIn,
    /// Grow the orbit radius.
    ZoomOut,
    /// Start/stop the orbit turntable.
    ToggleAutoRotate,
    /// Arrow keys orbit.
    OrbitMode,
    /// Arrow keys pan.
    PanMode,
}
