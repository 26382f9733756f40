//! Camera state for the two scene styles.
//!
//! A scene owns exactly one [`CameraState`]: a free-fly camera moved by
//! held keys, or an orbit camera (with a pan sub-mode) stepped by discrete
//! presses and an optional turntable. Either form reduces to a
//! [`ViewPose`] each frame; turning that into a matrix is the caller's job
//! (see [`crate::scene::compute_view_matrix`]).

/// First-person yaw/pitch camera.
pub mod free_fly;
/// Target/radius/angles camera with pan and auto-rotate.
pub mod orbit;
/// Perspective/orthographic parameters and slider state.
pub mod projection;

use glam::Vec3;

pub use free_fly::FreeFlyCamera;
pub use orbit::{OrbitCamera, OrbitMode};
pub use projection::{Orthographic, Perspective, ProjectionParams, ProjectionState};

use crate::input::InputSnapshot;

/// Everything `look_at` needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPose {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point the eye looks at.
    pub center: Vec3,
    /// Up direction; must not be parallel to `center - eye`.
    pub up: Vec3,
}

/// The camera a scene is driving.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraState {
    /// Held-key first-person camera.
    FreeFly(FreeFlyCamera),
    /// Orbit/pan camera.
    Orbit(OrbitCamera),
}

impl CameraState {
    /// Advance one frame from the input sampled for it.
    pub fn update(&mut self, input: &InputSnapshot, delta_time: f32) {
        match self {
            Self::FreeFly(cam) => cam.update(input, delta_time),
            Self::Orbit(cam) => cam.update(input, delta_time),
        }
    }

    /// Current eye/center/up. Pure read.
    #[must_use]
    pub fn pose(&self) -> ViewPose {
        match self {
            Self::FreeFly(cam) => cam.pose(),
            Self::Orbit(cam) => cam.pose(),
        }
    }
}

impl From<FreeFlyCamera> for CameraState {
    fn from(cam: FreeFlyCamera) -> Self {
        Self::FreeFly(cam)
    }
}

impl From<OrbitCamera> for CameraState {
    fn from(cam: OrbitCamera) -> Self {
        Self::Orbit(cam)
    }
}
