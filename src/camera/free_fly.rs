use glam::Vec3;

use super::ViewPose;
use crate::input::{CameraAction, InputSnapshot};
use crate::math::vector::{add, cross, normalize, scale, subtract};
use crate::options::FreeFlyOptions;

/// Pitch is kept inside `[-PITCH_LIMIT, PITCH_LIMIT]` degrees so the view
/// never flips over the vertical.
pub const PITCH_LIMIT: f32 = 89.0;

/// First-person camera moved directly by held translation/look actions.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeFlyCamera {
    position: Vec3,
    /// Degrees.
    yaw: f32,
    /// Degrees, clamped to `[-89, 89]`.
    pitch: f32,
    front: Vec3,
    /// Units per second.
    move_speed: f32,
    /// Degrees per second.
    rotation_speed: f32,
}

impl FreeFlyCamera {
    /// World up; fixed for this camera.
    pub const UP: Vec3 = Vec3::Y;

    /// Create a camera at `position` looking along `(yaw, pitch)` degrees.
    #[must_use]
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Self {
            position,
            yaw,
            pitch,
            front: front_from_angles(yaw, pitch),
            move_speed: 3.0,
            rotation_speed: 90.0,
        }
    }

    /// Build from the `[camera.free_fly]` options section.
    #[must_use]
    pub fn from_options(opts: &FreeFlyOptions) -> Self {
        Self::new(Vec3::from_array(opts.position), opts.yaw, opts.pitch)
            .with_speeds(opts.move_speed, opts.rotation_speed)
    }

    /// Override translation (units/s) and look (degrees/s) speeds.
    #[must_use]
    pub fn with_speeds(mut self, move_speed: f32, rotation_speed: f32) -> Self {
        self.move_speed = move_speed;
        self.rotation_speed = rotation_speed;
        self
    }

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit view direction derived from yaw and pitch.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector, `normalize(front × up)`.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        normalize(cross(self.front, Self::UP))
    }

    /// Move the eye by a world-space offset.
    pub fn translate(&mut self, delta: Vec3) {
        self.position = add(self.position, delta);
    }

    /// Adjust yaw and pitch (degrees) and refresh `front`.
    pub fn look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.front = front_from_angles(self.yaw, self.pitch);
    }

    /// Advance one frame from the currently held actions.
    ///
    /// Translation uses the direction from the start of the frame; look
    /// changes are applied afterward.
    pub fn update(&mut self, input: &InputSnapshot, delta_time: f32) {
        let step = self.move_speed * delta_time;
        let front = scale(self.front, step);
        let right = scale(self.right(), step);
        let up = scale(Self::UP, step);

        let mut position = self.position;
        if input.is_held(CameraAction::MoveForward) {
            position = add(position, front);
        }
        if input.is_held(CameraAction::MoveBackward) {
            position = subtract(position, front);
        }
        if input.is_held(CameraAction::StrafeLeft) {
            position = subtract(position, right);
        }
        if input.is_held(CameraAction::StrafeRight) {
            position = add(position, right);
        }
        if input.is_held(CameraAction::MoveUp) {
            position = add(position, up);
        }
        if input.is_held(CameraAction::MoveDown) {
            position = subtract(position, up);
        }
        self.position = position;

        // Each look key is applied and clamped on its own.
        let turn = self.rotation_speed * delta_time;
        for (action, delta_yaw, delta_pitch) in [
            (CameraAction::YawLeft, -turn, 0.0),
            (CameraAction::YawRight, turn, 0.0),
            (CameraAction::PitchUp, 0.0, turn),
            (CameraAction::PitchDown, 0.0, -turn),
        ] {
            if input.is_held(action) {
                self.look(delta_yaw, delta_pitch);
            }
        }
    }

    /// Eye, center (one unit along `front`) and up for this frame.
    #[must_use]
    pub fn pose(&self) -> ViewPose {
        ViewPose {
            eye: self.position,
            center: add(self.position, self.front),
            up: Self::UP,
        }
    }
}

impl Default for FreeFlyCamera {
    fn default() -> Self {
        Self::from_options(&FreeFlyOptions::default())
    }
}

fn front_from_angles(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
    normalize(Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    ))
}
