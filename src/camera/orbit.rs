use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::ViewPose;
use crate::input::{CameraAction, InputSnapshot};
use crate::math::vector::{add, length, scale, subtract};
use crate::options::OrbitOptions;

/// Elevation stays this far inside the poles to avoid gimbal lock.
pub const ELEVATION_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Which sub-mode the keys drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrbitMode {
    /// Arrow keys change azimuth/elevation around the target.
    #[default]
    Orbit,
    /// Arrow keys translate eye and center together.
    Pan,
}

/// Camera parameterized by a target, a distance and two angles, with a
/// pan sub-mode and an optional turntable auto-rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    radius: f32,
    /// Radians around +Y, measured from +Z toward +X.
    azimuth: f32,
    /// Radians above the XZ plane.
    elevation: f32,
    mode: OrbitMode,
    auto_rotate: bool,
    pan_eye: Vec3,
    pan_center: Vec3,
    settings: OrbitOptions,
}

impl OrbitCamera {
    /// World up; fixed for this camera.
    pub const UP: Vec3 = Vec3::Y;

    /// Orbit `target` so that the camera starts at `eye`.
    #[must_use]
    pub fn from_eye(eye: Vec3, target: Vec3, settings: OrbitOptions) -> Self {
        let offset = subtract(eye, target);
        let radius = length(offset);
        let azimuth = offset.x.atan2(offset.z);
        let elevation = (offset.y / radius).asin();
        Self {
            target,
            radius,
            azimuth,
            elevation: elevation.clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT),
            mode: OrbitMode::Orbit,
            auto_rotate: false,
            pan_eye: eye,
            pan_center: target,
            settings,
        }
    }

    /// Build from the `[camera.orbit]` options section.
    #[must_use]
    pub fn from_options(opts: &OrbitOptions) -> Self {
        Self::from_eye(
            Vec3::from_array(opts.eye),
            Vec3::from_array(opts.target),
            opts.clone(),
        )
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Distance from eye to target.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Azimuth in radians.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Elevation in radians.
    #[must_use]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Current sub-mode.
    #[must_use]
    pub fn mode(&self) -> OrbitMode {
        self.mode
    }

    /// Whether the turntable rotation is running.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Eye position implied by the orbit parameters.
    #[must_use]
    pub fn orbit_eye(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        add(
            self.target,
            scale(Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az), self.radius),
        )
    }

    /// Switch sub-mode.
    ///
    /// Entering pan starts from the current orbit eye looking at the
    /// target; going back to orbit re-centers on the target.
    pub fn set_mode(&mut self, mode: OrbitMode) {
        if mode == self.mode {
            return;
        }
        if mode == OrbitMode::Pan {
            self.pan_eye = self.orbit_eye();
            self.pan_center = self.target;
        }
        log::debug!("orbit camera mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// Start or stop the turntable rotation. Starting forces orbit mode.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
        if enabled {
            self.set_mode(OrbitMode::Orbit);
        }
    }

    /// Change azimuth and elevation (radians); elevation is clamped.
    pub fn rotate(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        self.azimuth += delta_azimuth;
        self.elevation = (self.elevation + delta_elevation)
            .clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
    }

    /// Change the radius, never going below the configured minimum.
    ///
    /// In pan mode the eye and center also slide along z by the same
    /// amount.
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius + delta).max(self.settings.min_radius);
        if self.mode == OrbitMode::Pan {
            self.pan(Vec3::new(0.0, 0.0, delta));
        }
    }

    /// Translate eye and center together (pan mode only has an effect on
    /// the emitted pose).
    pub fn pan(&mut self, delta: Vec3) {
        self.pan_eye = add(self.pan_eye, delta);
        self.pan_center = add(self.pan_center, delta);
    }

    /// Apply one discrete action.
    ///
    /// Anything other than the auto-rotate toggle stops the turntable
    /// first. Free-fly-only actions are otherwise ignored.
    pub fn apply(&mut self, action: CameraAction) {
        if action == CameraAction::ToggleAutoRotate {
            self.set_auto_rotate(!self.auto_rotate);
            return;
        }
        self.auto_rotate = false;

        let angle = self.settings.angle_step;
        let step = self.settings.pan_step;
        match (action, self.mode) {
            (CameraAction::OrbitMode, _) => self.set_mode(OrbitMode::Orbit),
            (CameraAction::PanMode, _) => self.set_mode(OrbitMode::Pan),
            (CameraAction::ZoomIn, _) => self.zoom(-self.settings.zoom_step),
            (CameraAction::ZoomOut, _) => self.zoom(self.settings.zoom_step),
            (CameraAction::YawLeft, OrbitMode::Orbit) => self.rotate(angle, 0.0),
            (CameraAction::YawRight, OrbitMode::Orbit) => {
                self.rotate(-angle, 0.0);
            }
            (CameraAction::PitchUp, OrbitMode::Orbit) => {
                self.rotate(0.0, -angle);
            }
            (CameraAction::PitchDown, OrbitMode::Orbit) => {
                self.rotate(0.0, angle);
            }
            (CameraAction::YawLeft, OrbitMode::Pan) => {
                self.pan(Vec3::new(step, 0.0, 0.0));
            }
            (CameraAction::YawRight, OrbitMode::Pan) => {
                self.pan(Vec3::new(-step, 0.0, 0.0));
            }
            (CameraAction::PitchUp, OrbitMode::Pan) => {
                self.pan(Vec3::new(0.0, -step, 0.0));
            }
            (CameraAction::PitchDown, OrbitMode::Pan) => {
                self.pan(Vec3::new(0.0, step, 0.0));
            }
            _ => {}
        }
    }

    /// Advance one frame: apply the discrete presses in arrival order,
    /// then the turntable step. An unbound key-down only stops the
    /// turntable.
    pub fn update(&mut self, input: &InputSnapshot, delta_time: f32) {
        for &key in input.key_downs() {
            match key {
                Some(action) => self.apply(action),
                None => self.auto_rotate = false,
            }
        }
        if self.auto_rotate {
            self.azimuth += self.settings.auto_rotate_speed * delta_time;
        }
    }

    /// Eye, center and up for this frame.
    #[must_use]
    pub fn pose(&self) -> ViewPose {
        match self.mode {
            OrbitMode::Orbit => ViewPose {
                eye: self.orbit_eye(),
                center: self.target,
                up: Self::UP,
            },
            OrbitMode::Pan => ViewPose {
                eye: self.pan_eye,
                center: self.pan_center,
                up: Self::UP,
            },
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_options(&OrbitOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use super::*;

    const EPS: f32 = 1e-4;

    fn press(actions: &[CameraAction]) -> InputSnapshot {
        InputSnapshot::from_presses(actions.iter().copied())
    }

    #[test]
    fn from_eye_reproduces_eye() {
        let eye = Vec3::new(2.0, 2.0, 3.0);
        let cam = OrbitCamera::from_eye(eye, Vec3::ZERO, OrbitOptions::default());
        assert!((cam.orbit_eye() - eye).length() < EPS);
        assert!((cam.radius() - 17.0_f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn from_eye_with_offset_target() {
        let target = Vec3::new(1.0, -2.0, 0.5);
        let eye = Vec3::new(-3.0, 1.0, 4.0);
        let cam = OrbitCamera::from_eye(eye, target, OrbitOptions::default());
        assert!((cam.orbit_eye() - eye).length() < EPS);
        assert_eq!(cam.pose().center, target);
    }

    #[test]
    fn full_turn_is_periodic() {
        let mut cam = OrbitCamera::default();
        let start = cam.orbit_eye();
        cam.rotate(TAU, 0.0);
        assert!((cam.orbit_eye() - start).length() < EPS);
    }

    #[test]
    fn elevation_is_clamped() {
        let mut cam = OrbitCamera::default();
        for _ in 0..100 {
            cam.apply(CameraAction::PitchDown);
        }
        assert_eq!(cam.elevation(), ELEVATION_LIMIT);
        for _ in 0..200 {
            cam.apply(CameraAction::PitchUp);
        }
        assert_eq!(cam.elevation(), -ELEVATION_LIMIT);
    }

    #[test]
    fn zoom_in_is_floored() {
        let mut cam = OrbitCamera::default();
        for _ in 0..200 {
            cam.apply(CameraAction::ZoomIn);
        }
        assert_eq!(cam.radius(), OrbitOptions::default().min_radius);
        cam.apply(CameraAction::ZoomOut);
        assert!(cam.radius() > OrbitOptions::default().min_radius);
    }

    #[test]
    fn yaw_keys_step_azimuth() {
        let mut cam = OrbitCamera::default();
        let start = cam.azimuth();
        cam.update(&press(&[CameraAction::YawLeft, CameraAction::YawLeft]), 0.0);
        assert!((cam.azimuth() - start - 0.1).abs() < 1e-6);
        cam.update(&press(&[CameraAction::YawRight]), 0.0);
        assert!((cam.azimuth() - start - 0.05).abs() < 1e-6);
    }

    #[test]
    fn auto_rotate_advances_with_time() {
        let mut cam = OrbitCamera::default();
        let start = cam.azimuth();
        cam.update(&press(&[CameraAction::ToggleAutoRotate]), 0.5);
        assert!(cam.auto_rotate());
        assert!((cam.azimuth() - start - 0.3).abs() < 1e-6);

        cam.update(&InputSnapshot::default(), 0.5);
        assert!((cam.azimuth() - start - 0.6).abs() < 1e-6);
    }

    #[test]
    fn any_other_key_stops_auto_rotate() {
        let mut cam = OrbitCamera::default();
        cam.apply(CameraAction::ToggleAutoRotate);
        cam.apply(CameraAction::ZoomOut);
        assert!(!cam.auto_rotate());

        cam.apply(CameraAction::ToggleAutoRotate);
        cam.apply(CameraAction::ToggleAutoRotate);
        assert!(!cam.auto_rotate());
    }

    #[test]
    fn auto_rotate_forces_orbit_mode() {
        let mut cam = OrbitCamera::default();
        cam.apply(CameraAction::PanMode);
        assert_eq!(cam.mode(), OrbitMode::Pan);
        cam.apply(CameraAction::ToggleAutoRotate);
        assert_eq!(cam.mode(), OrbitMode::Orbit);
    }

    #[test]
    fn pan_preserves_view_direction() {
        let mut cam = OrbitCamera::default();
        let before = cam.pose();
        cam.apply(CameraAction::PanMode);
        assert_eq!(cam.pose(), before);

        let dir = before.center - before.eye;
        cam.apply(CameraAction::YawLeft);
        cam.apply(CameraAction::PitchDown);
        cam.apply(CameraAction::ZoomIn);
        let after = cam.pose();
        assert!(((after.center - after.eye) - dir).length() < EPS);
        assert!(
            (after.eye - before.eye - Vec3::new(0.1, 0.1, -0.1)).length() < EPS
        );
    }

    #[test]
    fn returning_to_orbit_recenters() {
        let mut cam = OrbitCamera::default();
        cam.apply(CameraAction::PanMode);
        cam.apply(CameraAction::YawRight);
        assert_ne!(cam.pose().center, cam.target());
        cam.apply(CameraAction::OrbitMode);
        assert_eq!(cam.pose().center, cam.target());
    }

    #[test]
    fn free_fly_actions_are_ignored() {
        let mut cam = OrbitCamera::default();
        let before = cam.pose();
        cam.apply(CameraAction::MoveForward);
        cam.apply(CameraAction::StrafeLeft);
        assert_eq!(cam.pose(), before);
    }
}
