//! Per-frame composition of camera, projection and input.
//!
//! A [`Scene`] owns one camera, one projection and the input processor
//! feeding them. The host calls [`Scene::render`] once per display refresh
//! with its timestamp; the scene samples input, steps the camera, and
//! returns freshly computed matrices. Nothing is cached between frames.

use std::fmt;
use std::str::FromStr;

use glam::Mat4;

use crate::camera::{
    CameraState, FreeFlyCamera, OrbitCamera, ProjectionParams, ProjectionState,
    ViewPose,
};
use crate::error::CamkitError;
use crate::input::{InputEvent, InputProcessor};
use crate::math::matrix::{look_at, multiply};
use crate::options::Options;

/// View matrix for a pose.
#[must_use]
pub fn compute_view_matrix(pose: &ViewPose) -> Mat4 {
    look_at(pose.eye, pose.center, pose.up)
}

/// Projection matrix for a set of parameters.
#[must_use]
pub fn compute_projection_matrix(params: &ProjectionParams) -> Mat4 {
    params.matrix()
}

/// Combined transform that applies `view` first, then `projection`.
#[must_use]
pub fn combine(projection: Mat4, view: Mat4) -> Mat4 {
    multiply(projection, view)
}

/// Which camera style a scene uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Free-fly camera with a perspective projection.
    FreeFly,
    /// Orbit/pan camera with an orthographic projection.
    Orbit,
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeFly => f.write_str("free-fly"),
            Self::Orbit => f.write_str("orbit"),
        }
    }
}

impl FromStr for SceneKind {
    type Err = CamkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free-fly" | "free_fly" | "freefly" => Ok(Self::FreeFly),
            "orbit" => Ok(Self::Orbit),
            other => Err(CamkitError::Args(format!(
                "unknown scene kind '{other}' (expected free-fly or orbit)"
            ))),
        }
    }
}

/// Result of one frame step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Pose the view matrix was built from.
    pub pose: ViewPose,
    /// World → camera.
    pub view: Mat4,
    /// Camera → clip.
    pub projection: Mat4,
    /// `projection · view`.
    pub view_proj: Mat4,
    /// Seconds since the previous frame (zero on the first).
    pub delta_time: f32,
}

impl FrameOutput {
    /// Combined transform as 16 column-major floats, ready for a
    /// `uniformMatrix4fv`-style upload.
    #[must_use]
    pub fn view_proj_cols(&self) -> [f32; 16] {
        self.view_proj.to_cols_array()
    }
}

/// Camera, projection and input for one canvas.
#[derive(Debug, Clone)]
pub struct Scene {
    kind: SceneKind,
    camera: CameraState,
    projection: ProjectionState,
    input: InputProcessor,
    last_timestamp: Option<f64>,
}

impl Scene {
    /// Build a scene of `kind` from options.
    #[must_use]
    pub fn new(kind: SceneKind, options: &Options) -> Self {
        let (camera, projection, key_map) = match kind {
            SceneKind::FreeFly => (
                CameraState::from(FreeFlyCamera::from_options(
                    &options.camera.free_fly,
                )),
                ProjectionState::new(options.projection.perspective),
                options.keybindings.free_fly.clone(),
            ),
            SceneKind::Orbit => (
                CameraState::from(OrbitCamera::from_options(
                    &options.camera.orbit,
                )),
                ProjectionState::new(options.projection.orthographic),
                options.keybindings.orbit.clone(),
            ),
        };
        log::debug!("created {kind} scene");
        Self {
            kind,
            camera,
            projection,
            input: InputProcessor::new(key_map),
            last_timestamp: None,
        }
    }

    /// Camera style of this scene.
    #[must_use]
    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Current camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Mutable camera state, for programmatic moves.
    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    /// Current projection.
    #[must_use]
    pub fn projection(&self) -> &ProjectionState {
        &self.projection
    }

    /// Mutable projection, for UI sliders and resizes.
    pub fn projection_mut(&mut self) -> &mut ProjectionState {
        &mut self.projection
    }

    /// Input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Mutable input processor, e.g. to rebind keys.
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }

    /// Forward a key change. Returns `true` if the key is bound.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        self.input.handle_key(key, pressed)
    }

    /// Forward a platform-agnostic event. Returns `true` if consumed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        self.input.handle_event(event)
    }

    /// Step one frame at `timestamp` seconds.
    ///
    /// Input is sampled once, the camera advances by the elapsed time, and
    /// view/projection are rebuilt from scratch. A timestamp earlier than
    /// the previous one counts as zero elapsed time.
    pub fn render(&mut self, timestamp: f64) -> FrameOutput {
        let delta_time = self
            .last_timestamp
            .map_or(0.0, |last| (timestamp - last).max(0.0)) as f32;
        self.last_timestamp = Some(timestamp);

        let snapshot = self.input.snapshot();
        self.camera.update(&snapshot, delta_time);

        let pose = self.camera.pose();
        let view = compute_view_matrix(&pose);
        let projection = compute_projection_matrix(self.projection.params());
        FrameOutput {
            pose,
            view,
            projection,
            view_proj: combine(projection, view),
            delta_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec3, Vec4};

    use super::*;
    use crate::camera::OrbitMode;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut scene = Scene::new(SceneKind::FreeFly, &Options::default());
        assert_eq!(scene.render(12.5).delta_time, 0.0);
        let second = scene.render(12.75);
        assert!((second.delta_time - 0.25).abs() < 1e-6);
        assert_eq!(scene.render(12.0).delta_time, 0.0);
    }

    #[test]
    fn held_key_moves_in_proportion_to_time() {
        let mut scene = Scene::new(SceneKind::FreeFly, &Options::default());
        let start = scene.render(0.0).pose.eye;
        assert!(scene.handle_key("KeyW", true));
        let after = scene.render(1.0).pose.eye;
        // 3 units/s for one second.
        assert!(((after - start).length() - 3.0).abs() < 1e-4);

        assert!(scene.handle_key("KeyW", false));
        let still = scene.render(2.0).pose.eye;
        assert_eq!(still, after);
    }

    #[test]
    fn view_proj_is_projection_times_view() {
        let mut scene = Scene::new(SceneKind::FreeFly, &Options::default());
        let frame = scene.render(0.0);
        assert_eq!(frame.view_proj, frame.projection * frame.view);
        assert_eq!(frame.view_proj_cols(), frame.view_proj.to_cols_array());
    }

    #[test]
    fn free_fly_target_lands_in_front_of_camera() {
        let mut scene = Scene::new(SceneKind::FreeFly, &Options::default());
        let frame = scene.render(0.0);
        let ahead = frame.pose.eye + (frame.pose.center - frame.pose.eye) * 5.0;
        let clip = frame.view_proj * ahead.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn orbit_scene_uses_orthographic_projection() {
        let mut scene = Scene::new(SceneKind::Orbit, &Options::default());
        let frame = scene.render(0.0);
        // No perspective divide term.
        assert_eq!(frame.projection.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
        // Target sits at the center of the screen.
        let target = frame.view_proj.transform_point3(Vec3::ZERO);
        assert!(target.x.abs() < 1e-5 && target.y.abs() < 1e-5);
    }

    #[test]
    fn orbit_scene_keys_switch_modes() {
        let mut scene = Scene::new(SceneKind::Orbit, &Options::default());
        let _ = scene.handle_key("KeyP", true);
        let _ = scene.render(0.0);
        let CameraState::Orbit(cam) = scene.camera() else {
            unreachable!("orbit scene holds an orbit camera");
        };
        assert_eq!(cam.mode(), OrbitMode::Pan);
    }

    #[test]
    fn unbound_key_stops_turntable() {
        let mut scene = Scene::new(SceneKind::Orbit, &Options::default());
        assert!(scene.handle_key("KeyA", true));
        let _ = scene.render(0.0);
        let CameraState::Orbit(cam) = scene.camera() else {
            unreachable!("orbit scene holds an orbit camera");
        };
        assert!(cam.auto_rotate());

        assert!(!scene.handle_key("ShiftLeft", true));
        let _ = scene.render(0.016);
        let CameraState::Orbit(cam) = scene.camera() else {
            unreachable!("orbit scene holds an orbit camera");
        };
        assert!(!cam.auto_rotate());
    }

    #[test]
    fn slider_changes_show_up_next_frame() {
        let mut scene = Scene::new(SceneKind::FreeFly, &Options::default());
        let before = scene.render(0.0).projection;
        scene.projection_mut().set_fovy(30.0);
        let after = scene.render(0.016).projection;
        assert!(after.col(1).y > before.col(1).y);
    }

    #[test]
    fn scene_kind_parses() {
        assert_eq!("orbit".parse::<SceneKind>().unwrap(), SceneKind::Orbit);
        assert_eq!(
            "free-fly".parse::<SceneKind>().unwrap(),
            SceneKind::FreeFly
        );
        assert!("pan".parse::<SceneKind>().is_err());
        assert_eq!(SceneKind::FreeFly.to_string(), "free-fly");
    }
}
