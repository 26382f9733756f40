//! Projection parameters and the slider-facing projection state.

use glam::Mat4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::math::matrix::{ortho, perspective};

/// Symmetric perspective projection.
///
/// Valid when `0 < znear < zfar` and `fovy` is in `(0, 180)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Perspective", inline)]
#[serde(default)]
pub struct Perspective {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(title = "Aspect Ratio", range(min = 0.25, max = 4.0), extend("step" = 0.05))]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(title = "Near Plane", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far Plane", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub zfar: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            aspect: 1.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

/// Orthographic box of height `2 * half_height`, centered on the view
/// axis. `znear` may be negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orthographic", inline)]
#[serde(default)]
pub struct Orthographic {
    /// Half of the visible height in world units.
    #[schemars(title = "Half Height", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub half_height: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(title = "Aspect Ratio", range(min = 0.25, max = 4.0), extend("step" = 0.05))]
    pub aspect: f32,
    /// Near clipping plane.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for Orthographic {
    fn default() -> Self {
        Self {
            half_height: 3.0,
            aspect: 1.0,
            znear: -10.0,
            zfar: 10.0,
        }
    }
}

/// Either projection form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionParams {
    /// Field-of-view perspective.
    Perspective(Perspective),
    /// Box orthographic.
    Orthographic(Orthographic),
}

impl ProjectionParams {
    /// Build the projection matrix. No validation; bad planes give a
    /// non-finite matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Self::Perspective(p) => perspective(p.fovy, p.aspect, p.znear, p.zfar),
            Self::Orthographic(o) => {
                let half_width = o.half_height * o.aspect;
                ortho(
                    -half_width,
                    half_width,
                    -o.half_height,
                    o.half_height,
                    o.znear,
                    o.zfar,
                )
            }
        }
    }
}

impl From<Perspective> for ProjectionParams {
    fn from(p: Perspective) -> Self {
        Self::Perspective(p)
    }
}

impl From<Orthographic> for ProjectionParams {
    fn from(o: Orthographic) -> Self {
        Self::Orthographic(o)
    }
}

/// Projection owned by a scene and mutated by UI sliders.
///
/// Setters store whatever they are given; range checks belong to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    params: ProjectionParams,
}

impl ProjectionState {
    /// Wrap initial parameters.
    #[must_use]
    pub fn new(params: impl Into<ProjectionParams>) -> Self {
        Self {
            params: params.into(),
        }
    }

    /// Current parameters.
    #[must_use]
    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    /// Replace the parameters wholesale.
    pub fn set_params(&mut self, params: impl Into<ProjectionParams>) {
        self.params = params.into();
    }

    /// Projection matrix for the current parameters.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.params.matrix()
    }

    /// Field of view slider (degrees). Ignored for orthographic.
    pub fn set_fovy(&mut self, fovy: f32) {
        match &mut self.params {
            ProjectionParams::Perspective(p) => p.fovy = fovy,
            ProjectionParams::Orthographic(_) => {
                log::debug!("fovy has no effect on an orthographic projection");
            }
        }
    }

    /// Orthographic half-height slider. Ignored for perspective.
    pub fn set_half_height(&mut self, half_height: f32) {
        match &mut self.params {
            ProjectionParams::Orthographic(o) => o.half_height = half_height,
            ProjectionParams::Perspective(_) => {
                log::debug!("half_height has no effect on a perspective projection");
            }
        }
    }

    /// Aspect ratio slider, or a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        match &mut self.params {
            ProjectionParams::Perspective(p) => p.aspect = aspect,
            ProjectionParams::Orthographic(o) => o.aspect = aspect,
        }
    }

    /// Near plane slider.
    pub fn set_znear(&mut self, znear: f32) {
        match &mut self.params {
            ProjectionParams::Perspective(p) => p.znear = znear,
            ProjectionParams::Orthographic(o) => o.znear = znear,
        }
    }

    /// Far plane slider.
    pub fn set_zfar(&mut self, zfar: f32) {
        match &mut self.params {
            ProjectionParams::Perspective(p) => p.zfar = zfar,
            ProjectionParams::Orthographic(o) => o.zfar = zfar,
        }
    }

    /// Aspect from a viewport size in pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.set_aspect(width as f32 / height as f32);
    }
}
