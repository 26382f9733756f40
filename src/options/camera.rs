use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial pose and control speeds for both camera styles.
pub struct CameraOptions {
    /// Free-fly camera settings.
    pub free_fly: FreeFlyOptions,
    /// Orbit camera settings.
    pub orbit: OrbitOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Free-fly Camera", inline)]
#[serde(default)]
/// Free-fly camera start pose and speeds.
pub struct FreeFlyOptions {
    /// Initial eye position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial yaw in degrees.
    #[schemars(skip)]
    pub yaw: f32,
    /// Initial pitch in degrees (clamped to ±89).
    #[schemars(skip)]
    pub pitch: f32,
    /// Translation speed in units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Look speed in degrees per second.
    #[schemars(title = "Look Speed", range(min = 10.0, max = 360.0), extend("step" = 5.0))]
    pub rotation_speed: f32,
}

impl Default for FreeFlyOptions {
    fn default() -> Self {
        Self {
            position: [2.0, 2.0, 5.0],
            yaw: -115.0,
            pitch: -20.0,
            move_speed: 3.0,
            rotation_speed: 90.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Camera", inline)]
#[serde(default)]
/// Orbit camera start pose and step sizes.
pub struct OrbitOptions {
    /// Initial eye position; radius and angles are derived from it.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Point to orbit around.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Radius change per zoom press.
    #[schemars(title = "Zoom Step", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_step: f32,
    /// Angle change per orbit press, in radians.
    #[schemars(title = "Orbit Step", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub angle_step: f32,
    /// Translation per pan press.
    #[schemars(title = "Pan Step", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub pan_step: f32,
    /// Turntable speed in radians per second.
    #[schemars(title = "Auto-rotate Speed", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub auto_rotate_speed: f32,
    /// Smallest allowed radius.
    #[schemars(skip)]
    pub min_radius: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            eye: [2.0, 2.0, 3.0],
            target: [0.0, 0.0, 0.0],
            zoom_step: 0.1,
            angle_step: 0.05,
            pan_step: 0.1,
            // 0.01 rad per frame at 60 Hz.
            auto_rotate_speed: 0.6,
            min_radius: 0.1,
        }
    }
}
