use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Orthographic, Perspective};

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Initial projection for each camera style. Free-fly scenes use the
/// perspective block, orbit scenes the orthographic one.
pub struct ProjectionOptions {
    /// Perspective parameters.
    pub perspective: Perspective,
    /// Orthographic parameters.
    pub orthographic: Orthographic,
}
