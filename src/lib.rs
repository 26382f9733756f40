// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (clippy default thresholds)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera and projection kernel for small WebGL-style scenes.
//!
//! Builds the view and projection matrices a render loop uploads each
//! frame: a zero-safe vector/matrix library, a free-fly camera and an
//! orbit/pan camera driven by held or pressed keys, perspective and
//! orthographic projections with slider-style setters, and a minimal OBJ
//! reader producing upload-ready buffers.
//!
//! # Key entry points
//!
//! - [`scene::Scene`] - owns camera, projection and input; `render(t)` steps
//!   one frame
//! - [`math`] - `frustum`, `ortho`, `look_at`, `multiply` and vector helpers
//! - [`camera::CameraState`] - free-fly or orbit camera state machine
//! - [`options::Options`] - TOML presets for poses, projection and keys
//! - [`mesh::parse_obj`] - position/face OBJ subset to a normalized mesh
//!
//! # Frame flow
//!
//! Raw key events go into an [`input::InputProcessor`] whenever they
//! arrive. Once per frame the scene takes an [`input::InputSnapshot`],
//! advances the camera by the elapsed time, reads its
//! [`camera::ViewPose`], and rebuilds `projection · view`. The kernel never
//! returns errors: degenerate input gives degenerate matrices, and the next
//! frame recomputes from scratch.

pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod mesh;
pub mod options;
pub mod scene;
pub mod util;

pub use error::CamkitError;
pub use scene::{FrameOutput, Scene, SceneKind};
