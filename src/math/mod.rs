//! Vector and matrix kernel.
//!
//! Thin, allocation-free functions over `glam` types. The camera module
//! never calls into these for its view matrix; composition happens in
//! [`crate::scene`].

/// 4×4 constructors: identity, frustum, perspective, ortho, look-at.
pub mod matrix;
/// Vector arithmetic with a zero-safe normalize.
pub mod vector;

pub use matrix::{frustum, identity, look_at, multiply, ortho, perspective, Mat4};
pub use vector::{add, cross, dot, length, normalize, scale, subtract, Vec3};
