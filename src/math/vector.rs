//! Pure operations on 3-component vectors.
//!
//! Every function takes its arguments by value and returns a fresh
//! [`Vec3`]; nothing here mutates its inputs.

pub use glam::Vec3;

/// Element-wise sum `a + b`.
#[inline]
#[must_use]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// Element-wise difference `a - b`.
#[inline]
#[must_use]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Multiply every component by `s`.
#[inline]
#[must_use]
pub fn scale(v: Vec3, s: f32) -> Vec3 {
    Vec3::new(v.x * s, v.y * s, v.z * s)
}

/// Euclidean norm.
#[inline]
#[must_use]
pub fn length(v: Vec3) -> f32 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// A zero-length input returns the zero vector rather than dividing by
/// zero. Non-finite input is not special-cased and propagates NaN.
#[inline]
#[must_use]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    if len == 0.0 {
        Vec3::ZERO
    } else {
        Vec3::new(v.x / len, v.y / len, v.z / len)
    }
}

/// Right-handed cross product.
#[inline]
#[must_use]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Dot product.
#[inline]
#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < EPS
    }

    #[test]
    fn add_and_subtract_are_element_wise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(add(a, b), Vec3::new(-3.0, 2.5, 5.0));
        assert_eq!(subtract(a, b), Vec3::new(5.0, 1.5, 1.0));
        assert_eq!(subtract(add(a, b), b), a);
    }

    #[test]
    fn scale_and_length() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(length(v), 5.0);
        assert_eq!(scale(v, -2.0), Vec3::new(-6.0, -8.0, 0.0));
        assert_eq!(length(scale(v, 0.5)), 2.5);
    }

    #[test]
    fn normalize_gives_unit_length() {
        let samples = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(3.0, -4.0, 12.0),
            Vec3::new(1e-3, 2e-3, -5e-3),
            Vec3::new(-250.0, 100.0, 7.5),
        ];
        for v in samples {
            assert!((length(normalize(v)) - 1.0).abs() < EPS, "{v:?}");
        }
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn normalize_propagates_nan() {
        let n = normalize(Vec3::new(f32::NAN, 1.0, 0.0));
        assert!(n.x.is_nan());
    }

    #[test]
    fn cross_is_anticommutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        assert!(approx(cross(a, b), -cross(b, a)));
        assert_eq!(cross(a, a), Vec3::ZERO);
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(cross(Vec3::Y, Vec3::Z), Vec3::X);
        assert_eq!(cross(Vec3::Z, Vec3::X), Vec3::Y);
    }

    #[test]
    fn dot_of_orthogonal_is_zero() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        assert!(dot(cross(a, b), a).abs() < 1e-5);
        assert_eq!(dot(a, a), 14.0);
    }
}
