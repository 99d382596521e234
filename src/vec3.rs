//! Vector, point and color types.
//!
//! All three are glam's SIMD-aligned `Vec3A`; the aliases only document intent.

use glam::Vec3A;

/// Three-component `f32` vector.
pub type Vec3 = Vec3A;

/// A position in world space.
pub type Point3 = Vec3A;

/// Linear RGB color, nominally in [0, 1] per channel.
///
/// Nothing clamps at construction; the encoders in `output` do that.
pub type Color = Vec3A;

/// Rescale `v` to unit length.
///
/// A zero-length input yields NaN components rather than panicking, the same
/// as any other float division by zero.
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn unit_vector_has_length_one() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.5, 7.0),
            Vec3::new(1e-3, 0.0, -2e-3),
            Vec3::new(400.0, -300.0, 1200.0),
        ] {
            assert!((unit_vector(v).length() - 1.0).abs() < EPS, "{v:?}");
        }
    }

    #[test]
    fn unit_vector_preserves_direction() {
        let v = Vec3::new(0.0, -5.0, 0.0);
        assert_eq!(unit_vector(v), Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn unit_vector_of_zero_is_nan() {
        assert!(unit_vector(Vec3::ZERO).is_nan());
    }

    #[test]
    fn dot_with_self_is_length_squared() {
        let v = Vec3::new(1.5, -2.25, 0.125);
        assert_eq!(v.dot(v), v.length_squared());
        assert!((v.length() - v.length_squared().sqrt()).abs() < EPS);
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(a.dot(b), 32.0);
    }
}
