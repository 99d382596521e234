//! Sphere primitive and the ray-sphere intersection test.
//!
//! A point P on the ray O + tD lies on the sphere when |P - C|^2 = r^2.
//! Substituting gives a t^2 - 2h t + c = 0 with
//!
//! * a = D.D
//! * h = D.(C - O)
//! * c = |C - O|^2 - r^2
//!
//! whose roots are t = (h -/+ sqrt(h^2 - ac)) / a.

use log::warn;
use serde::Deserialize;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Point3;

/// Smaller root of the ray-sphere quadratic, or `None` if the ray's line
/// misses the sphere.
///
/// The root is not range checked and may be negative when the sphere is
/// behind the origin or surrounds it; callers keep only `t > 0`. A
/// zero-length direction divides by zero and yields a non-finite result.
pub fn hit_sphere(center: Point3, radius: f32, r: &Ray) -> Option<f32> {
    let oc = center - r.origin;
    let a = r.direction.length_squared();
    let h = r.direction.dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }

    // The whole numerator is divided by a, not just the square root term.
    Some((h - discriminant.sqrt()) / a)
}

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Point3,
    /// Radius of the sphere (always non-negative).
    pub radius: f32,
    /// Material reported for hits on this sphere.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radius values are clamped to 0.0.
    pub fn new(center: Point3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    /// Only the near root counts. A ray starting inside the sphere has a
    /// negative near root and sees through it; a zero radius sphere is never
    /// hit.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        if self.radius <= 0.0 {
            return None;
        }

        let t = hit_sphere(self.center, self.radius, r)?;
        if !ray_t.surrounds(t) {
            return None;
        }

        let outward_normal = (r.at(t) - self.center) / self.radius;
        Some(HitRecord::new(r, t, outward_normal, self.material))
    }
}

/// Sphere as written in a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SphereConfig {
    /// Center point.
    pub center: Point3,
    /// Radius.
    pub radius: f32,
    /// Surface material, [`Material::Normal`] when omitted.
    #[serde(default)]
    pub material: Material,
}

impl From<SphereConfig> for Sphere {
    fn from(config: SphereConfig) -> Self {
        if config.radius <= 0.0 {
            warn!(
                "Sphere at {} has non-positive radius {}; it will never be hit",
                config.center, config.radius
            );
        }
        Sphere::new(config.center, config.radius, config.material)
    }
}
