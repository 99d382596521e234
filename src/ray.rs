//! Ray representation.
//!
//! A ray is r(t) = origin + t * direction, a half-line cast from the camera
//! through one pixel of the viewport.

use crate::vec3::{Point3, Vec3};

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,

    /// Direction of travel.
    ///
    /// Not normalized. Primary rays use `pixel_center - camera_center`, so the
    /// length varies across the image; intersection and shading are both
    /// invariant to that scale.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}
