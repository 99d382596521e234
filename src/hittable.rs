//! Ray-object intersection.
//!
//! Defines the [`Hittable`] trait for geometric primitives, the [`HitRecord`]
//! it produces, and [`HittableList`], which keeps the nearest hit across a
//! set of primitives.

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Outward surface normal at the intersection point (unit vector)
    pub normal: Vec3,
    /// Ray parameter of the intersection point
    pub t: f32,
    /// True if the ray hit the outside of the surface
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: Material,
}

impl HitRecord {
    /// Build a record from an outward normal.
    ///
    /// `outward_normal` must already be unit length. It is stored as given;
    /// `front_face` records which side the ray came from.
    pub fn new(r: &Ray, t: f32, outward_normal: Vec3, material: Material) -> Self {
        Self {
            p: r.at(t),
            normal: outward_normal,
            t,
            front_face: r.direction.dot(outward_normal) < 0.0,
            material,
        }
    }
}

/// Trait for objects that can be intersected by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Linear search; the nearest hit wins.
#[derive(Default)]
pub struct HittableList {
    /// Boxed hittable objects
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for object in &self.objects {
            let max = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, max)) {
                closest = Some(rec);
            }
        }

        closest
    }
}
