//! Per-ray shading: surface color on a hit, sky gradient otherwise.

use serde::Deserialize;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{unit_vector, Color};

/// Vertical background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sky {
    /// Color for rays pointing straight down.
    pub horizon: Color,
    /// Color for rays pointing straight up.
    pub zenith: Color,
}

impl Default for Sky {
    fn default() -> Self {
        Self {
            horizon: Color::new(1.0, 1.0, 1.0),
            zenith: Color::new(0.5, 0.7, 1.0),
        }
    }
}

impl Sky {
    /// Background color seen along `r`.
    pub fn color(&self, r: &Ray) -> Color {
        let unit_direction = unit_vector(r.direction);
        // y = -1 gives a = 0, y = 1 gives a = 1
        let a = 0.5 * (unit_direction.y + 1.0);
        (1.0 - a) * self.horizon + a * self.zenith
    }
}

/// Color of a single ray cast into `world`.
///
/// Only hits with t > 0 count. Pure: the same ray, world and sky always give
/// the same color.
pub fn ray_color(r: &Ray, world: &dyn Hittable, sky: &Sky) -> Color {
    match world.hit(r, Interval::FORWARD) {
        Some(rec) => rec.material.shade(&rec),
        None => sky.color(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HittableList;
    use crate::material::Material;
    use crate::sphere::Sphere;
    use crate::vec3::{Point3, Vec3};

    fn approx_eq(a: Color, b: Color) -> bool {
        (a - b).abs().max_element() < 1e-6
    }

    fn world() -> HittableList {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Point3::new(0.0, 0.0, -1.0),
            0.5,
            Material::Normal,
        )));
        world
    }

    #[test]
    fn hit_on_near_pole_shows_normal() {
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = ray_color(&r, &world(), &Sky::default());
        assert!(approx_eq(color, Color::new(0.5, 0.5, 1.0)), "{color}");
    }

    #[test]
    fn hit_is_independent_of_direction_length() {
        let sky = Sky::default();
        let short = Ray::new(Point3::ZERO, Vec3::new(0.1, 0.05, -1.0));
        let long = Ray::new(Point3::ZERO, 7.5 * short.direction);
        let a = ray_color(&short, &world(), &sky);
        let b = ray_color(&long, &world(), &sky);
        assert!((a - b).length() < 1e-5);
    }

    #[test]
    fn straight_up_is_zenith() {
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let color = ray_color(&r, &world(), &Sky::default());
        assert!(approx_eq(color, Color::new(0.5, 0.7, 1.0)), "{color}");
    }

    #[test]
    fn straight_down_is_horizon() {
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let color = ray_color(&r, &world(), &Sky::default());
        assert!(approx_eq(color, Color::ONE), "{color}");
    }

    #[test]
    fn sideways_is_halfway_blend() {
        let r = Ray::new(Point3::ZERO, Vec3::new(4.0, 0.0, 0.0));
        let color = ray_color(&r, &world(), &Sky::default());
        assert!(approx_eq(color, Color::new(0.75, 0.85, 1.0)), "{color}");
    }

    #[test]
    fn sphere_behind_camera_shows_sky() {
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let color = ray_color(&r, &world(), &Sky::default());
        assert!(approx_eq(color, Sky::default().color(&r)));
    }

    #[test]
    fn camera_inside_sphere_shows_sky() {
        let r = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));
        let color = ray_color(&r, &world(), &Sky::default());
        assert!(approx_eq(color, Color::new(0.75, 0.85, 1.0)), "{color}");
    }

    #[test]
    fn zero_radius_sphere_shows_sky() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Point3::new(0.0, 0.0, -1.0),
            0.0,
            Material::Normal,
        )));
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = ray_color(&r, &world, &Sky::default());
        assert!(!color.is_nan());
        assert!(approx_eq(color, Color::new(0.75, 0.85, 1.0)), "{color}");
    }

    #[test]
    fn custom_sky_colors_are_used() {
        let sky = Sky {
            horizon: Color::ZERO,
            zenith: Color::new(1.0, 0.0, 0.0),
        };
        let up = Ray::new(Point3::ZERO, Vec3::Y);
        assert!(approx_eq(sky.color(&up), Color::new(1.0, 0.0, 0.0)));
    }
}
