//! Surface materials.
//!
//! Shading is single-bounce: a material maps a hit straight to a color, it
//! never scatters a secondary ray.

use serde::Deserialize;

use crate::hittable::HitRecord;
use crate::vec3::Color;

/// Material carried by a [`HitRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    /// Visualize the surface normal, remapping each component from [-1, 1]
    /// to [0, 1].
    #[default]
    Normal,

    /// Flat, unlit color.
    Solid {
        /// Surface color.
        albedo: Color,
    },
}

impl Material {
    /// Color seen at a hit point.
    pub fn shade(&self, rec: &HitRecord) -> Color {
        match self {
            Material::Normal => 0.5 * (rec.normal + Color::ONE),
            Material::Solid { albedo } => *albedo,
        }
    }
}
