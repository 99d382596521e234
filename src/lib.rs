//! spherecast ray caster
//!
//! Casts one ray per pixel from a pinhole camera into a list of spheres and
//! shades each hit by its surface normal, or by a vertical sky gradient on a
//! miss. Single bounce, one sample per pixel.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod output;
pub mod ray;
pub mod shader;
pub mod sphere;
pub mod vec3;

pub use camera::{render_pixel, Camera, CameraConfig, HdrImage};
pub use config::{ConfigError, SceneConfig};
pub use output::OutputError;
