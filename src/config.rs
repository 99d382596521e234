//! Scene configuration loaded from TOML.
//!
//! Every section is optional; whatever a file leaves out falls back to the
//! default scene: a 4000px wide 16:9 image of one normal-shaded sphere at
//! (0, 0, -1) with radius 0.5 under a white-to-blue sky.

use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::camera::CameraConfig;
use crate::hittable::HittableList;
use crate::material::Material;
use crate::shader::Sky;
use crate::sphere::{Sphere, SphereConfig};
use crate::vec3::Point3;

/// Errors raised while loading a scene file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The path does not exist.
    #[error("Config file not found: {0}")]
    NotFound(String),

    /// The file exists but could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid scene description.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Complete description of what to render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Image and viewport parameters.
    pub camera: CameraConfig,
    /// Background gradient.
    pub sky: Sky,
    /// Primitives in the world.
    pub spheres: Vec<SphereConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            sky: Sky::default(),
            spheres: vec![SphereConfig {
                center: Point3::new(0.0, 0.0, -1.0),
                radius: 0.5,
                material: Material::Normal,
            }],
        }
    }
}

impl SceneConfig {
    /// Load a scene from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(
            "Loaded scene from {} ({} spheres)",
            path.display(),
            config.spheres.len()
        );

        Ok(config)
    }

    /// Parse a scene from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the world the configured spheres describe.
    pub fn build_world(&self) -> HittableList {
        let mut world = HittableList::new();
        for &sphere in &self.spheres {
            world.add(Box::new(Sphere::from(sphere)));
        }
        world
    }
}
