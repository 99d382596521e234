//! Camera for ray generation and scene rendering

use std::time::Instant;

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::Deserialize;

use crate::hittable::Hittable;
use crate::ray::Ray;
use crate::shader::{ray_color, Sky};
use crate::vec3::{Color, Point3, Vec3};

/// Linear f32 RGB image produced by [`Camera::render`].
pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Image and viewport parameters a [`Camera`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Distance from the camera center to the viewport
    pub focal_length: f32,
    /// Viewport height in world units; the width follows the image shape
    pub viewport_height: f32,
    /// Camera position in world space
    pub center: Point3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 4000,
            focal_length: 1.0,
            viewport_height: 2.0,
            center: Point3::ZERO,
        }
    }
}

impl CameraConfig {
    /// Image height derived from width and aspect ratio, never below 1.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f64 / self.aspect_ratio) as u32).max(1)
    }
}

/// Pinhole camera looking down -z.
///
/// Pixel rows grow downward while world y grows upward, so the vertical
/// viewport edge points along -y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,

    /// Camera position in world space
    center: Point3,
    /// World position of the center of pixel (0, 0)
    pixel00_loc: Point3,
    /// Offset from pixel to pixel horizontally (right)
    pixel_delta_u: Vec3,
    /// Offset from pixel to pixel vertically (down)
    pixel_delta_v: Vec3,
}

impl Camera {
    /// Derive the viewport geometry for `config`.
    pub fn new(config: &CameraConfig) -> Self {
        let image_width = config.image_width;
        let image_height = config.image_height();
        let center = config.center;

        let viewport_height = config.viewport_height;
        let viewport_width = viewport_height * (image_width as f32 / image_height as f32);

        // Vectors across the horizontal and down the vertical viewport edges
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        let viewport_upper_left = center
            - Vec3::new(0.0, 0.0, config.focal_length)
            - viewport_u / 2.0
            - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        debug!(
            "Viewport {viewport_width}x{viewport_height}, pixel00 at {pixel00_loc}, deltas {pixel_delta_u} / {pixel_delta_v}"
        );

        Self {
            image_width,
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    /// World position of the center of pixel (i, j).
    pub fn pixel_center(&self, i: u32, j: u32) -> Point3 {
        self.pixel00_loc + (i as f32 * self.pixel_delta_u) + (j as f32 * self.pixel_delta_v)
    }

    /// Primary ray from the camera center through the center of pixel (i, j).
    ///
    /// The direction is left unnormalized.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(self.center, self.pixel_center(i, j) - self.center)
    }

    /// Color of pixel (i, j). Independent of every other pixel.
    pub fn render_pixel(&self, i: u32, j: u32, world: &dyn Hittable, sky: &Sky) -> Color {
        ray_color(&self.get_ray(i, j), world, sky)
    }

    /// Render every pixel in scan order, top row first.
    ///
    /// Returns an HDR image buffer with linear f32 RGB values.
    pub fn render(&self, world: &dyn Hittable, sky: &Sky) -> HdrImage {
        let mut image = HdrImage::new(self.image_width, self.image_height);

        info!(
            "Rendering {}x{} image",
            self.image_width, self.image_height
        );
        let start = Instant::now();
        let pb = ProgressBar::new(self.image_height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} scanlines ETA: {eta}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        for j in 0..self.image_height {
            for i in 0..self.image_width {
                let c = self.render_pixel(i, j, world, sky);
                image.put_pixel(i, j, Rgb([c.x, c.y, c.z]));
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", start.elapsed());

        image
    }
}

/// Color of pixel (i, j) for a camera built from `config`.
///
/// Convenience for one-off queries; rendering a whole image should build the
/// [`Camera`] once and call [`Camera::render`].
pub fn render_pixel(
    i: u32,
    j: u32,
    config: &CameraConfig,
    world: &dyn Hittable,
    sky: &Sky,
) -> Color {
    Camera::new(config).render_pixel(i, j, world, sky)
}
