//! # Output Module
//!
//! Writes rendered images to disk or stdout:
//! - Plain-text PPM (`P3`), one `r g b` line per pixel in scan order
//! - 8-bit PNG using the same byte mapping as PPM
//! - OpenEXR with the linear f32 values untouched
//!
//! Colors are written linearly. Each channel is clamped to [0, 1] and scaled
//! by 255.999 before truncation, so 1.0 maps to 255 and every byte value gets
//! an equally sized slice of the range.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::info;

use crate::camera::HdrImage;
use crate::interval::Interval;

/// Path that selects PPM on stdout.
pub const STDOUT_PATH: &str = "-";

/// Errors raised while encoding or writing an image.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Writing to the destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding failed.
    #[error("Failed to encode PNG: {0}")]
    Image(#[from] image::ImageError),

    /// EXR encoding failed.
    #[error("Failed to encode EXR: {0}")]
    Exr(#[from] exr::error::Error),

    /// The file extension names no supported format.
    #[error("Unsupported output format '{0}'; use .ppm, .png or .exr")]
    UnsupportedFormat(String),
}

/// Map a linear channel value to a byte.
pub fn to_byte(value: f32) -> u8 {
    (255.999 * Interval::UNIT.clamp(value)) as u8
}

fn pixel_bytes(pixel: &Rgb<f32>) -> [u8; 3] {
    [to_byte(pixel[0]), to_byte(pixel[1]), to_byte(pixel[2])]
}

/// Write `image` as plain-text PPM.
///
/// The header declares width, height and a max channel value of 255.
pub fn write_ppm<W: Write>(image: &HdrImage, mut out: W) -> io::Result<()> {
    let (width, height) = image.dimensions();
    writeln!(out, "P3\n{width} {height}\n255")?;
    for pixel in image.pixels() {
        let [r, g, b] = pixel_bytes(pixel);
        writeln!(out, "{r} {g} {b}")?;
    }
    out.flush()
}

/// Save `image` as a PPM file.
pub fn save_image_as_ppm(image: &HdrImage, output_path: &Path) -> Result<(), OutputError> {
    let file = File::create(output_path)?;
    write_ppm(image, BufWriter::new(file))?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save `image` as an 8-bit PNG file.
pub fn save_image_as_png(image: &HdrImage, output_path: &Path) -> Result<(), OutputError> {
    let (width, height) = image.dimensions();
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(width, height, |x, y| Rgb(pixel_bytes(image.get_pixel(x, y))));

    u8_image.save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save `image` as an OpenEXR file with full f32 precision.
pub fn save_image_as_exr(image: &HdrImage, output_path: &Path) -> Result<(), OutputError> {
    let (width, height) = image.dimensions();
    write_rgb_file(output_path, width as usize, height as usize, |x, y| {
        let pixel = image.get_pixel(x as u32, y as u32);
        (pixel[0], pixel[1], pixel[2])
    })?;
    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Save `image` in the format named by the extension of `output_path`.
///
/// [`STDOUT_PATH`] streams PPM to stdout instead.
pub fn save_image(image: &HdrImage, output_path: &str) -> Result<(), OutputError> {
    if output_path == STDOUT_PATH {
        let stdout = io::stdout();
        write_ppm(image, BufWriter::new(stdout.lock()))?;
        return Ok(());
    }

    let path = Path::new(output_path);
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_image_as_ppm(image, path),
        "png" => save_image_as_png(image, path),
        "exr" => save_image_as_exr(image, path),
        _ => Err(OutputError::UnsupportedFormat(extension)),
    }
}
