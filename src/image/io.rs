//! I/O helpers for pixel buffers and JSON reports.
//!
//! - `load_image`: read a PNG/JPEG/BMP into an owned, unpadded buffer that
//!   keeps the file's channel count.
//! - `write_png`: write a buffer (border included) to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::Buffer;
use image::{ColorType, DynamicImage, ImageFormat};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, preserving 1/2/3/4 channels of 8-bit data.
///
/// Other pixel formats (16-bit, float) are converted to 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<Buffer, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let (width, height) = (img.width() as usize, img.height() as usize);
    let (channels, data) = match img {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other => (4, other.into_rgba8().into_raw()),
    };
    Buffer::from_raw(width, height, channels, data)
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Save a buffer to a PNG with the colour type matching its channel count.
pub fn write_png(buffer: &Buffer, path: &Path) -> Result<(), String> {
    let color = match buffer.channels {
        1 => ColorType::L8,
        2 => ColorType::La8,
        3 => ColorType::Rgb8,
        4 => ColorType::Rgba8,
        n => return Err(format!("Cannot encode a {n}-channel buffer as PNG")),
    };
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &buffer.data,
        buffer.w as u32,
        buffer.h as u32,
        color,
        ImageFormat::Png,
    )
    .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
