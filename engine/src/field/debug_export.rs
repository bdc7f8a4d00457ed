//! Height Field Diagnostics Export
//!
//! Grayscale PNG snapshots of the current buffer, for eyeballing how a
//! sequence of stamps landed. White = full snow, black = bare ground.

use std::path::Path;

use image::{GrayImage, Luma};

use super::height_field::FieldView;

/// Quantize the current buffer into an 8-bit grayscale image.
pub fn to_gray_image(view: &FieldView) -> GrayImage {
    let resolution = view.resolution() as u32;
    GrayImage::from_fn(resolution, resolution, |x, y| {
        let value = view.get(x as usize, y as usize).clamp(0.0, 1.0);
        Luma([(value * 255.0).round() as u8])
    })
}

/// Save the current buffer as a grayscale PNG.
pub fn save_png(view: &FieldView, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
    to_gray_image(view).save(path)
}
