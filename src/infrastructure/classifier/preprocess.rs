//! Image preprocessing for the ResNet-50 backbone
//!
//! The constants here match the statistics the network was trained with.
//! Changing any of them does not fail loudly; it silently degrades
//! predictions.

use image::imageops::{self, FilterType};
use image::RgbImage;
use tract_onnx::prelude::tract_ndarray::Array4;

use crate::domain::ClassifierError;

/// Shorter side length after the first resize
pub const RESIZE_SHORTER_SIDE: u32 = 256;

/// Side of the square network input
pub const INPUT_SIZE: u32 = 224;

/// Per-channel RGB mean
pub const CHANNEL_MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Per-channel RGB standard deviation
pub const CHANNEL_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Largest accepted ratio between the longer and shorter image side. Bounds
/// the resized long side to `RESIZE_SHORTER_SIDE * MAX_ASPECT_RATIO`.
pub const MAX_ASPECT_RATIO: u32 = 16;

/// Decode, resize, center-crop and normalize into an NCHW `[1, 3, 224, 224]`
/// tensor.
pub fn preprocess(image_bytes: &[u8]) -> Result<Array4<f32>, ClassifierError> {
    let decoded = image::load_from_memory(image_bytes)
        .map_err(|e| ClassifierError::ImageDecode(e.to_string()))?
        .to_rgb8();

    let resized = resize_shorter_side(&decoded, RESIZE_SHORTER_SIDE)?;
    let cropped = center_crop(&resized, INPUT_SIZE);

    Ok(to_normalized_tensor(&cropped))
}

/// Resize preserving aspect ratio so the shorter side equals `target`.
/// The longer side is truncated, as torchvision's `Resize(int)` does.
///
/// Images more elongated than `MAX_ASPECT_RATIO` are rejected before any
/// pixel buffer is allocated.
pub fn resize_shorter_side(image: &RgbImage, target: u32) -> Result<RgbImage, ClassifierError> {
    let (width, height) = image.dimensions();
    let (short, long) = (width.min(height).max(1), width.max(height));

    if long / short > MAX_ASPECT_RATIO
        || (long / short == MAX_ASPECT_RATIO && long % short != 0)
    {
        return Err(ClassifierError::ImageDecode(format!(
            "unsupported image dimensions {}x{}: aspect ratio exceeds {}:1",
            width, height, MAX_ASPECT_RATIO
        )));
    }

    // Bounded by target * MAX_ASPECT_RATIO, so the cast cannot truncate
    let scaled = ((target as u64 * long as u64 / short as u64) as u32).max(1);
    let (new_width, new_height) = if width <= height {
        (target, scaled)
    } else {
        (scaled, target)
    };

    if (new_width, new_height) == (width, height) {
        return Ok(image.clone());
    }

    Ok(imageops::resize(image, new_width, new_height, FilterType::Triangle))
}

/// Crop the central `size`×`size` square. Images smaller than `size` are
/// padded with black so the output is always `size`×`size`.
pub fn center_crop(image: &RgbImage, size: u32) -> RgbImage {
    let (width, height) = image.dimensions();

    if width >= size && height >= size {
        let left = crop_offset(width, size);
        let top = crop_offset(height, size);
        return imageops::crop_imm(image, left, top, size, size).to_image();
    }

    let visible_width = width.min(size);
    let visible_height = height.min(size);
    let visible = imageops::crop_imm(
        image,
        crop_offset(width, visible_width),
        crop_offset(height, visible_height),
        visible_width,
        visible_height,
    )
    .to_image();

    let mut canvas = RgbImage::new(size, size);
    imageops::replace(
        &mut canvas,
        &visible,
        pad_offset(size, visible_width) as i64,
        pad_offset(size, visible_height) as i64,
    );
    canvas
}

/// Leading margin of a centered crop, rounding halves to even like Python's
/// `round`
fn crop_offset(outer: u32, inner: u32) -> u32 {
    ((outer - inner) as f64 / 2.0).round_ties_even() as u32
}

/// Leading padding when centering a smaller image; odd margins put the
/// extra pixel on the trailing side
fn pad_offset(outer: u32, inner: u32) -> u32 {
    (outer - inner) / 2
}

fn to_normalized_tensor(image: &RgbImage) -> Array4<f32> {
    let (width, height) = image.dimensions();

    Array4::from_shape_fn(
        (1, 3, height as usize, width as usize),
        |(_, channel, y, x)| {
            let value = image.get_pixel(x as u32, y as u32)[channel] as f32 / 255.0;
            (value - CHANNEL_MEAN[channel]) / CHANNEL_STD[channel]
        },
    )
}
