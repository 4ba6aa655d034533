//! Swaps near-white pixels for a solid background color. Icons exported on a
//! white canvas otherwise show a white square on dark launchers.

use image::{DynamicImage, Rgba, RgbaImage};

use crate::color::is_near_white;

/// Replaces every near-white pixel with `bg_color`, row by row, and returns
/// how many pixels were replaced. Other pixels keep all four channels.
pub fn recolor_pixels(img: &mut RgbaImage, bg_color: Rgba<u8>) -> u64 {
    let mut replaced = 0;

    for pixel in img.pixels_mut() {
        if is_near_white(pixel) {
            *pixel = bg_color;
            replaced += 1;
        }
    }

    replaced
}

/// Normalizes any source layout to RGBA8 (opaque alpha where the source has
/// none) and recolors the result.
pub fn recolor_image(img: DynamicImage, bg_color: Rgba<u8>) -> (RgbaImage, u64) {
    let mut rgba = img.into_rgba8();
    let replaced = recolor_pixels(&mut rgba, bg_color);
    (rgba, replaced)
}
