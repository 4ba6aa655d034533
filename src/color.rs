use image::Rgba;

/// Channels must be strictly above this value for a pixel to count as near-white.
pub const NEAR_WHITE_THRESHOLD: u8 = 240;

/// Dark theme background (#020617).
pub const THEME_BACKGROUND: Rgba<u8> = Rgba([2, 6, 23, 255]);

/// Returns true when red, green and blue all exceed [`NEAR_WHITE_THRESHOLD`].
/// Alpha is not considered.
pub fn is_near_white(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > NEAR_WHITE_THRESHOLD && g > NEAR_WHITE_THRESHOLD && b > NEAR_WHITE_THRESHOLD
}
