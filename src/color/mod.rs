//! Packed 32-bit colors
//!
//! Pixels are stored as `0xAABBGGRR`: red in the lowest byte, alpha in the highest.

use nalgebra::Vector3;

pub mod predefined;

/// Packs four 8-bit channels into one pixel value
#[inline]
pub fn pack_color(red: u8, green: u8, blue: u8, alpha: u8) -> u32 {
    (alpha as u32) << 24 | (blue as u32) << 16 | (green as u32) << 8 | red as u32
}

/// Splits a pixel value into `[red, green, blue, alpha]`
#[inline]
pub fn unpack_color(color: u32) -> [u8; 4] {
    [
        (color & 0xFF) as u8,
        (color >> 8 & 0xFF) as u8,
        (color >> 16 & 0xFF) as u8,
        (color >> 24 & 0xFF) as u8,
    ]
}

/// Scales a `[0, 1]` channel to `[0, 255]`, truncating.
///
/// Values outside the range saturate and NaN becomes zero.
#[inline]
pub fn unit_to_channel(value: f32) -> u8 {
    (value * 255.0) as u8
}

/// Packs an RGB color with channels in `[0, 1]` into an opaque pixel
#[inline]
pub fn pack_rgb(color: &Vector3<f32>) -> u32 {
    pack_color(unit_to_channel(color.x), unit_to_channel(color.y), unit_to_channel(color.z), 255)
}
