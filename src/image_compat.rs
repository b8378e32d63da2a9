use crate::color::unpack_color;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Coordinate, Dimensions, HasDimensions};

/// Copies a target into an upright RGBA image, whatever its addressing.
pub fn to_rgba_image(framebuffer: &Framebuffer) -> Option<image::RgbaImage> {
    let Dimensions { width, height } = framebuffer.dimensions();

    let mut res = Vec::with_capacity(framebuffer.dimensions().area() * 4);

    for y in 0..height {
        for x in 0..width {
            let color = framebuffer.get(Coordinate::new(x, y))?;

            res.extend_from_slice(&unpack_color(color));
        }
    }

    image::RgbaImage::from_raw(width, height, res)
}
