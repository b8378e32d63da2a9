//! Caller-owned pixel buffers

pub mod addressing;

pub use self::addressing::Addressing;

use crate::error::{RenderError, RenderResult};
use crate::geometry::{Coordinate, Dimensions, HasDimensions};

/// Borrowed view over a flat buffer of packed 32-bit pixels.
///
/// The rasterizer never allocates or frees the buffer. Only the first
/// `width * height` entries are ever touched, and every write is bounds checked
/// against the dimensions, so a triangle reaching past the target is clipped.
#[derive(Debug)]
pub struct Framebuffer<'a> {
    buffer: &'a mut [u32],
    dimensions: Dimensions,
    addressing: Addressing,
}

impl<'a> Framebuffer<'a> {
    /// Wraps `buffer` as a `width` x `height` target with column-major addressing
    pub fn new(buffer: &'a mut [u32], width: u32, height: u32) -> RenderResult<Framebuffer<'a>> {
        Framebuffer::with_addressing(buffer, width, height, Addressing::default())
    }

    /// Wraps `buffer` as a `width` x `height` target.
    ///
    /// Fails with `RenderError::InvalidBuffer` if the buffer is shorter than `width * height`.
    pub fn with_addressing(buffer: &'a mut [u32], width: u32, height: u32, addressing: Addressing) -> RenderResult<Framebuffer<'a>> {
        let dimensions = Dimensions::new(width, height);

        dimensions.validate()?;

        if buffer.len() < dimensions.area() {
            return Err(RenderError::InvalidBuffer {
                len: buffer.len(),
                required: dimensions.area(),
            });
        }

        Ok(Framebuffer { buffer, dimensions, addressing })
    }

    #[inline]
    pub fn addressing(&self) -> Addressing { self.addressing }

    /// Writes a pixel at signed coordinates, returning `false` if they fall outside the target
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: u32) -> bool {
        match Coordinate::checked(x, y, self.dimensions) {
            Some(coord) => {
                self.put(coord, color);
                true
            }
            None => false,
        }
    }

    /// Reads a pixel, `None` outside of the target
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Option<u32> {
        if self.dimensions.in_bounds(coord) {
            Some(self.buffer[self.addressing.index(coord, self.dimensions)])
        } else {
            None
        }
    }

    /// Writes a pixel known to be within the target.
    #[inline(always)]
    pub(crate) fn put(&mut self, coord: Coordinate, color: u32) {
        let index = self.addressing.index(coord, self.dimensions);

        self.buffer[index] = color;
    }

    /// Fills the whole target with one color
    pub fn clear(&mut self, color: u32) {
        let area = self.dimensions.area();

        for pixel in &mut self.buffer[..area] {
            *pixel = color;
        }
    }
}

impl<'a> HasDimensions for Framebuffer<'a> {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_buffer_is_rejected() {
        let mut buffer = vec![0u32; 15];

        match Framebuffer::new(&mut buffer, 4, 4) {
            Err(RenderError::InvalidBuffer { len, required }) => {
                assert_eq!(len, 15);
                assert_eq!(required, 16);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn writes_are_clipped() {
        let mut buffer = vec![0u32; 17];

        {
            let mut target = Framebuffer::new(&mut buffer, 4, 4).unwrap();

            assert!(target.set(3, 3, 7));
            assert!(!target.set(4, 0, 7));
            assert!(!target.set(0, -1, 7));
            assert_eq!(target.get(Coordinate::new(3, 3)), Some(7));
            assert_eq!(target.get(Coordinate::new(0, 4)), None);

            target.clear(1);
        }

        assert!(buffer[..16].iter().all(|&p| p == 1));
        assert_eq!(buffer[16], 0);
    }

    #[test]
    fn oversized_target_is_rejected() {
        let mut buffer: Vec<u32> = Vec::new();

        assert!(Framebuffer::new(&mut buffer, 9000, 0).is_err());
    }
}
