//! Renders one smooth-shaded triangle with both interpolators and saves them as PNGs.
//!
//! Run with `cargo run --example shaded_triangle --features image_compat`

extern crate env_logger;
extern crate softraster;

use softraster::color::predefined::BLACK;
use softraster::geometry::ShadedVertex;
use softraster::image_compat::to_rgba_image;
use softraster::{Framebuffer, RasterConfig, Rasterizer, Shading, Triangle};

const SIZE: u32 = 512;

fn main() {
    env_logger::init();

    let triangle = Triangle::new(ShadedVertex::new(SIZE as f32 / 2.0, 16.0, 1.0, 0.0, 0.0),
                                 ShadedVertex::new(SIZE as f32 - 16.0, SIZE as f32 - 16.0, 0.0, 1.0, 0.0),
                                 ShadedVertex::new(16.0, SIZE as f32 - 16.0, 0.0, 0.0, 1.0));

    let rasterizer = Rasterizer::new(RasterConfig::default());

    for &(name, parametric) in &[("span.png", false), ("parametric.png", true)] {
        let mut buffer = vec![0u32; (SIZE * SIZE) as usize];

        Framebuffer::new(&mut buffer, SIZE, SIZE).unwrap().clear(BLACK);

        let written = if parametric {
            rasterizer.fill_parametric(&mut buffer, SIZE, SIZE, &triangle)
        } else {
            rasterizer.fill_shaded(&mut buffer, SIZE, SIZE, &triangle, Shading::Gouraud)
        }.unwrap();

        println!("{}: wrote {} pixels", name, written);

        let target = Framebuffer::new(&mut buffer, SIZE, SIZE).unwrap();

        to_rgba_image(&target).unwrap().save(name).unwrap();
    }
}
