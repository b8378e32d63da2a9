extern crate softraster;

use softraster::color::{pack_color, unpack_color};
use softraster::color::predefined::{BLUE, GREEN, RED};
use softraster::geometry::ShadedVertex;
use softraster::{rasterize_parametric, rasterize_shaded, Addressing, RasterConfig, Rasterizer, Shading, Triangle};

const SIZE: u32 = 32;

fn rgb_triangle(size: f32) -> (ShadedVertex, ShadedVertex, ShadedVertex) {
    (ShadedVertex::new(0.0, 0.0, 1.0, 0.0, 0.0),
     ShadedVertex::new(size, 0.0, 0.0, 1.0, 0.0),
     ShadedVertex::new(0.0, size, 0.0, 0.0, 1.0))
}

/// Column-major pixel lookup
fn pixel(buffer: &[u32], height: u32, x: u32, y: u32) -> [u8; 4] {
    unpack_color(buffer[(x * height + y) as usize])
}

fn assert_close(actual: [u8; 4], expected: [u8; 4], tolerance: i32) {
    for channel in 0..4 {
        let difference = (actual[channel] as i32 - expected[channel] as i32).abs();

        assert!(difference <= tolerance, "{:?} is not within {} of {:?}", actual, tolerance, expected);
    }
}

#[test]
fn vertex_pixels_take_vertex_colors() {
    let (v0, v1, v2) = rgb_triangle(SIZE as f32);
    let mut buffer = vec![0u32; (SIZE * SIZE) as usize];

    rasterize_shaded(&mut buffer, SIZE, SIZE, v0, v1, v2).unwrap();

    assert_eq!(buffer[0], RED);
    assert_close(pixel(&buffer, SIZE, SIZE - 1, 0), unpack_color(GREEN), 10);
    assert_close(pixel(&buffer, SIZE, 0, SIZE - 1), unpack_color(BLUE), 10);
}

#[test]
fn vertex_pixels_of_a_general_triangle() {
    let v0 = ShadedVertex::new(2.0, 2.0, 1.0, 0.0, 0.0);
    let v1 = ShadedVertex::new(20.0, 4.0, 0.0, 1.0, 0.0);
    let v2 = ShadedVertex::new(6.0, 18.0, 0.0, 0.0, 1.0);

    let mut buffer = vec![0u32; 24 * 24];

    let written = rasterize_shaded(&mut buffer, 24, 24, v0, v1, v2).unwrap();

    assert_eq!(pixel(&buffer, 24, 2, 2), unpack_color(RED));
    assert_eq!(pixel(&buffer, 24, 20, 4), unpack_color(GREEN));
    assert_eq!(pixel(&buffer, 24, 6, 18), unpack_color(BLUE));

    // Each pixel is counted once, vertex pixels included
    assert_eq!(buffer.iter().filter(|&&p| p != 0).count(), written);
}

#[test]
fn fractional_vertices_keep_their_colors() {
    let v0 = ShadedVertex::new(3.6, 1.2, 1.0, 0.0, 0.0);
    let v1 = ShadedVertex::new(27.3, 9.8, 0.0, 1.0, 0.0);
    let v2 = ShadedVertex::new(8.4, 29.5, 0.0, 0.0, 1.0);

    let mut buffer = vec![0u32; (SIZE * SIZE) as usize];

    rasterize_shaded(&mut buffer, SIZE, SIZE, v0, v1, v2).unwrap();

    assert_eq!(pixel(&buffer, SIZE, 3, 1), unpack_color(RED));
    assert_eq!(pixel(&buffer, SIZE, 27, 9), unpack_color(GREEN));
    assert_eq!(pixel(&buffer, SIZE, 8, 29), unpack_color(BLUE));
}

#[test]
fn shaded_fills_are_deterministic() {
    let v0 = ShadedVertex::new(2.5, 1.0, 1.0, 0.0, 0.0);
    let v1 = ShadedVertex::new(30.0, 12.25, 0.0, 1.0, 0.0);
    let v2 = ShadedVertex::new(7.0, 31.0, 0.0, 0.0, 1.0);

    let render = |parametric: bool| {
        let mut buffer = vec![0u32; (SIZE * SIZE) as usize];

        let written = if parametric {
            rasterize_parametric(&mut buffer, SIZE, SIZE, v0, v1, v2)
        } else {
            rasterize_shaded(&mut buffer, SIZE, SIZE, v0, v1, v2)
        }.unwrap();

        (buffer, written)
    };

    for &parametric in &[false, true] {
        let (first, first_written) = render(parametric);
        let (second, second_written) = render(parametric);

        assert!(first_written > 0);
        assert_eq!(first_written, second_written);
        assert!(first == second);
    }
}

#[test]
fn centroid_is_the_average_color() {
    let (v0, v1, v2) = rgb_triangle(SIZE as f32);
    let average = [85, 85, 85, 255];

    let mut spans = vec![0u32; (SIZE * SIZE) as usize];
    rasterize_shaded(&mut spans, SIZE, SIZE, v0, v1, v2).unwrap();

    let mut parametric = vec![0u32; (SIZE * SIZE) as usize];
    rasterize_parametric(&mut parametric, SIZE, SIZE, v0, v1, v2).unwrap();

    // The centroid sits at (10.67, 10.67)
    assert_close(pixel(&spans, SIZE, 10, 10), average, 12);
    assert_close(pixel(&parametric, SIZE, 10, 10), average, 12);
}

#[test]
fn span_and_parametric_agree_inside() {
    let size = 64;
    let (v0, v1, v2) = rgb_triangle(size as f32);

    let mut spans = vec![0u32; size * size];
    let span_written = rasterize_shaded(&mut spans, size as u32, size as u32, v0, v1, v2).unwrap();

    let mut parametric = vec![0u32; size * size];
    let parametric_written = rasterize_parametric(&mut parametric, size as u32, size as u32, v0, v1, v2).unwrap();

    // Both cover the same half of the square, give or take the pixels along the hypotenuse
    assert!((span_written as i64 - parametric_written as i64).abs() <= 2 * size as i64);

    let mut compared = 0;

    for (&a, &b) in spans.iter().zip(parametric.iter()) {
        if a != 0 && b != 0 {
            assert_close(unpack_color(a), unpack_color(b), 24);
            compared += 1;
        }
    }

    assert!(compared > size * size / 3);
}

#[test]
fn flat_spans_use_one_color() {
    let (v0, v1, v2) = rgb_triangle(SIZE as f32);
    let mut buffer = vec![0u32; (SIZE * SIZE) as usize];

    let rasterizer = Rasterizer::new(RasterConfig::default());
    let written = rasterizer.fill_shaded(&mut buffer, SIZE, SIZE, &Triangle::new(v0, v1, v2), Shading::Flat(7)).unwrap();

    assert!(written > 0);
    assert_eq!(buffer.iter().filter(|&&p| p == 7).count(), written);
    assert!(buffer.iter().all(|&p| p == 0 || p == 7));
}

#[test]
fn collinear_shaded_triangles_fill_nothing() {
    let v0 = ShadedVertex::new(0.0, 0.0, 1.0, 0.0, 0.0);
    let v1 = ShadedVertex::new(4.0, 4.0, 0.0, 1.0, 0.0);
    let v2 = ShadedVertex::new(12.0, 12.0, 0.0, 0.0, 1.0);

    let mut buffer = vec![0u32; 256];

    assert_eq!(rasterize_shaded(&mut buffer, 16, 16, v0, v1, v2).unwrap(), 0);
    assert_eq!(rasterize_parametric(&mut buffer, 16, 16, v0, v1, v2).unwrap(), 0);

    // horizontal and vertical lines
    let h = ShadedVertex::new(12.0, 0.0, 0.0, 0.0, 1.0);
    let v = ShadedVertex::new(0.0, 12.0, 0.0, 0.0, 1.0);
    let o = ShadedVertex::new(0.0, 0.0, 1.0, 0.0, 0.0);
    let m = ShadedVertex::new(6.0, 0.0, 0.0, 1.0, 0.0);
    let n = ShadedVertex::new(0.0, 6.0, 0.0, 1.0, 0.0);

    assert_eq!(rasterize_shaded(&mut buffer, 16, 16, o, m, h).unwrap(), 0);
    assert_eq!(rasterize_shaded(&mut buffer, 16, 16, o, n, v).unwrap(), 0);

    assert!(buffer.iter().all(|&p| p == 0));
}

#[test]
fn shaded_triangles_are_clipped_to_the_target() {
    let v0 = ShadedVertex::new(-20.0, -10.0, 1.0, 0.0, 0.0);
    let v1 = ShadedVertex::new(50.0, 5.0, 0.0, 1.0, 0.0);
    let v2 = ShadedVertex::new(3.0, 40.0, 0.0, 0.0, 1.0);

    let mut buffer = vec![0u32; 16 * 12 + 4];

    {
        let rasterizer = Rasterizer::new(RasterConfig { addressing: Addressing::RowMajor, ..RasterConfig::default() });

        let written = rasterizer.fill_shaded(&mut buffer, 16, 12, &Triangle::new(v0, v1, v2), Shading::Gouraud).unwrap();

        assert!(written > 0);
        assert!(written <= 16 * 12);
    }

    assert!(buffer[16 * 12..].iter().all(|&p| p == 0));
}

#[test]
fn interpolated_pixels_are_opaque() {
    let (v0, v1, v2) = rgb_triangle(SIZE as f32);
    let mut buffer = vec![0u32; (SIZE * SIZE) as usize];

    rasterize_parametric(&mut buffer, SIZE, SIZE, v0, v1, v2).unwrap();

    assert!(buffer.iter().filter(|&&p| p != 0).all(|&p| unpack_color(p)[3] == 255));
    assert_eq!(pack_color(0, 0, 0, 255) & 0xFF00_0000, 0xFF00_0000);
}
