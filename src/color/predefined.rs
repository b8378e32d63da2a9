//! Commonly used opaque colors, packed as `0xAABBGGRR`

pub const BLACK: u32 = 0xFF00_0000;
pub const WHITE: u32 = 0xFFFF_FFFF;
pub const RED: u32 = 0xFF00_00FF;
pub const GREEN: u32 = 0xFF00_FF00;
pub const BLUE: u32 = 0xFFFF_0000;
