//! Color packing idioms.
//!
//! Packed layouts used here:
//! - 24-bit `0xRRGGBB`
//! - 32-bit unpack reads `0xRRGGBBAA`
//! - 32-bit pack writes `0xAARRGGBB`
//! - 15-bit `0bxRRRRRGGGGGBBBBB`

use serde::{Deserialize, Serialize};

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

/// 8-bit RGBA quadruple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

/// Unpack `0xRRGGBB` through the byte representation.
#[inline]
pub fn unpack_rgb24_bytes(hex: u32) -> Rgb {
    let [_, r, g, b] = hex.to_be_bytes();
    Rgb { r, g, b }
}

/// Unpack `0xRRGGBB` with shifts and masks.
#[inline]
pub fn unpack_rgb24(hex: u32) -> Rgb {
    Rgb {
        r: (hex >> 16 & 0xFF) as u8,
        g: (hex >> 8 & 0xFF) as u8,
        b: (hex & 0xFF) as u8,
    }
}

/// Unpack `0xRRGGBBAA` through the byte representation.
#[inline]
pub fn unpack_rgba32_bytes(hex: u32) -> Rgba {
    let [r, g, b, a] = hex.to_be_bytes();
    Rgba { r, g, b, a }
}

/// Unpack `0xRRGGBBAA` with shifts and masks.
#[inline]
pub fn unpack_rgba32(hex: u32) -> Rgba {
    Rgba {
        r: (hex >> 24) as u8,
        g: (hex >> 16 & 0xFF) as u8,
        b: (hex >> 8 & 0xFF) as u8,
        a: (hex & 0xFF) as u8,
    }
}

/// Pack into `0xRRGGBB` through the byte representation.
#[inline]
pub fn pack_rgb24_bytes(c: Rgb) -> u32 {
    u32::from_be_bytes([0, c.r, c.g, c.b])
}

/// Pack into `0xRRGGBB` with shifts.
#[inline]
pub fn pack_rgb24(c: Rgb) -> u32 {
    (c.r as u32) << 16 | (c.g as u32) << 8 | c.b as u32
}

/// Pack into `0xAARRGGBB` through the byte representation.
#[inline]
pub fn pack_argb32_bytes(c: Rgba) -> u32 {
    u32::from_be_bytes([c.a, c.r, c.g, c.b])
}

/// Pack into `0xAARRGGBB` with shifts.
#[inline]
pub fn pack_argb32(c: Rgba) -> u32 {
    (c.a as u32) << 24 | (c.r as u32) << 16 | (c.g as u32) << 8 | c.b as u32
}

/// Scale a 5-bit channel to 8 bits arithmetically, rounding to nearest.
#[inline]
pub fn expand5_scaled(c: u8) -> u8 {
    (((c & 0x1F) as u16 * 255 + 15) / 31) as u8
}

/// Widen a 5-bit channel to 8 bits by replicating its top bits.
///
/// Within one of [`expand5_scaled`] for every input and exact at 0 and 31.
#[inline]
pub fn expand5(c: u8) -> u8 {
    let c = c & 0x1F;
    (c << 3) | (c >> 2)
}

/// Convert an R5G5B5 pixel to R8G8B8 by arithmetic scaling.
#[inline]
pub fn r5g5b5_to_rgb_scaled(px: u16) -> Rgb {
    Rgb {
        r: expand5_scaled((px >> 10) as u8),
        g: expand5_scaled((px >> 5) as u8),
        b: expand5_scaled(px as u8),
    }
}

/// Convert an R5G5B5 pixel to R8G8B8 by bit replication.
#[inline]
pub fn r5g5b5_to_rgb(px: u16) -> Rgb {
    Rgb {
        r: expand5((px >> 10) as u8),
        g: expand5((px >> 5) as u8),
        b: expand5(px as u8),
    }
}

/// Channel sum through a heap-allocated color.
#[inline]
pub fn channel_sum_boxed(hex: u32) -> u32 {
    let c = Box::new(unpack_rgb24(hex));
    c.r as u32 + c.g as u32 + c.b as u32
}

/// Channel sum through a stack array.
#[inline]
pub fn channel_sum_array(hex: u32) -> u32 {
    let c = [(hex >> 16) & 0xFF, (hex >> 8) & 0xFF, hex & 0xFF];
    c[0] + c[1] + c[2]
}

/// Channel sum through plain locals.
#[inline]
pub fn channel_sum_flat(hex: u32) -> u32 {
    let r = (hex >> 16) & 0xFF;
    let g = (hex >> 8) & 0xFF;
    let b = hex & 0xFF;
    r + g + b
}
