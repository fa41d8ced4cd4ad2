use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Reduce a single channel to 2 bits and expand it back to 8 bits
const fn quantize2(channel: u8) -> u8 {
    (channel >> 6) * 85
}

/// Map a 0xRRGGBB value onto the 64-color display palette
///
/// Each channel keeps its two most significant bits, so `0x0055FF` stays
/// as-is while `0x1260F0` becomes `0x0055FF`.
pub const fn palette_color(hex: u32) -> Rgb {
    let color = rgb_from_u32(hex);
    Rgb {
        r: quantize2(color.r),
        g: quantize2(color.g),
        b: quantize2(color.b),
    }
}
