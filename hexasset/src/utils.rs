use crate::consts::ROW_ALIGN_BITS;

/// Rounds `width` up to the next multiple of 32 pixels.
///
/// Widened to `u64` so widths near `u32::MAX` don't overflow.
#[inline]
pub const fn padded_width(width: u32) -> u64 {
    let align = ROW_ALIGN_BITS as u64;
    (width as u64 + (align - 1)) & !(align - 1)
}

/// Bytes per packed monochrome row.
#[inline]
pub const fn row_stride(width: u32) -> usize {
    (padded_width(width) / 8) as usize
}

/// Scales the color channels of a straight RGBA pixel by its alpha, returning `[a, r, g, b]`.
///
/// Uses truncating division, `255 * 254 / 255 == 254` but `128 * 254 / 255 == 127`.
#[inline]
pub const fn premultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    const fn scale(c: u8, a: u8) -> u8 {
        (c as u32 * a as u32 / 255) as u8
    }

    [a, scale(r, a), scale(g, a), scale(b, a)]
}

/// [`premultiply`], packed into a single `0xAARRGGBB` word.
#[inline]
pub const fn premultiplied_word(rgba: [u8; 4]) -> u32 {
    u32::from_be_bytes(premultiply(rgba))
}
