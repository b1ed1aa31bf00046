use crate::{
    pixel::{OutputTooSmallSnafu, PixelError, PixelSource},
    utils::row_stride,
};
use snafu::ensure;

/// Packs row `y` of `source` into `out`, one bit per pixel, MSB-first.
///
/// The row is padded to a multiple of 32 pixels; padding bits are zero and the source is never
/// read past its width. Only the first [`row_stride`] bytes of `out` are written.
pub fn pack_mono_row(source: &impl PixelSource, y: u32, out: &mut [u8]) -> Result<(), PixelError> {
    let width = source.width();
    let stride = row_stride(width);

    ensure!(
        out.len() >= stride,
        OutputTooSmallSnafu {
            needed: stride,
            actual: out.len()
        }
    );

    let row = &mut out[..stride];
    // padding columns stay zero
    row.fill(0);

    for x in 0..width {
        if source.pixel_at(x, y).try_bit(x, y)? {
            let (x_byte, x_bit) = ((x / 8) as usize, x % 8);
            row[x_byte] |= 1 << (7 - x_bit);
        }
    }

    Ok(())
}
