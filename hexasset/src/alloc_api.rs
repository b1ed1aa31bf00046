use crate::{
    pack::pack_mono_row,
    pixel::{PixelError, PixelSource},
    utils::{premultiplied_word, row_stride},
};
use alloc::vec::Vec;

/// Reads every pixel of `source` as a byte, row-major.
pub fn indices_to_vec(source: &impl PixelSource) -> Result<Vec<u8>, PixelError> {
    let mut v = Vec::with_capacity(source.width() as usize * source.height() as usize);

    source.for_each_pixel(|x, y, pixel| -> Result<(), PixelError> {
        v.push(pixel.try_index(x, y)?);
        Ok(())
    })?;

    Ok(v)
}

/// Packs every row of `source`, see [`pack_mono_row`].
///
/// The result is `height * row_stride(width)` bytes.
pub fn pack_mono_to_vec(source: &impl PixelSource) -> Result<Vec<u8>, PixelError> {
    let stride = row_stride(source.width());
    let mut v = alloc::vec![0; stride * source.height() as usize];

    if stride > 0 {
        for (y, row) in v.chunks_exact_mut(stride).enumerate() {
            pack_mono_row(source, y as u32, row)?;
        }
    }

    Ok(v)
}

/// Premultiplies every pixel of `source` into `0xAARRGGBB` words, row-major.
pub fn premultiply_to_vec(source: &impl PixelSource) -> Result<Vec<u32>, PixelError> {
    let mut v = Vec::with_capacity(source.width() as usize * source.height() as usize);

    source.for_each_pixel(|x, y, pixel| -> Result<(), PixelError> {
        v.push(premultiplied_word(pixel.try_rgba(x, y)?));
        Ok(())
    })?;

    Ok(v)
}
