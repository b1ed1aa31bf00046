use crate::{
    alloc_api::{indices_to_vec, pack_mono_to_vec, premultiply_to_vec},
    consts::*,
    pixel::{PixelError, PixelSource},
    utils::row_stride,
};
use itertools::Itertools;
use snafu::{ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
pub enum EmitError {
    #[snafu(display("invalid pixel data: {source}"))]
    Pixel { source: PixelError },
    #[snafu(display("failed to write listing: {source}"))]
    WriteIo { source: std::io::Error },
}

fn write_byte_line<W: Write>(w: &mut W, bytes: impl Iterator<Item = u8>) -> Result<(), EmitError> {
    writeln!(
        w,
        "{}",
        bytes.format_with(" ", |b, f| f(&format_args!("0x{b:02x},")))
    )
    .context(WriteIoSnafu)
}

/// Writes `bytes` as `0xNN,` tokens, [`BYTES_PER_LINE`] per line.
pub fn write_byte_listing<W: Write>(
    bytes: impl IntoIterator<Item = u8>,
    mut w: W,
) -> Result<(), EmitError> {
    for line in &bytes.into_iter().chunks(BYTES_PER_LINE) {
        write_byte_line(&mut w, line)?;
    }

    Ok(())
}

/// Writes every pixel of an indexed image, row-major.
///
/// All pixels are read before anything is written.
pub fn write_indexed<W: Write>(source: &impl PixelSource, w: W) -> Result<(), EmitError> {
    let indices = indices_to_vec(source).context(PixelSnafu)?;
    write_byte_listing(indices, w)
}

/// Writes palette bytes verbatim. No assumptions are made about entry size or count.
pub fn write_palette<W: Write>(palette: &[u8], w: W) -> Result<(), EmitError> {
    write_byte_listing(palette.iter().copied(), w)
}

/// Writes a packed monochrome bitmap, one line per row.
pub fn write_mono<W: Write>(source: &impl PixelSource, mut w: W) -> Result<(), EmitError> {
    let packed = pack_mono_to_vec(source).context(PixelSnafu)?;
    let stride = row_stride(source.width());

    for y in 0..source.height() as usize {
        let row = &packed[y * stride..(y + 1) * stride];
        write_byte_line(&mut w, row.iter().copied())?;
    }

    Ok(())
}

/// One pending line of premultiplied words.
///
/// Pushing the [`WORDS_PER_LINE`]th word writes the line out. Whatever is left over must be
/// written with [`WordLine::flush`] once the input ends.
#[derive(Debug, Default)]
pub struct WordLine {
    words: [u32; WORDS_PER_LINE],
    len: usize,
}

impl WordLine {
    pub const fn new() -> Self {
        Self {
            words: [0; WORDS_PER_LINE],
            len: 0,
        }
    }

    pub fn push<W: Write>(&mut self, word: u32, w: &mut W) -> Result<(), EmitError> {
        self.words[self.len] = word;
        self.len += 1;

        if self.len == WORDS_PER_LINE {
            self.flush(w)?;
        }

        Ok(())
    }

    /// Writes the buffered words as one line. Does nothing if none are buffered.
    pub fn flush<W: Write>(&mut self, w: &mut W) -> Result<(), EmitError> {
        if self.len == 0 {
            return Ok(());
        }

        let words = &self.words[..self.len];
        self.len = 0;

        writeln!(
            w,
            "{}",
            words
                .iter()
                .format_with(" ", |word, f| f(&format_args!("0x{word:08x},")))
        )
        .context(WriteIoSnafu)
    }
}

/// Writes every pixel of an RGBA image as a premultiplied `0xAARRGGBB,` word, row-major.
pub fn write_premultiplied<W: Write>(
    source: &impl PixelSource,
    mut w: W,
) -> Result<(), EmitError> {
    let words = premultiply_to_vec(source).context(PixelSnafu)?;

    let mut line = WordLine::new();
    for word in words {
        line.push(word, &mut w)?;
    }
    line.flush(&mut w)
}
