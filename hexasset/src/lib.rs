//! Build-time converters from raster images to firmware-embeddable hex listings.
//!
//! Every converter is a single pure pass over its input. The result is meant to be pasted (or
//! `#include`d) into a C array initializer.
//!
//! # Listing formats
//!
//! | converter                       | token        | line break         |
//! |---------------------------------|--------------|--------------------|
//! | [indexed bytes](emit::write_indexed) | `0xNN,`      | every 8 tokens     |
//! | [palette](emit::write_palette)  | `0xNN,`      | every 8 tokens     |
//! | [monochrome](emit::write_mono)  | `0xNN,`      | after each row     |
//! | [premultiplied RGBA](emit::write_premultiplied) | `0xAARRGGBB,` | every 6 tokens |
//!
//! Tokens on a line are separated by a single space and every line, including a final partial
//! one, is terminated by `\n`.
//!
//! An empty input, or a premultiplied listing whose length is a multiple of 6, produces no
//! trailing blank line.
//!
//! # Monochrome bitmaps
//!
//! Rows are padded to a multiple of 32 pixels and packed MSB-first, so the leftmost pixel of a
//! group of 8 lands in bit 7. Padding bits are always zero.
//!
//! # Premultiplied alpha
//!
//! Color channels are scaled by `a / 255` using truncating integer division, not rounding.
//!
//! # Raw DEFLATE
//!
//! [`zlib`] strips the 2-byte header and 4-byte Adler-32 trailer from a zlib container, leaving
//! the bare DEFLATE bitstream for consumers that supply their own framing.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
pub mod alloc_api;
#[cfg(feature = "std")]
pub mod emit;

pub mod pack;
pub mod pixel;
pub mod utils;
pub mod zlib;

pub use pack::pack_mono_row;
pub use pixel::{PixelError, PixelKind, PixelSource, PixelValue, Raster};

pub mod consts {
    /// Tokens per line in the indexed byte and palette listings.
    pub const BYTES_PER_LINE: usize = 8;

    /// Tokens per line in the premultiplied RGBA listing.
    pub const WORDS_PER_LINE: usize = 6;

    /// Monochrome rows are padded to a multiple of this many pixels.
    pub const ROW_ALIGN_BITS: u32 = 32;

    /// zlib compression method for DEFLATE, stored in the low nibble of `CMF`.
    ///
    /// ```plain
    /// .- CMF -------------------.
    /// |  7  6  5  4  3  2  1  0 |
    /// |-------------+-----------|
    /// |    CINFO    |     CM    |
    /// `-------------------------`
    /// ```
    pub const ZLIB_CM_DEFLATE: u8 = 8;

    /// Preset dictionary flag in `FLG`.
    ///
    /// ```plain
    /// .- FLG -------------------.
    /// |  7  6  5  4  3  2  1  0 |
    /// |-------+---+-------------|
    /// | FLEVEL|FD |    FCHECK   |
    /// `-------------------------`
    /// ```
    pub const ZLIB_FDICT: u8 = 0b0010_0000;

    /// `CMF` and `FLG`.
    pub const ZLIB_HEADER_LEN: usize = 2;

    /// Big-endian Adler-32 of the uncompressed data.
    pub const ZLIB_TRAILER_LEN: usize = 4;

    /// Level passed to the compressor. Build-time only, so always the maximum.
    pub const COMPRESSION_LEVEL: u8 = 9;
}
