//! zlib container framing (RFC 1950).
//!
//! ```plain
//! .- zlib stream -------------------------------------------.
//! | Byte[0] | Byte[1] | Byte[2] .. Byte[n-5] | Byte[n-4..n] |
//! |---------+---------+----------------------+--------------|
//! |   CMF   |   FLG   |  raw DEFLATE body    | Adler-32 BE  |
//! `---------------------------------------------------------`
//! ```
//!
//! Only the header layout is checked. The body is never inflated and the checksum is reported,
//! not verified.
use crate::consts::*;
use byteorder::{BigEndian, ByteOrder};
use snafu::{ensure, Snafu};

#[derive(Debug, Snafu)]
#[snafu(module)]
pub enum ZlibError {
    #[snafu(display(
        "{len} bytes is too short for a zlib stream ({} header + {} trailer bytes)",
        ZLIB_HEADER_LEN,
        ZLIB_TRAILER_LEN
    ))]
    TooShort { len: usize },
    #[snafu(display(
        "unsupported compression method {method}, expected DEFLATE ({})",
        ZLIB_CM_DEFLATE
    ))]
    UnsupportedMethod { method: u8 },
    #[snafu(display("zlib stream requires a preset dictionary"))]
    PresetDictionary,
}

/// The pieces of a zlib stream, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZlibParts<'a> {
    pub cmf: u8,
    pub flg: u8,
    pub body: &'a [u8],
    pub adler32: u32,
}

/// Splits a zlib stream into header, raw DEFLATE body and checksum.
pub fn split(data: &[u8]) -> Result<ZlibParts<'_>, ZlibError> {
    ensure!(
        data.len() >= ZLIB_HEADER_LEN + ZLIB_TRAILER_LEN,
        zlib_error::TooShortSnafu { len: data.len() }
    );

    let (header, rest) = data.split_at(ZLIB_HEADER_LEN);
    let (body, trailer) = rest.split_at(rest.len() - ZLIB_TRAILER_LEN);
    let (cmf, flg) = (header[0], header[1]);

    let method = cmf & 0x0F;
    ensure!(
        method == ZLIB_CM_DEFLATE,
        zlib_error::UnsupportedMethodSnafu { method }
    );
    ensure!(flg & ZLIB_FDICT == 0, zlib_error::PresetDictionarySnafu);

    Ok(ZlibParts {
        cmf,
        flg,
        body,
        adler32: BigEndian::read_u32(trailer),
    })
}

/// Returns the raw DEFLATE bitstream inside a zlib stream.
pub fn extract_raw(data: &[u8]) -> Result<&[u8], ZlibError> {
    split(data).map(|parts| parts.body)
}

/// Compresses `input` at maximum level and returns the bare DEFLATE stream.
#[cfg(feature = "alloc")]
pub fn compress_raw(input: &[u8]) -> Result<alloc::vec::Vec<u8>, ZlibError> {
    let container = miniz_oxide::deflate::compress_to_vec_zlib(input, COMPRESSION_LEVEL);
    extract_raw(&container).map(<[u8]>::to_vec)
}
