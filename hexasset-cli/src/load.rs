use image::DynamicImage;
use std::{
    error::Error,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// One byte per pixel: palette indices, or grey levels for non-indexed input.
pub struct IndexedImage {
    pub width: u32,
    pub height: u32,
    pub indices: Vec<u8>,
}

fn identity_decoder<R: Read>(r: R) -> png::Decoder<R> {
    let mut decoder = png::Decoder::new(r);
    // keep raw indices, `image` would expand them through the palette
    decoder.set_transformations(png::Transformations::IDENTITY);
    decoder
}

/// Decodes an indexed or grayscale PNG without expanding the palette.
///
/// Sub-byte depths are unpacked MSB-first.
pub fn decode_indexed<R: Read>(r: R) -> Result<IndexedImage, Box<dyn Error>> {
    let mut reader = identity_decoder(r).read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    if !matches!(
        info.color_type,
        png::ColorType::Indexed | png::ColorType::Grayscale
    ) {
        return Err(format!("expected an indexed image, got {:?}", info.color_type).into());
    }

    let depth = match info.bit_depth {
        png::BitDepth::One => 1,
        png::BitDepth::Two => 2,
        png::BitDepth::Four => 4,
        png::BitDepth::Eight => 8,
        png::BitDepth::Sixteen => return Err("16-bit images can't be indexed".into()),
    };

    let width = info.width as usize;
    let per_byte = 8 / depth;
    let mask = ((1u16 << depth) - 1) as u8;

    let mut indices = Vec::with_capacity(width * info.height as usize);
    for row in buf.chunks(info.line_size).take(info.height as usize) {
        if depth == 8 {
            indices.extend_from_slice(&row[..width]);
            continue;
        }

        indices.extend((0..width).map(|x| {
            let shift = 8 - depth * (x % per_byte + 1);
            (row[x / per_byte] >> shift) & mask
        }));
    }

    Ok(IndexedImage {
        width: info.width,
        height: info.height,
        indices,
    })
}

/// Returns the raw `PLTE` bytes of a PNG, three per entry.
pub fn read_palette<R: Read>(r: R) -> Result<Vec<u8>, Box<dyn Error>> {
    let reader = identity_decoder(r).read_info()?;
    let palette = reader.info().palette.as_deref().ok_or("image has no palette")?;

    Ok(palette.to_vec())
}

pub fn open_indexed(path: impl AsRef<Path>) -> Result<IndexedImage, Box<dyn Error>> {
    decode_indexed(BufReader::new(File::open(path)?))
}

pub fn open_palette(path: impl AsRef<Path>) -> Result<Vec<u8>, Box<dyn Error>> {
    read_palette(BufReader::new(File::open(path)?))
}

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Decodes an image as one value per pixel for monochrome packing, nonzero meaning set.
///
/// Indexed PNGs keep their raw palette indices. Everything else is converted to luma.
pub fn decode_mono(data: &[u8]) -> Result<IndexedImage, Box<dyn Error>> {
    if data.starts_with(PNG_SIGNATURE) {
        let reader = identity_decoder(data).read_info()?;
        if reader.info().color_type == png::ColorType::Indexed {
            return decode_indexed(data);
        }
    }

    let luma = image::load_from_memory(data)?.into_luma8();
    let (width, height) = luma.dimensions();

    Ok(IndexedImage {
        width,
        height,
        indices: luma.into_raw(),
    })
}

pub fn open_mono(path: impl AsRef<Path>) -> Result<IndexedImage, Box<dyn Error>> {
    decode_mono(&std::fs::read(path)?)
}

/// Opens any image format `image` knows about.
pub fn open_image(path: impl AsRef<Path>) -> Result<DynamicImage, Box<dyn Error>> {
    Ok(image::io::Reader::open(path)?
        .with_guessed_format()?
        .decode()?)
}
