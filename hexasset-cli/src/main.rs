use argh::FromArgs;
use hexasset::{emit, zlib, PixelKind, Raster};
use log::{debug, info};
use std::io::{self, BufWriter, Read, Write};

mod load;

/// Converts images and payloads into hex listings for embedding in firmware.
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Bytes(Bytes),
    Colormap(Colormap),
    Mono32(Mono32),
    RgbaPre(RgbaPre),
    Deflate(Deflate),
}

/// Prints the palette indices of an indexed PNG as hex bytes.
#[derive(FromArgs)]
#[argh(subcommand, name = "bytes")]
struct Bytes {
    /// the input file, an indexed or grayscale PNG
    #[argh(positional)]
    input: String,
}

/// Prints the palette of an indexed PNG as hex bytes.
#[derive(FromArgs)]
#[argh(subcommand, name = "colormap")]
struct Colormap {
    /// the input file, an indexed PNG
    #[argh(positional)]
    input: String,
}

/// Prints a 1bpp bitmap, MSB-first, with every row padded to 32 bits.
#[derive(FromArgs)]
#[argh(subcommand, name = "mono32")]
struct Mono32 {
    /// the input file. Any nonzero pixel (palette index for indexed PNGs) is set.
    #[argh(positional)]
    input: String,
}

/// Prints premultiplied-alpha ARGB words.
#[derive(FromArgs)]
#[argh(subcommand, name = "rgbapre")]
struct RgbaPre {
    /// the input file
    #[argh(positional)]
    input: String,
}

/// Compresses stdin and writes the raw DEFLATE stream, without zlib framing, to stdout.
#[derive(FromArgs)]
#[argh(subcommand, name = "deflate")]
struct Deflate {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli { command } = argh::from_env();

    match command {
        Command::Bytes(options) => bytes(options),
        Command::Colormap(options) => colormap(options),
        Command::Mono32(options) => mono32(options),
        Command::RgbaPre(options) => rgbapre(options),
        Command::Deflate(_) => deflate(),
    }
}

fn bytes(options: Bytes) -> Result<(), Box<dyn std::error::Error>> {
    let Bytes { input } = options;

    let image = load::open_indexed(&input)?;
    debug!("width={} height={}", image.width, image.height);

    let raster = Raster::new(image.width, image.height, PixelKind::Index, &image.indices)
        .ok_or("failed to create raster")?;

    let mut out = BufWriter::new(io::stdout().lock());
    emit::write_indexed(&raster, &mut out)?;
    out.flush()?;

    Ok(())
}

fn colormap(options: Colormap) -> Result<(), Box<dyn std::error::Error>> {
    let Colormap { input } = options;

    let palette = load::open_palette(&input)?;
    debug!("palette is {} bytes", palette.len());

    let mut out = BufWriter::new(io::stdout().lock());
    emit::write_palette(&palette, &mut out)?;
    out.flush()?;

    Ok(())
}

fn mono32(options: Mono32) -> Result<(), Box<dyn std::error::Error>> {
    let Mono32 { input } = options;

    let image = load::open_mono(&input)?;
    info!("width={} height={}", image.width, image.height);

    let raster = Raster::new(image.width, image.height, PixelKind::Index, &image.indices)
        .ok_or("failed to create raster")?;

    let mut out = BufWriter::new(io::stdout().lock());
    emit::write_mono(&raster, &mut out)?;
    out.flush()?;

    Ok(())
}

fn rgbapre(options: RgbaPre) -> Result<(), Box<dyn std::error::Error>> {
    let RgbaPre { input } = options;

    let image = load::open_image(&input)?.into_rgba8();
    let (width, height) = image.dimensions();
    info!("width={width} height={height}");

    let raster = Raster::new(width, height, PixelKind::Rgba, image.as_raw())
        .ok_or("failed to create raster")?;

    let mut out = BufWriter::new(io::stdout().lock());
    emit::write_premultiplied(&raster, &mut out)?;
    out.flush()?;

    Ok(())
}

fn deflate() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;

    let raw = zlib::compress_raw(&input)?;
    debug!("compressed {} bytes to {} bytes", input.len(), raw.len());

    let mut out = io::stdout().lock();
    out.write_all(&raw)?;
    out.flush()?;

    Ok(())
}
