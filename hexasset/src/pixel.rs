use snafu::{OptionExt, Snafu};

/// The kind of value a [`PixelSource`] hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelKind {
    Index,
    Rgba,
    Bit,
}

impl PixelKind {
    /// Bytes used per pixel in a [`Raster`].
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelKind::Index | PixelKind::Bit => 1,
            PixelKind::Rgba => 4,
        }
    }
}

/// A single decoded pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelValue {
    /// Palette slot (or grey level).
    Index(u8),
    /// Straight (non-premultiplied) `[r, g, b, a]`.
    Rgba([u8; 4]),
    Bit(bool),
}

impl PixelValue {
    pub const fn kind(self) -> PixelKind {
        match self {
            PixelValue::Index(_) => PixelKind::Index,
            PixelValue::Rgba(_) => PixelKind::Rgba,
            PixelValue::Bit(_) => PixelKind::Bit,
        }
    }

    /// Reads the pixel as a byte. `Bit` pixels read as 0 or 1.
    pub const fn index(self) -> Option<u8> {
        match self {
            PixelValue::Index(i) => Some(i),
            PixelValue::Bit(b) => Some(b as u8),
            PixelValue::Rgba(_) => None,
        }
    }

    /// Reads the pixel as a bit. `Index` pixels are set when nonzero.
    pub const fn bit(self) -> Option<bool> {
        match self {
            PixelValue::Bit(b) => Some(b),
            PixelValue::Index(i) => Some(i != 0),
            PixelValue::Rgba(_) => None,
        }
    }

    pub const fn rgba(self) -> Option<[u8; 4]> {
        match self {
            PixelValue::Rgba(rgba) => Some(rgba),
            _ => None,
        }
    }

    /// [`index`](Self::index), failing with the pixel's position.
    pub fn try_index(self, x: u32, y: u32) -> Result<u8, PixelError> {
        self.index().context(UnexpectedKindSnafu {
            x,
            y,
            expected: PixelKind::Index,
            found: self.kind(),
        })
    }

    /// [`bit`](Self::bit), failing with the pixel's position.
    pub fn try_bit(self, x: u32, y: u32) -> Result<bool, PixelError> {
        self.bit().context(UnexpectedKindSnafu {
            x,
            y,
            expected: PixelKind::Bit,
            found: self.kind(),
        })
    }

    pub fn try_rgba(self, x: u32, y: u32) -> Result<[u8; 4], PixelError> {
        self.rgba().context(UnexpectedKindSnafu {
            x,
            y,
            expected: PixelKind::Rgba,
            found: self.kind(),
        })
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum PixelError {
    #[snafu(display("pixel at ({x}, {y}) is {found:?}, expected {expected:?}"))]
    UnexpectedKind {
        x: u32,
        y: u32,
        expected: PixelKind,
        found: PixelKind,
    },
    #[snafu(display("output buffer holds {actual} bytes, but a row needs {needed}"))]
    OutputTooSmall { needed: usize, actual: usize },
}

/// Random access to a decoded image.
///
/// Callers only ask for `x < width()` and `y < height()`.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel_at(&self, x: u32, y: u32) -> PixelValue;

    /// Calls `f` for every pixel in row-major order.
    fn for_each_pixel<E>(
        &self,
        mut f: impl FnMut(u32, u32, PixelValue) -> Result<(), E>,
    ) -> Result<(), E> {
        for y in 0..self.height() {
            for x in 0..self.width() {
                f(x, y, self.pixel_at(x, y))?;
            }
        }

        Ok(())
    }
}

/// Row-major pixels borrowed from a byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    width: u32,
    height: u32,
    kind: PixelKind,
    data: &'a [u8],
}

impl<'a> Raster<'a> {
    /// Returns `None` if `data` isn't exactly `width * height` pixels of `kind`.
    pub fn new(width: u32, height: u32, kind: PixelKind, data: &'a [u8]) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(kind.bytes_per_pixel())?;

        (data.len() == expected).then_some(Self {
            width,
            height,
            kind,
            data,
        })
    }

    pub const fn kind(&self) -> PixelKind {
        self.kind
    }
}

impl PixelSource for Raster<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel_at(&self, x: u32, y: u32) -> PixelValue {
        let bpp = self.kind.bytes_per_pixel();
        let offset = (y as usize * self.width as usize + x as usize) * bpp;
        let px = &self.data[offset..offset + bpp];

        match self.kind {
            PixelKind::Index => PixelValue::Index(px[0]),
            PixelKind::Bit => PixelValue::Bit(px[0] != 0),
            PixelKind::Rgba => PixelValue::Rgba([px[0], px[1], px[2], px[3]]),
        }
    }
}
