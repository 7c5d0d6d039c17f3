use crate::address::{HEIGHT, LOGICAL_WIDTH, PAGE_LEN};
use crate::error::CoreError;

/// Raster width: every logical column renders as two pixels.
pub const RASTER_WIDTH: usize = LOGICAL_WIDTH * 2;
/// Raster height.
pub const RASTER_HEIGHT: usize = HEIGHT;

/// Borrowed view over one 8 KiB HGR page.
///
/// The length is checked once at construction; decoding never sees a
/// short or long buffer.
///
/// # Example
/// ```
/// use hgr_core::frame::Framebuffer;
/// let page = vec![0u8; 0x2000];
/// assert!(Framebuffer::new(&page).is_ok());
/// assert!(Framebuffer::new(&page[..0x1000]).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Framebuffer<'a> {
    bytes: &'a [u8],
}

impl<'a> Framebuffer<'a> {
    /// Wrap `bytes` if it is exactly one page long.
    ///
    /// # Errors
    /// Returns [`CoreError::InputSize`] for any other length.
    pub fn new(bytes: &'a [u8]) -> Result<Self, CoreError> {
        if bytes.len() != PAGE_LEN {
            return Err(CoreError::InputSize {
                expected: PAGE_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Wrap a page whose length is known statically.
    #[must_use]
    pub fn from_page(page: &'a [u8; PAGE_LEN]) -> Self {
        Self { bytes: page }
    }

    /// Raw page contents, indexed by address.
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> TryFrom<&'a [u8]> for Framebuffer<'a> {
    type Error = CoreError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

/// Two-level sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pixel {
    #[default]
    Off,
    On,
}

impl Pixel {
    /// `On` when `lit`.
    #[inline(always)]
    #[must_use]
    pub fn from_bit(lit: bool) -> Self {
        if lit { Self::On } else { Self::Off }
    }

    /// Palette index: 0 for `Off`, 1 for `On`.
    #[inline(always)]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }
}

/// Decoded 560×192 two-color image. Row-major, all `Off` at creation.
///
/// # Example
/// ```
/// use hgr_core::frame::{Pixel, Raster, RASTER_WIDTH};
/// let mut raster = Raster::new();
/// raster.set(RASTER_WIDTH - 1, 0, Pixel::On);
/// assert_eq!(raster.get(RASTER_WIDTH - 1, 0), Some(Pixel::On));
/// assert_eq!(raster.get(RASTER_WIDTH, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pixels: Vec<Pixel>,
}

impl Default for Raster {
    fn default() -> Self {
        Self::new()
    }
}

impl Raster {
    /// Blank raster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pixels: vec![Pixel::Off; RASTER_WIDTH * RASTER_HEIGHT],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        RASTER_WIDTH
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        RASTER_HEIGHT
    }

    /// Write one pixel. Out-of-bounds writes are dropped.
    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        if x < RASTER_WIDTH && y < RASTER_HEIGHT {
            self.pixels[y * RASTER_WIDTH + x] = pixel;
        }
    }

    /// Read one pixel, `None` outside the raster.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        (x < RASTER_WIDTH && y < RASTER_HEIGHT).then(|| self.pixels[y * RASTER_WIDTH + x])
    }

    /// One scan line, `None` below the last line.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        self.pixels.get(y * RASTER_WIDTH..(y + 1) * RASTER_WIDTH)
    }

    /// All pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}
