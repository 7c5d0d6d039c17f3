use crate::address::{BITS_PER_BYTE, addr_to_xy};
use crate::frame::{Framebuffer, Pixel, Raster};

/// Bit 7: shifts the byte's pixel group right by one raster pixel.
pub const SHIFT_BIT: u8 = 0x80;
/// Raster pixels covered by one byte.
pub const PIXELS_PER_BYTE: usize = BITS_PER_BYTE * 2;

/// Counters gathered while decoding a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Bytes that mapped to a scan line.
    pub visible: usize,
    /// Screen-hole bytes skipped.
    pub holes: usize,
    /// Visible bytes with the shift bit set.
    pub shifted: usize,
    /// Data bits set across visible bytes.
    pub lit_bits: usize,
}

/// Expand one byte into its 14 raster samples, least significant bit
/// leftmost, each bit doubled horizontally. Bit 7 is not a sample.
///
/// # Example
/// ```
/// use hgr_core::decode::expand_byte;
/// use hgr_core::frame::Pixel::{Off, On};
/// let px = expand_byte(0b0000_0101);
/// assert_eq!(&px[..6], &[On, On, Off, Off, On, On]);
/// ```
#[inline]
#[must_use]
pub fn expand_byte(val: u8) -> [Pixel; PIXELS_PER_BYTE] {
    let mut out = [Pixel::Off; PIXELS_PER_BYTE];
    for (b, pair) in out.chunks_exact_mut(2).enumerate() {
        pair.fill(Pixel::from_bit(val & (1 << b) != 0));
    }
    out
}

/// Left raster column of a byte whose group starts at logical column `x`.
#[inline]
#[must_use]
pub fn group_origin(x: usize, val: u8) -> usize {
    x * 2 + usize::from(val & SHIFT_BIT != 0)
}

/// Decode a page into a 560×192 raster.
///
/// # Example
/// ```
/// use hgr_core::decode::decode_frame;
/// use hgr_core::frame::{Framebuffer, Pixel};
/// let mut page = vec![0u8; 0x2000];
/// page[0x0400] = 0x01; // line 1, first byte
/// let raster = decode_frame(&Framebuffer::new(&page).unwrap());
/// assert_eq!(raster.get(0, 1), Some(Pixel::On));
/// assert_eq!(raster.get(2, 1), Some(Pixel::Off));
/// ```
#[must_use]
pub fn decode_frame(frame: &Framebuffer<'_>) -> Raster {
    decode_frame_with_stats(frame).0
}

/// [`decode_frame`], also returning counters for the pass.
///
/// Bytes are visited in ascending address order. A shifted group spills
/// its last pixel onto the first column of the next group on the same
/// line, so the byte at the higher address wins that column; the spill
/// of the last group on a line falls off the raster.
#[must_use]
pub fn decode_frame_with_stats(frame: &Framebuffer<'_>) -> (Raster, DecodeStats) {
    let mut raster = Raster::new();
    let mut stats = DecodeStats::default();

    for (addr, &val) in frame.bytes().iter().enumerate() {
        let Some(coord) = addr_to_xy(addr) else {
            stats.holes += 1;
            continue;
        };
        stats.visible += 1;
        if val & SHIFT_BIT != 0 {
            stats.shifted += 1;
        }
        stats.lit_bits += (val & !SHIFT_BIT).count_ones() as usize;

        let x0 = group_origin(coord.x, val);
        for (i, &px) in expand_byte(val).iter().enumerate() {
            raster.set(x0 + i, coord.y, px);
        }
    }

    (raster, stats)
}
