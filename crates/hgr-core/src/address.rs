//! Coordinate ↔ address mapping for the HGR page.
//!
//! Scan lines are interleaved over three nested bands: a 64-line group
//! (stride 0x28), an 8-line row within the group (stride 0x80) and the
//! line offset within the row (stride 0x400). Every 0x80-byte block holds
//! three 40-byte lines followed by an 8-byte screen hole.

/// Size in bytes of one HGR page.
pub const PAGE_LEN: usize = 0x2000;
/// Logical columns (one per data bit).
pub const LOGICAL_WIDTH: usize = 280;
/// Scan lines.
pub const HEIGHT: usize = 192;
/// Logical columns packed in one byte.
pub const BITS_PER_BYTE: usize = 7;
/// Bytes covering one scan line.
pub const BYTES_PER_LINE: usize = LOGICAL_WIDTH / BITS_PER_BYTE;

const GROUP_STRIDE: usize = 0x28;
const ROW_STRIDE: usize = 0x80;
const OFFSET_STRIDE: usize = 0x400;
const HOLE_START: usize = GROUP_STRIDE * 3;

/// A logical pixel position. `x` is always the first column of its byte
/// group when produced by [`addr_to_xy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Logical column, 0..280.
    pub x: usize,
    /// Scan line, 0..192.
    pub y: usize,
}

/// Address of the byte holding logical pixel (x, y).
///
/// The seven columns of a byte group share one address.
///
/// # Example
/// ```
/// use hgr_core::address::xy_to_addr;
/// assert_eq!(xy_to_addr(0, 0), 0x0000);
/// assert_eq!(xy_to_addr(0, 1), 0x0400);
/// assert_eq!(xy_to_addr(0, 8), 0x0080);
/// assert_eq!(xy_to_addr(0, 64), 0x0028);
/// assert_eq!(xy_to_addr(279, 191), 0x1FF7);
/// ```
#[inline]
#[must_use]
pub fn xy_to_addr(x: usize, y: usize) -> usize {
    debug_assert!(x < LOGICAL_WIDTH && y < HEIGHT, "coordinate out of range");
    let offset = y % 8;
    let row = (y / 8) % 8;
    let group = y / 64;
    GROUP_STRIDE * group + ROW_STRIDE * row + OFFSET_STRIDE * offset + x / BITS_PER_BYTE
}

/// True when `addr` lies in one of the 8-byte holes at the tail of each
/// 0x80 block, or past the end of the page.
///
/// # Example
/// ```
/// use hgr_core::address::is_hole;
/// assert!(!is_hole(0x0077));
/// assert!(is_hole(0x0078));
/// assert!(is_hole(0x2000));
/// ```
#[inline]
#[must_use]
pub fn is_hole(addr: usize) -> bool {
    addr >= PAGE_LEN || addr % ROW_STRIDE >= HOLE_START
}

/// Logical coordinate of the byte at `addr`, or `None` for a screen hole.
///
/// # Example
/// ```
/// use hgr_core::address::{addr_to_xy, Coord};
/// assert_eq!(addr_to_xy(0x0400), Some(Coord { x: 0, y: 1 }));
/// assert_eq!(addr_to_xy(0x0029), Some(Coord { x: 7, y: 64 }));
/// assert_eq!(addr_to_xy(0x007F), None);
/// ```
#[inline]
#[must_use]
pub fn addr_to_xy(addr: usize) -> Option<Coord> {
    if is_hole(addr) {
        return None;
    }
    let in_block = addr % ROW_STRIDE;
    let group = in_block / GROUP_STRIDE;
    let x = (in_block % GROUP_STRIDE) * BITS_PER_BYTE;
    let offset = addr / OFFSET_STRIDE;
    let row = (addr - GROUP_STRIDE * group - OFFSET_STRIDE * offset) / ROW_STRIDE;
    Some(Coord {
        x,
        y: group * 64 + row * 8 + offset,
    })
}
