/// Apple II high-resolution graphics page decoding.
///
/// Maps between logical pixel coordinates and page addresses, and expands
/// a raw 8 KiB page dump into a two-color raster. Configuration is parsed
/// from text here; reading files is left to the callers.

pub mod address;
pub mod config;
pub mod decode;
pub mod error;
pub mod frame;

pub use address::{Coord, addr_to_xy, xy_to_addr};
pub use config::HgrConfig;
pub use decode::{DecodeStats, decode_frame, decode_frame_with_stats};
pub use error::CoreError;
pub use frame::{Framebuffer, Pixel, Raster};
