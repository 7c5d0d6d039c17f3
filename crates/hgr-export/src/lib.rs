/// Raster encoding for hgrdump.
///
/// Packs decoded samples into a 1-bit indexed PNG with a two-entry palette.
pub mod encode;

pub use encode::PngExporter;
