use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use hgr_core::config::{Compression, OutputConfig, Palette};
use hgr_core::frame::Raster;

/// Writes a [`Raster`] as a 1-bit indexed PNG whose palette holds the
/// `off` color at index 0 and the `on` color at index 1.
///
/// # Example
/// ```no_run
/// use hgr_core::config::HgrConfig;
/// use hgr_core::frame::Raster;
/// use hgr_export::encode::PngExporter;
/// use std::path::Path;
///
/// let config = HgrConfig::default();
/// let exporter = PngExporter::new(config.palette, config.output);
/// exporter.save(&Raster::new(), Path::new("screen.png")).unwrap();
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PngExporter {
    palette: Palette,
    compression: png::Compression,
}

/// Pack samples eight per byte, most significant bit leftmost, each row
/// padded to a whole byte.
///
/// # Example
/// ```
/// use hgr_core::frame::{Pixel, Raster};
/// use hgr_export::encode::pack_indexed;
/// let mut raster = Raster::new();
/// raster.set(0, 0, Pixel::On);
/// raster.set(9, 0, Pixel::On);
/// let packed = pack_indexed(&raster);
/// assert_eq!(packed.len(), 70 * 192);
/// assert_eq!(&packed[..2], &[0b1000_0000, 0b0100_0000]);
/// ```
#[must_use]
pub fn pack_indexed(raster: &Raster) -> Vec<u8> {
    let stride = raster.width().div_ceil(8);
    let mut out = vec![0u8; stride * raster.height()];
    for (y, line) in out.chunks_exact_mut(stride).enumerate() {
        let Some(row) = raster.row(y) else {
            break;
        };
        for (x, px) in row.iter().enumerate() {
            line[x / 8] |= (px.index() as u8) << (7 - x % 8);
        }
    }
    out
}

impl PngExporter {
    /// Build an exporter from the palette and output settings.
    #[must_use]
    pub fn new(palette: Palette, output: OutputConfig) -> Self {
        let compression = match output.compression {
            Compression::Fast => png::Compression::Fast,
            Compression::Default => png::Compression::Default,
            Compression::Best => png::Compression::Best,
        };
        Self {
            palette,
            compression,
        }
    }

    /// Encode to any writer.
    ///
    /// # Errors
    /// Returns an error if the encoder or the writer fails.
    pub fn write_to<W: Write>(&self, raster: &Raster, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, raster.width() as u32, raster.height() as u32);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::One);
        encoder.set_palette(self.palette.entries().concat());
        encoder.set_compression(self.compression);

        let mut writer = encoder.write_header().context("PNG header")?;
        writer
            .write_image_data(&pack_indexed(raster))
            .context("PNG image data")?;
        writer.finish().context("PNG trailer")
    }

    /// Encode to a file, creating or truncating it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, raster: &Raster, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_to(raster, &mut writer)
            .with_context(|| format!("cannot write {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("cannot flush {}", path.display()))?;
        log::info!(
            "wrote {} ({}×{})",
            path.display(),
            raster.width(),
            raster.height()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use hgr_core::config::HgrConfig;
    use hgr_core::frame::Pixel;

    use super::*;

    fn exporter() -> PngExporter {
        let config = HgrConfig::default();
        PngExporter::new(config.palette, config.output)
    }

    #[test]
    fn output_is_one_bit_indexed_black_then_white() {
        let mut buf = Vec::new();
        exporter().write_to(&Raster::new(), &mut buf).unwrap();

        let reader = png::Decoder::new(Cursor::new(&buf)).read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (560, 192));
        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!(info.bit_depth, png::BitDepth::One);
        assert_eq!(
            info.palette.as_deref(),
            Some(&[0u8, 0, 0, 255, 255, 255][..])
        );
    }

    #[test]
    fn custom_palette_maps_samples() {
        let mut raster = Raster::new();
        raster.set(3, 2, Pixel::On);
        let palette = Palette {
            off: [0, 0, 128],
            on: [255, 200, 0],
        };
        let mut buf = Vec::new();
        PngExporter::new(palette, OutputConfig::default())
            .write_to(&raster, &mut buf)
            .unwrap();

        let img = image::load_from_memory(&buf).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (560, 192));
        assert_eq!(img.get_pixel(3, 2).0, [255, 200, 0]);
        assert_eq!(img.get_pixel(4, 2).0, [0, 0, 128]);
    }

    #[test]
    fn packing_is_msb_first_per_row() {
        let mut raster = Raster::new();
        raster.set(7, 0, Pixel::On);
        raster.set(559, 191, Pixel::On);
        let packed = pack_indexed(&raster);
        assert_eq!(packed[0], 0b0000_0001);
        assert_eq!(packed[packed.len() - 1], 0b0000_0001);
        assert_eq!(packed.iter().map(|b| b.count_ones()).sum::<u32>(), 2);
    }

    #[test]
    fn saved_file_decodes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut raster = Raster::new();
        raster.set(559, 191, Pixel::On);
        exporter().save(&raster, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (560, 192));
        assert_eq!(img.get_pixel(559, 191).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn unwritable_destination_names_path() {
        let err = exporter()
            .save(&Raster::new(), Path::new("/nonexistent/dir/out.png"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/out.png"));
    }
}
