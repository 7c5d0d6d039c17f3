use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hgr_core::address::PAGE_LEN;
use hgr_core::error::CoreError;
use hgr_core::frame::Framebuffer;

/// A page dump read from disk, length already checked.
///
/// # Example
/// ```no_run
/// use hgr_source::dump::PageDump;
/// use std::path::Path;
/// let dump = PageDump::open(Path::new("screen.bin")).unwrap();
/// let frame = dump.frame();
/// ```
#[derive(Debug)]
pub struct PageDump {
    page: Box<[u8; PAGE_LEN]>,
    path: PathBuf,
}

impl PageDump {
    /// Read `path` and check it holds exactly one HGR page.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not 0x2000 bytes.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        Self::from_bytes(bytes, path)
    }

    /// Wrap bytes obtained elsewhere; `path` is only used in messages.
    ///
    /// # Errors
    /// Returns an error if `bytes` is not 0x2000 bytes long.
    pub fn from_bytes(bytes: Vec<u8>, path: &Path) -> Result<Self> {
        let len = bytes.len();
        let page = Box::<[u8; PAGE_LEN]>::try_from(bytes.into_boxed_slice())
            .map_err(|_| CoreError::InputSize {
                expected: PAGE_LEN,
                actual: len,
            })
            .with_context(|| {
                format!(
                    "expected to read {PAGE_LEN:#06x} bytes from {}; read {len:#06x}",
                    path.display()
                )
            })?;
        log::info!("loaded {} ({len} bytes)", path.display());
        Ok(Self {
            page,
            path: path.to_path_buf(),
        })
    }

    /// Borrow the page for decoding.
    #[must_use]
    pub fn frame(&self) -> Framebuffer<'_> {
        Framebuffer::from_page(&self.page)
    }

    /// Where the dump came from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Convenience wrapper around [`PageDump::open`].
///
/// # Errors
/// Returns an error if the file cannot be read or has the wrong size.
pub fn load_dump(path: &Path) -> Result<PageDump> {
    PageDump::open(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(len: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0x55u8; len]).unwrap();
        file
    }

    #[test]
    fn loads_exact_page() {
        let file = write_temp(PAGE_LEN);
        let dump = load_dump(file.path()).unwrap();
        assert_eq!(dump.frame().bytes().len(), PAGE_LEN);
        assert_eq!(dump.frame().bytes()[0], 0x55);
        assert_eq!(dump.path(), file.path());
    }

    #[test]
    fn rejects_half_page() {
        let file = write_temp(0x1000);
        let err = load_dump(file.path()).unwrap_err();
        assert!(err.to_string().contains("read 0x1000"), "{err}");
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InputSize { actual: 0x1000, .. })
        ));
    }

    #[test]
    fn rejects_double_page() {
        let file = write_temp(0x4000);
        assert!(load_dump(file.path()).is_err());
    }

    #[test]
    fn from_bytes_reports_size_once() {
        let err = PageDump::from_bytes(vec![0u8; 0x1FFF], Path::new("short.bin")).unwrap_err();
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        assert_eq!(chain.len(), 2, "{chain:?}");
        assert!(chain[0].starts_with("expected to read 0x2000 bytes from short.bin"));
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InputSize { expected: 0x2000, actual: 0x1FFF })
        ));
    }

    #[test]
    fn from_bytes_keeps_contents() {
        let mut bytes = vec![0u8; PAGE_LEN];
        bytes[0x1FFF] = 0xA5;
        let dump = PageDump::from_bytes(bytes, Path::new("page.bin")).unwrap();
        assert_eq!(dump.frame().bytes()[0x1FFF], 0xA5);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_dump(Path::new("/nonexistent/screen.bin")).unwrap_err();
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
