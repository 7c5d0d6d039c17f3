/// Page dump loading for hgrdump.
pub mod dump;

pub use dump::{PageDump, load_dump};
