// File format handlers
pub mod metadata;
pub mod rdt;

pub use metadata::FileMetadata;
pub use rdt::{load_codeplug, save_codeplug};
