pub mod cli;
pub mod error;
pub mod manifest;
pub mod target;

pub use error::{Error, Result};
pub use manifest::ManifestDocument;
pub use target::TargetDescriptor;
