use std::io;
use std::path::PathBuf;

/// Errors that can occur while synthesizing a manifest. All of them are
/// terminal for the invocation; there is no retry path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("malformed external dependency `{0}`: expected exactly one `name=version` pair")]
    MalformedDependency(String),

    #[error("invalid entry point `{}`: expected a file name ending in `.rs`", .0.display())]
    InvalidEntryPoint(PathBuf),

    #[error("failed to write manifest to {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode manifest as TOML")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for manifest synthesis operations
pub type Result<T> = std::result::Result<T, Error>;
