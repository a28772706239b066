use std::path::PathBuf;

use crate::error::{Error, Result};

/// A build-system description of a single Rust target, assembled from the
/// command-line flags. Immutable once constructed; one descriptor produces
/// exactly one manifest.
#[derive(Debug, Clone)]
pub struct TargetDescriptor {
    pub name: String,
    /// Source artifact locations. Carried for completeness but never
    /// emitted into the manifest.
    pub sources: Vec<String>,
    /// Crate root directory. Accepted, currently unused in output.
    pub crate_root: Option<PathBuf>,
    pub bin_path: Option<PathBuf>,
    pub lib_path: Option<PathBuf>,
    /// Each entry is both the dependency name and its relative path.
    pub path_deps: Vec<String>,
    /// Each entry has the shape `name=version`.
    pub external_deps: Vec<String>,
    pub output_manifest: PathBuf,
}

impl TargetDescriptor {
    /// Validates the required flags and assembles the descriptor. A missing
    /// or empty `--name`, a missing `--sources`, or a missing
    /// `--output-manifest` is a configuration error raised before any
    /// manifest work starts, so the output path is never touched.
    pub fn new(
        name: Option<String>,
        sources: Option<String>,
        crate_root: Option<PathBuf>,
        bin_path: Option<PathBuf>,
        lib_path: Option<PathBuf>,
        path_deps: Option<String>,
        external_deps: Option<String>,
        output_manifest: Option<PathBuf>,
    ) -> Result<Self> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(Error::Configuration("--name is required".to_string())),
        };

        let sources = match sources {
            Some(raw) => parse_string_list(&raw),
            None => return Err(Error::Configuration("--sources is required".to_string())),
        };

        let output_manifest = output_manifest
            .ok_or_else(|| Error::Configuration("--output-manifest is required".to_string()))?;

        Ok(Self {
            name,
            sources,
            crate_root,
            bin_path,
            lib_path,
            path_deps: path_deps.as_deref().map(parse_string_list).unwrap_or_default(),
            external_deps: external_deps.as_deref().map(parse_string_list).unwrap_or_default(),
            output_manifest,
        })
    }
}

/// Splits a `:`-delimited flag value into its elements. An empty raw value
/// is an empty list, not a single empty element.
pub fn parse_string_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(':').map(str::to_string).collect()
    }
}

/// Splits an external dependency of the shape `name=version` into its two
/// halves. Exactly one `=` with non-empty text on both sides is accepted;
/// anything else is malformed.
pub fn split_external_dep(dep: &str) -> Result<(&str, &str)> {
    let mut parts = dep.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(version), None) if !name.is_empty() && !version.is_empty() => {
            Ok((name, version))
        }
        _ => Err(Error::MalformedDependency(dep.to_string())),
    }
}
