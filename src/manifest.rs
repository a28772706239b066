use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::target::{self, TargetDescriptor};

/// Placeholder version stamped on every synthesized package. The build
/// orchestrator that consumes the manifest overwrites or ignores it.
pub const PLACEHOLDER_VERSION: &str = "0.0.0";

const SOURCE_SUFFIX: &str = ".rs";

/// In-memory form of a generated Cargo manifest: a `package` section, a
/// `dependencies` section, and at most one of `lib`/`bin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub package: PackageSection,
    pub dependencies: BTreeMap<String, DependencySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib: Option<LibTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<Vec<BinTarget>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSection {
    pub name: String,
    pub version: String,
}

/// A dependency is either a literal registry version or a relative path to
/// a sibling package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencySpec {
    Version(String),
    Path { path: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibTarget {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinTarget {
    pub name: String,
    pub path: String,
}

/// Synthesizes a Cargo manifest from a target descriptor: builds the
/// section tree, encodes it as TOML, and writes it to the output path.
pub struct ManifestBuilder;

impl ManifestBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds the manifest tree for one descriptor.
    pub fn build(&self, descriptor: &TargetDescriptor) -> Result<ManifestDocument> {
        let package = PackageSection {
            name: descriptor.name.clone(),
            version: PLACEHOLDER_VERSION.to_string(),
        };

        let mut dependencies = BTreeMap::new();
        for dep in &descriptor.path_deps {
            // One input string serves as both the dependency name and its
            // relative path; downstream consumers rely on that.
            dependencies.insert(dep.clone(), DependencySpec::Path { path: dep.clone() });
        }
        for dep in &descriptor.external_deps {
            let (name, version) = target::split_external_dep(dep)?;
            // A collision with a path dependency resolves last-write-wins.
            dependencies.insert(name.to_string(), DependencySpec::Version(version.to_string()));
        }

        let mut document = ManifestDocument {
            package,
            dependencies,
            lib: None,
            bin: None,
        };

        // Library takes precedence when both entry points are given.
        if let Some(lib_path) = &descriptor.lib_path {
            document.lib = Some(LibTarget {
                path: entry_file_name(lib_path)?,
            });
        } else if let Some(bin_path) = &descriptor.bin_path {
            let file_name = entry_file_name(bin_path)?;
            let stem = file_name
                .strip_suffix(SOURCE_SUFFIX)
                .ok_or_else(|| Error::InvalidEntryPoint(bin_path.clone()))?;
            document.bin = Some(vec![BinTarget {
                name: stem.to_string(),
                path: file_name.clone(),
            }]);
        }

        Ok(document)
    }

    /// Encodes the manifest tree as TOML text.
    pub fn serialize(&self, document: &ManifestDocument) -> Result<String> {
        Ok(toml::to_string(document)?)
    }

    /// Writes the manifest text, overwriting any existing file. The handle
    /// is closed on every exit path; a failed write may still leave a
    /// truncated file behind.
    pub fn write(&self, text: &str, path: &Path) -> Result<()> {
        fs::write(path, text.as_bytes()).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Final path component of an entry-point path. The manifest is placed next
/// to the entry file, so the directory portion is dropped.
fn entry_file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidEntryPoint(path.to_path_buf()))
}
