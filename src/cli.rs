use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::manifest::ManifestBuilder;
use crate::target::TargetDescriptor;

// Required flags are validated in `TargetDescriptor::new` rather than by
// clap, so that a missing flag follows the documented exit contract
// (diagnostic on stderr, exit code 1) instead of clap's usage error.
#[derive(Parser)]
#[command(name = "cargo-synth")]
#[command(about = "Synthesizes a Cargo manifest from a build-system target description")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Package name
    #[arg(long)]
    pub name: Option<String>,

    /// Source artifact locations, `:`-delimited
    #[arg(long)]
    pub sources: Option<String>,

    /// Crate root directory
    #[arg(long)]
    pub crate_root: Option<PathBuf>,

    /// Binary entry-point source file
    #[arg(long)]
    pub bin_path: Option<PathBuf>,

    /// Library entry-point source file
    #[arg(long)]
    pub lib_path: Option<PathBuf>,

    /// Sibling-package dependency paths, `:`-delimited
    #[arg(long)]
    pub path_deps: Option<String>,

    /// External dependencies, `:`-delimited, each `name=version`
    #[arg(long)]
    pub external_deps: Option<String>,

    /// Destination file for the generated manifest
    #[arg(long)]
    pub output_manifest: Option<PathBuf>,
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let descriptor = TargetDescriptor::new(
        cli.name,
        cli.sources,
        cli.crate_root,
        cli.bin_path,
        cli.lib_path,
        cli.path_deps,
        cli.external_deps,
        cli.output_manifest,
    )?;

    synthesize(&descriptor)
}

/// Builds, serializes, and writes the manifest for one descriptor.
pub fn synthesize(descriptor: &TargetDescriptor) -> Result<()> {
    debug!(name = %descriptor.name, "building manifest");

    let builder = ManifestBuilder::new();

    let document = builder
        .build(descriptor)
        .context("Failed to build manifest")?;

    let text = builder
        .serialize(&document)
        .context("Failed to serialize manifest")?;

    builder
        .write(&text, &descriptor.output_manifest)
        .context("Failed to write manifest")?;

    info!(path = %descriptor.output_manifest.display(), "manifest written");
    println!(
        "Generated manifest: {}",
        descriptor.output_manifest.display()
    );

    Ok(())
}
