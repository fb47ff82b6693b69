//! CLI logic for the Easel page composer.
//!
//! This module reads a composition manifest, builds the drawings it
//! describes and writes each one to its SVG file.

pub mod error_adapter;
pub mod manifest;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use easel::{DrawingRegistry, EaselError};

use manifest::Manifest;

/// Run the Easel CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `EaselError` for:
/// - Configuration loading errors
/// - Manifest read or parse errors
/// - Invalid colors, sizes or images referenced by the manifest
/// - SVG export errors
pub fn run(args: &Args) -> Result<(), EaselError> {
    info!(manifest_path = args.manifest; "Processing manifest");

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.manifest)?;
    let manifest = Manifest::parse(&source)?;

    let mut registry = DrawingRegistry::new(&app_config)?;
    manifest.apply(&mut registry)?;
    registry.save_all()?;

    info!(drawings = registry.len(); "Drawings exported successfully");

    Ok(())
}
