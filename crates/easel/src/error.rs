//! Error types for Easel operations.
//!
//! This module provides the main error type [`EaselError`] which wraps
//! the error conditions of the registry and its collaborators.

use std::io;

use thiserror::Error;

use easel_core::{
    color::{ColorError, UnknownColorError},
    geometry::GeometryError,
    raster::RasterError,
};

/// The main error type for Easel operations.
#[derive(Debug, Error)]
pub enum EaselError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("a drawing named `{0}` already exists")]
    DuplicateDocument(String),

    #[error("no drawing named `{0}`")]
    UnknownDocument(String),

    #[error("unknown color `{0}`")]
    UnknownColor(String),

    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<crate::export::Error> for EaselError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<UnknownColorError> for EaselError {
    fn from(error: UnknownColorError) -> Self {
        Self::UnknownColor(error.0)
    }
}
