//! Export functionality for Easel drawings.
//!
//! This module provides the [`Exporter`] trait that defines how a drawing is
//! written out. It is the last step of the registry's workflow:
//!
//! ```text
//! create(id, size)
//!     ↓ add_* / embed_* / link_image
//! Drawing (ordered elements)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG 1.1 files via [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`EaselError::Export`] at the crate boundary.
//!
//! [`EaselError::Export`]: crate::EaselError::Export

/// SVG export backend.
pub mod svg;

use std::path::PathBuf;

use crate::drawing::Drawing;

/// Abstraction for drawing export backends.
pub trait Exporter: std::fmt::Debug {
    /// Exports one drawing to the backend's output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing the output fails.
    fn export_drawing(&mut self, drawing: &Drawing) -> Result<(), Error>;
}

/// Errors that can occur during drawing export.
#[derive(Debug)]
pub enum Error {
    /// An I/O error encountered while writing `path`.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}
