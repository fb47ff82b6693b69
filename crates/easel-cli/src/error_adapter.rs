//! Error adapter for converting EaselError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use easel::EaselError;

/// Adapter that renders an [`EaselError`] through miette.
///
/// Each variant gets a stable diagnostic code, and most get a hint about the
/// usual fix.
pub struct ErrorAdapter<'a>(pub &'a EaselError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            EaselError::Io(_) => "easel::io",
            EaselError::DuplicateDocument(_) => "easel::duplicate_document",
            EaselError::UnknownDocument(_) => "easel::unknown_document",
            EaselError::UnknownColor(_) => "easel::unknown_color",
            EaselError::Color(_) => "easel::color",
            EaselError::Geometry(_) => "easel::geometry",
            EaselError::Raster(_) => "easel::raster",
            EaselError::Export(_) => "easel::export",
            EaselError::Config(_) => "easel::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            EaselError::Io(_) => "check that the file exists and is readable",
            EaselError::DuplicateDocument(_) => "each drawing id must be unique",
            EaselError::UnknownDocument(_) => "create the drawing before adding elements to it",
            EaselError::UnknownColor(_) => {
                "use a palette name (light_blue, dark_blue, dark_blue_2, black, white) or add one under [palette]"
            }
            EaselError::Color(_) => "colors are palette names or CSS colors such as `#336699`",
            EaselError::Geometry(_) => "image target sizes must be unitless or in `px`",
            EaselError::Raster(_) => return None,
            EaselError::Export(_) => "the output directory must already exist",
            EaselError::Config(_) => return None,
        };
        Some(Box::new(help))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_and_help() {
        let err = EaselError::UnknownColor("teal".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.to_string(), "unknown color `teal`");
        assert_eq!(adapter.code().unwrap().to_string(), "easel::unknown_color");
        assert!(adapter.help().unwrap().to_string().contains("[palette]"));
    }

    #[test]
    fn test_config_error_has_no_help() {
        let err = EaselError::Config("manifest: bad".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "easel::config");
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_source_is_forwarded() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = EaselError::from(io);
        let adapter = ErrorAdapter(&err);

        assert!(std::error::Error::source(&adapter).is_some());
    }
}
