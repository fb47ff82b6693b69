//! Base64 `data:` URIs for inline images.

use std::{fmt, path::Path};

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};

/// A `data:<mime>;base64,<payload>` URI.
///
/// # Examples
///
/// ```
/// # use easel_core::raster::DataUri;
/// let uri = DataUri::encode("image/png", b"abc");
/// assert_eq!(uri.to_string(), "data:image/png;base64,YWJj");
/// assert_eq!(uri.decode_payload().unwrap(), b"abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime_type: String,
    payload: String,
}

impl DataUri {
    /// Base64-encodes `bytes` under the given MIME type.
    pub fn encode(mime_type: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        Self {
            mime_type: mime_type.into(),
            payload: BASE64_STANDARD.encode(bytes),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the base64 text after the comma.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Decodes the payload back into bytes.
    pub fn decode_payload(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64_STANDARD.decode(&self.payload)
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.payload)
    }
}

/// Picks a MIME type from the file name alone.
///
/// `.png`, `.gif` and `.svg` map to their types (case-insensitive); anything
/// else is assumed to be JPEG. File contents are not inspected.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let name = path.to_string_lossy().to_lowercase();
    if name.ends_with(".png") {
        "image/png"
    } else if name.ends_with(".gif") {
        "image/gif"
    } else if name.ends_with(".svg") {
        "image/svg+xml"
    } else {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_for_path() {
        assert_eq!(mime_type_for_path(Path::new("nature.png")), "image/png");
        assert_eq!(mime_type_for_path(Path::new("NATURE.PNG")), "image/png");
        assert_eq!(mime_type_for_path(Path::new("anim.gif")), "image/gif");
        assert_eq!(mime_type_for_path(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(mime_type_for_path(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("photo.webp")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("no_extension")), "image/jpeg");
    }

    #[test]
    fn test_data_uri_parts() {
        let uri = DataUri::encode("image/gif", [0xffu8, 0x00]);
        assert_eq!(uri.mime_type(), "image/gif");
        assert_eq!(uri.payload(), "/wA=");
        assert_eq!(uri.to_string(), "data:image/gif;base64,/wA=");
    }

    #[test]
    fn test_data_uri_empty_payload() {
        let uri = DataUri::encode("image/png", [0u8; 0]);
        assert_eq!(uri.to_string(), "data:image/png;base64,");
        assert!(uri.decode_payload().unwrap().is_empty());
    }
}
