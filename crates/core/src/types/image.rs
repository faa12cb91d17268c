//! Embeddable image representation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`EmbeddedImage`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbeddedImageError {
    /// The input string is empty.
    #[error("image cannot be empty")]
    Empty,
    /// The input does not carry a `data:image/...` format marker.
    #[error("image must be a data URL with an image media type")]
    MissingFormatMarker,
    /// The input is not base64 encoded.
    #[error("image data must be base64 encoded")]
    NotBase64,
}

/// An image encoded for inline storage and transmission.
///
/// The representation is a self-describing data URL
/// (`data:image/<format>;base64,<payload>`), so a record carries its own
/// image without referencing a separate binary asset. Construction goes
/// through [`EmbeddedImage::parse`], which verifies the format marker; the
/// payload bytes themselves are not decoded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct EmbeddedImage(String);

impl EmbeddedImage {
    const MARKER: &'static str = "data:image/";
    const ENCODING: &'static str = ";base64,";

    /// Parse an `EmbeddedImage` from a data-URL string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, lacks the `data:image/`
    /// marker, or is not marked as base64 encoded.
    pub fn parse(s: &str) -> Result<Self, EmbeddedImageError> {
        if s.is_empty() {
            return Err(EmbeddedImageError::Empty);
        }

        if !s.starts_with(Self::MARKER) {
            return Err(EmbeddedImageError::MissingFormatMarker);
        }

        if !s.contains(Self::ENCODING) {
            return Err(EmbeddedImageError::NotBase64);
        }

        Ok(Self(s.to_owned()))
    }

    /// Build an `EmbeddedImage` from a media subtype and base64 payload.
    ///
    /// The caller is responsible for `payload` being valid base64; this is
    /// intended for encoders that just produced it.
    #[must_use]
    pub fn from_encoded(subtype: &str, payload: &str) -> Self {
        Self(format!("data:image/{subtype}{}{payload}", Self::ENCODING))
    }

    /// Returns the full data URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the base64 payload after the format marker.
    #[must_use]
    pub fn payload(&self) -> &str {
        self.0
            .split_once(Self::ENCODING)
            .map_or("", |(_, payload)| payload)
    }

    /// Consumes the `EmbeddedImage` and returns the inner data URL.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmbeddedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmbeddedImage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(EmbeddedImage::parse("data:image/jpeg;base64,/9j/4AAQ").is_ok());
        assert!(EmbeddedImage::parse("data:image/png;base64,iVBOR").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(EmbeddedImage::parse(""), Err(EmbeddedImageError::Empty));
    }

    #[test]
    fn test_parse_missing_marker() {
        assert_eq!(
            EmbeddedImage::parse("https://example.com/pizza.jpg"),
            Err(EmbeddedImageError::MissingFormatMarker)
        );
    }

    #[test]
    fn test_parse_not_base64() {
        assert_eq!(
            EmbeddedImage::parse("data:image/svg+xml,<svg/>"),
            Err(EmbeddedImageError::NotBase64)
        );
    }

    #[test]
    fn test_from_encoded_roundtrip() {
        let image = EmbeddedImage::from_encoded("jpeg", "aGVsbG8=");
        assert_eq!(image.as_str(), "data:image/jpeg;base64,aGVsbG8=");
        assert_eq!(image.payload(), "aGVsbG8=");
        assert!(EmbeddedImage::parse(image.as_str()).is_ok());
    }
}
