use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Upload ceiling shared by every image surface (posts, profiles, the raw
/// upload route).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024; // 5MB

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Webp => "image/webp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("File too large: {0} bytes (max {1} bytes)")]
    TooLarge(usize, usize),

    #[error("Only JPEG, PNG, and WEBP are allowed")]
    UnsupportedFormat,

    #[error("Invalid base64 image data: {0}")]
    InvalidEncoding(String),
}

/// Image bytes that passed the size cap and magic-byte sniff. The declared
/// content type of the request is ignored on purpose; only the leading bytes
/// decide the format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedImage {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl ValidatedImage {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ImageError> {
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ImageError::TooLarge(bytes.len(), MAX_IMAGE_BYTES));
        }

        let format = detect_format(&bytes).ok_or(ImageError::UnsupportedFormat)?;

        Ok(Self { bytes, format })
    }

    /// Accepts plain base64 or a `data:image/...;base64,` URL.
    pub fn from_base64(data: &str) -> Result<Self, ImageError> {
        let encoded = match data.split_once(";base64,") {
            Some((_, rest)) => rest,
            None => data,
        };

        let bytes = BASE64
            .decode(encoded.trim())
            .map_err(|e| ImageError::InvalidEncoding(e.to_string()))?;

        Self::from_bytes(bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    // JPEG: FF D8 FF
    if bytes.len() >= 3 && bytes[0] == 0xFF && bytes[1] == 0xD8 && bytes[2] == 0xFF {
        return Some(ImageFormat::Jpeg);
    }
    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if bytes.len() >= 8 && &bytes[..8] == b"\x89PNG\r\n\x1a\n" {
        return Some(ImageFormat::Png);
    }
    // WEBP: RIFF .... WEBP
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }
    None
}
