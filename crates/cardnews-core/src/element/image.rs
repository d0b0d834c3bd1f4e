//! Image element attributes.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Raster formats accepted for embedded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
}

impl ImageFormat {
    /// Get MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ImageFormat::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }
        None
    }
}

/// Attributes of an image block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    /// Image source: a path, remote URL or `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ImageProps {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
        }
    }

    /// Embed raw image bytes as a `data:` URL. Returns `None` when the bytes
    /// are not a recognised raster format.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        let format = ImageFormat::from_magic_bytes(data)?;
        Some(Self::new(data_url(data, format)))
    }

    /// Whether the source is embedded rather than referenced.
    pub fn is_embedded(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| url.starts_with("data:"))
    }
}

/// Encode image bytes as a base64 `data:` URL.
pub fn data_url(data: &[u8], format: ImageFormat) -> String {
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(data))
}
