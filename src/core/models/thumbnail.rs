use std::io::Cursor;
use std::sync::Arc;

use anyhow::{Context, Result};
use image::{ImageFormat, ImageReader};

/// Raw poster bytes that were recognised as an image.
#[derive(Clone, PartialEq, Eq)]
pub struct ThumbnailImage {
    bytes: Arc<[u8]>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for ThumbnailImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailImage")
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ThumbnailImage {
    /// Sniffs the format and reads the dimensions from the header without
    /// decoding pixel data.
    pub fn build_from_bytes(raw_bytes: Vec<u8>) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(raw_bytes.as_slice()))
            .with_guessed_format()
            .context("Failed to inspect image bytes")?;

        let format = reader
            .format()
            .ok_or_else(|| anyhow::anyhow!("Unrecognised image format"))?;
        let (width, height) = reader
            .into_dimensions()
            .context("Failed to read image dimensions")?;

        log::debug!(
            "[THUMBNAIL] recognised {:?} image {}x{} ({} bytes)",
            format,
            width,
            height,
            raw_bytes.len()
        );

        Ok(Self {
            bytes: Arc::from(raw_bytes),
            format,
            width,
            height,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Outcome of a thumbnail load. Failures collapse into `Placeholder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Image(ThumbnailImage),
    Placeholder,
}

impl Thumbnail {
    pub fn image(&self) -> Option<&ThumbnailImage> {
        match self {
            Thumbnail::Image(image) => Some(image),
            Thumbnail::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Thumbnail::Placeholder)
    }
}


#[cfg(test)]
mod tests {
    use super::test_images::TINY_GIF;
    use super::*;

    #[test]
    fn test_build_from_bytes_reads_format_and_dimensions() {
        let image = ThumbnailImage::build_from_bytes(TINY_GIF.to_vec()).unwrap();

        assert_eq!(image.format, ImageFormat::Gif);
        assert_eq!((image.width, image.height), (1, 1));
        assert_eq!(image.bytes(), TINY_GIF);
    }

    #[test]
    fn test_build_from_bytes_rejects_non_image_body() {
        let result = ThumbnailImage::build_from_bytes(b"<html>not found</html>".to_vec());
        assert!(result.is_err());
    }

    #[test]
    fn test_build_from_bytes_rejects_empty_body() {
        assert!(ThumbnailImage::build_from_bytes(Vec::new()).is_err());
    }

    #[test]
    fn test_placeholder_has_no_image() {
        let thumbnail = Thumbnail::Placeholder;

        assert!(thumbnail.is_placeholder());
        assert!(thumbnail.image().is_none());
    }

    #[test]
    fn test_debug_omits_raw_bytes() {
        let image = ThumbnailImage::build_from_bytes(TINY_GIF.to_vec()).unwrap();
        let debug_str = format!("{:?}", image);

        assert!(debug_str.contains("Gif"));
        assert!(debug_str.contains("len"));
    }
}
