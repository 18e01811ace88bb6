//! Recognised upload formats.

use serde::{Deserialize, Serialize};

/// Image container formats the studio can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
    Gif,
    Bmp,
}

impl ImageFormat {
    /// The decodable subset of `image`'s formats.
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(ImageFormat::Png),
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::WebP => Some(ImageFormat::WebP),
            image::ImageFormat::Gif => Some(ImageFormat::Gif),
            image::ImageFormat::Bmp => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }

    /// MIME type for this format.
    pub fn mime_type(self) -> &'static str {
        self.to_image_format().to_mime_type()
    }

    /// Detect format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        image::ImageFormat::from_extension(ext).and_then(Self::from_image_format)
    }

    /// Detect format from the extension of a file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Detect format from the file signature.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        image::guess_format(data).ok().and_then(Self::from_image_format)
    }

    /// Content sniffing first, file name as a fallback.
    pub fn detect(name: &str, data: &[u8]) -> Option<Self> {
        Self::from_magic_bytes(data).or_else(|| Self::from_file_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("webp"), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::from_extension("gif"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::from_extension("tiff"), None);
        assert_eq!(ImageFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(ImageFormat::from_file_name("holiday.photo.JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_file_name("README"), None);
    }

    #[test]
    fn test_magic_bytes() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(ImageFormat::from_magic_bytes(&png), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_magic_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_magic_bytes(b"BM\0\0\0\0"), Some(ImageFormat::Bmp));
        // Recognised by `image`, but not a format uploads accept.
        assert_eq!(ImageFormat::from_magic_bytes(b"II*\0\0\0\0\0"), None);
        assert_eq!(ImageFormat::from_magic_bytes(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::from_magic_bytes(b"RIFF\0\0\0\0WEBPVP8 "), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::from_magic_bytes(b"x"), None);
    }

    #[test]
    fn test_detect_prefers_content() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(ImageFormat::detect("photo.jpg", &png), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::detect("photo.jpg", b"??"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::detect("notes.txt", b"hello"), None);
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::WebP.mime_type(), "image/webp");
    }
}
