//! Cover art blurring for the late-game hint.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::error::AppError;

/// Edge length of the blurred hint image.
const COVER_SIZE: u32 = 300;
const JPEG_QUALITY: u8 = 90;

/// Downscales cover art to a square and applies a two-pass gaussian blur so
/// the artwork hints at the song without giving it away.
pub fn blur_cover(original: &[u8]) -> Result<Vec<u8>, AppError> {
    let cover = image::load_from_memory(original)?
        .resize_to_fill(COVER_SIZE, COVER_SIZE, FilterType::Triangle)
        .blur(20.0)
        .blur(10.0);

    let mut encoded = Vec::new();
    cover.write_with_encoder(JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY))?;
    Ok(encoded)
}

/// Blurred cover as base64 for direct embedding in a data URL.
pub fn blur_cover_base64(original: &[u8]) -> Result<String, AppError> {
    Ok(STANDARD.encode(blur_cover(original)?))
}
