use ig_core::error::ConvertError;
use ig_core::frame::GrayFrame;

/// Décode des bytes d'image compressés en buffer de luminance.
///
/// Le format est détecté depuis les bytes (PNG, JPEG, WEBP, BMP, GIF).
/// Les dimensions natives sont celles du `GrayFrame` retourné.
///
/// # Errors
/// Returns [`ConvertError::Decode`] if the bytes are not a supported,
/// well-formed image.
///
/// # Example
/// ```
/// use ig_source::decode::decode;
/// assert!(decode(b"pas une image").is_err());
/// ```
pub fn decode(bytes: &[u8]) -> Result<GrayFrame, ConvertError> {
    let img = image::load_from_memory(bytes).map_err(|e| ConvertError::Decode(e.to_string()))?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    log::debug!("Image décodée : {width}×{height}");

    GrayFrame::from_raw(luma.into_raw(), width, height).ok_or_else(|| {
        ConvertError::Decode(format!("buffer de luminance incohérent pour {width}×{height}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::GrayImage::from_fn(width, height, |x, _| {
            image::Luma([(x % 256) as u8])
        });
        let mut bytes = Vec::new();
        image::DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decode_exposes_native_dimensions() {
        let frame = decode(&png_bytes(64, 48)).unwrap();
        assert_eq!(frame.width, 64);
        assert_eq!(frame.height, 48);
        assert_eq!(frame.data.len(), 64 * 48);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            decode(b"definitely not an image"),
            Err(ConvertError::Decode(_))
        ));
    }

    #[test]
    fn decode_rejects_truncated_png() {
        let mut bytes = png_bytes(32, 32);
        bytes.truncate(bytes.len() / 2);
        assert!(matches!(decode(&bytes), Err(ConvertError::Decode(_))));
    }
}
