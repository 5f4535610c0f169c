use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer as FirResizer};
use ig_core::error::ConvertError;
use ig_core::frame::GrayFrame;

/// Resizer réutilisable wrappant fast_image_resize, canal unique U8.
///
/// Produit un sample de luminance par cellule de la grille cible.
///
/// # Example
/// ```
/// use ig_source::resample::Resampler;
/// let r = Resampler::new();
/// ```
pub struct Resampler {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (the resize API wants a mut slice).
    src_buf: Vec<u8>,
}

impl Resampler {
    /// Create a new resampler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new(),
            src_buf: Vec::new(),
        }
    }

    /// Resample `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns [`ConvertError::Resample`] if the resize operation fails.
    ///
    /// # Example
    /// ```
    /// use ig_source::resample::Resampler;
    /// use ig_core::frame::GrayFrame;
    /// let mut r = Resampler::new();
    /// let src = GrayFrame::new(100, 100);
    /// let mut dst = GrayFrame::new(50, 25);
    /// r.resample_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resample_into(
        &mut self,
        src: &GrayFrame,
        dst: &mut GrayFrame,
    ) -> Result<(), ConvertError> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        let (width, height) = (dst.width, dst.height);

        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image = Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8)
            .map_err(|e| ConvertError::Resample {
                width,
                height,
                reason: format!("source invalide : {e}"),
            })?;

        let mut dst_image = Image::from_slice_u8(width, height, &mut dst.data, PixelType::U8)
            .map_err(|e| ConvertError::Resample {
                width,
                height,
                reason: format!("destination invalide : {e}"),
            })?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| ConvertError::Resample {
                width,
                height,
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns [`ConvertError::Resample`] if the resize operation fails.
///
/// # Example
/// ```
/// use ig_source::resample::resample_frame;
/// use ig_core::frame::GrayFrame;
/// let src = GrayFrame::new(100, 100);
/// let dst = resample_frame(&src, 50, 25).unwrap();
/// assert_eq!(dst.width, 50);
/// assert_eq!(dst.height, 25);
/// ```
pub fn resample_frame(src: &GrayFrame, width: u32, height: u32) -> Result<GrayFrame, ConvertError> {
    let mut dst = GrayFrame::new(width, height);
    let mut resampler = Resampler::new();
    resampler.resample_into(src, &mut dst)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resample_produces_requested_dimensions() {
        let src = GrayFrame::new(200, 100);
        let dst = resample_frame(&src, 120, 33).unwrap();
        assert_eq!(dst.width, 120);
        assert_eq!(dst.height, 33);
        assert_eq!(dst.data.len(), 120 * 33);
    }

    #[test]
    fn resample_same_dimensions_copies() {
        let mut src = GrayFrame::new(8, 8);
        src.data[0] = 200;
        let dst = resample_frame(&src, 8, 8).unwrap();
        assert_eq!(dst.data, src.data);
    }

    #[test]
    fn resample_uniform_source_stays_uniform() {
        let src = GrayFrame::from_raw(vec![137u8; 60 * 40], 60, 40).unwrap();
        let dst = resample_frame(&src, 30, 10).unwrap();
        // Convolution sur entrée uniforme : tolérance d'arrondi d'un niveau.
        assert!(dst.data.iter().all(|&v| (i16::from(v) - 137).abs() <= 1));
    }
}
