use crate::error::ConvertError;

/// 10 caractères — rampe produit par défaut (dense→clair).
pub const RAMP_CLASSIC: &str = "@%#*+=-:. ";

/// 70 caractères — Paul Bourke, résolution maximale (dense→clair).
pub const RAMP_FULL: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Blocs Unicode — pseudo-pixels (dense→clair).
pub const RAMP_BLOCKS: &str = "█▓▒░ ";

/// Lookup table mapping luminance [0..255] → ramp character.
///
/// Index 0 of the ramp stands for the darkest sample, the last index for
/// the lightest. Pre-computed once per conversion for O(1) per-pixel cost.
///
/// # Example
/// ```
/// use ig_core::ramp::RampLut;
/// let lut = RampLut::new("@. ").unwrap();
/// assert_eq!(lut.map(0), '@');
/// assert_eq!(lut.map(255), ' ');
/// ```
pub struct RampLut {
    lut: [char; 256],
}

impl RampLut {
    /// Build a LUT from a ramp ordered darkest→lightest.
    ///
    /// A single-character ramp maps every sample to that character.
    ///
    /// # Errors
    /// Returns [`ConvertError::EmptyRamp`] if the ramp has no characters.
    pub fn new(ramp: &str) -> Result<Self, ConvertError> {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.is_empty() {
            return Err(ConvertError::EmptyRamp);
        }
        let len = chars.len();
        let mut lut = [' '; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            // floor((i / 255) * (len - 1)); integer math, caps at len - 1.
            *slot = chars[i * (len - 1) / 255];
        }
        Ok(Self { lut })
    }

    /// Map a luminance value [0..255] to a character.
    ///
    /// # Example
    /// ```
    /// use ig_core::ramp::RampLut;
    /// let lut = RampLut::new("@. ").unwrap();
    /// assert_eq!(lut.map(128), '.');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }
}
