use thiserror::Error;

/// Errors raised by a single conversion call.
///
/// Every variant is terminal for the call that raised it: the engine
/// never retries and never returns partial output.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input bytes are not a supported, well-formed image.
    #[error("Image illisible ou format non supporté : {0}")]
    Decode(String),

    /// Dimension resolution produced an out-of-range grid.
    /// Signals a bug in the geometry policy, not a caller mistake.
    #[error("Géométrie invalide : {width}×{height}")]
    Geometry {
        /// Resolved width that failed validation.
        width: u32,
        /// Resolved height that failed validation.
        height: u32,
    },

    /// Resize failed against a frame that decoded correctly.
    #[error("Échec du rééchantillonnage en {width}×{height} : {reason}")]
    Resample {
        /// Requested output width.
        width: u32,
        /// Requested output height.
        height: u32,
        /// Underlying resize failure.
        reason: String,
    },

    /// The caller supplied an empty character ramp.
    #[error("La rampe de caractères est vide")]
    EmptyRamp,
}
