use ig_core::config::{ConvertRequest, GeometryPolicy};
use ig_core::error::ConvertError;
use ig_core::frame::AsciiCanvas;
use ig_core::ramp::RampLut;
use ig_source::{decode, resample};

use crate::{geometry, render};

/// Convertit des bytes d'image en art ASCII avec la politique par défaut.
///
/// # Errors
/// Returns one of the four terminal [`ConvertError`] kinds; no partial
/// output is ever produced.
///
/// # Example
/// ```no_run
/// use ig_ascii::convert;
/// use ig_core::config::ConvertRequest;
/// let bytes = std::fs::read("photo.png").unwrap();
/// let canvas = convert(&bytes, &ConvertRequest::default()).unwrap();
/// println!("{}", canvas.as_str());
/// ```
pub fn convert(bytes: &[u8], request: &ConvertRequest) -> Result<AsciiCanvas, ConvertError> {
    convert_with_policy(bytes, request, &GeometryPolicy::default())
}

/// Pipeline complet : rampe → décodage → géométrie → rééchantillonnage → rendu.
///
/// Sans état partagé : chaque appel est indépendant et peut s'exécuter en
/// parallèle d'autres conversions. Tous les buffers sont locaux à l'appel.
///
/// # Errors
/// Returns one of the four terminal [`ConvertError`] kinds.
pub fn convert_with_policy(
    bytes: &[u8],
    request: &ConvertRequest,
    policy: &GeometryPolicy,
) -> Result<AsciiCanvas, ConvertError> {
    // La rampe est validée avant tout travail de décodage.
    let lut = RampLut::new(&request.ramp)?;

    let source = decode::decode(bytes)?;
    let resolved = geometry::resolve(source.width, source.height, request, policy);
    let (width, height) = resolved.fill(source.width, source.height)?;
    log::debug!(
        "Grille résolue : {width}×{height} (source {}×{})",
        source.width,
        source.height
    );

    let grid = resample::resample_frame(&source, width, height)?;
    Ok(render::render(&grid, &lut))
}
