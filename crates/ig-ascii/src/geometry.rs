use ig_core::config::{ConvertRequest, GeometryPolicy};
use ig_core::error::ConvertError;

/// Dimensions cibles de la grille de caractères.
///
/// La hauteur peut rester indéterminée après résolution (dimensions
/// explicites partielles) : elle est alors dérivée du ratio natif de
/// l'image par [`ResolvedGeometry::fill`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedGeometry {
    /// Largeur cible en caractères, toujours ≥ 1.
    pub width: u32,
    /// Hauteur cible en lignes, ou `None` si dérivée du ratio.
    pub height: Option<u32>,
}

impl ResolvedGeometry {
    /// Finalise la hauteur à partir du ratio natif si elle n'est pas fixée.
    ///
    /// Sur ce chemin la correction de cellule ne s'applique pas : une
    /// largeur explicite obtient les proportions réelles de l'image
    /// (plancher d'une ligne).
    ///
    /// # Errors
    /// Returns [`ConvertError::Geometry`] if a dimension resolves to zero.
    /// Unreachable with a clamped policy; kept as an invariant check.
    pub fn fill(self, native_width: u32, native_height: u32) -> Result<(u32, u32), ConvertError> {
        let height = match self.height {
            Some(h) => h,
            None => {
                let aspect = f64::from(native_height) / f64::from(native_width).max(1.0);
                ((f64::from(self.width) * aspect).round() as u32).max(1)
            }
        };
        if self.width == 0 || height == 0 {
            return Err(ConvertError::Geometry {
                width: self.width,
                height,
            });
        }
        Ok((self.width, height))
    }
}

/// Résout les dimensions de la grille depuis les dimensions natives et la
/// requête.
///
/// Trois chemins :
/// - dimensions explicites : elles priment, `keep_proportions` est ignoré,
///   une largeur manquante retombe sur `policy.fallback_width` ;
/// - `keep_proportions` désactivé sans dimensions : largeur de repli,
///   hauteur dérivée du ratio ;
/// - chemin proportionnel par défaut : largeur bornée par
///   `base_max_width × size_multiplier`, hauteur corrigée par
///   `char_aspect` (les glyphes monospace sont plus hauts que larges),
///   le tout clampé aux bornes de la politique.
///
/// # Example
/// ```
/// use ig_ascii::geometry::resolve;
/// use ig_core::config::{ConvertRequest, GeometryPolicy};
/// let g = resolve(200, 100, &ConvertRequest::default(), &GeometryPolicy::default());
/// assert_eq!(g.width, 120);
/// assert_eq!(g.height, Some(33));
/// ```
#[must_use]
pub fn resolve(
    native_width: u32,
    native_height: u32,
    request: &ConvertRequest,
    policy: &GeometryPolicy,
) -> ResolvedGeometry {
    // Chemin explicite : les dimensions fournies priment.
    if request.width.is_some() || request.height.is_some() {
        let width = request
            .width
            .unwrap_or(policy.fallback_width)
            .clamp(policy.min_width, policy.max_width);
        let height = request
            .height
            .map(|h| h.clamp(policy.min_height, policy.max_height));
        return ResolvedGeometry { width, height };
    }

    if !request.keep_proportions {
        return ResolvedGeometry {
            width: policy.fallback_width.clamp(policy.min_width, policy.max_width),
            height: None,
        };
    }

    let mult = f64::from(request.size_multiplier);
    let correction = f64::from(policy.char_aspect);
    let scaled_max = (f64::from(policy.base_max_width) * mult).round() as u32;
    let aspect = f64::from(native_height) / f64::from(native_width).max(1.0);

    let (width, height) = if native_width > scaled_max {
        let height = (f64::from(scaled_max) * aspect * correction).round() as u32;
        (scaled_max, height)
    } else {
        let width = (f64::from(native_width) * mult).round() as u32;
        let height = (f64::from(native_height) * mult * correction).round() as u32;
        (width, height)
    };

    ResolvedGeometry {
        width: width.clamp(policy.min_width, policy.max_width),
        height: Some(height.clamp(policy.min_height, policy.max_height)),
    }
}
