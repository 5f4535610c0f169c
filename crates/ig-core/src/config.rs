use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ramp;

/// Paramètres d'une conversion, fournis par l'appelant.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ig_core::config::ConvertRequest;
/// let request = ConvertRequest::default();
/// assert!(request.keep_proportions);
/// assert_eq!(request.size_multiplier, 1.0);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConvertRequest {
    /// Largeur explicite en caractères. Prend le pas sur `keep_proportions`.
    pub width: Option<u32>,
    /// Hauteur explicite en caractères.
    pub height: Option<u32>,
    /// Conserver les proportions de l'image source (défaut : true).
    pub keep_proportions: bool,
    /// Facteur d'échelle appliqué aux dimensions par défaut [0.05, 8.0].
    pub size_multiplier: f32,
    /// Rampe de caractères, du plus dense au plus clair.
    pub ramp: String,
}

impl Default for ConvertRequest {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            keep_proportions: true,
            size_multiplier: 1.0,
            ramp: ramp::RAMP_CLASSIC.to_string(),
        }
    }
}

impl ConvertRequest {
    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.size_multiplier = self.size_multiplier.clamp(0.05, 8.0);
    }
}

/// Constantes de résolution de géométrie.
///
/// Les bornes et facteurs sont des choix produit, pas des invariants —
/// elles restent configurables tant que min ≤ max.
///
/// # Example
/// ```
/// use ig_core::config::GeometryPolicy;
/// let policy = GeometryPolicy::default();
/// assert_eq!(policy.base_max_width, 120);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GeometryPolicy {
    /// Correction de cellule caractère : les glyphes monospace sont plus
    /// hauts que larges, sans correction l'image paraît étirée.
    pub char_aspect: f32,
    /// Largeur max de base, avant application du multiplicateur.
    pub base_max_width: u32,
    /// Largeur de repli quand seule la hauteur est explicite.
    pub fallback_width: u32,
    /// Borne basse de largeur en caractères.
    pub min_width: u32,
    /// Borne haute de largeur en caractères.
    pub max_width: u32,
    /// Borne basse de hauteur en lignes.
    pub min_height: u32,
    /// Borne haute de hauteur en lignes.
    pub max_height: u32,
}

impl Default for GeometryPolicy {
    fn default() -> Self {
        Self {
            char_aspect: 0.55,
            base_max_width: 120,
            fallback_width: 100,
            min_width: 20,
            max_width: 300,
            min_height: 10,
            max_height: 200,
        }
    }
}

impl GeometryPolicy {
    /// Clamp all fields to coherent ranges (min ≤ max, aspect non nul).
    pub fn clamp_all(&mut self) {
        self.char_aspect = self.char_aspect.clamp(0.05, 2.0);
        self.min_width = self.min_width.max(1);
        self.min_height = self.min_height.max(1);
        self.max_width = self.max_width.max(self.min_width);
        self.max_height = self.max_height.max(self.min_height);
        self.base_max_width = self.base_max_width.clamp(self.min_width, self.max_width);
        self.fallback_width = self.fallback_width.clamp(self.min_width, self.max_width);
    }
}

/// Configuration complète : défauts de requête + politique de géométrie.
#[derive(Clone, Debug, Default)]
pub struct ConvertConfig {
    /// Défauts appliqués aux requêtes sans override.
    pub request: ConvertRequest,
    /// Politique de résolution des dimensions.
    pub geometry: GeometryPolicy,
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    convert: Option<ConvertSection>,
    geometry: Option<GeometrySection>,
}

/// Convert section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct ConvertSection {
    width: Option<u32>,
    height: Option<u32>,
    keep_proportions: Option<bool>,
    size_multiplier: Option<f32>,
    ramp: Option<String>,
}

/// Geometry section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct GeometrySection {
    char_aspect: Option<f32>,
    base_max_width: Option<u32>,
    fallback_width: Option<u32>,
    min_width: Option<u32>,
    max_width: Option<u32>,
    min_height: Option<u32>,
    max_height: Option<u32>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ig_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = ConvertConfig::default();

    if let Some(c) = file.convert {
        if let Some(v) = c.width {
            config.request.width = Some(v);
        }
        if let Some(v) = c.height {
            config.request.height = Some(v);
        }
        if let Some(v) = c.keep_proportions {
            config.request.keep_proportions = v;
        }
        if let Some(v) = c.size_multiplier {
            config.request.size_multiplier = v;
        }
        if let Some(v) = c.ramp {
            config.request.ramp = v;
        }
    }

    if let Some(g) = file.geometry {
        if let Some(v) = g.char_aspect {
            config.geometry.char_aspect = v;
        }
        if let Some(v) = g.base_max_width {
            config.geometry.base_max_width = v;
        }
        if let Some(v) = g.fallback_width {
            config.geometry.fallback_width = v;
        }
        if let Some(v) = g.min_width {
            config.geometry.min_width = v;
        }
        if let Some(v) = g.max_width {
            config.geometry.max_width = v;
        }
        if let Some(v) = g.min_height {
            config.geometry.min_height = v;
        }
        if let Some(v) = g.max_height {
            config.geometry.max_height = v;
        }
    }

    config.request.clamp_all();
    config.geometry.clamp_all();
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
