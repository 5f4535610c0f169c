use std::path::PathBuf;

use clap::Parser;

/// inkgrid — Image to ASCII art converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source : chemin vers une image (PNG, JPEG, WEBP, BMP, GIF).
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Dossier d'images à convertir par lots (récursif).
    #[arg(long)]
    pub batch_folder: Option<PathBuf>,

    /// Dossier de sortie pour le mode batch. Défaut : à côté des sources.
    #[arg(long)]
    pub batch_out: Option<PathBuf>,

    /// Largeur explicite en caractères (ignore les proportions).
    #[arg(long)]
    pub width: Option<u32>,

    /// Hauteur explicite en lignes.
    #[arg(long)]
    pub height: Option<u32>,

    /// Facteur d'échelle des dimensions par défaut.
    #[arg(long)]
    pub scale: Option<f32>,

    /// Rampe de caractères, du plus dense au plus clair.
    #[arg(long)]
    pub ramp: Option<String>,

    /// Ne pas conserver les proportions de la source.
    #[arg(long, default_value_t = false)]
    pub no_proportions: bool,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Fichier de sortie. Défaut : stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that exactly one input mode is provided.
    ///
    /// # Errors
    /// Returns an error if zero or both of `--image` and `--batch-folder`
    /// are specified.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        let count = usize::from(self.image.is_some()) + usize::from(self.batch_folder.is_some());

        if count == 0 {
            anyhow::bail!("Aucune source spécifiée. Utilisez --image ou --batch-folder.");
        }
        if count > 1 {
            anyhow::bail!("Une seule source à la fois : --image OU --batch-folder.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_exactly_one_source() {
        let none = Cli::try_parse_from(["inkgrid"]).unwrap();
        assert!(none.validate_source().is_err());

        let one = Cli::try_parse_from(["inkgrid", "--image", "a.png"]).unwrap();
        assert!(one.validate_source().is_ok());

        let both =
            Cli::try_parse_from(["inkgrid", "--image", "a.png", "--batch-folder", "dir"]).unwrap();
        assert!(both.validate_source().is_err());
    }

    #[test]
    fn dimension_flags_parse() {
        let cli = Cli::try_parse_from([
            "inkgrid", "--image", "a.png", "--width", "80", "--scale", "1.5",
        ])
        .unwrap();
        assert_eq!(cli.width, Some(80));
        assert_eq!(cli.height, None);
        assert_eq!(cli.scale, Some(1.5));
        assert!(!cli.no_proportions);
    }
}
