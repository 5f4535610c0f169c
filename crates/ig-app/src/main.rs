use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use ig_core::config::ConvertConfig;

pub mod batch;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider la source
    cli.validate_source()?;

    // 4. Charger la config et appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    apply_overrides(&cli, &mut config);

    // Conversion par lots
    if let Some(folder) = cli.batch_folder.as_deref() {
        let converted = batch::run_batch(folder, cli.batch_out.as_deref(), &config)?;
        log::info!("{converted} images converties.");
        return Ok(());
    }

    // Conversion simple
    let Some(image) = cli.image.as_deref() else {
        anyhow::bail!("Aucune source spécifiée.");
    };
    let bytes =
        std::fs::read(image).with_context(|| format!("Impossible de lire {}", image.display()))?;
    let canvas = ig_ascii::convert_with_policy(&bytes, &config.request, &config.geometry)?;

    match cli.output.as_deref() {
        Some(out) => {
            std::fs::write(out, canvas.as_str())
                .with_context(|| format!("Impossible d'écrire {}", out.display()))?;
            log::info!("Canvas {}×{} écrit dans {}", canvas.width(), canvas.height(), out.display());
        }
        None => {
            std::io::stdout().write_all(canvas.as_str().as_bytes())?;
        }
    }

    Ok(())
}

/// Resolve config: missing file falls back to defaults with a warning.
fn resolve_config(cli: &cli::Cli) -> Result<ConvertConfig> {
    if cli.config.exists() {
        ig_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(ConvertConfig::default())
    }
}

/// Apply CLI flags on top of the loaded configuration.
fn apply_overrides(cli: &cli::Cli, config: &mut ConvertConfig) {
    if let Some(width) = cli.width {
        config.request.width = Some(width);
    }
    if let Some(height) = cli.height {
        config.request.height = Some(height);
    }
    if let Some(scale) = cli.scale {
        config.request.size_multiplier = scale;
    }
    if let Some(ref ramp) = cli.ramp {
        config.request.ramp = ramp.clone();
    }
    if cli.no_proportions {
        config.request.keep_proportions = false;
    }
    config.request.clamp_all();
}
