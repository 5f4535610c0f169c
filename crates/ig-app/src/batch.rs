use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ig_core::config::ConvertConfig;
use rayon::prelude::*;

/// Extensions image reconnues.
const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "gif"];

/// Convertit toutes les images d'un dossier (récursif) en fichiers `.txt`.
///
/// Un fichier de sortie par image, dans `out_dir` si fourni, sinon à côté
/// de la source. Les échecs individuels sont loggés et n'interrompent pas
/// le lot. Retourne le nombre de conversions réussies.
///
/// # Errors
/// Returns an error if the folder cannot be scanned, contains no
/// recognized image, or the output directory cannot be created.
pub fn run_batch(folder: &Path, out_dir: Option<&Path>, config: &ConvertConfig) -> Result<usize> {
    let mut files = Vec::new();
    scan_dir(folder, &mut files)?;
    files.sort();

    if files.is_empty() {
        anyhow::bail!("Aucune image reconnue dans {}", folder.display());
    }
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Impossible de créer {}", dir.display()))?;
    }

    log::info!("Batch : {} images dans {}", files.len(), folder.display());

    let converted = files
        .par_iter()
        .filter(|path| match convert_one(path, out_dir, config) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Échec sur {} : {e:#}", path.display());
                false
            }
        })
        .count();

    Ok(converted)
}

/// Extrait récursivement les images reconnues.
fn scan_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    if dir.is_dir() {
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Impossible de lire {}", dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                scan_dir(&path, files)?;
            } else if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                if IMAGE_EXTS.contains(&ext.to_lowercase().as_str()) {
                    files.push(path);
                }
            }
        }
    }
    Ok(())
}

fn convert_one(path: &Path, out_dir: Option<&Path>, config: &ConvertConfig) -> Result<()> {
    let bytes =
        fs::read(path).with_context(|| format!("Impossible de lire {}", path.display()))?;
    let canvas = ig_ascii::convert_with_policy(&bytes, &config.request, &config.geometry)?;

    let out_path = match out_dir {
        Some(dir) => {
            let stem = path.file_stem().unwrap_or(path.as_os_str());
            dir.join(stem).with_extension("txt")
        }
        None => path.with_extension("txt"),
    };
    fs::write(&out_path, canvas.as_str())
        .with_context(|| format!("Impossible d'écrire {}", out_path.display()))?;

    log::info!("{} → {}", path.display(), out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = image::GrayImage::from_fn(width, height, |x, y| {
            image::Luma([((x + y) % 256) as u8])
        });
        let mut bytes = Vec::new();
        image::DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        fs::write(path, bytes).unwrap();
    }

    #[test]
    fn batch_converts_recognized_images_only() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("a.png"), 64, 32);
        write_png(&dir.path().join("b.png"), 40, 40);
        fs::write(dir.path().join("notes.txt"), "pas une image").unwrap();

        let out = dir.path().join("out");
        let config = ConvertConfig::default();
        let converted = run_batch(dir.path(), Some(&out), &config).unwrap();

        assert_eq!(converted, 2);
        assert!(out.join("a.txt").is_file());
        assert!(out.join("b.txt").is_file());
        assert!(!out.join("notes.txt").exists());
    }

    #[test]
    fn batch_continues_past_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("ok.png"), 32, 32);
        fs::write(dir.path().join("broken.png"), b"pas un png").unwrap();

        let out = dir.path().join("out");
        let converted = run_batch(dir.path(), Some(&out), &ConvertConfig::default()).unwrap();

        assert_eq!(converted, 1);
        assert!(out.join("ok.txt").is_file());
        assert!(!out.join("broken.txt").exists());
    }

    #[test]
    fn batch_rejects_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_batch(dir.path(), None, &ConvertConfig::default()).is_err());
    }

    #[test]
    fn batch_scans_subfolders() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        write_png(&sub.join("deep.png"), 48, 24);

        let out = dir.path().join("out");
        let converted = run_batch(dir.path(), Some(&out), &ConvertConfig::default()).unwrap();

        assert_eq!(converted, 1);
        assert!(out.join("deep.txt").is_file());
    }
}
