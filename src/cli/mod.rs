//! CLI module
//!
//! Command-line interface for the image utilities and viewer startup.

mod args;

pub use args::{Args, Commands};

use crate::config::Config;
use crate::core::image_ops::{self, ICO_SIZES};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Center-crop an image to a square and resize it
pub fn run_crop(input: &Path, output: &Path, size: u32) -> Result<()> {
    image_ops::crop_image_file(input, output, size)
        .context(format!("Could not crop {}", input.display()))?;

    println!("Cropped to {size}x{size}, saved as {}", output.display());
    Ok(())
}

/// Export a multi-resolution icon bundle
pub fn run_icon(input: &Path, output: &Path) -> Result<()> {
    image_ops::export_ico(input, output, &ICO_SIZES)
        .context(format!("Could not export icon from {}", input.display()))?;

    let sizes = ICO_SIZES.map(|s| s.to_string()).join("/");
    println!("Exported {sizes} icon to {}", output.display());
    Ok(())
}

/// Pick the gallery root: CLI argument, then configured root, then the
/// user's pictures directory.
pub fn resolve_viewer_root(config: &Config, cli_root: Option<PathBuf>) -> Result<PathBuf> {
    let root = cli_root
        .or_else(|| {
            let configured = config.viewer.root.trim();
            (!configured.is_empty()).then(|| PathBuf::from(configured))
        })
        .or_else(dirs::picture_dir)
        .context("No gallery root given and no pictures directory found")?;

    anyhow::ensure!(
        root.is_dir(),
        "Gallery root {} is not a directory",
        root.display()
    );
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cli_root_wins_over_configured_root() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.viewer.root = "/somewhere/else".to_string();

        let root = resolve_viewer_root(&config, Some(dir.path().to_path_buf()))
            .expect("resolve failed");
        assert_eq!(root, dir.path());
    }

    #[test]
    fn configured_root_is_used_when_cli_omits_it() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.viewer.root = dir.path().to_string_lossy().into_owned();

        let root = resolve_viewer_root(&config, None).expect("resolve failed");
        assert_eq!(root, dir.path());
    }

    #[test]
    fn missing_root_directory_is_an_error() {
        let config = Config::default();
        let err = resolve_viewer_root(&config, Some(PathBuf::from("/no/such/dir"))).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
