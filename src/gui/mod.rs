//! GUI module
//!
//! egui-based windows: the floating orb and the gallery viewer.

mod gallery;
mod orb;

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Run the floating orb: a frameless, transparent, always-on-top circle.
pub fn run_orb(config: Config) -> Result<()> {
    let diameter = config.orb.diameter;
    let [x, y] = config.orb.position;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([diameter, diameter])
            .with_position(egui::pos2(x, y))
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_resizable(false)
            .with_taskbar(false)
            .with_title("deskorb"),
        ..Default::default()
    };

    eframe::run_native(
        "deskorb",
        options,
        Box::new(|cc| Ok(Box::new(orb::OrbApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}

/// Run the gallery viewer over `root`.
pub fn run_gallery(config: Config, root: PathBuf) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_maximized(true)
            .with_title("deskorb gallery"),
        ..Default::default()
    };

    eframe::run_native(
        "deskorb gallery",
        options,
        Box::new(move |cc| Ok(Box::new(gallery::GalleryApp::new(cc, config, root)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}
