//! Gallery viewer window
//!
//! Folder list on the left, thumbnail grid in the center, and a full-screen
//! single-image mode with wraparound arrow-key navigation. Images load
//! synchronously on selection and are cached as textures.

use crate::config::Config;
use crate::core::gallery::{self, Cursor};
use crate::core::image_ops;
use eframe::egui;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

/// Gallery application state
pub struct GalleryApp {
    folders: Vec<PathBuf>,
    /// Currently selected folder index
    selected: Option<usize>,
    /// Image paths of the selected folder
    images: Vec<PathBuf>,
    /// Thumbnail textures, parallel to `images` (None = unreadable file)
    thumbnails: Vec<Option<egui::TextureHandle>>,
    /// Full-screen state; None while browsing the grid
    fullscreen: Option<Fullscreen>,
    thumbnail_size: f32,
    columns: usize,
    dark_mode: bool,
}

struct Fullscreen {
    cursor: Cursor,
    texture: Option<egui::TextureHandle>,
}

impl GalleryApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config, root: PathBuf) -> Self {
        let folders = gallery::list_folders(&root).unwrap_or_else(|e| {
            tracing::warn!("Failed to list folders in {}: {}", root.display(), e);
            Vec::new()
        });

        Self {
            folders,
            selected: None,
            images: Vec::new(),
            thumbnails: Vec::new(),
            fullscreen: None,
            thumbnail_size: config.viewer.thumbnail_size,
            columns: config.viewer.columns.max(1),
            dark_mode: config.general.theme != "light",
        }
    }

    fn select_folder(&mut self, ctx: &egui::Context, index: usize) {
        self.selected = Some(index);
        self.fullscreen = None;

        let folder = &self.folders[index];
        self.images = gallery::list_images(folder).unwrap_or_else(|e| {
            tracing::warn!("Failed to list images in {}: {}", folder.display(), e);
            Vec::new()
        });

        let side = self.thumbnail_size.round() as u32;
        self.thumbnails = self
            .images
            .iter()
            .map(|path| load_texture(ctx, path, Some(side)))
            .collect();
    }

    fn enter_fullscreen(&mut self, ctx: &egui::Context, index: usize) {
        let Some(cursor) = Cursor::new(index, self.images.len()) else {
            return;
        };
        let texture = load_texture(ctx, &self.images[index], None);
        self.fullscreen = Some(Fullscreen { cursor, texture });
    }

    fn show_fullscreen(&mut self, ctx: &egui::Context) {
        let (next, previous) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
            )
        });
        if next || previous {
            if let Some(fs) = &mut self.fullscreen {
                let index = if next {
                    fs.cursor.next()
                } else {
                    fs.cursor.previous()
                };
                fs.texture = load_texture(ctx, &self.images[index], None);
            }
        }

        let mut exit = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                let response = ui
                    .allocate_rect(area, egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand);

                if let Some(fs) = &self.fullscreen {
                    match &fs.texture {
                        Some(texture) => {
                            // Re-fit every frame so window resizes take effect.
                            let size = texture.size_vec2();
                            let (w, h) =
                                gallery::fit_within(size.x, size.y, area.width(), area.height());
                            let rect =
                                egui::Rect::from_center_size(area.center(), egui::vec2(w, h));
                            let uv = egui::Rect::from_min_max(
                                egui::pos2(0.0, 0.0),
                                egui::pos2(1.0, 1.0),
                            );
                            ui.painter()
                                .image(texture.id(), rect, uv, egui::Color32::WHITE);
                        }
                        None => {
                            ui.painter().text(
                                area.center(),
                                egui::Align2::CENTER_CENTER,
                                "Could not load image",
                                egui::FontId::proportional(20.0),
                                egui::Color32::GRAY,
                            );
                        }
                    }
                }

                if response.clicked() {
                    exit = true;
                }
            });

        if exit {
            self.fullscreen = None;
        }
    }

    fn show_browser(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.dark_mode {
                    "☀ Day mode"
                } else {
                    "🌙 Night mode"
                };
                if ui.button(label).clicked() {
                    self.dark_mode = !self.dark_mode;
                }
            });
        });

        egui::SidePanel::left("folders")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Folders");
                ui.separator();

                if self.folders.is_empty() {
                    ui.label("No subfolders found.");
                    return;
                }

                let mut clicked = None;
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (i, folder) in self.folders.iter().enumerate() {
                        let name = folder
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| folder.display().to_string());
                        if ui.selectable_label(self.selected == Some(i), name).clicked() {
                            clicked = Some(i);
                        }
                    }
                });
                if let Some(i) = clicked {
                    self.select_folder(ctx, i);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.selected.is_none() {
                ui.vertical_centered(|ui| {
                    ui.add_space(50.0);
                    ui.label("Select a folder to preview its images.");
                });
                return;
            }

            if self.images.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(50.0);
                    ui.label("No images in this folder.");
                });
                return;
            }

            let mut open = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                let cell = self.thumbnail_size;
                egui::Grid::new("thumbnails").show(ui, |ui| {
                    for (index, thumbnail) in self.thumbnails.iter().enumerate() {
                        let (cell_rect, _) =
                            ui.allocate_exact_size(egui::vec2(cell, cell), egui::Sense::hover());

                        match thumbnail {
                            Some(texture) => {
                                let size = texture.size_vec2();
                                let (w, h) = gallery::fit_within(size.x, size.y, cell, cell);
                                let rect = egui::Rect::from_center_size(
                                    cell_rect.center(),
                                    egui::vec2(w, h),
                                );
                                let response = ui
                                    .put(
                                        rect,
                                        egui::Image::new((texture.id(), egui::vec2(w, h)))
                                            .sense(egui::Sense::click()),
                                    )
                                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                                if response.clicked() {
                                    open = Some(index);
                                }
                            }
                            None => {
                                ui.put(
                                    cell_rect,
                                    egui::Label::new(
                                        egui::RichText::new("⚠ unreadable")
                                            .color(egui::Color32::GRAY),
                                    ),
                                );
                            }
                        }

                        let (_, column) = gallery::grid_position(index, self.columns);
                        if column + 1 == self.columns {
                            ui.end_row();
                        }
                    }
                });
            });
            if let Some(index) = open {
                self.enter_fullscreen(ctx, index);
            }
        });
    }
}

/// Decode an image into a texture. With `thumbnail = Some(side)` the image
/// is scaled to fit a side×side box first (up or down, aspect preserved).
fn load_texture(
    ctx: &egui::Context,
    path: &Path,
    thumbnail: Option<u32>,
) -> Option<egui::TextureHandle> {
    let image = match image_ops::load_image(path) {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!("{:#}", e);
            return None;
        }
    };

    let image = match thumbnail {
        Some(side) => image.resize(side, side, FilterType::Triangle),
        None => image,
    };

    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Some(ctx.load_texture(path.display().to_string(), color_image, egui::TextureOptions::LINEAR))
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        if self.fullscreen.is_some() {
            self.show_fullscreen(ctx);
        } else {
            self.show_browser(ctx);
        }
    }
}
