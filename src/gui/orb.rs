//! Floating orb window
//!
//! Renders the circular launcher icon, feeds pointer events through the
//! drag/click gesture machine, and shows the launch menu in a separate
//! frameless viewport directly below the orb.

use crate::config::Config;
use crate::core::gesture::{DragGesture, Point, ReleaseOutcome};
use crate::core::image_ops;
use crate::core::launch::{Dispatch, ProcessLauncher, dispatch};
use crate::core::menu::{MenuAction, MenuEntry, build_menu};
use eframe::egui;
use std::path::Path;
use std::time::{Duration, Instant};

const BORDER_WIDTH: f32 = 4.0;
const BORDER_IDLE: egui::Color32 = egui::Color32::from_gray(80);
const BORDER_HOVERED: egui::Color32 = egui::Color32::from_gray(200);

/// Floating orb application state
pub struct OrbApp {
    /// Launch menu tree, built once from the configuration
    menu: Vec<MenuEntry>,
    launcher: ProcessLauncher,
    /// Drag/click discrimination
    gesture: DragGesture,
    /// When the current press started, if one is in flight
    pressed_at: Option<Instant>,
    /// Press-and-hold delay before a press becomes a drag
    hold: Duration,
    icon_path: String,
    diameter: f32,
    icon: Option<egui::TextureHandle>,
    menu_open: bool,
    /// Set once the menu viewport has gained focus, so losing focus
    /// afterwards (a click elsewhere on the desktop) closes it.
    menu_was_focused: bool,
}

impl OrbApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self {
            menu: build_menu(&config.menu),
            launcher: ProcessLauncher,
            gesture: DragGesture::new(),
            pressed_at: None,
            hold: Duration::from_millis(config.orb.hold_ms),
            icon_path: config.orb.icon_path,
            diameter: config.orb.diameter,
            icon: None,
            menu_open: false,
            menu_was_focused: false,
        }
    }

    /// The orb texture: the configured icon cropped to a circle, or the
    /// built-in placeholder disc when the file cannot be read.
    fn icon_texture(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        if let Some(texture) = &self.icon {
            return texture.clone();
        }

        let side = (self.diameter * ctx.pixels_per_point()).round().max(1.0) as u32;
        let mut rgba = if self.icon_path.is_empty() {
            image_ops::placeholder_icon(side)
        } else {
            match image_ops::load_image(Path::new(&self.icon_path)) {
                Ok(image) => image_ops::crop_and_resize(&image, side).to_rgba8(),
                Err(e) => {
                    tracing::warn!("{:#}; using placeholder icon", e);
                    image_ops::placeholder_icon(side)
                }
            }
        };
        image_ops::apply_circle_mask(&mut rgba);

        let size = [rgba.width() as usize, rgba.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture("orb-icon", image, egui::TextureOptions::LINEAR);
        self.icon = Some(texture.clone());
        texture
    }

    fn handle_pointer(&mut self, ctx: &egui::Context) {
        let (pressed, released, pointer) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });

        if pressed {
            if let Some(pos) = pointer {
                // Window-local position doubles as the grab offset.
                self.gesture.press(Point::new(pos.x, pos.y));
                self.pressed_at = Some(Instant::now());
                ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
            }
        }

        if let Some(at) = self.pressed_at {
            if !self.gesture.is_dragging() && at.elapsed() >= self.hold {
                self.gesture.hold_expired();
            }
            // Keep frames coming so the hold expires without pointer motion.
            ctx.request_repaint_after(Duration::from_millis(16));
        }

        if self.gesture.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);

            let outer = ctx.input(|i| i.viewport().outer_rect);
            if let (Some(outer), Some(pos)) = (outer, pointer) {
                let global = Point::new(outer.min.x + pos.x, outer.min.y + pos.y);
                if let Some(origin) = self.gesture.pointer_moved(global) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                        origin.x, origin.y,
                    )));
                }
            }
        }

        if released {
            self.pressed_at = None;
            match self.gesture.release() {
                Some(ReleaseOutcome::Click) => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
                    self.menu_open = true;
                    self.menu_was_focused = false;
                }
                Some(ReleaseOutcome::DragEnd) => {
                    ctx.set_cursor_icon(egui::CursorIcon::Default);
                }
                None => {}
            }
        }
    }

    fn paint_orb(&self, painter: &egui::Painter, rect: egui::Rect, hovered: bool, texture: &egui::TextureHandle) {
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, egui::Color32::WHITE);

        let border = if hovered { BORDER_HOVERED } else { BORDER_IDLE };
        painter.circle_stroke(
            rect.center(),
            rect.width() / 2.0 - BORDER_WIDTH / 2.0,
            egui::Stroke::new(BORDER_WIDTH, border),
        );
    }

    fn show_menu(&mut self, ctx: &egui::Context) {
        let Some(outer) = ctx.input(|i| i.viewport().outer_rect) else {
            return;
        };
        let menu_pos = egui::pos2(outer.min.x, outer.max.y);

        let mut close = false;
        let mut quit = false;

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("orb-menu"),
            egui::ViewportBuilder::default()
                .with_title("deskorb menu")
                .with_inner_size([320.0, 320.0])
                .with_position(menu_pos)
                .with_decorations(false)
                .with_resizable(false)
                .with_transparent(true)
                .with_always_on_top()
                .with_taskbar(false),
            |ctx, _class| {
                egui::CentralPanel::default()
                    .frame(egui::Frame::none())
                    .show(ctx, |ui| {
                        let frame = egui::Frame::menu(ui.style()).show(ui, |ui| {
                            ui.set_min_width(140.0);
                            if let Some(action) = render_entries(ui, &self.menu) {
                                if dispatch(&action, &self.launcher) == Dispatch::Quit {
                                    quit = true;
                                }
                                close = true;
                            }
                        });

                        // A click on the transparent area around the menu closes it.
                        let outside_click = ui.input(|i| {
                            i.pointer.any_pressed()
                                && i.pointer
                                    .interact_pos()
                                    .is_some_and(|p| !frame.response.rect.contains(p))
                        });
                        if outside_click {
                            close = true;
                        }
                    });

                match ctx.input(|i| i.viewport().focused) {
                    Some(true) => self.menu_was_focused = true,
                    Some(false) if self.menu_was_focused => close = true,
                    _ => {}
                }
                if ctx.input(|i| i.viewport().close_requested()) {
                    close = true;
                }
            },
        );

        if quit {
            ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Close);
        }
        if close {
            self.menu_open = false;
        }
    }
}

/// Generic renderer over the menu tree: buttons for leaves, nested popup
/// menus for submenus. Returns the selected action, if any.
fn render_entries(ui: &mut egui::Ui, entries: &[MenuEntry]) -> Option<MenuAction> {
    let mut selected = None;
    for entry in entries {
        match entry {
            MenuEntry::Action { label, action } => {
                if ui.button(label).clicked() {
                    selected = Some(action.clone());
                }
            }
            MenuEntry::Submenu { label, entries } => {
                ui.menu_button(label, |ui| {
                    if let Some(action) = render_entries(ui, entries) {
                        selected = Some(action);
                        ui.close_menu();
                    }
                });
            }
        }
    }
    selected
}

impl eframe::App for OrbApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let texture = self.icon_texture(ctx);

        self.handle_pointer(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let response = ui.allocate_rect(rect, egui::Sense::hover());
                self.paint_orb(ui.painter(), rect, response.hovered(), &texture);
            });

        if self.menu_open {
            self.show_menu(ctx);
        }
    }
}
