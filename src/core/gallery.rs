//! Gallery model
//!
//! Filesystem scanning and navigation state for the folder viewer: the
//! immediate subfolders of a root, the image files inside one folder, the
//! grid layout law, and a wraparound cursor for full-screen navigation.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Extensions treated as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Returns whether the path has one of the supported image extensions.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// List the immediate subdirectories of `root`, sorted by name.
/// Non-recursive; files are ignored.
pub fn list_folders(root: &Path) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            folders.push(path);
        }
    }
    folders.sort();
    Ok(folders)
}

/// List the image files directly inside `folder`, sorted by name.
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Grid cell for the item at `index`: row = index / columns, col = index % columns.
pub fn grid_position(index: usize, columns: usize) -> (usize, usize) {
    (index / columns, index % columns)
}

/// Scale `(width, height)` to fit inside `(max_width, max_height)` while
/// preserving aspect ratio. Upscales as well as downscales.
pub fn fit_within(width: f32, height: f32, max_width: f32, max_height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = (max_width / width).min(max_height / height);
    (width * scale, height * scale)
}

/// Index into the current folder's image sequence, wrapping modulo length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Create a cursor over a non-empty sequence. Returns `None` for an
    /// empty one, which keeps full-screen mode unreachable for empty folders.
    pub fn new(index: usize, len: usize) -> Option<Self> {
        if len == 0 || index >= len {
            return None;
        }
        Some(Self { index, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the next image, wrapping to the first after the last.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Step back to the previous image, wrapping to the last before the first.
    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }
}
