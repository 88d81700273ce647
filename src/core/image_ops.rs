//! Image geometry and icon export
//!
//! Pure raster operations behind the crop/icon subcommands and the orb's
//! circular icon: square padding, centered square cropping, exact resizing,
//! multi-resolution ICO serialization, and the circular mask applied to the
//! orb texture. All functions are deterministic; only the file-backed
//! entry points can fail.

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, GenericImageView, Rgba, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Resolutions bundled into an exported icon, largest first.
pub const ICO_SIZES: [u32; 5] = [256, 128, 64, 32, 16];

/// Fully transparent padding color.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

#[derive(Debug, Error)]
pub enum ImageOpsError {
    #[error("failed to load image {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to save image {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Decode an image from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageOpsError> {
    image::open(path).map_err(|source| ImageOpsError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Center the image on a square canvas filled with `fill`. The canvas side
/// is the largest of `min_size` and both input dimensions, so the input is
/// never cropped; odd deltas leave the extra pixel on the right/bottom.
pub fn pad_to_square(image: &DynamicImage, min_size: u32, fill: Rgba<u8>) -> RgbaImage {
    let (width, height) = image.dimensions();
    let side = min_size.max(width).max(height);

    let mut canvas = RgbaImage::from_pixel(side, side, fill);
    let x = (side - width) / 2;
    let y = (side - height) / 2;
    image::imageops::overlay(&mut canvas, &image.to_rgba8(), i64::from(x), i64::from(y));
    canvas
}

/// Crop the largest centered square out of the image.
pub fn crop_center_square(image: &DynamicImage) -> DynamicImage {
    let (width, height) = image.dimensions();
    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    image.crop_imm(left, top, side, side)
}

/// Center-crop to a square, then resize to exactly `target_size` on each
/// side with a high-quality filter.
pub fn crop_and_resize(image: &DynamicImage, target_size: u32) -> DynamicImage {
    crop_center_square(image).resize_exact(target_size, target_size, FilterType::Lanczos3)
}

/// File-to-file variant of [`crop_and_resize`]. The output format follows
/// the destination extension; an unsupported extension is a save error and
/// no partial output is written.
pub fn crop_image_file(input: &Path, output: &Path, size: u32) -> Result<(), ImageOpsError> {
    let image = load_image(input)?;
    crop_and_resize(&image, size)
        .save(output)
        .map_err(|source| ImageOpsError::Save {
            path: output.to_path_buf(),
            source,
        })
}

/// Pad the source to a 256-minimum square and write one ICO containing the
/// square resized to each entry of `sizes`.
pub fn export_ico(input: &Path, output: &Path, sizes: &[u32]) -> Result<(), ImageOpsError> {
    let image = load_image(input)?;
    let square = DynamicImage::ImageRgba8(pad_to_square(&image, 256, TRANSPARENT));

    let save_err = |source| ImageOpsError::Save {
        path: output.to_path_buf(),
        source,
    };

    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let resized = square
            .resize_exact(size, size, FilterType::Lanczos3)
            .to_rgba8();
        frames.push(
            IcoFrame::as_png(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
                .map_err(save_err)?,
        );
    }

    let file = File::create(output).map_err(|source| ImageOpsError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .map_err(save_err)
}

/// Zero the alpha of every pixel outside the inscribed circle, with a soft
/// one-pixel edge. Turns the square orb texture into a disc.
pub fn apply_circle_mask(image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let radius = cx.min(cy);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        let distance = (dx * dx + dy * dy).sqrt();
        let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
        pixel[3] = (f32::from(pixel[3]) * coverage) as u8;
    }
}

/// Fallback orb icon used when the configured icon file cannot be read:
/// a flat disc with a darker rim, transparent corners.
pub fn placeholder_icon(size: u32) -> RgbaImage {
    let disc = Rgba([86, 130, 190, 255]);
    let rim = Rgba([43, 65, 95, 255]);
    let radius = size as f32 / 2.0;
    let rim_width = (size as f32 / 15.0).max(1.0);

    let mut icon = RgbaImage::from_pixel(size, size, TRANSPARENT);
    for (x, y, pixel) in icon.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= radius - rim_width {
            *pixel = disc;
        } else if distance <= radius {
            *pixel = rim;
        }
    }
    icon
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, color))
    }

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn pad_to_square_uses_longest_input_side() {
        let padded = pad_to_square(&solid(10, 4, RED), 8, TRANSPARENT);
        assert_eq!(padded.dimensions(), (10, 10));
    }

    #[test]
    fn pad_to_square_respects_minimum_size() {
        let padded = pad_to_square(&solid(4, 4, RED), 16, TRANSPARENT);
        assert_eq!(padded.dimensions(), (16, 16));
    }

    #[test]
    fn pad_to_square_centers_the_input() {
        let padded = pad_to_square(&solid(10, 4, RED), 0, TRANSPARENT);
        // Vertical margins are (10 - 4) / 2 = 3 on each side.
        assert_eq!(padded.get_pixel(5, 2)[3], 0);
        assert_eq!(*padded.get_pixel(5, 3), RED);
        assert_eq!(*padded.get_pixel(5, 6), RED);
        assert_eq!(padded.get_pixel(5, 7)[3], 0);
    }

    #[test]
    fn pad_to_square_splits_odd_delta_within_one_pixel() {
        let padded = pad_to_square(&solid(5, 2, RED), 0, TRANSPARENT);
        assert_eq!(padded.dimensions(), (5, 5));
        // Delta 3 splits as top 1, bottom 2.
        assert_eq!(padded.get_pixel(2, 0)[3], 0);
        assert_eq!(*padded.get_pixel(2, 1), RED);
        assert_eq!(*padded.get_pixel(2, 2), RED);
        assert_eq!(padded.get_pixel(2, 3)[3], 0);
    }

    #[test]
    fn crop_center_square_takes_the_middle() {
        let mut image = RgbaImage::from_pixel(9, 3, BLUE);
        for y in 0..3 {
            for x in 3..6 {
                image.put_pixel(x, y, RED);
            }
        }
        let cropped = crop_center_square(&DynamicImage::ImageRgba8(image));
        assert_eq!(cropped.dimensions(), (3, 3));
        for (_, _, pixel) in cropped.to_rgba8().enumerate_pixels() {
            assert_eq!(*pixel, RED);
        }
    }

    #[test]
    fn crop_and_resize_yields_exact_target_size() {
        for (w, h) in [(100, 30), (30, 100), (64, 64), (7, 5)] {
            let out = crop_and_resize(&solid(w, h, RED), 60);
            assert_eq!(out.dimensions(), (60, 60));
        }
    }

    #[test]
    fn load_image_reports_missing_file() {
        let err = load_image(Path::new("/nonexistent/image.png")).unwrap_err();
        assert!(matches!(err, ImageOpsError::Load { .. }));
    }

    #[test]
    fn crop_image_file_rejects_unsupported_output_extension() {
        let dir = tempdir().expect("failed to create temp dir");
        let input = dir.path().join("in.png");
        solid(8, 8, RED).save(&input).expect("failed to write input");

        let err = crop_image_file(&input, &dir.path().join("out.xyz"), 4).unwrap_err();
        assert!(matches!(err, ImageOpsError::Save { .. }));
    }

    #[test]
    fn crop_image_file_round_trips_through_disk() {
        let dir = tempdir().expect("failed to create temp dir");
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        solid(30, 20, RED).save(&input).expect("failed to write input");

        crop_image_file(&input, &output, 10).expect("crop failed");
        assert_eq!(load_image(&output).unwrap().dimensions(), (10, 10));
    }

    #[test]
    fn export_ico_writes_one_entry_per_size() {
        let dir = tempdir().expect("failed to create temp dir");
        let input = dir.path().join("in.png");
        let output = dir.path().join("app.ico");
        solid(40, 20, RED).save(&input).expect("failed to write input");

        export_ico(&input, &output, &ICO_SIZES).expect("export failed");

        let bytes = std::fs::read(&output).expect("failed to read output");
        // ICONDIR: reserved 0, type 1, count = number of sizes.
        assert_eq!(bytes[..6], [0, 0, 1, 0, ICO_SIZES.len() as u8, 0]);
    }

    #[test]
    fn circle_mask_clears_corners_and_keeps_center() {
        let mut image = RgbaImage::from_pixel(16, 16, RED);
        apply_circle_mask(&mut image);
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(15, 15)[3], 0);
        assert_eq!(image.get_pixel(8, 8)[3], 255);
    }

    #[test]
    fn placeholder_icon_is_a_disc() {
        let icon = placeholder_icon(32);
        assert_eq!(icon.dimensions(), (32, 32));
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
        assert_eq!(icon.get_pixel(16, 16)[3], 255);
    }
}
