//! Texture palette and image asset loading.
//!
//! A terminal cannot draw textures, so each texture is reduced to the color
//! its quad is painted with. Colors either come from a built-in table or are
//! sampled from the game's image files (the alpha-weighted mean of each image,
//! and of each sprite-sheet cell for the lander).
//!
//! Loading from a directory is all-or-nothing: a missing or undecodable image
//! is an [`AssetError`] and the game does not start.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::core::SpriteSheet;
use crate::fb::Rgb;
use crate::types::{Texture, TEXTURE_COUNT};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {path:?}")]
    Missing { path: PathBuf },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    pub fn path(&self) -> &Path {
        match self {
            AssetError::Missing { path } | AssetError::Decode { path, .. } => path,
        }
    }
}

/// Where texture colors come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Builtin,
    Directory(PathBuf),
}

/// Display colors per texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Rgb; TEXTURE_COUNT],
    /// Per-cell colors of the lander sprite sheet.
    frames: Vec<Rgb>,
}

impl Palette {
    pub fn builtin() -> Self {
        let mut colors = [Rgb::default(); TEXTURE_COUNT];
        for texture in Texture::ALL {
            colors[texture.index()] = builtin_color(texture);
        }
        Self {
            colors,
            frames: Vec::new(),
        }
    }

    pub fn from_source(source: &AssetSource, sheet: SpriteSheet) -> Result<Self, AssetError> {
        match source {
            AssetSource::Builtin => Ok(Self::builtin()),
            AssetSource::Directory(dir) => Self::load(dir, sheet),
        }
    }

    /// Sample every texture image in `dir`.
    pub fn load(dir: &Path, sheet: SpriteSheet) -> Result<Self, AssetError> {
        let mut palette = Self::builtin();

        for texture in Texture::ALL {
            let img = load_rgba(&dir.join(texture.file_name()))?;
            let fallback = builtin_color(texture);
            palette.colors[texture.index()] =
                mean_color(&img, 0, 0, img.width(), img.height()).unwrap_or(fallback);

            if texture == Texture::Spritesheet {
                palette.frames = sheet_colors(&img, sheet, fallback);
            }
            log::debug!(
                "sampled {} -> {:?}",
                texture.file_name(),
                palette.colors[texture.index()]
            );
        }

        log::info!("loaded {} textures from {}", Texture::ALL.len(), dir.display());
        Ok(palette)
    }

    pub fn color(&self, texture: Texture) -> Rgb {
        self.colors[texture.index()]
    }

    /// Color of a lander sprite-sheet frame, or the sheet's overall color.
    pub fn frame_color(&self, frame: usize) -> Rgb {
        self.frames
            .get(frame)
            .copied()
            .unwrap_or_else(|| self.color(Texture::Spritesheet))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_color(texture: Texture) -> Rgb {
    match texture {
        Texture::Spritesheet => Rgb::new(230, 230, 240),
        Texture::Platform => Rgb::new(110, 200, 120),
        Texture::Asteroid => Rgb::new(170, 120, 80),
        Texture::WinMessage => Rgb::new(120, 230, 120),
        Texture::LoseMessage => Rgb::new(235, 80, 80),
        Texture::FullFuel => Rgb::new(100, 220, 120),
        Texture::HalfFuel => Rgb::new(230, 210, 80),
        Texture::LowFuel => Rgb::new(240, 140, 60),
        Texture::NoFuel => Rgb::new(220, 60, 60),
    }
}

fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::Missing {
            path: path.to_path_buf(),
        });
    }
    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

fn sheet_colors(img: &RgbaImage, sheet: SpriteSheet, fallback: Rgb) -> Vec<Rgb> {
    let cell_w = img.width() / sheet.cols as u32;
    let cell_h = img.height() / sheet.rows as u32;

    (0..sheet.frame_count())
        .map(|i| {
            let (col, row) = sheet.cell(i);
            mean_color(
                img,
                col as u32 * cell_w,
                row as u32 * cell_h,
                cell_w,
                cell_h,
            )
            .unwrap_or(fallback)
        })
        .collect()
}

/// Alpha-weighted mean color of a region; `None` if fully transparent.
fn mean_color(img: &RgbaImage, x0: u32, y0: u32, w: u32, h: u32) -> Option<Rgb> {
    let x1 = (x0 + w).min(img.width());
    let y1 = (y0 + h).min(img.height());

    let (mut r, mut g, mut b, mut a) = (0u64, 0u64, 0u64, 0u64);
    for y in y0..y1 {
        for x in x0..x1 {
            let [pr, pg, pb, pa] = img.get_pixel(x, y).0;
            let pa = pa as u64;
            r += pr as u64 * pa;
            g += pg as u64 * pa;
            b += pb as u64 * pa;
            a += pa;
        }
    }

    if a == 0 {
        return None;
    }
    Some(Rgb::new((r / a) as u8, (g / a) as u8, (b / a) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const SHEET: SpriteSheet = SpriteSheet { cols: 2, rows: 1 };

    fn write_all(dir: &Path) {
        for texture in Texture::ALL {
            let img = RgbaImage::from_pixel(4, 2, Rgba([40, 80, 120, 255]));
            img.save(dir.join(texture.file_name())).unwrap();
        }
    }

    #[test]
    fn builtin_palette_covers_every_texture() {
        let p = Palette::builtin();
        for texture in Texture::ALL {
            assert_ne!(p.color(texture), Rgb::default());
        }
        assert_eq!(p.frame_color(3), p.color(Texture::Spritesheet));
    }

    #[test]
    fn empty_directory_is_missing_asset() {
        let dir = tempfile::tempdir().unwrap();
        let err = Palette::load(dir.path(), SHEET).unwrap_err();
        assert!(matches!(err, AssetError::Missing { .. }));
        assert!(err.path().ends_with("Space.png"));
    }

    #[test]
    fn one_missing_image_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        std::fs::remove_file(dir.path().join("NoFuel.png")).unwrap();
        let err = Palette::load(dir.path(), SHEET).unwrap_err();
        assert!(err.path().ends_with("NoFuel.png"));
    }

    #[test]
    fn undecodable_image_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        std::fs::write(dir.path().join("Ground.png"), b"not a png").unwrap();
        let err = Palette::load(dir.path(), SHEET).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn colors_are_sampled_from_images() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());

        // Left cell red, right cell blue.
        let mut sheet = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        for y in 0..2 {
            for x in 2..4 {
                sheet.put_pixel(x, y, Rgba([0, 0, 255, 255]));
            }
        }
        sheet.save(dir.path().join("Space.png")).unwrap();

        let p = Palette::load(dir.path(), SHEET).unwrap();
        assert_eq!(p.color(Texture::Platform), Rgb::new(40, 80, 120));
        assert_eq!(p.frame_color(0), Rgb::new(255, 0, 0));
        assert_eq!(p.frame_color(1), Rgb::new(0, 0, 255));
        assert_eq!(p.color(Texture::Spritesheet), Rgb::new(127, 0, 127));
    }

    #[test]
    fn transparent_pixels_do_not_count() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        assert_eq!(mean_color(&img, 0, 0, 2, 1), Some(Rgb::new(10, 20, 30)));
        let clear = RgbaImage::from_pixel(2, 1, Rgba([9, 9, 9, 0]));
        assert_eq!(mean_color(&clear, 0, 0, 2, 1), None);
    }
}
