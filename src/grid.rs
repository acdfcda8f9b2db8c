use crate::error::Result;
use crate::glyph::{GlyphSet, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};
use console::style;
use image::imageops::FilterType;
use std::path::Path;

/// Rows of the contribution graph, Sunday first.
pub const DAYS: usize = 7;
/// Columns of the contribution graph, one per week of the year.
pub const WEEKS: usize = 52;

/// Highest activity level a cell can hold; text pixels paint at this level.
pub const MAX_LEVEL: u8 = 5;
/// Minimum level left in any cell so the drawn pattern sits on a uniform
/// background instead of gaps.
pub const FLOOR_LEVEL: u8 = 1;

/// One year of desired daily commit intensity, 7 rows by 52 weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; WEEKS]; DAYS],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[0; WEEKS]; DAYS],
        }
    }

    pub fn get(&self, day: usize, week: usize) -> u8 {
        self.cells[day][week]
    }

    pub fn set(&mut self, day: usize, week: usize, level: u8) {
        self.cells[day][week] = level.min(MAX_LEVEL);
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8; WEEKS]> {
        self.cells.iter()
    }

    /// Render `text` with the 5×7 font, one glyph column block at a time.
    ///
    /// Characters without a glyph are reported and skipped; characters that
    /// would not fit inside the 52 columns are dropped silently.
    pub fn from_text(text: &str, glyphs: &GlyphSet) -> Self {
        let mut grid = Self::new();
        let mut x_offset = 0;

        for ch in text.chars() {
            let Some(glyph) = glyphs.get(ch) else {
                eprintln!(
                    "{}",
                    style(format!("warning: no glyph for {ch:?}, skipping")).yellow()
                );
                continue;
            };
            if x_offset + GLYPH_WIDTH > WEEKS {
                break;
            }
            for y in 0..GLYPH_HEIGHT {
                for x in 0..GLYPH_WIDTH {
                    if glyph.is_set(x, y) {
                        grid.cells[y][x_offset + x] = MAX_LEVEL;
                    }
                }
            }
            x_offset += GLYPH_WIDTH + GLYPH_SPACING;
        }

        grid.apply_floor();
        grid
    }

    /// Load an image, collapse it to grayscale, resize it to exactly 52×7
    /// and map pixel intensity onto activity levels.
    pub fn from_image<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::open(path)?.into_luma8();
        let scaled = image::imageops::resize(&img, WEEKS as u32, DAYS as u32, FilterType::Triangle);

        let mut grid = Self::new();
        for (x, y, pixel) in scaled.enumerate_pixels() {
            grid.cells[y as usize][x as usize] = level_for_intensity(pixel.0[0]);
        }

        grid.apply_floor();
        Ok(grid)
    }

    /// Raise every untouched cell to [`FLOOR_LEVEL`].
    fn apply_floor(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == 0 {
                    *cell = FLOOR_LEVEL;
                }
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear, monotone mapping from 8-bit intensity to 0..=MAX_LEVEL.
fn level_for_intensity(intensity: u8) -> u8 {
    (intensity as u16 * MAX_LEVEL as u16 / 255) as u8
}
