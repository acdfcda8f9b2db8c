//! Built-in 5×7 pixel font.
//!
//! Each glyph is seven rows of five cells, `#` for on and `.` for off,
//! sized so one character fills the full height of a contribution graph
//! column. The table lives behind [`GlyphSet`] so an alternate font can be
//! swapped in without touching the grid builder.

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// Blank columns inserted between consecutive glyphs.
pub const GLYPH_SPACING: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub rows: [&'static str; GLYPH_HEIGHT],
}

impl Glyph {
    /// Whether the pixel at (x, y) is on. Out-of-range coordinates are off.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.as_bytes().get(x))
            .copied()
            == Some(b'#')
    }
}

/// Lookup table from characters to glyph bitmaps.
#[derive(Debug, Clone, Copy)]
pub struct GlyphSet {
    lookup: fn(char) -> Option<Glyph>,
}

impl GlyphSet {
    pub fn builtin() -> Self {
        Self { lookup: builtin_glyph }
    }

    pub fn with_lookup(lookup: fn(char) -> Option<Glyph>) -> Self {
        Self { lookup }
    }

    /// Glyph for `ch`, or `None` when the font has no bitmap for it.
    /// Letters match case-insensitively.
    pub fn get(&self, ch: char) -> Option<Glyph> {
        (self.lookup)(ch.to_ascii_uppercase())
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::builtin()
    }
}

macro_rules! glyph {
    ($r0:literal $r1:literal $r2:literal $r3:literal $r4:literal $r5:literal $r6:literal) => {
        Glyph {
            rows: [$r0, $r1, $r2, $r3, $r4, $r5, $r6],
        }
    };
}

fn builtin_glyph(ch: char) -> Option<Glyph> {
    let glyph = match ch {
        'A' => glyph! {
            ".###."
            "#...#"
            "#...#"
            "#####"
            "#...#"
            "#...#"
            "#...#"
        },
        'B' => glyph! {
            "####."
            "#...#"
            "#...#"
            "####."
            "#...#"
            "#...#"
            "####."
        },
        'C' => glyph! {
            ".###."
            "#...#"
            "#...."
            "#...."
            "#...."
            "#...#"
            ".###."
        },
        'D' => glyph! {
            "####."
            "#...#"
            "#...#"
            "#...#"
            "#...#"
            "#...#"
            "####."
        },
        'E' => glyph! {
            "#####"
            "#...."
            "#...."
            "####."
            "#...."
            "#...."
            "#####"
        },
        'F' => glyph! {
            "#####"
            "#...."
            "#...."
            "####."
            "#...."
            "#...."
            "#...."
        },
        'G' => glyph! {
            ".###."
            "#...#"
            "#...."
            "#.###"
            "#...#"
            "#...#"
            ".###."
        },
        'H' => glyph! {
            "#...#"
            "#...#"
            "#...#"
            "#####"
            "#...#"
            "#...#"
            "#...#"
        },
        'I' => glyph! {
            "#####"
            "..#.."
            "..#.."
            "..#.."
            "..#.."
            "..#.."
            "#####"
        },
        'J' => glyph! {
            ".####"
            "...#."
            "...#."
            "...#."
            "...#."
            "#..#."
            ".##.."
        },
        'K' => glyph! {
            "#...#"
            "#..#."
            "#.#.."
            "##..."
            "#.#.."
            "#..#."
            "#...#"
        },
        'L' => glyph! {
            "#...."
            "#...."
            "#...."
            "#...."
            "#...."
            "#...."
            "#####"
        },
        'M' => glyph! {
            "#...#"
            "##.##"
            "#.#.#"
            "#.#.#"
            "#...#"
            "#...#"
            "#...#"
        },
        'N' => glyph! {
            "#...#"
            "##..#"
            "#.#.#"
            "#..##"
            "#...#"
            "#...#"
            "#...#"
        },
        'O' => glyph! {
            ".###."
            "#...#"
            "#...#"
            "#...#"
            "#...#"
            "#...#"
            ".###."
        },
        'P' => glyph! {
            "####."
            "#...#"
            "#...#"
            "####."
            "#...."
            "#...."
            "#...."
        },
        'Q' => glyph! {
            ".###."
            "#...#"
            "#...#"
            "#...#"
            "#.#.#"
            "#..#."
            ".##.#"
        },
        'R' => glyph! {
            "####."
            "#...#"
            "#...#"
            "####."
            "#.#.."
            "#..#."
            "#...#"
        },
        'S' => glyph! {
            ".####"
            "#...."
            "#...."
            ".###."
            "....#"
            "....#"
            "####."
        },
        'T' => glyph! {
            "#####"
            "..#.."
            "..#.."
            "..#.."
            "..#.."
            "..#.."
            "..#.."
        },
        'U' => glyph! {
            "#...#"
            "#...#"
            "#...#"
            "#...#"
            "#...#"
            "#...#"
            ".###."
        },
        'V' => glyph! {
            "#...#"
            "#...#"
            "#...#"
            "#...#"
            "#...#"
            ".#.#."
            "..#.."
        },
        'W' => glyph! {
            "#...#"
            "#...#"
            "#...#"
            "#.#.#"
            "#.#.#"
            "##.##"
            "#...#"
        },
        'X' => glyph! {
            "#...#"
            "#...#"
            ".#.#."
            "..#.."
            ".#.#."
            "#...#"
            "#...#"
        },
        'Y' => glyph! {
            "#...#"
            "#...#"
            ".#.#."
            "..#.."
            "..#.."
            "..#.."
            "..#.."
        },
        'Z' => glyph! {
            "#####"
            "....#"
            "...#."
            "..#.."
            ".#..."
            "#...."
            "#####"
        },
        '0' => glyph! {
            ".###."
            "#...#"
            "#..##"
            "#.#.#"
            "##..#"
            "#...#"
            ".###."
        },
        '1' => glyph! {
            "..#.."
            ".##.."
            "..#.."
            "..#.."
            "..#.."
            "..#.."
            "#####"
        },
        '2' => glyph! {
            ".###."
            "#...#"
            "....#"
            "...#."
            "..#.."
            ".#..."
            "#####"
        },
        '3' => glyph! {
            ".###."
            "#...#"
            "....#"
            "..##."
            "....#"
            "#...#"
            ".###."
        },
        '4' => glyph! {
            "...#."
            "..##."
            ".#.#."
            "#..#."
            "#####"
            "...#."
            "...#."
        },
        '5' => glyph! {
            "#####"
            "#...."
            "####."
            "....#"
            "....#"
            "#...#"
            ".###."
        },
        '6' => glyph! {
            ".###."
            "#...."
            "#...."
            "####."
            "#...#"
            "#...#"
            ".###."
        },
        '7' => glyph! {
            "#####"
            "....#"
            "...#."
            "..#.."
            ".#..."
            ".#..."
            ".#..."
        },
        '8' => glyph! {
            ".###."
            "#...#"
            "#...#"
            ".###."
            "#...#"
            "#...#"
            ".###."
        },
        '9' => glyph! {
            ".###."
            "#...#"
            "#...#"
            ".####"
            "....#"
            "....#"
            ".###."
        },
        ' ' => glyph! {
            "....."
            "....."
            "....."
            "....."
            "....."
            "....."
            "....."
        },
        '!' => glyph! {
            "..#.."
            "..#.."
            "..#.."
            "..#.."
            "..#.."
            "....."
            "..#.."
        },
        '?' => glyph! {
            ".###."
            "#...#"
            "....#"
            "...#."
            "..#.."
            "....."
            "..#.."
        },
        '.' => glyph! {
            "....."
            "....."
            "....."
            "....."
            "....."
            ".##.."
            ".##.."
        },
        '-' => glyph! {
            "....."
            "....."
            "....."
            "#####"
            "....."
            "....."
            "....."
        },
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_glyph_is_5x7() {
        let set = GlyphSet::builtin();
        for ch in ('A'..='Z').chain('0'..='9').chain([' ', '!', '?', '.', '-']) {
            let glyph = set.get(ch).unwrap_or_else(|| panic!("missing glyph for {ch:?}"));
            assert_eq!(glyph.rows.len(), GLYPH_HEIGHT);
            for row in glyph.rows {
                assert_eq!(row.len(), GLYPH_WIDTH, "bad row width for {ch:?}");
                assert!(row.bytes().all(|b| b == b'#' || b == b'.'), "bad cell in {ch:?}");
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let set = GlyphSet::builtin();
        assert_eq!(set.get('h'), set.get('H'));
        assert!(set.get('h').is_some());
    }

    #[test]
    fn unknown_character_has_no_glyph() {
        let set = GlyphSet::builtin();
        assert_eq!(set.get('~'), None);
        assert_eq!(set.get('€'), None);
    }

    #[test]
    fn is_set_matches_row_strings() {
        let h = GlyphSet::builtin().get('H').unwrap();
        assert!(h.is_set(0, 0));
        assert!(!h.is_set(1, 0));
        assert!(h.is_set(2, 3));
        // out of range reads as off
        assert!(!h.is_set(5, 0));
        assert!(!h.is_set(0, 7));
    }
}
