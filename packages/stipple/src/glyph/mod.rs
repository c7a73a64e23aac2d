//! Fixed 5x7 bitmap font
//!
//! Every glyph is exactly [`GLYPH_WIDTH`] columns by [`GLYPH_HEIGHT`] rows. The
//! spacing math in the rasterizer depends on that, so definitions are checked
//! once when a table is built and never again.

mod font;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{StippleError, StippleResult};

/// Glyph width in columns
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in rows
pub const GLYPH_HEIGHT: usize = 7;

/// Character every unsupported input falls back to
pub const FALLBACK_CHAR: char = ' ';

/// A 5x7 binary bitmap for one character
///
/// Each row is stored as a 5-bit mask with bit 4 holding the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// A glyph with no lit cells
    pub const BLANK: Glyph = Glyph {
        rows: [0; GLYPH_HEIGHT],
    };

    /// Parse a glyph from one `0`/`1` string per row
    fn parse(ch: char, rows: &[&str]) -> StippleResult<Self> {
        if rows.len() != GLYPH_HEIGHT {
            return Err(StippleError::glyph(
                ch,
                format!("has {} rows, expected {}", rows.len(), GLYPH_HEIGHT),
            ));
        }

        let mut masks = [0u8; GLYPH_HEIGHT];
        for (index, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != GLYPH_WIDTH {
                return Err(StippleError::glyph(
                    ch,
                    format!("row {} has {} cells, expected {}", index, width, GLYPH_WIDTH),
                ));
            }

            for cell in row.chars() {
                let bit = match cell {
                    '0' => 0,
                    '1' => 1,
                    other => {
                        return Err(StippleError::glyph(
                            ch,
                            format!("row {} contains {:?}, expected '0' or '1'", index, other),
                        ));
                    }
                };
                masks[index] = (masks[index] << 1) | bit;
            }
        }

        Ok(Self { rows: masks })
    }

    /// Whether the cell at `row`, `col` is lit. Out-of-range cells are unlit.
    #[inline]
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        row < GLYPH_HEIGHT
            && col < GLYPH_WIDTH
            && (self.rows[row] >> (GLYPH_WIDTH - 1 - col)) & 1 == 1
    }

    /// One row as five `0`/`1` values, leftmost first
    pub fn row(&self, row: usize) -> [u8; GLYPH_WIDTH] {
        let mut cells = [0u8; GLYPH_WIDTH];
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = u8::from(self.is_lit(row, col));
        }
        cells
    }

    /// All seven rows, top first
    pub fn rows(&self) -> [[u8; GLYPH_WIDTH]; GLYPH_HEIGHT] {
        let mut rows = [[0u8; GLYPH_WIDTH]; GLYPH_HEIGHT];
        for (index, row) in rows.iter_mut().enumerate() {
            *row = self.row(index);
        }
        rows
    }

    /// One column as seven flags, top first
    pub fn column(&self, col: usize) -> [bool; GLYPH_HEIGHT] {
        std::array::from_fn(|row| self.is_lit(row, col))
    }

    /// Number of lit cells
    #[inline]
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|mask| mask.count_ones()).sum()
    }
}

/// Uppercase a single character, keeping it unchanged when its uppercase
/// form is not a single character
#[inline]
pub(crate) fn canonical(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Read-only mapping from supported characters to glyphs
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
}

impl GlyphTable {
    /// The built-in font, validated on first use and shared afterwards
    pub fn builtin() -> StippleResult<&'static GlyphTable> {
        static BUILTIN_TABLE: OnceLock<StippleResult<GlyphTable>> = OnceLock::new();

        BUILTIN_TABLE
            .get_or_init(|| GlyphTable::from_definitions(font::BUILTIN))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Build a table from textual definitions
    ///
    /// Characters must be given in their uppercase form. The table must define
    /// [`FALLBACK_CHAR`].
    pub fn from_definitions(definitions: &[(char, &[&str])]) -> StippleResult<Self> {
        let mut glyphs = HashMap::with_capacity(definitions.len());

        for &(ch, rows) in definitions {
            if canonical(ch) != ch {
                return Err(StippleError::glyph(ch, "must be defined in uppercase"));
            }
            let glyph = Glyph::parse(ch, rows)?;
            if glyphs.insert(ch, glyph).is_some() {
                return Err(StippleError::glyph(ch, "is defined more than once"));
            }
        }

        let fallback = glyphs.get(&FALLBACK_CHAR).copied().ok_or_else(|| {
            StippleError::Config(format!("missing fallback glyph {:?}", FALLBACK_CHAR))
        })?;

        log::debug!("validated glyph table with {} glyphs", glyphs.len());

        Ok(Self { glyphs, fallback })
    }

    /// Look up a glyph, ignoring case. Unsupported characters get the space glyph.
    #[inline]
    pub fn get(&self, ch: char) -> Glyph {
        self.glyphs
            .get(&canonical(ch))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Whether the character has a glyph of its own
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&canonical(ch))
    }

    /// Number of defined glyphs, fallback included
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPORTED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 !?.,-'#";

    fn table() -> &'static GlyphTable {
        GlyphTable::builtin().unwrap()
    }

    #[test]
    fn builtin_table_covers_supported_set() {
        let table = table();
        assert_eq!(table.len(), SUPPORTED.chars().count());
        for ch in SUPPORTED.chars() {
            assert!(table.contains(ch), "missing {:?}", ch);
        }
    }

    #[test]
    fn every_glyph_is_seven_by_five() {
        let table = table();
        for ch in SUPPORTED.chars() {
            let rows = table.get(ch).rows();
            assert_eq!(rows.len(), GLYPH_HEIGHT);
            for row in rows {
                assert_eq!(row.len(), GLYPH_WIDTH);
                assert!(row.iter().all(|&cell| cell <= 1));
            }
        }
    }

    #[test]
    fn glyph_a_matches_font() {
        let a = table().get('A');
        let expected = ["01110", "10001", "10001", "11111", "10001", "10001", "10001"];
        for (row, pattern) in expected.iter().enumerate() {
            let rendered: String = a.row(row).iter().map(|c| char::from(b'0' + c)).collect();
            assert_eq!(&rendered, pattern, "row {}", row);
        }
        assert_eq!(a.lit_count(), 18);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = table();
        for ch in 'a'..='z' {
            assert_eq!(table.get(ch), table.get(ch.to_ascii_uppercase()));
        }
    }

    #[test]
    fn unsupported_characters_fall_back_to_space() {
        let table = table();
        let space = table.get(' ');
        for ch in ['@', '~', 'é', '字', '\n', 'ß'] {
            assert_eq!(table.get(ch), space, "{:?}", ch);
            assert!(!table.contains(ch));
        }
        assert_eq!(space, Glyph::BLANK);
    }

    #[test]
    fn columns_follow_rows() {
        let hash = table().get('#');
        assert_eq!(hash.column(1), [true, true, true, true, true, true, true]);
        assert_eq!(hash.column(0), [false, false, true, false, true, false, false]);
        assert!(!hash.is_lit(0, GLYPH_WIDTH));
        assert!(!hash.is_lit(GLYPH_HEIGHT, 0));
    }

    #[test]
    fn rejects_short_glyph() {
        let defs: &[(char, &[&str])] = &[
            (' ', &["00000"; 7]),
            ('X', &["10001", "01010", "00100"]),
        ];
        let err = GlyphTable::from_definitions(defs).unwrap_err();
        assert!(matches!(err, StippleError::Config(ref msg) if msg.contains("3 rows")));
    }

    #[test]
    fn rejects_narrow_row() {
        let defs: &[(char, &[&str])] = &[
            (' ', &["00000"; 7]),
            ('X', &["10001", "01010", "0100", "00100", "01010", "01010", "10001"]),
        ];
        let err = GlyphTable::from_definitions(defs).unwrap_err();
        assert!(matches!(err, StippleError::Config(ref msg) if msg.contains("row 2")));
    }

    #[test]
    fn rejects_non_binary_cells() {
        let defs: &[(char, &[&str])] = &[(
            ' ',
            &["0000x", "00000", "00000", "00000", "00000", "00000", "00000"],
        )];
        assert!(GlyphTable::from_definitions(defs).is_err());
    }

    #[test]
    fn rejects_missing_fallback() {
        let defs: &[(char, &[&str])] = &[(
            'I',
            &["11111", "00100", "00100", "00100", "00100", "00100", "11111"],
        )];
        let err = GlyphTable::from_definitions(defs).unwrap_err();
        assert!(err.to_string().contains("fallback"));
    }

    #[test]
    fn rejects_duplicates_and_lowercase() {
        let dup: &[(char, &[&str])] = &[(' ', &["00000"; 7]), (' ', &["00000"; 7])];
        assert!(GlyphTable::from_definitions(dup).is_err());

        let lower: &[(char, &[&str])] = &[(' ', &["00000"; 7]), ('a', &["00000"; 7])];
        assert!(GlyphTable::from_definitions(lower).is_err());
    }
}
