use crate::error::Result;
use crate::metrics::Measure;
use crate::units::Pt;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed TrueType / OpenType font, used as a metrics provider for layout. Widths come
/// straight from the font's horizontal advance table; no shaping (kerning, ligatures) is
/// applied.
pub struct Font {
    pub face: OwnedFace,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("units_per_em", &self.units_per_em())
            .finish_non_exhaustive()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn units_per_em(&self) -> u16 {
        self.face.as_face_ref().units_per_em()
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. Dividing this by
    /// the font size gives a line-height multiplier that matches the font's own spacing.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph drawn in place of characters the font lacks: the replacement character if
    /// the font has one, else a question mark
    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}').or_else(|| self.glyph_id('?'))
    }

    /// Calculate the width of a given string of text at the given font size. Control
    /// characters take no space; characters missing from the font are measured as the
    /// replacement glyph.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        let face = self.face.as_face_ref();
        text.chars()
            .filter(|ch| !ch.is_control())
            .filter_map(|ch| self.glyph_id(ch).or_else(|| self.replacement_glyph_id()))
            .map(|gid| scaling * face.glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32)
            .sum()
    }
}

impl Measure for Font {
    fn measure(&self, text: &str, size: Pt) -> Pt {
        self.width_of_text(text, size)
    }
}
