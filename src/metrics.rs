//! Font metrics providers: anything that can tell how wide a string renders at a given size.

use crate::error::{LayoutError, Result};
use crate::units::Pt;
use unicode_segmentation::UnicodeSegmentation;

/// Measures the rendered width of a string of text at a given font size.
///
/// Implementations must be deterministic and monotonic: appending characters to a string
/// never makes it narrower. Layout calls this many times per line, so it should be cheap
/// and must not perform I/O.
pub trait Measure {
    fn measure(&self, text: &str, size: Pt) -> Pt;
}

impl<F> Measure for F
where
    F: Fn(&str, Pt) -> Pt,
{
    fn measure(&self, text: &str, size: Pt) -> Pt {
        self(text, size)
    }
}

/// Measure `text`, rejecting negative or non-finite widths
pub(crate) fn checked_measure<M: Measure + ?Sized>(
    measure: &M,
    text: &str,
    size: Pt,
) -> Result<Pt> {
    let width = measure.measure(text, size);
    if !width.is_finite() || width < Pt(0.0) {
        return Err(LayoutError::Measurement {
            text: text.to_string(),
            width: width.0,
        });
    }
    Ok(width)
}

/// A fixed-advance metrics table, useful when no font file is at hand or for estimating
/// layouts. Every grapheme advances `advance` ems; wide (CJK) graphemes advance twice that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal advance of a narrow grapheme, in ems
    pub advance: f32,
}

impl Default for MonospaceMetrics {
    /// Half an em per character, roughly the average advance of a proportional Latin face
    fn default() -> Self {
        MonospaceMetrics { advance: 0.5 }
    }
}

impl MonospaceMetrics {
    pub fn new(advance: f32) -> MonospaceMetrics {
        MonospaceMetrics { advance }
    }

    /// Number of narrow-advance cells `text` occupies
    pub fn cells(text: &str) -> usize {
        text.graphemes(true)
            .map(|g| match g.chars().next() {
                Some(ch) if is_wide(ch) => 2,
                Some(_) => 1,
                None => 0,
            })
            .sum()
    }
}

impl Measure for MonospaceMetrics {
    fn measure(&self, text: &str, size: Pt) -> Pt {
        size * (self.advance * MonospaceMetrics::cells(text) as f32)
    }
}

/// Whether a character belongs to a script that is written without spaces between words
/// (Han ideographs, kana, CJK punctuation and full-width forms). Such text has to be
/// wrapped grapheme by grapheme.
pub(crate) fn is_unspaced_script(ch: char) -> bool {
    matches!(ch,
        '\u{3000}'..='\u{303F}' // CJK symbols and punctuation
        | '\u{3040}'..='\u{309F}' // hiragana
        | '\u{30A0}'..='\u{30FF}' // katakana
        | '\u{3400}'..='\u{4DBF}' // CJK extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{F900}'..='\u{FAFF}' // CJK compatibility ideographs
        | '\u{FF00}'..='\u{FF60}' // full-width forms
        | '\u{20000}'..='\u{2FA1F}')
}

/// Whether a character is drawn two cells wide in a fixed-advance table
fn is_wide(ch: char) -> bool {
    is_unspaced_script(ch)
        || matches!(ch,
            '\u{1100}'..='\u{115F}' // hangul jamo
            | '\u{AC00}'..='\u{D7A3}' // hangul syllables
            | '\u{FFE0}'..='\u{FFE6}')
}
