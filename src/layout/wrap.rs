use crate::error::{LayoutError, Result};
use crate::metrics::{checked_measure, is_unspaced_script, Measure};
use crate::units::Pt;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

const TABSIZE: usize = 4;

/// Where the wrapper is allowed to break a line.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WrapMode {
    /// Break only at whitespace, keeping words intact. For scripts that separate words with
    /// spaces.
    #[default]
    WordBreak,
    /// Break between any two grapheme clusters. For scripts written without spaces between
    /// words, such as Chinese and Japanese.
    GraphemeBreak,
}

impl WrapMode {
    /// Pick a wrap mode for a run of text: grapheme breaking as soon as the text contains
    /// characters from a script without word-delimiting whitespace, word breaking otherwise.
    pub fn detect(text: &str) -> WrapMode {
        if text.chars().any(is_unspaced_script) {
            WrapMode::GraphemeBreak
        } else {
            WrapMode::WordBreak
        }
    }
}

/// One physical line of wrapped text, with its measured width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredLine {
    pub text: String,
    pub width: Pt,
    pub font_size: Pt,
    /// Empty line inserted where the source text had a hard line break. Spacers take up
    /// vertical space but have nothing to draw.
    pub spacer: bool,
}

impl MeasuredLine {
    fn spacer(font_size: Pt) -> MeasuredLine {
        MeasuredLine {
            text: String::new(),
            width: Pt(0.0),
            font_size,
            spacer: true,
        }
    }

    /// Vertical space the line occupies at the given line-height multiplier
    pub fn extent(&self, line_height: f32) -> Pt {
        self.font_size * line_height
    }
}

/// Accumulates units (words or graphemes) into lines, measuring each candidate
struct LineBuilder<'m, M: Measure + ?Sized> {
    measure: &'m M,
    max_width: Pt,
    font_size: Pt,
    lines: Vec<MeasuredLine>,
    current: String,
    current_width: Pt,
}

impl<'m, M: Measure + ?Sized> LineBuilder<'m, M> {
    fn new(measure: &'m M, max_width: Pt, font_size: Pt) -> Self {
        LineBuilder {
            measure,
            max_width,
            font_size,
            lines: Vec::new(),
            current: String::new(),
            current_width: Pt(0.0),
        }
    }

    /// Try to append `unit` (preceded by `separator` if the line already has content).
    /// When the candidate overflows, the current line is emitted and `unit` starts the
    /// next one. A unit that overflows an empty line is kept anyway, alone.
    fn push(&mut self, separator: &str, unit: &str) -> Result<()> {
        if self.current.is_empty() {
            self.current_width = checked_measure(self.measure, unit, self.font_size)?;
            self.current.push_str(unit);
            if self.current_width > self.max_width {
                log::warn!(
                    "{:?} is {} wide and cannot be broken to fit in {}",
                    unit,
                    self.current_width,
                    self.max_width
                );
            }
            return Ok(());
        }

        let candidate = format!("{}{separator}{unit}", self.current);
        let width = checked_measure(self.measure, &candidate, self.font_size)?;
        if width > self.max_width {
            self.flush();
            self.push("", unit)
        } else {
            self.current = candidate;
            self.current_width = width;
            Ok(())
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(MeasuredLine {
                text: std::mem::take(&mut self.current),
                width: self.current_width,
                font_size: self.font_size,
                spacer: false,
            });
            self.current_width = Pt(0.0);
        }
    }

    fn spacer(&mut self) {
        self.flush();
        self.lines.push(MeasuredLine::spacer(self.font_size));
    }
}

/// Wrap a run of text into lines no wider than `max_width`, measuring with `measure` at
/// `font_size`.
///
/// Newlines in the text are hard breaks: each newline-separated segment is wrapped on its
/// own, and a spacer line separates consecutive segments. Tabs count as four spaces.
///
/// A single word (or, in [`WrapMode::GraphemeBreak`], a single grapheme) that is wider than
/// `max_width` is put on a line of its own rather than being split or dropped, so that is
/// the one case where a line may be wider than `max_width`.
pub fn wrap<M: Measure + ?Sized>(
    text: &str,
    max_width: Pt,
    font_size: Pt,
    measure: &M,
    mode: WrapMode,
) -> Result<Vec<MeasuredLine>> {
    if !max_width.is_finite() || max_width <= Pt(0.0) {
        return Err(LayoutError::geometry(format!(
            "wrap width must be positive, got {max_width}"
        )));
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }

    // normalize newlines and tabs
    let text = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &" ".repeat(TABSIZE));

    let mut builder = LineBuilder::new(measure, max_width, font_size);
    for (i, segment) in text.split('\n').enumerate() {
        if i > 0 {
            builder.spacer();
        }
        match mode {
            WrapMode::WordBreak => {
                for word in segment.split_whitespace() {
                    builder.push(" ", word)?;
                }
            }
            WrapMode::GraphemeBreak => {
                for grapheme in segment.graphemes(true) {
                    builder.push("", grapheme)?;
                }
            }
        }
    }
    builder.flush();

    log::trace!(
        "wrapped {} chars into {} lines at {}",
        text.chars().count(),
        builder.lines.len(),
        max_width
    );
    Ok(builder.lines)
}
