use super::Margins;
use crate::error::{LayoutError, Result};
use crate::pagesize::{PageSize, LETTER};
use crate::rect::Rect;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// The fixed shape of every page in a document: its size, its margins, and the typographic
/// defaults that lines are spaced by.
///
/// A `PageGeometry` can only be obtained through [`PageGeometry::new`] (or deserialisation,
/// which runs the same checks), so holding one means the printable area is known to be
/// non-empty.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry", into = "RawGeometry")]
pub struct PageGeometry {
    width: Pt,
    height: Pt,
    margins: Margins,
    line_height: f32,
    font_size: Pt,
}

/// Unchecked serialised form of [`PageGeometry`]
#[derive(Serialize, Deserialize)]
struct RawGeometry {
    width: Pt,
    height: Pt,
    margins: Margins,
    #[serde(default = "default_line_height")]
    line_height: f32,
    #[serde(default = "default_font_size")]
    font_size: Pt,
}

const DEFAULT_LINE_HEIGHT: f32 = 1.5;
const DEFAULT_FONT_SIZE: Pt = Pt(12.0);
const DEFAULT_MARGIN: Pt = Pt(100.0);

fn default_line_height() -> f32 {
    DEFAULT_LINE_HEIGHT
}

fn default_font_size() -> Pt {
    DEFAULT_FONT_SIZE
}

impl TryFrom<RawGeometry> for PageGeometry {
    type Error = LayoutError;

    fn try_from(raw: RawGeometry) -> Result<PageGeometry> {
        PageGeometry::new((raw.width, raw.height), raw.margins)?
            .with_line_height(raw.line_height)?
            .with_font_size(raw.font_size)
    }
}

impl From<PageGeometry> for RawGeometry {
    fn from(geometry: PageGeometry) -> Self {
        RawGeometry {
            width: geometry.width,
            height: geometry.height,
            margins: geometry.margins,
            line_height: geometry.line_height,
            font_size: geometry.font_size,
        }
    }
}

impl Default for PageGeometry {
    /// US Letter with 100pt margins, 12pt text and a line height of 1.5
    fn default() -> Self {
        PageGeometry {
            width: LETTER.0,
            height: LETTER.1,
            margins: Margins::all(DEFAULT_MARGIN),
            line_height: DEFAULT_LINE_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl PageGeometry {
    /// Create a geometry for pages of the given size and margins, with the default line
    /// height (1.5) and base font size (12pt). Fails if any dimension is non-positive or
    /// the margins leave no printable area.
    pub fn new(size: PageSize, margins: Margins) -> Result<PageGeometry> {
        let geometry = PageGeometry {
            width: size.0,
            height: size.1,
            margins,
            line_height: DEFAULT_LINE_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Replace the line-height multiplier (line pitch as a multiple of the font size)
    pub fn with_line_height(self, line_height: f32) -> Result<PageGeometry> {
        let geometry = PageGeometry {
            line_height,
            ..self
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Replace the base font size, which body text and inter-block spacing derive from
    pub fn with_font_size(self, font_size: Pt) -> Result<PageGeometry> {
        let geometry = PageGeometry { font_size, ..self };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Replace the margins, keeping everything else
    pub fn with_margins(self, margins: Margins) -> Result<PageGeometry> {
        let geometry = PageGeometry { margins, ..self };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check every invariant of the geometry
    pub fn validate(&self) -> Result<()> {
        positive("page width", self.width)?;
        positive("page height", self.height)?;
        positive("font size", self.font_size)?;
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(LayoutError::geometry(format!(
                "line height must be positive, got {}",
                self.line_height
            )));
        }
        for (side, value) in self.margins.sides() {
            if !value.is_finite() || value < Pt(0.0) {
                return Err(LayoutError::geometry(format!(
                    "{side} margin must be zero or positive, got {value}"
                )));
            }
        }
        if self.printable_width() <= Pt(0.0) {
            return Err(LayoutError::geometry(format!(
                "margins leave no printable width ({} wide page, {} of margins)",
                self.width,
                self.margins.horizontal()
            )));
        }
        if self.printable_height() <= Pt(0.0) {
            return Err(LayoutError::geometry(format!(
                "margins leave no printable height ({} tall page, {} of margins)",
                self.height,
                self.margins.vertical()
            )));
        }
        Ok(())
    }

    pub fn size(&self) -> PageSize {
        (self.width, self.height)
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn height(&self) -> Pt {
        self.height
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    pub fn printable_width(&self) -> Pt {
        self.width - self.margins.horizontal()
    }

    pub fn printable_height(&self) -> Pt {
        self.height - self.margins.vertical()
    }

    /// The y coordinate (from the top of the page) below which no content may extend
    pub fn bottom(&self) -> Pt {
        self.height - self.margins.bottom
    }

    /// The printable area in the top-down frame that placed content uses
    pub fn content_box(&self) -> Rect {
        Rect::from_origin(
            self.margins.left,
            self.margins.top,
            self.printable_width(),
            self.printable_height(),
        )
    }

    /// Vertical space taken by one line of text at the given font size
    pub fn line_extent(&self, font_size: Pt) -> Pt {
        font_size * self.line_height
    }

    /// Convert a top-down y coordinate into PDF's bottom-up user space
    pub fn flip_y(&self, y: Pt) -> Pt {
        self.height - y
    }
}

fn positive(what: &str, value: Pt) -> Result<()> {
    if !value.is_finite() || value <= Pt(0.0) {
        return Err(LayoutError::geometry(format!(
            "{what} must be positive, got {value}"
        )));
    }
    Ok(())
}
