use crate::block::TextKind;
use crate::error::{LayoutError, Result};
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Which face of a family a renderer should draw a line with
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emphasis {
    #[default]
    Regular,
    Bold,
    Italic,
}

/// The resolved style of one text block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    pub font_size: Pt,
    /// Extra left inset applied to every line of the block
    pub indent: Pt,
    pub emphasis: Emphasis,
    /// Drawn in the indent, level with the block's first line
    pub marker: Option<char>,
}

/// Maps block kinds onto font sizes, indents and emphasis, relative to the base font size
/// of the page geometry.
///
/// The `with_*` builders do not check their arguments; a sheet is validated when a
/// [`Paginator`](crate::layout::Paginator) is created from it, and when it is deserialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStyleSheet", into = "RawStyleSheet")]
pub struct StyleSheet {
    /// Font size multipliers for heading levels 1 through 6
    pub heading_scale: [f32; 6],
    /// List item indent, as a multiple of the base font size
    pub list_indent: f32,
    pub list_marker: Option<char>,
    /// Space after every block, as a multiple of the base font size
    pub block_spacing: f32,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            heading_scale: [2.0, 1.5, 1.25, 1.1, 1.0, 0.9],
            list_indent: 1.5,
            list_marker: Some('•'),
            block_spacing: 1.5,
        }
    }
}

/// Unchecked serialised form of [`StyleSheet`]; missing fields take their defaults
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct RawStyleSheet {
    heading_scale: [f32; 6],
    list_indent: f32,
    list_marker: Option<char>,
    block_spacing: f32,
}

impl Default for RawStyleSheet {
    fn default() -> Self {
        StyleSheet::default().into()
    }
}

impl TryFrom<RawStyleSheet> for StyleSheet {
    type Error = LayoutError;

    fn try_from(raw: RawStyleSheet) -> Result<StyleSheet> {
        let sheet = StyleSheet {
            heading_scale: raw.heading_scale,
            list_indent: raw.list_indent,
            list_marker: raw.list_marker,
            block_spacing: raw.block_spacing,
        };
        sheet.validate()?;
        Ok(sheet)
    }
}

impl From<StyleSheet> for RawStyleSheet {
    fn from(sheet: StyleSheet) -> Self {
        RawStyleSheet {
            heading_scale: sheet.heading_scale,
            list_indent: sheet.list_indent,
            list_marker: sheet.list_marker,
            block_spacing: sheet.block_spacing,
        }
    }
}

impl StyleSheet {
    /// Check that every factor keeps placed content moving down the page and inside the
    /// printable area: heading scales must be positive, the list indent and block spacing
    /// zero or positive, and all of them finite.
    pub fn validate(&self) -> Result<()> {
        for (i, scale) in self.heading_scale.iter().enumerate() {
            if !scale.is_finite() || *scale <= 0.0 {
                return Err(LayoutError::geometry(format!(
                    "heading {} scale must be positive, got {scale}",
                    i + 1
                )));
            }
        }
        non_negative("list indent", self.list_indent)?;
        non_negative("block spacing", self.block_spacing)?;
        Ok(())
    }

    pub fn with_heading_scale(mut self, heading_scale: [f32; 6]) -> Self {
        self.heading_scale = heading_scale;
        self
    }

    pub fn with_list_indent(mut self, list_indent: f32) -> Self {
        self.list_indent = list_indent;
        self
    }

    pub fn with_list_marker(mut self, list_marker: Option<char>) -> Self {
        self.list_marker = list_marker;
        self
    }

    pub fn with_block_spacing(mut self, block_spacing: f32) -> Self {
        self.block_spacing = block_spacing;
        self
    }

    /// Resolve the style for a block of the given kind at the given base font size
    pub fn resolve(&self, kind: TextKind, base: Pt) -> BlockStyle {
        match kind {
            TextKind::Heading(level) => {
                let index = (level.clamp(1, 6) - 1) as usize;
                BlockStyle {
                    font_size: base * self.heading_scale[index],
                    indent: Pt(0.0),
                    emphasis: Emphasis::Bold,
                    marker: None,
                }
            }
            TextKind::Paragraph => BlockStyle {
                font_size: base,
                indent: Pt(0.0),
                emphasis: Emphasis::Regular,
                marker: None,
            },
            TextKind::ListItem => BlockStyle {
                font_size: base,
                indent: base * self.list_indent,
                emphasis: Emphasis::Regular,
                marker: self.list_marker,
            },
        }
    }

    /// Vertical gap inserted after every block
    pub fn spacing(&self, base: Pt) -> Pt {
        base * self.block_spacing
    }
}

fn non_negative(what: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LayoutError::geometry(format!(
            "{what} must be zero or positive, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_scale_and_embolden() {
        let sheet = StyleSheet::default();
        let h1 = sheet.resolve(TextKind::Heading(1), Pt(12.0));
        assert_eq!(h1.font_size, Pt(24.0));
        assert_eq!(h1.emphasis, Emphasis::Bold);
        let h6 = sheet.resolve(TextKind::Heading(6), Pt(10.0));
        assert_eq!(h6.font_size, Pt(9.0));
    }

    #[test]
    fn list_items_are_indented_and_marked() {
        let sheet = StyleSheet::default().with_list_marker(Some('-'));
        let item = sheet.resolve(TextKind::ListItem, Pt(12.0));
        assert_eq!(item.indent, Pt(18.0));
        assert_eq!(item.marker, Some('-'));
        assert_eq!(sheet.spacing(Pt(12.0)), Pt(18.0));
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let sheet: StyleSheet = serde_json::from_str(r#"{"block_spacing": 0.5}"#).unwrap();
        assert_eq!(sheet.block_spacing, 0.5);
        assert_eq!(sheet.list_indent, StyleSheet::default().list_indent);
    }

    #[test]
    fn default_sheet_is_valid() {
        assert!(StyleSheet::default().validate().is_ok());
        let flat = StyleSheet::default()
            .with_list_indent(0.0)
            .with_block_spacing(0.0);
        assert!(flat.validate().is_ok());
    }

    #[test]
    fn heading_scales_must_be_positive_and_finite() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mut scale = StyleSheet::default().heading_scale;
            scale[3] = bad;
            let sheet = StyleSheet::default().with_heading_scale(scale);
            assert!(
                matches!(sheet.validate(), Err(LayoutError::InvalidGeometry(_))),
                "accepted a heading scale of {bad}"
            );
        }
    }

    #[test]
    fn list_indent_must_not_be_negative() {
        for bad in [-4.0, f32::NAN, f32::INFINITY] {
            let sheet = StyleSheet::default().with_list_indent(bad);
            assert!(matches!(sheet.validate(), Err(LayoutError::InvalidGeometry(_))));
        }
    }

    #[test]
    fn block_spacing_must_not_be_negative() {
        for bad in [-3.0, f32::NAN, f32::NEG_INFINITY] {
            let sheet = StyleSheet::default().with_block_spacing(bad);
            assert!(matches!(sheet.validate(), Err(LayoutError::InvalidGeometry(_))));
        }
    }

    #[test]
    fn deserialising_validates() {
        let negative_indent = serde_json::from_str::<StyleSheet>(r#"{"list_indent": -4.0}"#);
        assert!(negative_indent.is_err());
        let negative_heading = serde_json::from_str::<StyleSheet>(
            r#"{"heading_scale": [-1.0, 1.5, 1.25, 1.1, 1.0, 0.9]}"#,
        );
        assert!(negative_heading.is_err());
        let negative_spacing = serde_json::from_str::<StyleSheet>(r#"{"block_spacing": -3.0}"#);
        assert!(negative_spacing.is_err());

        let sheet = StyleSheet::default().with_list_marker(None);
        let json = serde_json::to_string(&sheet).unwrap();
        assert_eq!(serde_json::from_str::<StyleSheet>(&json).unwrap(), sheet);
    }
}
