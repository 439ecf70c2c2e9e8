use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Space left empty around the printable area of every page. Layout never places content
/// inside the margins, except for a single line or image that is larger than the whole
/// printable area.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<V: Into<Pt>, H: Into<Pt>>(vertical: V, horizontal: H) -> Margins {
        let (vertical, horizontal) = (vertical.into(), horizontal.into());
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Add a gutter to the left of the page, usually for even-numbered pages
    /// in bound documents
    pub fn with_gutter_left(&self, gutter: Pt) -> Margins {
        Margins {
            left: self.left + gutter,
            ..*self
        }
    }

    /// Add a gutter to the right of the page, usually for odd-numbered pages
    /// in bound documents
    pub fn with_gutter_right(&self, gutter: Pt) -> Margins {
        Margins {
            right: self.right + gutter,
            ..*self
        }
    }

    /// Add a gutter to either the left or the right side of the page, depending
    /// on whether the page index is:
    /// * _even_ => left
    /// * _odd_ => right
    pub fn with_gutter(&self, gutter: Pt, page_index: usize) -> Margins {
        if page_index % 2 == 0 {
            self.with_gutter_left(gutter)
        } else {
            self.with_gutter_right(gutter)
        }
    }

    pub(crate) fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    pub(crate) fn vertical(&self) -> Pt {
        self.top + self.bottom
    }

    pub(crate) fn sides(&self) -> [(&'static str, Pt); 4] {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::In;

    #[test]
    fn gutter_alternates_sides() {
        let base = Margins::all(Pt(10.0));
        assert_eq!(base.with_gutter(Pt(5.0), 0).left, Pt(15.0));
        assert_eq!(base.with_gutter(Pt(5.0), 0).right, Pt(10.0));
        assert_eq!(base.with_gutter(Pt(5.0), 1).right, Pt(15.0));
    }

    #[test]
    fn symmetric_margins() {
        let m = Margins::symmetric(Pt(20.0), In(0.5));
        assert_eq!(m.vertical(), Pt(40.0));
        assert_eq!(m.horizontal(), Pt(72.0));
    }
}
