use crate::units::*;
use serde::{Deserialize, Serialize};

/// A rectangle, specified by two opposite corners. Layout output uses a top-down frame:
/// `(x1, y1)` is the top-left corner and `(x2, y2)` the bottom-right one.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    /// Create a rectangle from its top-left corner and its size
    pub fn from_origin(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Whether `other` lies entirely within this rectangle, with a little slack for
    /// floating-point rounding
    pub fn contains(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 1e-3;
        other.x1.0 >= self.x1.0 - EPSILON
            && other.y1.0 >= self.y1.0 - EPSILON
            && other.x2.0 <= self.x2.0 + EPSILON
            && other.y2.0 <= self.y2.0 + EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_and_size() {
        let r = Rect::from_origin(Pt(10.0), Pt(20.0), Pt(30.0), Pt(40.0));
        assert_eq!(r.width(), Pt(30.0));
        assert_eq!(r.height(), Pt(40.0));
        assert!(r.contains(&Rect::from_origin(Pt(10.0), Pt(20.0), Pt(5.0), Pt(5.0))));
        assert!(!r.contains(&Rect::from_origin(Pt(0.0), Pt(20.0), Pt(5.0), Pt(5.0))));
    }
}
