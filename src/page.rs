use crate::rect::Rect;
use crate::style::Emphasis;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// A wrapped line of text bound to a position on a page.
///
/// Coordinates are top-down: `y` is the distance from the top edge of the page to the top
/// of the line box, which is `extent` tall. Use
/// [`PageGeometry::flip_y`](crate::layout::PageGeometry::flip_y) to convert into PDF user
/// space.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    pub coords: (Pt, Pt),
    pub width: Pt,
    pub extent: Pt,
    pub font_size: Pt,
    pub emphasis: Emphasis,
    /// List marker to draw in the gutter left of `coords`, on the first line of a list item
    pub marker: Option<char>,
    /// Index of the content block this line came from
    pub block: usize,
}

impl PlacedLine {
    /// The bottom edge of the line box
    pub fn bottom(&self) -> Pt {
        self.coords.1 + self.extent
    }
}

/// An image scaled into the printable area of its own page
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlacedImage {
    /// Index of the content block holding the image data
    pub block: usize,
    pub position: Rect,
    /// Ratio of placed size to intrinsic size; never above 1.0
    pub scale: f32,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum PageContents {
    Line(PlacedLine),
    Image(PlacedImage),
}

/// One laid-out page: everything a renderer needs to draw it, in drawing order
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Page {
    pub index: usize,
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(index: usize) -> Page {
        Page {
            index,
            contents: Vec::default(),
        }
    }

    pub fn add_line(&mut self, line: PlacedLine) {
        self.contents.push(PageContents::Line(line));
    }

    pub fn add_image(&mut self, image: PlacedImage) {
        self.contents.push(PageContents::Image(image));
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Line(line) => Some(line),
            PageContents::Image(_) => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &PlacedImage> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Image(image) => Some(image),
            PageContents::Line(_) => None,
        })
    }

    /// The page's text, one line per placed line
    pub fn text(&self) -> String {
        self.lines()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
