//! Measured text wrapping and page flow.
//!
//! Layout happens in two steps. The wrapper ([`wrap`]) turns one run of text into lines
//! that fit a column, measuring candidate lines with a caller-supplied
//! [`Measure`](crate::Measure) implementation. The page flow engine ([`Paginator`], or
//! [`layout`] for a whole document at once) wraps every block, stacks the resulting lines
//! down the page and starts a new page whenever the next line would cross the bottom
//! margin.
//!
//! The output is a list of [`Page`](crate::Page)s holding absolutely positioned lines and
//! images; turning those into PDF content streams is left to a renderer.
//!
//! # Example
//!
//! ```
//! use page_flow::{ContentBlock, MonospaceMetrics, Pt};
//! use page_flow::layout::{layout, Margins, PageGeometry};
//! use page_flow::pagesize;
//!
//! let geometry = PageGeometry::new(pagesize::A5, Margins::all(Pt(36.0))).unwrap();
//! let blocks = vec![
//!     ContentBlock::heading(1, "Jane Doe"),
//!     ContentBlock::paragraph("Systems engineer with a taste for parsers."),
//!     ContentBlock::list_item("Wrote a pagination engine"),
//! ];
//!
//! let pages = layout(&blocks, &geometry, &MonospaceMetrics::default()).unwrap();
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].lines().count(), 3);
//! ```

mod flow;
mod geometry;
mod margins;
mod wrap;

pub use flow::*;
pub use geometry::*;
pub use margins::*;
pub use wrap::*;
