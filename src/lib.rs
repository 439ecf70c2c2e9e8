//! Lay out headings, paragraphs, list items and images onto fixed-size pages.
//!
//! Text is wrapped by measured glyph widths (from a loaded [`Font`] or any other
//! [`Measure`] implementation) and flowed down the printable area of each page, breaking
//! to a new page whenever the next line would cross the bottom margin. The result is a
//! list of [`Page`]s with absolutely positioned lines and images, ready for a renderer.

mod block;
pub use block::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

/// Text wrapping, page geometry and the page flow engine
pub mod layout;

mod metrics;
pub use metrics::*;

mod page;
pub use page::*;

/// Pre-defined page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub mod source;

mod style;
pub use style::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
