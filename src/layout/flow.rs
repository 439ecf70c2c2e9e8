use super::{wrap, PageGeometry};
use crate::block::{ContentBlock, ImageBlock, TextBlock};
use crate::error::{LayoutError, Result};
use crate::image::image_size;
use crate::metrics::Measure;
use crate::page::{Page, PlacedImage, PlacedLine};
use crate::rect::Rect;
use crate::style::StyleSheet;
use crate::units::Pt;

/// Where the next line will be written
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cursor {
    /// Index of the page currently being filled
    pub page: usize,
    /// Distance from the top edge of the page to the top of the next line
    pub y: Pt,
}

/// Phase of a pagination run
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlowState {
    /// No block has been pushed yet
    Idle,
    /// Placing content on the current page
    Flowing,
    /// The current page is finished; the next placed item opens a new page
    PageBreak,
    /// [`Paginator::finish`] has flushed the final page; no more blocks are accepted
    Done,
}

/// Flows content blocks onto pages, one block at a time.
///
/// A paginator owns the cursor of a single run. Blocks are placed strictly in the order
/// they are pushed, and a page is never revisited once the cursor has moved past it. A
/// run can be abandoned between blocks by simply dropping the paginator.
///
/// ```
/// use page_flow::{ContentBlock, MonospaceMetrics, StyleSheet};
/// use page_flow::layout::{FlowState, PageGeometry, Paginator};
///
/// let metrics = MonospaceMetrics::default();
/// let mut paginator =
///     Paginator::new(PageGeometry::default(), StyleSheet::default(), &metrics).unwrap();
/// paginator.push(&ContentBlock::heading(1, "Experience")).unwrap();
/// paginator.push(&ContentBlock::list_item("Shipped a pagination engine")).unwrap();
/// let pages = paginator.finish();
/// assert_eq!(pages.len(), 1);
/// assert_eq!(paginator.state(), FlowState::Done);
/// ```
pub struct Paginator<'m, M: Measure + ?Sized> {
    geometry: PageGeometry,
    style: StyleSheet,
    measure: &'m M,
    pages: Vec<Page>,
    current: Page,
    cursor: Cursor,
    state: FlowState,
    pushed: usize,
}

impl<'m, M: Measure + ?Sized> Paginator<'m, M> {
    pub fn new(geometry: PageGeometry, style: StyleSheet, measure: &'m M) -> Result<Self> {
        geometry.validate()?;
        style.validate()?;
        let top = geometry.margins().top;
        Ok(Paginator {
            geometry,
            style,
            measure,
            pages: Vec::new(),
            current: Page::new(0),
            cursor: Cursor { page: 0, y: top },
            state: FlowState::Idle,
            pushed: 0,
        })
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Number of pages started so far, including the one being filled
    pub fn page_count(&self) -> usize {
        self.current.index + 1
    }

    /// Lay out one more block. Fails with [`LayoutError::Finished`] once the run is done.
    pub fn push(&mut self, block: &ContentBlock) -> Result<()> {
        if self.state == FlowState::Done {
            return Err(LayoutError::Finished);
        }
        let index = self.pushed;
        self.pushed += 1;
        if self.state == FlowState::Idle {
            self.state = FlowState::Flowing;
        }

        match block {
            ContentBlock::Text(text) => self.place_text(index, text),
            ContentBlock::Image(image) => self.place_image(index, image),
        }
    }

    /// Flush the page being filled, move to [`FlowState::Done`] and return every page of
    /// the run. A run without any content still produces a single, empty page. Calling
    /// this again returns no pages.
    pub fn finish(&mut self) -> Vec<Page> {
        if self.state == FlowState::Done {
            return Vec::new();
        }
        let index = self.current.index;
        let last = std::mem::replace(&mut self.current, Page::new(index));
        self.pages.push(last);
        self.state = FlowState::Done;
        log::debug!("pagination {:?}: {} pages", self.state, self.pages.len());
        std::mem::take(&mut self.pages)
    }

    fn top(&self) -> Pt {
        self.geometry.margins().top
    }

    fn place_text(&mut self, index: usize, block: &TextBlock) -> Result<()> {
        let style = self.style.resolve(block.kind, self.geometry.font_size());
        let emphasis = block.emphasis.unwrap_or(style.emphasis);
        let max_width = self.geometry.printable_width() - style.indent;
        if max_width <= Pt(0.0) {
            return Err(LayoutError::geometry(format!(
                "an indent of {} leaves no room in a {} column",
                style.indent,
                self.geometry.printable_width()
            )));
        }

        let lines = wrap(
            &block.text,
            max_width,
            style.font_size,
            self.measure,
            block.mode,
        )?;

        let x = self.geometry.margins().left + style.indent;
        let mut marker = style.marker;
        for line in lines {
            let extent = line.extent(self.geometry.line_height());
            if line.spacer {
                self.advance(extent);
                continue;
            }

            self.make_room(extent);
            self.current.add_line(PlacedLine {
                text: line.text,
                coords: (x, self.cursor.y),
                width: line.width,
                extent,
                font_size: line.font_size,
                emphasis,
                marker: marker.take(),
                block: index,
            });
            self.cursor.y += extent;
        }

        self.advance(self.style.spacing(self.geometry.font_size()));
        Ok(())
    }

    fn place_image(&mut self, index: usize, block: &ImageBlock) -> Result<()> {
        let (width, height) = image_size(block)?;

        // images always get a page to themselves
        self.open_page();

        let area = self.geometry.content_box();
        let scale = (area.width().0 / width)
            .min(area.height().0 / height)
            .min(1.0);
        let position = Rect::from_origin(
            area.x1,
            area.y1,
            Pt(width * scale),
            Pt(height * scale),
        );
        self.current.add_image(PlacedImage {
            block: index,
            position,
            scale,
        });
        self.cursor.y = position.y2;
        self.state = FlowState::PageBreak;
        Ok(())
    }

    /// Ensure a line of the given extent can be placed at the cursor, moving to a fresh
    /// page if needed
    fn make_room(&mut self, extent: Pt) {
        let overflows = self.cursor.y + extent > self.geometry.bottom();
        if self.state == FlowState::PageBreak || overflows {
            self.open_page();
        }
        self.state = FlowState::Flowing;

        if self.cursor.y + extent > self.geometry.bottom() {
            log::warn!(
                "a {} line is taller than the {} printable height of page {}",
                extent,
                self.geometry.printable_height(),
                self.cursor.page
            );
        }
    }

    /// Move the cursor down by `amount` without placing anything. Space that does not fit
    /// on the current page ends it; the space itself is not carried onto the next page.
    fn advance(&mut self, amount: Pt) {
        if self.state == FlowState::PageBreak {
            return;
        }
        if self.cursor.y + amount > self.geometry.bottom() {
            self.state = FlowState::PageBreak;
        } else {
            self.cursor.y += amount;
        }
    }

    /// Start writing at the top of an empty page: the current one if nothing has been
    /// placed on it yet, otherwise a new one
    fn open_page(&mut self) {
        if !self.current.is_empty() {
            let next = Page::new(self.current.index + 1);
            let finished = std::mem::replace(&mut self.current, next);
            log::debug!(
                "page {} full with {} items",
                finished.index,
                finished.contents.len()
            );
            self.pages.push(finished);
        }
        self.cursor = Cursor {
            page: self.current.index,
            y: self.top(),
        };
        self.state = FlowState::Flowing;
    }
}

/// Lay out `blocks` onto pages of the given geometry using the default [`StyleSheet`]
pub fn layout<M: Measure + ?Sized>(
    blocks: &[ContentBlock],
    geometry: &PageGeometry,
    measure: &M,
) -> Result<Vec<Page>> {
    layout_with_style(blocks, geometry, &StyleSheet::default(), measure)
}

/// Lay out `blocks` onto pages of the given geometry. Either every block is placed or an
/// error is returned; no partial page list is ever produced.
pub fn layout_with_style<M: Measure + ?Sized>(
    blocks: &[ContentBlock],
    geometry: &PageGeometry,
    style: &StyleSheet,
    measure: &M,
) -> Result<Vec<Page>> {
    let mut paginator = Paginator::new(*geometry, style.clone(), measure)?;
    for (i, block) in blocks.iter().enumerate() {
        paginator.push(block)?;
        log::debug!(
            "placed block {}/{} (page {})",
            i + 1,
            blocks.len(),
            paginator.cursor().page
        );
    }
    Ok(paginator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::page::PageContents;
    use crate::style::Emphasis;

    /// Every character is six points wide
    fn six_wide(text: &str, _size: Pt) -> Pt {
        Pt(6.0 * text.chars().count() as f32)
    }

    /// 100 x 100 printable area, 12pt text at line height 1.0, no spacing between blocks
    fn small_page() -> (PageGeometry, StyleSheet) {
        let geometry = PageGeometry::new((Pt(140.0), Pt(140.0)), Margins::all(Pt(20.0)))
            .unwrap()
            .with_line_height(1.0)
            .unwrap();
        (geometry, StyleSheet::default().with_block_spacing(0.0))
    }

    #[test]
    fn starts_idle_at_the_top_margin() {
        let (geometry, style) = small_page();
        let paginator = Paginator::new(geometry, style, &six_wide).unwrap();
        assert_eq!(paginator.state(), FlowState::Idle);
        assert_eq!(paginator.cursor(), Cursor { page: 0, y: Pt(20.0) });
        assert_eq!(paginator.page_count(), 1);
    }

    #[test]
    fn finishing_ends_the_run() {
        let (geometry, style) = small_page();
        let mut paginator = Paginator::new(geometry, style, &six_wide).unwrap();
        paginator.push(&ContentBlock::paragraph("only")).unwrap();
        let pages = paginator.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(paginator.state(), FlowState::Done);
        assert_eq!(paginator.page_count(), 1);

        let late = paginator.push(&ContentBlock::paragraph("late"));
        assert!(matches!(late, Err(LayoutError::Finished)));
        assert!(paginator.finish().is_empty());
    }

    #[test]
    fn invalid_style_sheets_are_rejected_up_front() {
        let (geometry, _) = small_page();
        let upward = StyleSheet::default().with_block_spacing(-3.0);
        assert!(matches!(
            Paginator::new(geometry, upward, &six_wide),
            Err(LayoutError::InvalidGeometry(_))
        ));

        let outdented = StyleSheet::default().with_list_indent(-4.0);
        let result = layout_with_style(
            &[ContentBlock::list_item("item")],
            &geometry,
            &outdented,
            &six_wide,
        );
        assert!(matches!(result, Err(LayoutError::InvalidGeometry(_))));

        let inverted =
            StyleSheet::default().with_heading_scale([-1.0, 1.5, 1.25, 1.1, 1.0, f32::NAN]);
        let result = layout_with_style(
            &[ContentBlock::heading(1, "Head")],
            &geometry,
            &inverted,
            &six_wide,
        );
        assert!(matches!(result, Err(LayoutError::InvalidGeometry(_))));
    }

    #[test]
    fn lines_advance_the_cursor() {
        let (geometry, style) = small_page();
        let mut paginator = Paginator::new(geometry, style, &six_wide).unwrap();
        // 16 chars per 100pt line
        paginator
            .push(&ContentBlock::paragraph("aaaa bbbb cccc dddd"))
            .unwrap();
        assert_eq!(paginator.state(), FlowState::Flowing);
        assert_eq!(paginator.cursor().y, Pt(44.0));

        let pages = paginator.finish();
        let lines: Vec<&PlacedLine> = pages[0].lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].coords, (Pt(20.0), Pt(20.0)));
        assert_eq!(lines[1].coords, (Pt(20.0), Pt(32.0)));
        assert_eq!(lines[1].text, "dddd");
    }

    #[test]
    fn spacing_that_does_not_fit_ends_the_page_lazily() {
        let (geometry, _) = small_page();
        // 60pt of spacing after each block
        let style = StyleSheet::default().with_block_spacing(5.0);
        let mut paginator = Paginator::new(geometry, style, &six_wide).unwrap();
        paginator.push(&ContentBlock::paragraph("one")).unwrap();
        assert_eq!(paginator.cursor().y, Pt(92.0));
        paginator.push(&ContentBlock::paragraph("two")).unwrap();
        assert_eq!(paginator.state(), FlowState::PageBreak);
        assert_eq!(paginator.page_count(), 1);

        paginator.push(&ContentBlock::paragraph("three")).unwrap();
        assert_eq!(paginator.cursor().page, 1);
        let pages = paginator.finish();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].lines().next().unwrap().coords.1, Pt(20.0));
    }

    #[test]
    fn list_items_are_indented_with_a_marker_on_the_first_line() {
        let (geometry, style) = small_page();
        let pages = layout_with_style(
            &[ContentBlock::list_item("alpha beta gamma delta")],
            &geometry,
            &style,
            &six_wide,
        )
        .unwrap();
        let lines: Vec<&PlacedLine> = pages[0].lines().collect();
        assert!(lines.len() >= 2);
        assert_eq!(lines[0].coords.0, Pt(38.0));
        assert_eq!(lines[0].marker, Some('•'));
        assert!(lines[1..].iter().all(|l| l.marker.is_none()));
        assert!(lines.iter().all(|l| l.width <= Pt(82.0)));
    }

    #[test]
    fn headings_use_their_own_size_and_emphasis() {
        let (geometry, style) = small_page();
        let pages = layout_with_style(
            &[
                ContentBlock::heading(1, "Title"),
                ContentBlock::paragraph("body").with_emphasis(Emphasis::Italic),
            ],
            &geometry,
            &style,
            &six_wide,
        )
        .unwrap();
        let lines: Vec<&PlacedLine> = pages[0].lines().collect();
        assert_eq!(lines[0].font_size, Pt(24.0));
        assert_eq!(lines[0].extent, Pt(24.0));
        assert_eq!(lines[0].emphasis, Emphasis::Bold);
        assert_eq!(lines[1].coords.1, Pt(44.0));
        assert_eq!(lines[1].emphasis, Emphasis::Italic);
        assert_eq!(lines[1].block, 1);
    }

    #[test]
    fn hard_break_spacers_take_space_but_are_not_placed() {
        let (geometry, style) = small_page();
        let pages =
            layout_with_style(&[ContentBlock::paragraph("a\nb")], &geometry, &style, &six_wide)
                .unwrap();
        let lines: Vec<&PlacedLine> = pages[0].lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].coords.1, Pt(44.0));
    }

    #[test]
    fn an_indent_wider_than_the_column_is_invalid() {
        let (geometry, _) = small_page();
        let style = StyleSheet::default().with_list_indent(10.0);
        let result = layout_with_style(
            &[ContentBlock::list_item("x")],
            &geometry,
            &style,
            &six_wide,
        );
        assert!(matches!(result, Err(LayoutError::InvalidGeometry(_))));
    }

    #[test]
    fn a_line_taller_than_the_page_is_placed_alone() {
        let (geometry, style) = small_page();
        let style = style.with_heading_scale([20.0, 1.5, 1.25, 1.1, 1.0, 0.9]);
        let pages = layout_with_style(
            &[
                ContentBlock::paragraph("before"),
                ContentBlock::heading(1, "X"),
                ContentBlock::paragraph("after"),
            ],
            &geometry,
            &style,
            &six_wide,
        )
        .unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].text(), "X");
        assert_eq!(pages[2].text(), "after");
    }

    #[test]
    fn images_are_scaled_down_but_never_up() {
        let (geometry, style) = small_page();
        let pages = layout_with_style(
            &[
                ContentBlock::image_with_size(Vec::new(), 400, 200),
                ContentBlock::image_with_size(Vec::new(), 50, 10),
            ],
            &geometry,
            &style,
            &six_wide,
        )
        .unwrap();
        assert_eq!(pages.len(), 2);

        let big = pages[0].images().next().unwrap();
        assert_eq!(big.scale, 0.25);
        assert_eq!(big.position, Rect::from_origin(Pt(20.0), Pt(20.0), Pt(100.0), Pt(50.0)));

        let small = pages[1].images().next().unwrap();
        assert_eq!(small.scale, 1.0);
        assert_eq!(small.block, 1);
        assert_eq!(small.position.width(), Pt(50.0));
        assert!(matches!(pages[1].contents[0], PageContents::Image(_)));
    }

    #[test]
    fn bad_measurements_abort_the_run() {
        let (geometry, style) = small_page();
        let negative = |_: &str, _: Pt| Pt(-1.0);
        let result = layout_with_style(
            &[ContentBlock::paragraph("text")],
            &geometry,
            &style,
            &negative,
        );
        assert!(matches!(result, Err(LayoutError::Measurement { .. })));
    }
}
