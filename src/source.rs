//! A minimal content source: turns plain text with a little Markdown-style markup into
//! [`ContentBlock`]s.
//!
//! * `#` through `######` followed by a space start a heading
//! * `- `, `* `, `+ ` and `• ` start a list item
//! * blank lines separate paragraphs; the lines within a paragraph keep their line breaks
//!
//! Every text block gets the wrap mode [`WrapMode::detect`] picks for its text.

use crate::block::ContentBlock;
use crate::layout::WrapMode;

const LIST_MARKERS: [&str; 4] = ["- ", "* ", "+ ", "• "];

/// Split `text` into headings, list items and paragraphs
pub fn parse_blocks(text: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        if let Some((level, title)) = heading(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(detected(ContentBlock::heading(level, title), title));
        } else if let Some(item) = list_item(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(detected(ContentBlock::list_item(item), item));
        } else {
            paragraph.push(trimmed);
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);

    log::debug!("parsed {} blocks from {} bytes of text", blocks.len(), text.len());
    blocks
}

fn detected(block: ContentBlock, text: &str) -> ContentBlock {
    block.with_mode(WrapMode::detect(text))
}

fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<ContentBlock>) {
    if paragraph.is_empty() {
        return;
    }
    let text = paragraph.join("\n");
    paragraph.clear();
    let mode = WrapMode::detect(&text);
    blocks.push(ContentBlock::paragraph(text).with_mode(mode));
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let title = line[level..].strip_prefix(' ')?.trim();
    if title.is_empty() {
        return None;
    }
    Some((level as u8, title))
}

fn list_item(line: &str) -> Option<&str> {
    LIST_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
