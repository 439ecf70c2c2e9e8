use crate::layout::WrapMode;
use crate::style::Emphasis;
use serde::{Deserialize, Serialize};

/// The semantic role of a run of text
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextKind {
    /// A heading, level 1 (largest) through 6
    Heading(u8),
    Paragraph,
    ListItem,
}

/// A heading, paragraph or list item to be wrapped and placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub kind: TextKind,
    pub text: String,
    /// How the text may be broken into lines. Chosen by whoever produced the block, since
    /// only they know the script of the text.
    pub mode: WrapMode,
    /// Overrides the emphasis the style sheet would give this kind of block
    pub emphasis: Option<Emphasis>,
}

/// An image, placed alone on its own page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    /// Encoded image data (any raster format the `image` crate can identify, or SVG)
    pub data: Vec<u8>,
    /// Intrinsic size in pixels, if already known. Otherwise it is read from `data`.
    pub size: Option<(u32, u32)>,
}

/// A unit of content to be laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentBlock {
    Text(TextBlock),
    Image(ImageBlock),
}

impl ContentBlock {
    fn text<S: Into<String>>(kind: TextKind, text: S) -> ContentBlock {
        ContentBlock::Text(TextBlock {
            kind,
            text: text.into(),
            mode: WrapMode::WordBreak,
            emphasis: None,
        })
    }

    /// A heading. Levels outside 1..=6 are clamped into that range.
    pub fn heading<S: Into<String>>(level: u8, text: S) -> ContentBlock {
        ContentBlock::text(TextKind::Heading(level.clamp(1, 6)), text)
    }

    pub fn paragraph<S: Into<String>>(text: S) -> ContentBlock {
        ContentBlock::text(TextKind::Paragraph, text)
    }

    pub fn list_item<S: Into<String>>(text: S) -> ContentBlock {
        ContentBlock::text(TextKind::ListItem, text)
    }

    /// An image whose size will be read from its encoded data
    pub fn image(data: Vec<u8>) -> ContentBlock {
        ContentBlock::Image(ImageBlock { data, size: None })
    }

    /// An image with a caller-supplied pixel size; `data` is passed through untouched
    pub fn image_with_size(data: Vec<u8>, width: u32, height: u32) -> ContentBlock {
        ContentBlock::Image(ImageBlock {
            data,
            size: Some((width, height)),
        })
    }

    /// Set the wrap mode of a text block. Has no effect on images.
    pub fn with_mode(mut self, mode: WrapMode) -> ContentBlock {
        if let ContentBlock::Text(block) = &mut self {
            block.mode = mode;
        }
        self
    }

    /// Set the emphasis of a text block. Has no effect on images.
    pub fn with_emphasis(mut self, emphasis: Emphasis) -> ContentBlock {
        if let ContentBlock::Text(block) = &mut self {
            block.emphasis = Some(emphasis);
        }
        self
    }

    /// The text of the block, or `None` for images
    pub fn text_content(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(block) => Some(&block.text),
            ContentBlock::Image(_) => None,
        }
    }
}
