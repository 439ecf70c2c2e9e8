use thiserror::Error;

/// Convenience alias for results produced by this crate
pub type Result<T> = std::result::Result<T, LayoutError>;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A page geometry or wrap width that leaves no room for content
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The metrics provider returned a negative or non-finite width
    #[error("metrics provider measured {text:?} as {width}, which is not a valid width")]
    Measurement { text: String, width: f32 },

    #[error(transparent)]
    /// [image] failed to read the dimensions of a raster image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// [usvg] failed to parse an SVG image
    Svg(#[from] usvg::Error),

    /// An image block decoded, but cannot be placed on a page
    #[error("unusable image: {0}")]
    ImageSize(String),

    /// A block was pushed after the paginator finished its run
    #[error("the paginator has already finished")]
    Finished,

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}

impl LayoutError {
    pub(crate) fn geometry<S: Into<String>>(message: S) -> LayoutError {
        LayoutError::InvalidGeometry(message.into())
    }
}
