use crate::block::ImageBlock;
use crate::error::{LayoutError, Result};
use std::io::Cursor;
use usvg::Tree;

/// Intrinsic size of an image block, in pixels (or SVG user units)
pub fn image_size(block: &ImageBlock) -> Result<(f32, f32)> {
    let (width, height) = match block.size {
        Some((w, h)) => (w as f32, h as f32),
        None if looks_like_svg(&block.data) => svg_size(&block.data)?,
        None => raster_size(&block.data)?,
    };

    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(LayoutError::ImageSize(format!(
            "image is {width}x{height}, which has no area"
        )));
    }
    Ok((width, height))
}

/// Read only the header of a raster image; the pixels are never decoded
fn raster_size(data: &[u8]) -> Result<(f32, f32)> {
    let reader = image::io::Reader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    let (width, height) = reader.into_dimensions()?;
    Ok((width as f32, height as f32))
}

fn svg_size(data: &[u8]) -> Result<(f32, f32)> {
    let tree = Tree::from_data(data, &usvg::Options::default())?;
    let size = tree.size();
    Ok((size.width(), size.height()))
}

fn looks_like_svg(data: &[u8]) -> bool {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    let head = &data[start..data.len().min(start + 256)];
    head.starts_with(b"<svg")
        || (head.starts_with(b"<?xml") && head.windows(4).any(|w| w == b"<svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::DynamicImage::new_rgb8(width, height)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .expect("can encode png");
        bytes
    }

    #[test]
    fn explicit_size_wins() {
        let block = ImageBlock {
            data: Vec::new(),
            size: Some((640, 480)),
        };
        assert_eq!(image_size(&block).unwrap(), (640.0, 480.0));
    }

    #[test]
    fn reads_raster_headers() {
        let block = ImageBlock {
            data: png(3, 7),
            size: None,
        };
        assert_eq!(image_size(&block).unwrap(), (3.0, 7.0));
    }

    #[test]
    fn reads_svg_size() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="80"></svg>"#;
        let block = ImageBlock {
            data: svg.to_vec(),
            size: None,
        };
        assert_eq!(image_size(&block).unwrap(), (120.0, 80.0));
    }

    #[test]
    fn rejects_garbage_and_empty_images() {
        let garbage = ImageBlock {
            data: b"not an image".to_vec(),
            size: None,
        };
        assert!(matches!(image_size(&garbage), Err(LayoutError::Image(_))));

        let flat = ImageBlock {
            data: Vec::new(),
            size: Some((100, 0)),
        };
        assert!(matches!(image_size(&flat), Err(LayoutError::ImageSize(_))));
    }
}
