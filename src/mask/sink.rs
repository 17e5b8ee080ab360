use std::{io::Cursor, path::Path};

use anyhow::Context;

use crate::foundation::{
    error::{ExtrudeError, ExtrudeResult},
    grid::DepthMap,
};

pub fn to_gray_image(depth: &DepthMap) -> ExtrudeResult<image::GrayImage> {
    image::GrayImage::from_raw(depth.width(), depth.height(), depth.as_raw().to_vec())
        .ok_or_else(|| ExtrudeError::shape("depth map buffer does not match its dimensions"))
}

/// Encode as an 8-bit grayscale PNG.
pub fn encode_png(depth: &DepthMap) -> ExtrudeResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageLuma8(to_gray_image(depth)?)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| ExtrudeError::image(format!("encode depth png: {e}")))?;
    Ok(buf)
}

/// Write a grayscale PNG, creating the parent directory if needed.
pub fn save_depth_png(depth: &DepthMap, path: &Path) -> ExtrudeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        depth.as_raw(),
        depth.width(),
        depth.height(),
        image::ColorType::L8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), "saved depth map");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/mask/sink.rs"]
mod tests;
