use std::path::Path;

use anyhow::Context;

use crate::foundation::{
    error::{ExtrudeError, ExtrudeResult},
    grid::{GrayGrid, Mask},
};

/// Reduce an image to a single-channel mask: the alpha channel when the
/// image has one, luminance otherwise.
pub fn mask_from_image(img: &image::DynamicImage) -> ExtrudeResult<Mask> {
    let (width, height, data) = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        let alpha: Vec<u8> = rgba.pixels().map(|px| px.0[3]).collect();
        (w, h, alpha)
    } else {
        let luma = img.to_luma8();
        let (w, h) = luma.dimensions();
        (w, h, luma.into_raw())
    };
    GrayGrid::from_raw(width, height, data)
}

/// Decode encoded image bytes into a mask.
pub fn decode_mask(bytes: &[u8]) -> ExtrudeResult<Mask> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ExtrudeError::image(format!("decode mask: {e}")))?;
    mask_from_image(&img)
}

/// Read and decode a mask image from disk.
#[tracing::instrument]
pub fn load_mask(path: &Path) -> ExtrudeResult<Mask> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read mask '{}'", path.display()))?;
    let mask = decode_mask(&bytes)?;
    tracing::debug!(width = mask.width(), height = mask.height(), "loaded mask");
    Ok(mask)
}

#[cfg(test)]
#[path = "../../tests/unit/mask/source.rs"]
mod tests;
