use crate::foundation::error::{ExtrudeError, ExtrudeResult};

/// Single-channel 8-bit grid, row-major with the origin at the top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Input of the extrusion engine: foreground is anything above the background threshold.
pub type Mask = GrayGrid;

/// Output of the extrusion engine, same dimensions as its mask.
pub type DepthMap = GrayGrid;

impl GrayGrid {
    /// Wrap a row-major buffer. Both dimensions must be non-zero and `data`
    /// must hold exactly `width * height` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ExtrudeResult<Self> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(ExtrudeError::shape(format!(
                "grid buffer holds {} bytes, expected {width}x{height} = {expected}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Grid where every pixel holds `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> ExtrudeResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed grid; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Pixels of row `y`.
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Copy with every value flipped (`255 - v`), swapping foreground and background.
    pub fn inverted(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|v| !v).collect(),
        }
    }

    /// Copy rotated 180 degrees about the grid center.
    pub fn reflected(&self) -> Self {
        let mut data = self.data.clone();
        data.reverse();
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

fn checked_len(width: u32, height: u32) -> ExtrudeResult<usize> {
    if width == 0 || height == 0 {
        return Err(ExtrudeError::shape(format!(
            "grid dimensions must be non-zero, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| ExtrudeError::shape("grid size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/grid.rs"]
mod tests;
