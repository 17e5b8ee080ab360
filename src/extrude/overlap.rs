/// Region where a shifted copy of the mask lands on the canvas.
///
/// Source pixel `(src_x + i, src_y + j)` maps to canvas pixel `(dst_x + i, dst_y + j)`
/// for `i < width`, `j < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    pub src_x: u32,
    pub src_y: u32,
    pub dst_x: u32,
    pub dst_y: u32,
    pub width: u32,
    pub height: u32,
}

impl Overlap {
    /// Overlap of a `width x height` grid with itself translated by
    /// `(x_shift, y_shift)`. `None` when the translation leaves nothing in bounds.
    pub fn for_shift(width: u32, height: u32, x_shift: i64, y_shift: i64) -> Option<Self> {
        let (src_x, dst_x, w) = axis_overlap(width, x_shift)?;
        let (src_y, dst_y, h) = axis_overlap(height, y_shift)?;
        Some(Self {
            src_x,
            src_y,
            dst_x,
            dst_y,
            width: w,
            height: h,
        })
    }

    /// Restrict to canvas rows `[row_start, row_end)`.
    pub fn rows_within(self, row_start: u32, row_end: u32) -> Option<Self> {
        let start = self.dst_y.max(row_start);
        let end = (self.dst_y + self.height).min(row_end);
        if end <= start {
            return None;
        }
        Some(Self {
            src_y: self.src_y + (start - self.dst_y),
            dst_y: start,
            height: end - start,
            ..self
        })
    }
}

/// `(src_start, dst_start, len)` along one axis.
fn axis_overlap(extent: u32, shift: i64) -> Option<(u32, u32, u32)> {
    let extent = i64::from(extent);
    let len = extent - shift.abs();
    if len <= 0 {
        return None;
    }
    let src = (-shift).max(0);
    let dst = shift.max(0);
    Some((src as u32, dst as u32, len as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/extrude/overlap.rs"]
mod tests;
