use rayon::prelude::*;

use crate::{
    extrude::{
        direction::Direction,
        overlap::Overlap,
        params::ExtrudeParams,
        steps::{ExtrusionStep, plan_steps},
        threading::{ExtrudeThreading, build_thread_pool},
    },
    foundation::{
        error::{ExtrudeError, ExtrudeResult},
        grid::{DepthMap, GrayGrid, Mask},
    },
};

/// Extrude `mask` into a depth map on the calling thread.
///
/// Every foreground pixel of each shifted layer proposes
/// `far_point + slope * frac * mask_value`; the canvas keeps the largest
/// proposal per pixel. Pixels that end below `bg_threshold` become `bg_depth`.
///
/// Only `steps == 0` is rejected here. Other ranges are checked by
/// [`ExtrudeParams::validate`].
pub fn extrude(mask: &Mask, params: &ExtrudeParams) -> ExtrudeResult<DepthMap> {
    extrude_with(mask, params, &ExtrudeThreading::default())
}

/// [`extrude`] over a raw row-major buffer.
pub fn extrude_raw(
    data: &[u8],
    width: u32,
    height: u32,
    params: &ExtrudeParams,
) -> ExtrudeResult<DepthMap> {
    let mask = GrayGrid::from_raw(width, height, data.to_vec())?;
    extrude(&mask, params)
}

/// [`extrude`] with an explicit threading policy. Output does not depend on `threading`.
#[tracing::instrument(
    skip(mask, params, threading),
    fields(width = mask.width(), height = mask.height(), steps = params.steps)
)]
pub fn extrude_with(
    mask: &Mask,
    params: &ExtrudeParams,
    threading: &ExtrudeThreading,
) -> ExtrudeResult<DepthMap> {
    if params.steps == 0 {
        return Err(ExtrudeError::validation("steps must be >= 1"));
    }
    if mask.is_empty() {
        return Err(ExtrudeError::shape("mask must not be empty"));
    }

    let inverted;
    let mask = if params.invert {
        inverted = mask.inverted();
        &inverted
    } else {
        mask
    };

    let direction = Direction::from_degrees(params.normalized_direction());
    let plan = plan_steps(params, direction);
    let layer = Layer::new(params);
    tracing::debug!(
        alpha = direction.alpha,
        beta = direction.beta,
        slope = layer.slope,
        offset = layer.offset,
        far_shift = ?plan.first().map(|s| (s.x_shift, s.y_shift)),
        "resolved extrusion plan"
    );

    let width = mask.width() as usize;
    let mut canvas = vec![0.0f64; mask.len()];
    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let band_rows = threading.normalized_band_rows(mask.height());
        pool.install(|| {
            canvas
                .par_chunks_mut(band_rows * width)
                .enumerate()
                .for_each(|(band, rows)| {
                    composite_band(mask, &plan, &layer, (band * band_rows) as u32, rows);
                });
        });
    } else {
        composite_band(mask, &plan, &layer, 0, &mut canvas);
    }

    let data = canvas
        .into_iter()
        .map(|v| floor_background(v, params.bg_threshold, params.bg_depth))
        .collect();
    GrayGrid::from_raw(mask.width(), mask.height(), data)
}

/// Linear map from mask intensity to depth, plus the foreground gate.
struct Layer {
    slope: f64,
    offset: f64,
    threshold: u8,
}

impl Layer {
    fn new(params: &ExtrudeParams) -> Self {
        Self {
            slope: params.slope(),
            offset: params.offset(),
            threshold: params.bg_threshold,
        }
    }
}

/// Max-composite every step into canvas rows starting at `row_start`.
/// `rows` holds whole canvas rows.
fn composite_band(
    mask: &Mask,
    plan: &[ExtrusionStep],
    layer: &Layer,
    row_start: u32,
    rows: &mut [f64],
) {
    let (width, height) = mask.dimensions();
    let w = width as usize;
    let row_end = row_start + (rows.len() / w) as u32;

    for step in plan {
        let Some(full) = Overlap::for_shift(width, height, step.x_shift, step.y_shift) else {
            if row_start == 0 {
                tracing::trace!(
                    frac = step.frac,
                    x_shift = step.x_shift,
                    y_shift = step.y_shift,
                    "step shifted out of bounds, skipped"
                );
            }
            continue;
        };
        let Some(o) = full.rows_within(row_start, row_end) else {
            continue;
        };

        let scale = layer.slope * step.frac;
        for j in 0..o.height {
            let src_start = o.src_x as usize;
            let src = &mask.row(o.src_y + j)[src_start..src_start + o.width as usize];
            let dst_start = (o.dst_y + j - row_start) as usize * w + o.dst_x as usize;
            let dst = &mut rows[dst_start..dst_start + o.width as usize];

            for (d, &m) in dst.iter_mut().zip(src) {
                if m <= layer.threshold {
                    continue;
                }
                let v = (layer.offset + scale * f64::from(m)).clamp(0.0, 255.0);
                if v > *d {
                    *d = v;
                }
            }
        }
    }
}

/// Brightness floor followed by narrowing to u8 (clamp, then truncate).
///
/// The `v <= 0.0` arm only matters when `bg_threshold == 0`: a canvas value of
/// exactly zero was never raised by any step, so it is background too.
fn floor_background(v: f64, bg_threshold: u8, bg_depth: u8) -> u8 {
    if v < f64::from(bg_threshold) || v <= 0.0 {
        return bg_depth;
    }
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/extrude/engine.rs"]
mod tests;
