use crate::extrude::{direction::Direction, params::ExtrudeParams};

/// One layer of the extrusion gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrusionStep {
    /// Position in the gradient, 0 at the far end and 1 at the near end.
    pub frac: f64,
    pub x_shift: i64,
    pub y_shift: i64,
}

/// `steps` evenly spaced values over `[0, 1]`, both ends included.
/// A single step yields `[0.0]`; zero steps yield nothing.
pub fn gradient_fractions(steps: u32) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let step = 1.0 / f64::from(n - 1);
            let mut out: Vec<f64> = (0..n).map(|i| f64::from(i) * step).collect();
            if let Some(last) = out.last_mut() {
                *last = 1.0;
            }
            out
        }
    }
}

/// Resolve the ordered (far to near) sequence of shifted layers.
pub fn plan_steps(params: &ExtrudeParams, direction: Direction) -> Vec<ExtrusionStep> {
    let shift = f64::from(params.shift);
    gradient_fractions(params.steps)
        .into_iter()
        .map(|frac| {
            let (x_shift, y_shift) = direction.displacement((1.0 - frac) * shift);
            ExtrusionStep {
                frac,
                x_shift,
                y_shift,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/extrude/steps.rs"]
mod tests;
