/// Unit displacement vector of an extrusion, in pixel axes (x right, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    pub alpha: f64,
    pub beta: f64,
}

/// Angles are snapped to this many steps per degree before trig is evaluated.
const SNAP_PER_DEGREE: f64 = 1e9;

impl Direction {
    /// Resolve `degrees` (any finite value) to a unit vector.
    ///
    /// Both halves of the circle share one trig evaluation: `d` and `d + 180`
    /// reduce to the same angle in `[0, 180)` and differ only in sign.
    pub fn from_degrees(degrees: f64) -> Self {
        let mut base = degrees.rem_euclid(360.0);
        let mut flip = false;
        if base >= 180.0 {
            base -= 180.0;
            flip = true;
        }
        // `d + 180 - 180` may land an ulp away from `d`
        base = (base * SNAP_PER_DEGREE).round() / SNAP_PER_DEGREE;
        if base >= 180.0 {
            base -= 180.0;
            flip = !flip;
        }

        let rad = base.to_radians();
        let (alpha, beta) = (rad.cos(), rad.sin());
        if flip {
            Self {
                alpha: -alpha,
                beta: -beta,
            }
        } else {
            Self { alpha, beta }
        }
    }

    /// Integer `(x_shift, y_shift)` for a displacement of `distance` pixels.
    ///
    /// Halves round to even. Since `from_degrees(d + 180.0)` is the exact
    /// negation of `from_degrees(d)`, so are their displacements.
    pub fn displacement(self, distance: f64) -> (i64, i64) {
        (
            (self.alpha * distance).round_ties_even() as i64,
            (self.beta * distance).round_ties_even() as i64,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/extrude/direction.rs"]
mod tests;
