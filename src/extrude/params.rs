use std::io::Read;

use crate::foundation::error::{ExtrudeError, ExtrudeResult};

/// Extrusion configuration. Deserializes from JSON with every field optional;
/// omitted fields take the defaults below.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtrudeParams {
    /// Direction of the push in degrees. Any finite value; reduced modulo 360.
    pub direction: f64,
    /// Displacement in pixels at the far end of the gradient.
    pub shift: u32,
    /// Depth assigned to the nearest step.
    pub close_point: u8,
    /// Depth assigned to the farthest step.
    pub far_point: u8,
    /// Mask values at or below this are background. Must be < 255.
    pub bg_threshold: u8,
    /// Output value for background pixels. Must be < 255.
    pub bg_depth: u8,
    /// Number of gradient layers. Must be >= 1.
    pub steps: u32,
    /// Flip foreground/background of the mask before extruding.
    pub invert: bool,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            direction: 45.0,
            shift: 40,
            close_point: 180,
            far_point: 80,
            bg_threshold: 10,
            bg_depth: 0,
            steps: 100,
            invert: false,
        }
    }
}

impl ExtrudeParams {
    pub fn from_json_str(s: &str) -> ExtrudeResult<Self> {
        serde_json::from_str(s).map_err(|e| ExtrudeError::serde(format!("extrude params: {e}")))
    }

    pub fn from_json_reader(r: impl Read) -> ExtrudeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ExtrudeError::serde(format!("extrude params: {e}")))
    }

    /// Range checks for user-supplied values. The engine itself only rejects
    /// `steps == 0`; everything else here is the caller's contract.
    pub fn validate(&self) -> ExtrudeResult<()> {
        if !self.direction.is_finite() {
            return Err(ExtrudeError::validation("direction must be finite"));
        }
        if self.bg_threshold == u8::MAX {
            return Err(ExtrudeError::validation("bg_threshold must be < 255"));
        }
        if self.bg_depth == u8::MAX {
            return Err(ExtrudeError::validation("bg_depth must be < 255"));
        }
        if self.steps == 0 {
            return Err(ExtrudeError::validation("steps must be >= 1"));
        }
        Ok(())
    }

    /// `direction` in `[0, 360)`.
    pub fn normalized_direction(&self) -> f64 {
        let d = self.direction.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if d >= 360.0 { 0.0 } else { d }
    }

    /// Depth gained per unit of mask intensity at the nearest step.
    /// Negative when `far_point > close_point`.
    pub fn slope(&self) -> f64 {
        (f64::from(self.close_point) - f64::from(self.far_point)) / 255.0
    }

    pub fn offset(&self) -> f64 {
        f64::from(self.far_point)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/extrude/params.rs"]
mod tests;
