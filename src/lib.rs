//! Pseudo-depth maps from flat masks.
//!
//! `depth_extrude` pushes a single-channel mask along a direction over a
//! gradient of shrinking displacements and records, per pixel, the brightest
//! depth any layer reached. The near edge ends at `close_point`, the far
//! trail fades toward `far_point`, and everything left at the background
//! threshold is floored to `bg_depth`.
//!
//! # Pipeline overview
//!
//! 1. **Resolve direction**: degrees -> unit `(alpha, beta)` pixel vector.
//! 2. **Plan steps**: `steps` fractions over `[0, 1]`, each with a rounded shift.
//! 3. **Composite**: max-composite every shifted, value-scaled mask copy.
//! 4. **Floor**: low accumulation becomes `bg_depth`, then narrow to `u8`.
//!
//! Masks come from any image the `image` crate decodes ([`load_mask`]) and depth
//! maps go back out as grayscale PNG ([`save_depth_png`]). The engine itself
//! does no IO and is deterministic for a given mask and [`ExtrudeParams`].
#![forbid(unsafe_code)]

mod extrude;
mod foundation;
mod mask;

pub use extrude::direction::Direction;
pub use extrude::engine::{extrude, extrude_raw, extrude_with};
pub use extrude::overlap::Overlap;
pub use extrude::params::ExtrudeParams;
pub use extrude::steps::{ExtrusionStep, gradient_fractions, plan_steps};
pub use extrude::threading::ExtrudeThreading;
pub use foundation::error::{ExtrudeError, ExtrudeResult};
pub use foundation::grid::{DepthMap, GrayGrid, Mask};
pub use mask::sink::{encode_png, save_depth_png, to_gray_image};
pub use mask::source::{decode_mask, load_mask, mask_from_image};
