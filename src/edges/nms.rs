//! Non‑maximum suppression over a pair of directional filter responses.
//!
//! Each interior cell is assigned one of four orientation buckets from the
//! angle `atan2(x_response, y_response)`. A response on the Y pass only gives
//! angle 0 (a horizontal edge), a response on the X pass only gives π/2 (a
//! vertical edge). The two passes are then merged by saturating addition and a
//! merged cell is zeroed when it is smaller than either neighbour listed for
//! its bucket.
//!
//! Comparisons read the merged values as they were before any cell was
//! zeroed. This differs from thinning in place in scan order, where a cell can
//! survive because an earlier neighbour was already suppressed: on the ramp
//! `[100, 90, 80]` in-place thinning keeps 80, here it is dropped.
//!
//! Both inputs are clamped 8-bit responses, so in practice angles stay within
//! `[0, π/2]` and the diagonal-backward bucket is only reachable from
//! hand-built inputs.
use crate::error::{EdgeError, Result};
use crate::image::{merge_add, Buffer};
use log::debug;
use std::f32::consts::PI;

/// Orientation bucket, one per eighth of a turn (and its mirror).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `(-π/8, π/8]`, `(7π/8, π]` and `(-π, -7π/8]`
    Horizontal,
    /// `(π/8, 3π/8]` and `(-3π/8, -π/8]`
    DiagonalForward,
    /// `(3π/8, 5π/8]` and `(-5π/8, -3π/8]`
    Vertical,
    /// `(5π/8, 7π/8]` and `(-7π/8, -5π/8]`
    DiagonalBackward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::DiagonalForward,
        Direction::Vertical,
        Direction::DiagonalBackward,
    ];

    /// Whether `angle` (radians) lies in this bucket.
    pub fn contains(self, angle: f32) -> bool {
        let e = PI / 8.0;
        let within = |lo: f32, hi: f32| angle > lo && angle <= hi;
        match self {
            Direction::Horizontal => within(-e, e) || within(7.0 * e, PI) || within(-PI, -7.0 * e),
            Direction::DiagonalForward => within(e, 3.0 * e) || within(-3.0 * e, -e),
            Direction::Vertical => within(3.0 * e, 5.0 * e) || within(-5.0 * e, -3.0 * e),
            Direction::DiagonalBackward => within(5.0 * e, 7.0 * e) || within(-7.0 * e, -5.0 * e),
        }
    }

    /// Bucket for `angle`. `None` for `-π` exactly and for NaN.
    pub fn classify(angle: f32) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.contains(angle))
    }

    /// `(dx, dy)` offsets of the two cells a merged value is compared against.
    pub fn neighbours(self) -> [(isize, isize); 2] {
        match self {
            Direction::Horizontal => [(0, -1), (0, 1)],
            Direction::Vertical => [(-1, 0), (1, 0)],
            Direction::DiagonalForward => [(1, -1), (-1, 1)],
            Direction::DiagonalBackward => [(-1, -1), (1, 1)],
        }
    }
}

/// Bucket for the pair of pass responses at one cell.
#[inline]
pub fn direction_of(x_response: u8, y_response: u8) -> Option<Direction> {
    Direction::classify((x_response as f32).atan2(y_response as f32))
}

/// Merge `x_pass` and `y_pass` and thin the result along each cell's bucket.
///
/// Neighbour comparisons read the merged values before any suppression, so the
/// result does not depend on scan order. The inputs need at least one cell of
/// padding.
pub fn suppress_non_maxima(x_pass: &Buffer, y_pass: &Buffer) -> Result<Buffer> {
    if x_pass.padding == 0 {
        return Err(EdgeError::InsufficientPadding {
            required: 1,
            actual: 0,
        });
    }
    let mut merged = x_pass.clone();
    merge_add(&mut merged, y_pass)?;

    let mut out = merged.clone();
    let p = merged.padding;
    if merged.w <= 2 * p || merged.h <= 2 * p {
        return Ok(out);
    }

    let mut suppressed = 0usize;
    for y in p..merged.h - p {
        for x in p..merged.w - p {
            let Some(dir) = direction_of(x_pass.get(x, y), y_pass.get(x, y)) else {
                continue;
            };
            let value = merged.get(x, y);
            let [a, b] = dir.neighbours().map(|(dx, dy)| {
                merged.get(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))
            });
            if value < a || value < b {
                out.set(x, y, 0);
                suppressed += 1;
            }
        }
    }
    debug!(
        "suppress_non_maxima {} suppressed={}",
        merged.shape(),
        suppressed
    );
    Ok(out)
}
