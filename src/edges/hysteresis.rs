//! Double-threshold edge linking.
//!
//! Cells `>= high` are strong, cells `>= low` are weak. A weak cell becomes
//! strong when any of its eight neighbours is strong; full scans over the
//! interior repeat until a pass promotes nothing. The buffer then holds 255 for
//! every strong cell and 0 elsewhere, border cells included.
//!
//! Each pass costs O(W·H) and a chain can advance by as little as one cell per
//! pass against the scan order, so the worst case is O(diameter · W·H).
use crate::error::{EdgeError, Result};
use crate::image::{BorderMode, Buffer, PaddedWorkspace};
use log::{debug, info};
use serde::Serialize;

/// Counters reported by [`hysteresis_threshold`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HysteresisStats {
    /// Cells at or above the high threshold before linking
    pub strong_seeds: usize,
    /// Weak cells promoted to strong
    pub promoted: usize,
    /// Scans performed, including the final one that promoted nothing
    pub passes: usize,
}

/// Binarize `buffer` with hysteresis. Requires `high > low`.
///
/// An unpadded buffer is linked on a zero-bordered copy so its edge cells get
/// full neighbourhoods; the result is cropped back on return.
pub fn hysteresis_threshold(buffer: &mut Buffer, high: u8, low: u8) -> Result<HysteresisStats> {
    if high <= low {
        return Err(EdgeError::ThresholdOrder { high, low });
    }
    buffer.ensure_filterable()?;
    let mut ws = PaddedWorkspace::acquire(buffer, 1, BorderMode::Zero)?;
    let stats = link(&mut ws.buffer, high, low);
    ws.commit(buffer)?;
    info!(
        "hysteresis: recovered {} pixels in {} passes",
        stats.promoted, stats.passes
    );
    Ok(stats)
}

fn link(buf: &mut Buffer, high: u8, low: u8) -> HysteresisStats {
    let (w, h, p) = (buf.w, buf.h, buf.padding);
    let mut strong: Vec<bool> = buf.data.iter().map(|&v| v >= high).collect();
    let weak: Vec<bool> = buf.data.iter().map(|&v| v >= low).collect();
    let mut stats = HysteresisStats {
        strong_seeds: strong.iter().filter(|&&s| s).count(),
        ..Default::default()
    };

    let wi = w as isize;
    let moore = [-wi - 1, -wi, -wi + 1, -1, 1, wi - 1, wi, wi + 1];
    loop {
        let mut promoted = 0usize;
        if w > 2 * p && h > 2 * p {
            for y in p..h - p {
                for x in p..w - p {
                    let i = y * w + x;
                    if strong[i] || !weak[i] {
                        continue;
                    }
                    if moore.iter().any(|&o| strong[i.wrapping_add_signed(o)]) {
                        strong[i] = true;
                        promoted += 1;
                    }
                }
            }
        }
        stats.passes += 1;
        stats.promoted += promoted;
        debug!("hysteresis pass {} promoted={}", stats.passes, promoted);
        if promoted == 0 {
            break;
        }
    }

    for (dst, &s) in buf.data.iter_mut().zip(&strong) {
        *dst = if s { 255 } else { 0 };
    }
    stats
}
