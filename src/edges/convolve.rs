//! Dense 2-D convolution of a padded single-channel buffer.
//!
//! - Every interior cell receives `round(Σ k[ky][kx]·src[y+ky-hh][x+kx-hw] / divisor)`
//!   clamped to `[0, 255]`.
//! - Reads always come from the unmodified source, never from cells already
//!   written by the same pass.
//! - Border cells are copied through unchanged; the caller's padding must
//!   cover the kernel's half extent, no index clamping is done here.
//!
//! Complexity: O(W·H·kw·kh).
use crate::error::{EdgeError, Result};
use crate::image::{Buffer, ImageView, ImageViewMut};
use crate::kernel::Kernel;

#[inline]
fn to_byte(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Convolve `buffer` with `kernel`, returning a new buffer of the same shape.
pub fn convolve(buffer: &Buffer, kernel: &Kernel) -> Result<Buffer> {
    if buffer.channels != 1 {
        return Err(EdgeError::UnsupportedChannels {
            channels: buffer.channels,
        });
    }
    let required = kernel.required_padding();
    if buffer.padding < required {
        return Err(EdgeError::InsufficientPadding {
            required,
            actual: buffer.padding,
        });
    }

    let mut out = buffer.clone();
    let p = buffer.padding;
    if buffer.w <= 2 * p || buffer.h <= 2 * p {
        return Ok(out);
    }

    let (hw, hh) = (kernel.half_width(), kernel.half_height());
    let (kw, kh) = (kernel.width(), kernel.height());
    let divisor = kernel.divisor();
    for y in p..buffer.h - p {
        let dst = out.row_mut(y);
        for x in p..buffer.w - p {
            let mut acc = 0.0f32;
            for ky in 0..kh {
                let src = buffer.row(y - hh + ky);
                for kx in 0..kw {
                    acc += kernel.at(kx, ky) * src[x - hw + kx] as f32;
                }
            }
            dst[x] = to_byte(acc / divisor);
        }
    }
    Ok(out)
}

/// Convolve and replace `buffer` with the result. On error the buffer is untouched.
pub fn convolve_in_place(buffer: &mut Buffer, kernel: &Kernel) -> Result<()> {
    *buffer = convolve(buffer, kernel)?;
    Ok(())
}
