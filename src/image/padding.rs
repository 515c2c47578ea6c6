//! Border management: growing/shrinking a buffer's padding, restoring a padded
//! working copy into its source, and saturating element-wise merges.
//!
//! Filters never convolve the caller's buffer directly. They acquire a
//! [`PaddedWorkspace`], run every stage on it and only [`commit`] once all
//! stages succeeded, so a failing stage leaves the caller's buffer untouched.
//!
//! [`commit`]: PaddedWorkspace::commit
use super::traits::{ImageView, ImageViewMut};
use super::Buffer;
use crate::error::{EdgeError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// How newly added border cells are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Black border.
    Zero,
    /// Copy of the nearest edge cell of the source buffer.
    #[default]
    Replicate,
}

/// Zero-padded copy of `buffer`, `amount` cells wider on every side.
pub fn pad(buffer: &Buffer, amount: usize) -> Result<Buffer> {
    pad_with(buffer, amount, BorderMode::Zero)
}

/// Padded copy of `buffer` with the new border filled according to `mode`.
pub fn pad_with(buffer: &Buffer, amount: usize, mode: BorderMode) -> Result<Buffer> {
    if buffer.channels != 1 {
        return Err(EdgeError::UnsupportedChannels {
            channels: buffer.channels,
        });
    }
    if amount == 0 {
        return Err(EdgeError::invalid("amount", amount, "padding amount must be > 0"));
    }

    let (w, h) = (buffer.w, buffer.h);
    let mut padded = Buffer {
        w: w + 2 * amount,
        h: h + 2 * amount,
        channels: 1,
        padding: buffer.padding + amount,
        data: vec![0; (w + 2 * amount) * (h + 2 * amount)],
    };
    for (y, src) in buffer.rows().enumerate() {
        padded.row_mut(y + amount)[amount..amount + w].copy_from_slice(src);
    }
    if mode == BorderMode::Replicate && w > 0 && h > 0 {
        replicate_border(&mut padded, amount);
    }
    Ok(padded)
}

fn replicate_border(padded: &mut Buffer, amount: usize) {
    let stride = padded.w;
    let inner_w = stride - 2 * amount;
    let inner_h = padded.h - 2 * amount;

    for y in amount..amount + inner_h {
        let row = padded.row_mut(y);
        let (left, right) = (row[amount], row[amount + inner_w - 1]);
        row[..amount].fill(left);
        row[amount + inner_w..].fill(right);
    }
    let first = amount * stride;
    let last = (amount + inner_h - 1) * stride;
    for y in 0..amount {
        padded.data.copy_within(first..first + stride, y * stride);
        let dst = (amount + inner_h + y) * stride;
        padded.data.copy_within(last..last + stride, dst);
    }
}

/// Cropped copy of `buffer` with `amount` cells removed from every side.
pub fn unpad(buffer: &Buffer, amount: usize) -> Result<Buffer> {
    if amount == 0 {
        return Err(EdgeError::invalid("amount", amount, "unpad amount must be > 0"));
    }
    if buffer.padding < amount {
        return Err(EdgeError::InsufficientPadding {
            required: amount,
            actual: buffer.padding,
        });
    }
    if buffer.channels != 1 {
        return Err(EdgeError::UnsupportedChannels {
            channels: buffer.channels,
        });
    }

    let w = buffer.w - 2 * amount;
    let h = buffer.h - 2 * amount;
    let mut out = Buffer {
        w,
        h,
        channels: 1,
        padding: buffer.padding - amount,
        data: vec![0; w * h],
    };
    for y in 0..h {
        out.row_mut(y)
            .copy_from_slice(&buffer.row(y + amount)[amount..amount + w]);
    }
    Ok(out)
}

/// Copy the interior of the larger `src` back into `dest`'s existing storage.
///
/// The crop offset is inferred as half the size difference, which must be the
/// same horizontally and vertically.
pub fn unpad_into(dest: &mut Buffer, src: &Buffer) -> Result<()> {
    if src.padding < dest.padding {
        return Err(EdgeError::InsufficientPadding {
            required: dest.padding,
            actual: src.padding,
        });
    }
    if src.channels != 1 || dest.channels != src.channels {
        return Err(EdgeError::UnsupportedChannels {
            channels: src.channels.max(dest.channels),
        });
    }
    let mismatch = || EdgeError::DimensionMismatch {
        left: dest.shape(),
        right: src.shape(),
    };
    let dx = src.w.checked_sub(dest.w).ok_or_else(mismatch)?;
    let dy = src.h.checked_sub(dest.h).ok_or_else(mismatch)?;
    if dx != dy || dx % 2 != 0 {
        return Err(mismatch());
    }

    let amount = dx / 2;
    let w = dest.w;
    for y in 0..dest.h {
        dest.row_mut(y)
            .copy_from_slice(&src.row(y + amount)[amount..amount + w]);
    }
    Ok(())
}

/// In-place `a[i] = min(a[i] + b[i], 255)` over two identically shaped buffers.
pub fn merge_add(a: &mut Buffer, b: &Buffer) -> Result<()> {
    if !a.same_shape(b) {
        return Err(EdgeError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    for (dst, &src) in a.data.iter_mut().zip(&b.data) {
        *dst = dst.saturating_add(src);
    }
    Ok(())
}

/// Private working copy of a caller buffer with at least `required` padding.
///
/// Dropping the workspace without committing discards every change.
#[derive(Debug)]
pub struct PaddedWorkspace {
    pub buffer: Buffer,
    grown: bool,
}

impl PaddedWorkspace {
    pub fn acquire(source: &Buffer, required: usize, mode: BorderMode) -> Result<Self> {
        if source.padding >= required {
            return Ok(Self {
                buffer: source.clone(),
                grown: false,
            });
        }
        let amount = required - source.padding;
        debug!(
            "PaddedWorkspace::acquire {} needs padding {} -> growing by {} ({:?})",
            source.shape(),
            required,
            amount,
            mode
        );
        Ok(Self {
            buffer: pad_with(source, amount, mode)?,
            grown: true,
        })
    }

    /// Whether the workspace had to grow the caller's border.
    pub fn grown(&self) -> bool {
        self.grown
    }

    /// Write the working result back into `dest`, cropping any added border.
    pub fn commit(self, dest: &mut Buffer) -> Result<()> {
        if self.grown {
            unpad_into(dest, &self.buffer)
        } else {
            *dest = self.buffer;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: usize, h: usize) -> Buffer {
        let data = (0..w * h).map(|i| (i * 7 % 251) as u8).collect();
        Buffer::from_raw(w, h, 1, data).unwrap()
    }

    #[test]
    fn pad_centres_interior_and_zeroes_border() {
        let src = ramp(3, 2);
        let padded = pad(&src, 2).unwrap();
        assert_eq!((padded.w, padded.h, padded.padding), (7, 6, 2));
        for y in 0..padded.h {
            for x in 0..padded.w {
                let inside = (2..5).contains(&x) && (2..4).contains(&y);
                let expected = if inside { src.get(x - 2, y - 2) } else { 0 };
                assert_eq!(padded.get(x, y), expected, "mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn pad_stacks_existing_padding() {
        let once = pad(&ramp(2, 2), 1).unwrap();
        let twice = pad(&once, 3).unwrap();
        assert_eq!(twice.padding, 4);
        assert_eq!(twice.interior_width(), 2);
    }

    #[test]
    fn replicate_copies_nearest_edge() {
        let src = Buffer::from_raw(2, 2, 1, vec![10, 20, 30, 40]).unwrap();
        let padded = pad_with(&src, 2, BorderMode::Replicate).unwrap();
        assert_eq!(padded.get(0, 0), 10);
        assert_eq!(padded.get(5, 0), 20);
        assert_eq!(padded.get(0, 5), 30);
        assert_eq!(padded.get(5, 5), 40);
        assert_eq!(padded.get(3, 1), 20);
        assert_eq!(padded.get(1, 3), 30);
    }

    #[test]
    fn pad_rejects_multichannel_and_zero_amount() {
        let rgb = Buffer::new(2, 2, 3);
        assert!(matches!(
            pad(&rgb, 1),
            Err(EdgeError::UnsupportedChannels { channels: 3 })
        ));
        assert!(matches!(
            pad(&ramp(2, 2), 0),
            Err(EdgeError::InvalidParameter { name: "amount", .. })
        ));
    }

    #[test]
    fn unpad_requires_enough_padding() {
        let padded = pad(&ramp(4, 4), 1).unwrap();
        assert_eq!(
            unpad(&padded, 2),
            Err(EdgeError::InsufficientPadding {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn unpad_into_restores_original_storage() {
        let original = ramp(5, 4);
        let mut dest = Buffer::new(5, 4, 1);
        let padded = pad(&original, 3).unwrap();
        unpad_into(&mut dest, &padded).unwrap();
        assert_eq!(dest, original);
    }

    #[test]
    fn unpad_into_rejects_uneven_growth() {
        let mut dest = Buffer::new(4, 4, 1);
        let src = Buffer::new(6, 8, 1);
        assert!(matches!(
            unpad_into(&mut dest, &src),
            Err(EdgeError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn merge_add_saturates_instead_of_wrapping() {
        let mut a = Buffer::filled(2, 2, 200);
        let b = Buffer::filled(2, 2, 100);
        merge_add(&mut a, &b).unwrap();
        assert!(a.data.iter().all(|&v| v == 255));

        let mut c = Buffer::filled(2, 2, 3);
        merge_add(&mut c, &Buffer::filled(2, 2, 4)).unwrap();
        assert!(c.data.iter().all(|&v| v == 7));
    }

    #[test]
    fn merge_add_rejects_different_padding() {
        let mut a = Buffer::filled(4, 4, 1);
        let mut b = Buffer::filled(4, 4, 1);
        b.padding = 1;
        assert!(merge_add(&mut a, &b).is_err());
        assert!(a.data.iter().all(|&v| v == 1));
    }

    #[test]
    fn workspace_without_growth_replaces_buffer() {
        let mut target = pad(&ramp(3, 3), 1).unwrap();
        let mut ws = PaddedWorkspace::acquire(&target, 1, BorderMode::Zero).unwrap();
        assert!(!ws.grown());
        ws.buffer.set(2, 2, 99);
        ws.commit(&mut target).unwrap();
        assert_eq!(target.get(2, 2), 99);
        assert_eq!(target.padding, 1);
    }

    #[test]
    fn workspace_growth_is_cropped_on_commit() {
        let mut target = ramp(3, 3);
        let before = target.clone();
        let ws = PaddedWorkspace::acquire(&target, 2, BorderMode::Replicate).unwrap();
        assert!(ws.grown());
        assert_eq!(ws.buffer.padding, 2);
        ws.commit(&mut target).unwrap();
        assert_eq!(target, before);
    }
}
