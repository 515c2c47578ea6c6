//! Owned 8-bit pixel buffer with a symmetric padding border.
//!
//! Layout is row-major and channel-interleaved with no row stride beyond
//! `w * channels`. `w` and `h` include the border: the interior spans
//! `[padding, w - padding) × [padding, h - padding)`.
use crate::error::{EdgeError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    /// Width in pixels, border included
    pub w: usize,
    /// Height in pixels, border included
    pub h: usize,
    /// Interleaved channels per pixel
    pub channels: usize,
    /// Border width already applied on each side
    pub padding: usize,
    /// Backing storage, `w * h * channels` bytes
    pub data: Vec<u8>,
}

impl Buffer {
    /// Construct a zero-filled, unpadded buffer.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        Self {
            w,
            h,
            channels,
            padding: 0,
            data: vec![0; w * h * channels],
        }
    }

    /// Wrap raw interleaved bytes as an unpadded buffer.
    pub fn from_raw(w: usize, h: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != w * h * channels {
            return Err(EdgeError::DataLength {
                len: data.len(),
                width: w,
                height: h,
                channels,
            });
        }
        Ok(Self {
            w,
            h,
            channels,
            padding: 0,
            data,
        })
    }

    /// Single-channel buffer where every byte equals `value`.
    pub fn filled(w: usize, h: usize, value: u8) -> Self {
        Self {
            w,
            h,
            channels: 1,
            padding: 0,
            data: vec![value; w * h],
        }
    }

    #[inline]
    /// Linear index of channel 0 at (x, y).
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * self.channels
    }

    #[inline]
    /// Channel-0 value at (x, y) in buffer coordinates (border included).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn interior_width(&self) -> usize {
        self.w.saturating_sub(2 * self.padding)
    }

    pub fn interior_height(&self) -> usize {
        self.h.saturating_sub(2 * self.padding)
    }

    pub fn is_single_channel(&self) -> bool {
        self.channels == 1
    }

    /// Same width, height, channel count and padding.
    pub fn same_shape(&self, other: &Buffer) -> bool {
        self.w == other.w
            && self.h == other.h
            && self.channels == other.channels
            && self.padding == other.padding
    }

    /// Short `WxHxC+P` description used in error messages and logs.
    pub fn shape(&self) -> String {
        format!("{}x{}x{}+{}", self.w, self.h, self.channels, self.padding)
    }

    /// Checks shared by every filter stage: one channel and a non-empty extent.
    pub(crate) fn ensure_filterable(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(EdgeError::EmptyBuffer {
                width: self.w,
                height: self.h,
            });
        }
        if !self.is_single_channel() {
            return Err(EdgeError::UnsupportedChannels {
                channels: self.channels,
            });
        }
        Ok(())
    }
}

impl crate::image::traits::ImageView for Buffer {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w * self.channels
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride();
        &self.data[start..start + self.stride()]
    }
}

impl crate::image::traits::ImageViewMut for Buffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let stride = self.w * self.channels;
        let start = y * stride;
        &mut self.data[start..start + stride]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_wrong_length() {
        let err = Buffer::from_raw(3, 2, 1, vec![0; 5]).unwrap_err();
        assert!(matches!(err, EdgeError::DataLength { len: 5, .. }));
    }

    #[test]
    fn index_is_channel_interleaved() {
        let data: Vec<u8> = (0..12).collect();
        let buf = Buffer::from_raw(2, 2, 3, data).unwrap();
        assert_eq!(buf.get(1, 0), 3);
        assert_eq!(buf.get(0, 1), 6);
        assert_eq!(buf.get(1, 1), 9);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = Buffer::filled(4, 4, 7);
        let b = a.clone();
        a.set(1, 1, 200);
        assert_eq!(b.get(1, 1), 7);
        assert_eq!(a.get(1, 1), 200);
    }

    #[test]
    fn filterable_checks_extent_before_channels() {
        let empty = Buffer::new(0, 4, 3);
        assert!(matches!(
            empty.ensure_filterable(),
            Err(EdgeError::EmptyBuffer { .. })
        ));
        let rgb = Buffer::new(2, 2, 3);
        assert_eq!(
            rgb.ensure_filterable(),
            Err(EdgeError::UnsupportedChannels { channels: 3 })
        );
    }
}
