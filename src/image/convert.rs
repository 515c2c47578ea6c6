//! Colour reduction for loaded images: weighted grayscale and channel stripping.
use super::Buffer;
use crate::error::{EdgeError, Result};
use log::debug;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.144;

/// Replace R, G and B of every pixel by their weighted luma, in place.
///
/// Only unpadded 3- or 4-channel buffers are accepted; alpha is left alone.
pub fn grayscale(buffer: &mut Buffer) -> Result<()> {
    if buffer.padding != 0 {
        return Err(EdgeError::invalid(
            "padding",
            buffer.padding,
            "grayscale conversion requires an unpadded buffer",
        ));
    }
    if buffer.w == 0 || buffer.h == 0 {
        return Err(EdgeError::EmptyBuffer {
            width: buffer.w,
            height: buffer.h,
        });
    }
    if buffer.channels != 3 && buffer.channels != 4 {
        return Err(EdgeError::UnsupportedChannels {
            channels: buffer.channels,
        });
    }

    for px in buffer.data.chunks_exact_mut(buffer.channels) {
        let luma = LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
        let gray = luma.clamp(0.0, 255.0).round() as u8;
        px[..3].fill(gray);
    }
    Ok(())
}

/// New single-channel buffer holding the first channel of every pixel.
pub fn to_single_channel(buffer: &Buffer) -> Result<Buffer> {
    if buffer.padding != 0 {
        return Err(EdgeError::invalid(
            "padding",
            buffer.padding,
            "channel reduction requires an unpadded buffer",
        ));
    }
    if buffer.channels == 0 {
        return Err(EdgeError::UnsupportedChannels { channels: 0 });
    }
    let data = buffer
        .data
        .chunks_exact(buffer.channels)
        .map(|px| px[0])
        .collect();
    Buffer::from_raw(buffer.w, buffer.h, 1, data)
}

/// Reduce any loaded buffer to the single gray channel the filters expect.
///
/// Colour inputs go through [`grayscale`] first; gray+alpha inputs simply
/// drop the alpha channel.
pub fn prepare_gray(mut buffer: Buffer) -> Result<Buffer> {
    match buffer.channels {
        1 => Ok(buffer),
        3 | 4 => {
            debug!("prepare_gray: converting {} to grayscale", buffer.shape());
            grayscale(&mut buffer)?;
            to_single_channel(&buffer)
        }
        _ => to_single_channel(&buffer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_uses_weighted_sum_and_keeps_alpha() {
        let mut buf = Buffer::from_raw(2, 1, 4, vec![100, 100, 100, 7, 255, 0, 0, 9]).unwrap();
        grayscale(&mut buf).unwrap();
        // 0.299*100 + 0.587*100 + 0.144*100 = 103
        assert_eq!(&buf.data[..4], &[103, 103, 103, 7]);
        // 0.299*255 = 76.245
        assert_eq!(&buf.data[4..], &[76, 76, 76, 9]);
    }

    #[test]
    fn grayscale_clamps_bright_pixels() {
        let mut buf = Buffer::from_raw(1, 1, 3, vec![255, 255, 255]).unwrap();
        grayscale(&mut buf).unwrap();
        assert_eq!(buf.data, vec![255, 255, 255]);
    }

    #[test]
    fn grayscale_rejects_single_channel() {
        let mut buf = Buffer::filled(2, 2, 0);
        assert!(grayscale(&mut buf).is_err());
    }

    #[test]
    fn single_channel_takes_first_component() {
        let buf = Buffer::from_raw(2, 1, 2, vec![11, 200, 22, 201]).unwrap();
        let gray = to_single_channel(&buf).unwrap();
        assert_eq!(gray.channels, 1);
        assert_eq!(gray.data, vec![11, 22]);
    }

    #[test]
    fn prepare_gray_reduces_rgb() {
        let buf = Buffer::from_raw(1, 1, 3, vec![0, 255, 0]).unwrap();
        let gray = prepare_gray(buf).unwrap();
        assert_eq!(gray.channels, 1);
        // 0.587*255 = 149.685
        assert_eq!(gray.data, vec![150]);
    }
}
