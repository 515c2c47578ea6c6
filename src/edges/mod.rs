//! Edge operators on padded 8-bit buffers.
//!
//! - `convolve`: dense kernel convolution over the interior of a buffer.
//! - `directional`: X/Y two-pass filtering with saturating merge.
//! - `nms`: orientation buckets and non-maximum suppression of merged passes.
//! - `hysteresis`: double-threshold linking to a 0/255 edge map.
//!
//! Every operator validates its input before touching it and returns a
//! typed [`EdgeError`](crate::error::EdgeError) instead of partially writing.

pub mod convolve;
pub mod directional;
pub mod hysteresis;
pub mod nms;

pub use convolve::{convolve, convolve_in_place};
pub use directional::{two_pass, two_pass_pair};
pub use hysteresis::{hysteresis_threshold, HysteresisStats};
pub use nms::{direction_of, suppress_non_maxima, Direction};
