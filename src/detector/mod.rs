//! Edge detector front door.
//!
//! Overview
//! - [`EdgeParams`] carries settings shared by every recipe (border fill).
//! - [`Operation`] names a recipe (Canny, Sobel, Scharr, Cross, LoG, blur) and
//!   its arguments, including the optional post-threshold.
//! - [`EdgeDetector::process`] validates the buffer, runs the recipe on a
//!   private copy, applies the post-threshold and returns a
//!   [`RunReport`](crate::diagnostics::RunReport) with stage timings.
//!
//! Modules
//! - [`params`] – configuration types shared with the JSON config and CLI.
//! - `pipeline` – the [`EdgeDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{
    EdgeParams, Operation, DEFAULT_BLUR_WEIGHT, DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW,
    DEFAULT_CANNY_SIGMA, DEFAULT_LOG_SIGMA,
};
pub use pipeline::EdgeDetector;
