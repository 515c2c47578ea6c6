#![doc = include_str!("../README.md")]

// Public modules
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod filters;
pub mod image;
pub mod kernel;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector, parameters and the buffer it works on.
pub use crate::detector::{EdgeDetector, EdgeParams, Operation};
pub use crate::error::{EdgeError, Result};
pub use crate::image::{BorderMode, Buffer};

// Report returned by the detector.
pub use crate::diagnostics::{RunReport, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_detector::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let loaded = load_image(std::path::Path::new("input.png"))?;
/// let mut gray = prepare_gray(loaded).map_err(|e| e.to_string())?;
///
/// let detector = EdgeDetector::new(EdgeParams::default());
/// let report = detector
///     .process(&mut gray, &Operation::Sobel { threshold: Some(40) })
///     .map_err(|e| e.to_string())?;
/// println!("sobel took {:.3} ms", report.timing.total_ms);
/// write_png(&gray, std::path::Path::new("edges.png"))
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{load_image, pad, prepare_gray, unpad, write_png};
    pub use crate::kernel::{Kernel, KernelPair};
    pub use crate::{BorderMode, Buffer, EdgeDetector, EdgeError, EdgeParams, Operation};
}
