//! Detector driving a single recipe over a buffer.
//!
//! ```no_run
//! use edge_detector::{Buffer, EdgeDetector, EdgeParams, Operation};
//!
//! # fn example(mut gray: Buffer) -> edge_detector::Result<()> {
//! let detector = EdgeDetector::new(EdgeParams::default());
//! let report = detector.process(&mut gray, &Operation::default())?;
//! println!("canny took {:.3} ms", report.timing.total_ms);
//! # Ok(())
//! # }
//! ```
use super::params::{EdgeParams, Operation};
use crate::diagnostics::{elapsed_ms, InputDescriptor, RunReport, TimingBreakdown};
use crate::edges::HysteresisStats;
use crate::error::Result;
use crate::filters;
use crate::image::Buffer;
use log::{debug, info, warn};
use std::time::Instant;

/// Runs edge-detection recipes with a fixed set of [`EdgeParams`].
#[derive(Clone, Debug, Default)]
pub struct EdgeDetector {
    params: EdgeParams,
}

impl EdgeDetector {
    pub fn new(params: EdgeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EdgeParams {
        &self.params
    }

    /// Apply `operation` to `buffer`.
    ///
    /// The buffer is replaced only when the recipe and its post-threshold both
    /// succeed; on error it is left exactly as passed in.
    pub fn process(&self, buffer: &mut Buffer, operation: &Operation) -> Result<RunReport> {
        let total_start = Instant::now();
        let input = InputDescriptor::of(buffer);
        info!(
            "EdgeDetector::process op={} input={} border={:?}",
            operation.name(),
            buffer.shape(),
            self.params.border
        );

        let mut timing = TimingBreakdown::default();
        let mut working = buffer.clone();
        let hysteresis = match self.run_stages(&mut working, operation, &mut timing) {
            Ok(stats) => stats,
            Err(err) => {
                warn!("{} aborted: {err}", operation.name());
                return Err(err);
            }
        };
        *buffer = working;
        timing.total_ms = elapsed_ms(total_start);
        debug!(
            "EdgeDetector::process done op={} total_ms={:.3}",
            operation.name(),
            timing.total_ms
        );

        Ok(RunReport {
            input,
            operation: *operation,
            border: self.params.border,
            threshold: operation.threshold(),
            hysteresis,
            timing,
        })
    }

    fn run_stages(
        &self,
        working: &mut Buffer,
        operation: &Operation,
        timing: &mut TimingBreakdown,
    ) -> Result<Option<HysteresisStats>> {
        working.ensure_filterable()?;
        let border = self.params().border;
        let hysteresis = timing.measure(operation.name(), || match *operation {
            Operation::Canny { sigma, t1, t2 } => {
                filters::canny(working, sigma, t1, t2, border).map(Some)
            }
            Operation::Sobel { .. } => filters::sobel(working, false, border).map(|_| None),
            Operation::Scharr { .. } => filters::scharr(working, false, border).map(|_| None),
            Operation::Cross { .. } => filters::cross(working, border).map(|_| None),
            Operation::Log { sigma, .. } => {
                filters::laplacian_of_gaussian(working, sigma, border).map(|_| None)
            }
            Operation::Blur { weight } => {
                filters::gaussian_blur(working, weight, border).map(|_| None)
            }
        })?;

        if let Some(value) = operation.threshold() {
            info!("Applying threshold of {value}");
            timing.measure("threshold", || filters::threshold(working, value))?;
        }
        Ok(hysteresis)
    }
}
