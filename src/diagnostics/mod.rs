//! Run reports returned by the detector and written by the binary.
//!
//! `RunReport` records what was run on which input, the edge-linking counters
//! of a Canny run and a per-stage `TimingBreakdown`.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, RunReport};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
