use super::TimingBreakdown;
use crate::detector::Operation;
use crate::edges::HysteresisStats;
use crate::image::{BorderMode, Buffer};
use serde::Serialize;

/// Shape of the buffer a run was started on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub padding: usize,
}

impl InputDescriptor {
    pub fn of(buffer: &Buffer) -> Self {
        Self {
            width: buffer.w,
            height: buffer.h,
            channels: buffer.channels,
            padding: buffer.padding,
        }
    }
}

/// Summary of one [`EdgeDetector::process`](crate::detector::EdgeDetector::process) call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input: InputDescriptor,
    pub operation: Operation,
    pub border: BorderMode,
    /// Post-threshold actually applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
    /// Edge-linking counters, Canny only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hysteresis: Option<HysteresisStats>,
    pub timing: TimingBreakdown,
}
