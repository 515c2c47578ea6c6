//! Parameter types configuring edge detection runs.
//!
//! [`EdgeParams`] holds detector-wide settings shared by every recipe, while
//! [`Operation`] selects the recipe and carries its per-run arguments. Both
//! deserialize from the JSON run configuration.

use crate::image::BorderMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CANNY_SIGMA: f32 = 1.0;
pub const DEFAULT_CANNY_HIGH: u8 = 50;
pub const DEFAULT_CANNY_LOW: u8 = 20;
pub const DEFAULT_LOG_SIGMA: f32 = 1.0;
pub const DEFAULT_BLUR_WEIGHT: f32 = 1.0;

/// Detector-wide parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Fill used when a stage has to grow the buffer's border to fit a kernel.
    pub border: BorderMode,
}

/// Recipe to run, with its arguments.
///
/// In JSON the variant is selected by an `op` field, e.g.
/// `{"op": "canny", "sigma": 1.4, "t1": 60, "t2": 25}` or
/// `{"op": "sobel", "threshold": 40}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Canny {
        #[serde(default = "default_canny_sigma")]
        sigma: f32,
        /// High (strong) threshold, must exceed `t2`
        #[serde(default = "default_canny_high")]
        t1: u8,
        /// Low (weak) threshold
        #[serde(default = "default_canny_low")]
        t2: u8,
    },
    Sobel {
        #[serde(default)]
        threshold: Option<u8>,
    },
    Scharr {
        #[serde(default)]
        threshold: Option<u8>,
    },
    Cross {
        #[serde(default)]
        threshold: Option<u8>,
    },
    Log {
        #[serde(default = "default_log_sigma")]
        sigma: f32,
        #[serde(default)]
        threshold: Option<u8>,
    },
    Blur {
        #[serde(default = "default_blur_weight")]
        weight: f32,
    },
}

fn default_canny_sigma() -> f32 {
    DEFAULT_CANNY_SIGMA
}
fn default_canny_high() -> u8 {
    DEFAULT_CANNY_HIGH
}
fn default_canny_low() -> u8 {
    DEFAULT_CANNY_LOW
}
fn default_log_sigma() -> f32 {
    DEFAULT_LOG_SIGMA
}
fn default_blur_weight() -> f32 {
    DEFAULT_BLUR_WEIGHT
}

impl Default for Operation {
    fn default() -> Self {
        Operation::Canny {
            sigma: DEFAULT_CANNY_SIGMA,
            t1: DEFAULT_CANNY_HIGH,
            t2: DEFAULT_CANNY_LOW,
        }
    }
}

impl Operation {
    /// Short label used in logs, timings and error context.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Canny { .. } => "canny",
            Operation::Sobel { .. } => "sobel",
            Operation::Scharr { .. } => "scharr",
            Operation::Cross { .. } => "cross",
            Operation::Log { .. } => "log",
            Operation::Blur { .. } => "blur",
        }
    }

    /// Post-threshold to apply after the recipe. A threshold of 0 means none.
    pub fn threshold(&self) -> Option<u8> {
        match *self {
            Operation::Sobel { threshold }
            | Operation::Scharr { threshold }
            | Operation::Cross { threshold }
            | Operation::Log { threshold, .. } => threshold.filter(|&t| t > 0),
            Operation::Canny { .. } | Operation::Blur { .. } => None,
        }
    }
}
