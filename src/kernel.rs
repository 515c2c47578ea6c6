//! Convolution kernels: a weight matrix plus a divisor applied after summing.
//!
//! Weights live in a single `DMatrix<f32>` (row = kernel y, column = kernel x).
//! Kernels are immutable once built; every filter invocation builds the ones it
//! needs and drops them when it returns.
//!
//! The fixed directional kernels follow the usual orientation: the X kernels
//! respond to intensity increasing to the right, the Y kernels to intensity
//! increasing downward. Negative responses clamp to zero in the 8-bit output.
use crate::error::{EdgeError, Result};
use nalgebra::DMatrix;
use std::f32::consts::PI;

type Kernel3 = [[f32; 3]; 3];
type Kernel2 = [[f32; 2]; 2];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];
const SOBEL_DIVISOR: f32 = 4.0;

const SCHARR_KERNEL_X: Kernel3 = [
    [-47.0, 0.0, 47.0],
    [-162.0, 0.0, 162.0],
    [-47.0, 0.0, 47.0],
];
const SCHARR_KERNEL_Y: Kernel3 = [
    [-47.0, -162.0, -47.0],
    [0.0, 0.0, 0.0],
    [47.0, 162.0, 47.0],
];
const SCHARR_DIVISOR: f32 = 80.0;

const CROSS_KERNEL_X: Kernel2 = [[1.0, 0.0], [0.0, -1.0]];
const CROSS_KERNEL_Y: Kernel2 = [[0.0, 1.0], [-1.0, 0.0]];

const LAPLACIAN_KERNEL: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]];

#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: DMatrix<f32>,
    divisor: f32,
}

impl Kernel {
    /// Build a `height × width` kernel from row-major `values`.
    pub fn new(height: usize, width: usize, divisor: f32, values: &[f32]) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(EdgeError::invalid(
                "kernel size",
                format!("{width}x{height}"),
                "kernel dimensions must be non-zero",
            ));
        }
        if values.len() != height * width {
            return Err(EdgeError::invalid(
                "kernel values",
                values.len(),
                "value count must equal height * width",
            ));
        }
        if divisor == 0.0 || !divisor.is_finite() {
            return Err(EdgeError::invalid(
                "divisor",
                divisor,
                "divisor must be finite and non-zero",
            ));
        }
        Ok(Self {
            weights: DMatrix::from_row_slice(height, width, values),
            divisor,
        })
    }

    fn fixed<const W: usize, const H: usize>(rows: &[[f32; W]; H], divisor: f32) -> Self {
        Self {
            weights: DMatrix::from_fn(H, W, |r, c| rows[r][c]),
            divisor,
        }
    }

    /// Square Gaussian kernel sampled from `1/(2πσ²)·exp(-(x²+y²)/(2σ²))`.
    ///
    /// Offsets run from `-size/2` over `size` integer steps. The weights are
    /// used as-is (divisor 1), so they sum to slightly less than one.
    pub fn gaussian(size: usize, weight: f32) -> Result<Self> {
        if size < 3 {
            return Err(EdgeError::invalid("size", size, "gaussian size must be >= 3"));
        }
        if !(weight > 0.0) || !weight.is_finite() {
            return Err(EdgeError::invalid(
                "weight",
                weight,
                "gaussian weight must be finite and > 0",
            ));
        }
        let offset = (size / 2) as f32;
        let s = 2.0 * weight * weight;
        let weights = DMatrix::from_fn(size, size, |r, c| {
            let x = c as f32 - offset;
            let y = r as f32 - offset;
            (-(x * x + y * y) / s).exp() / (PI * s)
        });
        Ok(Self {
            weights,
            divisor: 1.0,
        })
    }

    /// 1×1 pass-through kernel.
    #[cfg(test)]
    pub(crate) fn identity() -> Self {
        Self::fixed(&[[1.0]], 1.0)
    }

    /// 4-neighbour Laplacian, divisor 1.
    pub fn laplacian() -> Self {
        Self::fixed(&LAPLACIAN_KERNEL, 1.0)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.weights.ncols()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.weights.nrows()
    }

    #[inline]
    pub fn divisor(&self) -> f32 {
        self.divisor
    }

    /// Weight at kernel column `x`, row `y`.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f32 {
        self.weights[(y, x)]
    }

    #[inline]
    pub fn half_width(&self) -> usize {
        self.width() / 2
    }

    #[inline]
    pub fn half_height(&self) -> usize {
        self.height() / 2
    }

    /// Border a buffer needs so the kernel never reads outside it.
    pub fn required_padding(&self) -> usize {
        self.half_width().max(self.half_height())
    }
}

/// X/Y kernels driving a two-pass directional filter.
#[derive(Clone, Debug, PartialEq)]
pub struct KernelPair {
    pub x: Kernel,
    pub y: Kernel,
}

impl KernelPair {
    pub fn sobel() -> Self {
        Self {
            x: Kernel::fixed(&SOBEL_KERNEL_X, SOBEL_DIVISOR),
            y: Kernel::fixed(&SOBEL_KERNEL_Y, SOBEL_DIVISOR),
        }
    }

    /// Scharr-weighted derivative kernels (better rotational symmetry).
    pub fn scharr() -> Self {
        Self {
            x: Kernel::fixed(&SCHARR_KERNEL_X, SCHARR_DIVISOR),
            y: Kernel::fixed(&SCHARR_KERNEL_Y, SCHARR_DIVISOR),
        }
    }

    /// 2×2 Roberts Cross diagonal differences.
    pub fn roberts_cross() -> Self {
        Self {
            x: Kernel::fixed(&CROSS_KERNEL_X, 1.0),
            y: Kernel::fixed(&CROSS_KERNEL_Y, 1.0),
        }
    }

    pub fn required_padding(&self) -> usize {
        self.x.required_padding().max(self.y.required_padding())
    }
}
