//! Named filter recipes composed from the edge operators.
//!
//! - `sobel`, `scharr`, `cross`: two-pass gradient filters.
//! - `laplacian_of_gaussian`: Gaussian smoothing followed by a 3×3 Laplacian.
//! - `gaussian_blur` / `gaussian_filter`: smoothing only.
//! - `canny`: blur, thinned Sobel, hysteresis.
//! - `threshold`: pointwise binarization used after the gradient recipes.
//!
//! Every recipe checks for a non-empty single-channel buffer up front and runs
//! its stages on a private copy; the caller's buffer changes only when all
//! stages succeed.
use crate::edges::{convolve_in_place, hysteresis_threshold, two_pass_pair, HysteresisStats};
use crate::error::{EdgeError, Result};
use crate::image::{BorderMode, Buffer, PaddedWorkspace};
use crate::kernel::{Kernel, KernelPair};
use log::{debug, info};

pub const BLUR_SIZE: usize = 7;
pub const LOG_BLUR_SIZE: usize = 5;
pub const CANNY_BLUR_SIZE: usize = 5;

/// Set every byte to 255 when `>= value`, else 0.
pub fn threshold(buffer: &mut Buffer, value: u8) -> Result<()> {
    buffer.ensure_filterable()?;
    for v in buffer.data.iter_mut() {
        *v = if *v < value { 0 } else { 255 };
    }
    Ok(())
}

/// Convolve with a `size × size` Gaussian of standard deviation `sigma`.
pub fn gaussian_filter(
    buffer: &mut Buffer,
    size: usize,
    sigma: f32,
    border: BorderMode,
) -> Result<()> {
    buffer.ensure_filterable()?;
    let kernel = Kernel::gaussian(size, sigma)?;
    let mut ws = PaddedWorkspace::acquire(buffer, kernel.required_padding(), border)?;
    convolve_in_place(&mut ws.buffer, &kernel)?;
    ws.commit(buffer)
}

/// 7×7 Gaussian smoothing with `weight` as sigma.
pub fn gaussian_blur(buffer: &mut Buffer, weight: f32, border: BorderMode) -> Result<()> {
    info!("Applying gaussian blur (weight {weight})");
    gaussian_filter(buffer, BLUR_SIZE, weight, border)
}

/// Sobel gradient magnitude, optionally thinned by non-maximum suppression.
pub fn sobel(buffer: &mut Buffer, thinning: bool, border: BorderMode) -> Result<()> {
    info!("Applying Sobel filter (thinning {thinning})");
    two_pass_pair(buffer, &KernelPair::sobel(), thinning, border)
}

/// Scharr gradient magnitude, optionally thinned.
pub fn scharr(buffer: &mut Buffer, thinning: bool, border: BorderMode) -> Result<()> {
    info!("Applying Scharr filter (thinning {thinning})");
    two_pass_pair(buffer, &KernelPair::scharr(), thinning, border)
}

/// Roberts Cross diagonal differences, never thinned.
pub fn cross(buffer: &mut Buffer, border: BorderMode) -> Result<()> {
    info!("Applying Cross filter");
    two_pass_pair(buffer, &KernelPair::roberts_cross(), false, border)
}

/// 5×5 Gaussian of `sigma`, then the 4-neighbour Laplacian.
pub fn laplacian_of_gaussian(buffer: &mut Buffer, sigma: f32, border: BorderMode) -> Result<()> {
    info!("Applying LoG filter (sigma {sigma})");
    buffer.ensure_filterable()?;
    let mut working = buffer.clone();
    gaussian_filter(&mut working, LOG_BLUR_SIZE, sigma, border)?;
    // Re-pad from the smoothed data so grown borders match the blurred interior.
    let laplacian = Kernel::laplacian();
    let mut ws = PaddedWorkspace::acquire(&working, laplacian.required_padding(), border)?;
    convolve_in_place(&mut ws.buffer, &laplacian)?;
    ws.commit(&mut working)?;
    *buffer = working;
    Ok(())
}

/// Canny edge map: 0/255 output with thin, linked edges.
///
/// `high` must exceed `low`; this is checked before any stage runs.
pub fn canny(
    buffer: &mut Buffer,
    sigma: f32,
    high: u8,
    low: u8,
    border: BorderMode,
) -> Result<HysteresisStats> {
    info!("Applying Canny edge detection (sigma {sigma}, t1 {high}, t2 {low})");
    buffer.ensure_filterable()?;
    if high <= low {
        return Err(EdgeError::ThresholdOrder { high, low });
    }
    let mut working = buffer.clone();
    debug!("canny: blur");
    gaussian_filter(&mut working, CANNY_BLUR_SIZE, sigma, border)?;
    debug!("canny: thinned sobel");
    sobel(&mut working, true, border)?;
    debug!("canny: hysteresis");
    let stats = hysteresis_threshold(&mut working, high, low)?;
    *buffer = working;
    Ok(stats)
}
