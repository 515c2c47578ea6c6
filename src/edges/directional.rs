//! Two-pass directional filtering.
//!
//! The buffer is convolved once with an X kernel and once with a Y kernel, the
//! two clamped responses are merged by saturating addition and, when thinning
//! is requested, non-maximum suppression keeps only ridge crests.
//!
//! Work happens on a [`PaddedWorkspace`]; the caller's buffer is written only
//! after every pass succeeded and keeps its original dimensions. When the
//! caller already supplies enough border, the merge covers the whole buffer,
//! so border cells come back as the saturating sum of both pass copies.
use super::convolve::convolve;
use super::nms::suppress_non_maxima;
use crate::error::Result;
use crate::image::{merge_add, BorderMode, Buffer, PaddedWorkspace};
use crate::kernel::{Kernel, KernelPair};
use log::debug;

/// Run both passes of `kernel_x`/`kernel_y` over `buffer` and merge them.
///
/// Missing border is added with `border`; suppression needs at least one cell
/// of it, so thinning always pads to at least 1.
pub fn two_pass(
    buffer: &mut Buffer,
    kernel_x: &Kernel,
    kernel_y: &Kernel,
    thinning: bool,
    border: BorderMode,
) -> Result<()> {
    let required = kernel_x.required_padding().max(kernel_y.required_padding());
    run_passes(buffer, kernel_x, kernel_y, required, thinning, border)
}

/// [`two_pass`] with a prebuilt kernel pair.
pub fn two_pass_pair(
    buffer: &mut Buffer,
    kernels: &KernelPair,
    thinning: bool,
    border: BorderMode,
) -> Result<()> {
    run_passes(
        buffer,
        &kernels.x,
        &kernels.y,
        kernels.required_padding(),
        thinning,
        border,
    )
}

fn run_passes(
    buffer: &mut Buffer,
    kernel_x: &Kernel,
    kernel_y: &Kernel,
    required: usize,
    thinning: bool,
    border: BorderMode,
) -> Result<()> {
    buffer.ensure_filterable()?;
    let required = if thinning { required.max(1) } else { required };
    let mut ws = PaddedWorkspace::acquire(buffer, required, border)?;

    let x_pass = convolve(&ws.buffer, kernel_x)?;
    let y_pass = convolve(&ws.buffer, kernel_y)?;
    ws.buffer = if thinning {
        suppress_non_maxima(&x_pass, &y_pass)?
    } else {
        let mut merged = x_pass;
        merge_add(&mut merged, &y_pass)?;
        merged
    };
    debug!(
        "two_pass {} thinning={} grown={}",
        buffer.shape(),
        thinning,
        ws.grown()
    );
    ws.commit(buffer)
}
