//! Masked Pearson correlation over 3D profile views.

use crate::array::VolumeView;
use crate::util::{ProfLocError, ProfLocResult};

/// Computes the Pearson correlation coefficient between two same-shaped 3D
/// volumes, restricted to voxels valid in both masks.
///
/// Statistics use population normalization on both sides; the shared `1/n`
/// factors cancel in the ratio. The result lies in `[-1, 1]`; it is clamped
/// against floating-point drift before being returned.
///
/// # Errors
///
/// Returns `ShapeMismatch` when the four shapes disagree, and
/// `InsufficientOverlap` when fewer than 2 voxels are jointly valid or
/// either side has zero variance over the overlap. A degenerate overlap is
/// always classified; it never propagates as a silent NaN or infinity.
pub fn masked_pearson(
    a: VolumeView<'_, f64>,
    a_mask: VolumeView<'_, bool>,
    b: VolumeView<'_, f64>,
    b_mask: VolumeView<'_, bool>,
) -> ProfLocResult<f64> {
    let expected = a.shape();
    for got in [a_mask.shape(), b.shape(), b_mask.shape()] {
        if got != expected {
            return Err(ProfLocError::ShapeMismatch { expected, got });
        }
    }

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let joint = a_mask
        .as_slice()
        .iter()
        .zip(b_mask.as_slice())
        .map(|(&ma, &mb)| ma && mb);

    let mut n = 0usize;
    let mut sum_a = 0.0;
    let mut sum_b = 0.0;
    for (i, valid) in joint.clone().enumerate() {
        if valid {
            n += 1;
            sum_a += a_data[i];
            sum_b += b_data[i];
        }
    }
    if n < 2 {
        return Err(ProfLocError::InsufficientOverlap { valid: n });
    }

    let mean_a = sum_a / n as f64;
    let mean_b = sum_b / n as f64;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (i, valid) in joint.enumerate() {
        if valid {
            let da = a_data[i] - mean_a;
            let db = b_data[i] - mean_b;
            cov += da * db;
            var_a += da * da;
            var_b += db * db;
        }
    }
    if var_a == 0.0 || var_b == 0.0 {
        return Err(ProfLocError::InsufficientOverlap { valid: n });
    }

    Ok((cov / (var_a * var_b).sqrt()).clamp(-1.0, 1.0))
}
