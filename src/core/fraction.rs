use crate::utils::error::{Result, TidyError};

pub const DEFAULT_FRAC_DECIMALS: u32 = 8;

/// An f64 carries no more than this many meaningful decimal places.
pub const MAX_FRAC_DECIMALS: u32 = 15;

/// Returns `x - floor(x)` rounded to `decimals` places.
///
/// The floor is taken toward negative infinity, so the remainder of a negative
/// number is positive: `frac(-1.3, 8)` is `0.7`. Requests above
/// [`MAX_FRAC_DECIMALS`] return the remainder unrounded. A remainder within
/// half a unit of the last place below 1 rounds up to `1.0`.
pub fn frac(x: f64, decimals: u32) -> Result<f64> {
    if !x.is_finite() {
        return Err(TidyError::NonFiniteNumber { value: x });
    }

    let remainder = x - x.floor();
    if decimals > MAX_FRAC_DECIMALS {
        return Ok(remainder);
    }

    let scale = 10f64.powi(decimals as i32);
    Ok((remainder * scale).round() / scale)
}

pub trait FracExt {
    fn frac(&self, decimals: u32) -> Result<f64>;
}

impl FracExt for f64 {
    fn frac(&self, decimals: u32) -> Result<f64> {
        frac(*self, decimals)
    }
}
