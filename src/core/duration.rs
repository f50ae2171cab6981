//! Elapsed-seconds formatting as `HH:MM:SS[.fff]`.

use crate::utils::error::{Result, TidyError};
use chrono::TimeDelta;

/// More fractional digits than this are not reliable in an f64.
pub const MAX_HMS_DECIMALS: u32 = 8;

// Above 2^53 whole seconds an f64 no longer holds every integer.
const MAX_EXACT_SECONDS: f64 = 9_007_199_254_740_992.0;

/// Formats `seconds` as zero-padded clock notation, rounding the seconds field
/// to `decimals` places (clamped to [`MAX_HMS_DECIMALS`]).
///
/// Rounding that reaches 60 seconds carries into minutes, and 60 minutes
/// carry into hours. Hours are padded to two digits but never truncated.
/// Negative and non-finite inputs are rejected.
///
/// ```
/// use tidy_fields::hms;
///
/// assert_eq!(hms(3661.0, 0).unwrap(), "01:01:01");
/// assert_eq!(hms(59.999, 0).unwrap(), "00:01:00");
/// assert_eq!(hms(1234.5612, 2).unwrap(), "00:20:34.56");
/// ```
pub fn hms(seconds: f64, decimals: u32) -> Result<String> {
    if !seconds.is_finite() {
        return Err(TidyError::InvalidDuration {
            seconds,
            reason: "duration must be a finite number".to_string(),
        });
    }
    if seconds < 0.0 {
        return Err(TidyError::InvalidDuration {
            seconds,
            reason: "negative durations are not supported".to_string(),
        });
    }
    if seconds >= MAX_EXACT_SECONDS {
        return Err(TidyError::InvalidDuration {
            seconds,
            reason: "duration exceeds the exactly representable range".to_string(),
        });
    }

    let decimals = decimals.min(MAX_HMS_DECIMALS);
    let whole = seconds.floor();
    let frac = seconds - whole;
    let whole = whole as u64;

    let mut hours = whole / 3600;
    let mut minutes = (whole / 60) % 60;
    let secs = whole % 60;

    let scale = 10u64.pow(decimals);
    let mut units = ((secs as f64 + frac) * scale as f64).round() as u64;

    let minute_units = 60 * scale;
    if units >= minute_units {
        units -= minute_units;
        minutes += 1;
        if minutes == 60 {
            minutes = 0;
            hours += 1;
        }
        tracing::trace!("Carried rounded seconds of {} into minutes", seconds);
    }

    let int_secs = units / scale;
    if decimals == 0 {
        Ok(format!("{:02}:{:02}:{:02}", hours, minutes, int_secs))
    } else {
        let frac_digits = units % scale;
        Ok(format!(
            "{:02}:{:02}:{:02}.{:0width$}",
            hours,
            minutes,
            int_secs,
            frac_digits,
            width = decimals as usize
        ))
    }
}

pub trait HmsExt {
    fn hms(&self, decimals: u32) -> Result<String>;
}

impl HmsExt for f64 {
    fn hms(&self, decimals: u32) -> Result<String> {
        hms(*self, decimals)
    }
}

impl HmsExt for TimeDelta {
    fn hms(&self, decimals: u32) -> Result<String> {
        let seconds = self.num_seconds() as f64 + f64::from(self.subsec_nanos()) / 1e9;
        hms(seconds, decimals)
    }
}
