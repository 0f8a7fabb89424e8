//! Human readable data sizes
//!
//! Parsing of size strings such as "1K", "2.8 MiB" or "100" into byte counts,
//! and formatting of byte counts into a scaled string such as "1.0 KiB".
//! Both decimal-style ("kb") and binary-style ("kib") unit names scale by 1024.

use crate::errors::{FindError, FindResult};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;
const TIB: u64 = GIB * 1024;

/// Fractional digits beyond this cannot change the truncated result
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a human readable size into a byte count.
///
/// Surrounding whitespace is ignored and an empty string yields `0`.
/// The number may carry a fractional part, which is scaled exactly and
/// truncated toward zero, so `"2.8 MiB"` is `2936012` bytes.
///
/// # Errors
///
/// Returns [`FindError::InvalidSize`] when there is no numeric value or the
/// result does not fit in a `u64`, and [`FindError::UnknownSizeUnit`] for an
/// unrecognized suffix.
pub fn parse_size(text: &str) -> FindResult<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let (whole, rest) = split_digits(trimmed);
    let (fraction, rest) = match rest.strip_prefix('.') {
        Some(after_dot) => split_digits(after_dot),
        None => ("", rest),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(FindError::InvalidSize {
            input: text.to_string(),
            reason: "missing numeric value".to_string(),
        });
    }

    let unit = rest.trim().to_lowercase();
    let multiplier = unit_multiplier(&unit).ok_or_else(|| FindError::UnknownSizeUnit {
        input: text.to_string(),
        unit: unit.clone(),
    })?;

    scale(whole, fraction, multiplier).ok_or_else(|| FindError::InvalidSize {
        input: text.to_string(),
        reason: "value is too large".to_string(),
    })
}

/// Format a byte count using the largest unit that keeps the value >= 1.
///
/// Values below 1024 are printed as whole bytes, everything else with
/// exactly one decimal digit.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        return format!("{} bytes", bytes);
    }

    let (divisor, unit) = if bytes < MIB {
        (KIB, "KiB")
    } else if bytes < GIB {
        (MIB, "MiB")
    } else if bytes < TIB {
        (GIB, "GiB")
    } else {
        (TIB, "TiB")
    };

    format!("{:.1} {}", bytes as f64 / divisor as f64, unit)
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn unit_multiplier(unit: &str) -> Option<u64> {
    match unit {
        "" => Some(1),
        "k" | "kb" | "kib" => Some(KIB),
        "m" | "mb" | "mib" => Some(MIB),
        "g" | "gb" | "gib" => Some(GIB),
        "t" | "tb" | "tib" => Some(TIB),
        _ => None,
    }
}

fn scale(whole: &str, fraction: &str, multiplier: u64) -> Option<u64> {
    let multiplier = u128::from(multiplier);
    let whole_value = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().ok()?
    };
    let mut bytes = whole_value.checked_mul(multiplier)?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let numerator = fraction.parse::<u128>().ok()?;
        let denominator = 10u128.pow(fraction.len() as u32);
        bytes = bytes.checked_add(numerator * multiplier / denominator)?;
    }

    u64::try_from(bytes).ok()
}
