//! Duration literal grammar
//!
//! A literal is an optional sign followed by one or more segments of a
//! decimal number, an optional fraction and a unit suffix, e.g. `300ms`,
//! `1.5h` or `2h45m`. Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`,
//! `m` and `h`. A bare `0` needs no unit.

use std::time::Duration;

/// Fraction digits beyond this many are ignored.
const MAX_FRACTION_DIGITS: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("invalid duration '{0}'")]
    Invalid(String),

    #[error("missing unit in duration '{0}'")]
    MissingUnit(String),

    #[error("unknown unit '{unit}' in duration '{input}'")]
    UnknownUnit { unit: String, input: String },

    #[error("duration '{0}' is out of range")]
    Overflow(String),

    #[error("negative duration '{0}' cannot be represented")]
    Negative(String),
}

fn unit_nanos(unit: &str) -> Option<u128> {
    Some(match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        "h" => 60 * 60 * 1_000_000_000,
        _ => return None,
    })
}

/// Split `s` into its leading run of ASCII digits and the remainder.
fn leading_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parse a duration literal such as `5s` or `1h30m`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = leading_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(tail) => {
                let (digits, tail) = leading_digits(tail);
                (Some(digits), tail)
            }
            None => (None, after_whole),
        };
        if whole.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(invalid());
        }

        let unit_end = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        if unit_end == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let (unit, tail) = after_number.split_at(unit_end);
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let mut segment: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse::<u128>().map_err(|_| overflow())?
        };
        segment = segment.checked_mul(scale).ok_or_else(overflow)?;

        if let Some(digits) = fraction.filter(|d| !d.is_empty()) {
            let kept = &digits[..digits.len().min(MAX_FRACTION_DIGITS as usize)];
            let numerator: u128 = kept.parse().map_err(|_| invalid())?;
            let denominator = 10u128.pow(kept.len() as u32);
            segment += numerator * scale / denominator;
        }

        total = total.checked_add(segment).ok_or_else(overflow)?;
        rest = tail;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative(input.to_string()));
    }

    let secs = u64::try_from(total / 1_000_000_000).map_err(|_| overflow())?;
    let nanos = (total % 1_000_000_000) as u32;
    Ok(Duration::new(secs, nanos))
}
