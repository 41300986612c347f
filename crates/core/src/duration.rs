use std::time::Duration;

use crate::error::CoreError;

/// Parse a request timeout such as `5s`, `500ms`, `1h` or the compound
/// `1m30s`. A bare number (`5`) is taken as seconds.
///
/// Units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. Fractional values
/// are accepted (`1.5s`). Negative, empty and unknown-unit values are rejected.
pub fn parse_duration(input: &str) -> Result<Duration, CoreError> {
    let trimmed = input.trim();
    let invalid = || CoreError::InvalidDuration(input.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let nanos = match trimmed.parse::<f64>() {
        Ok(secs) => secs * NANOS_PER_SECOND,
        Err(_) => compound_nanos(trimmed).ok_or_else(invalid)?,
    };

    if !nanos.is_finite() || nanos < 0.0 || nanos > u64::MAX as f64 {
        return Err(invalid());
    }

    Ok(Duration::from_nanos(nanos.round() as u64))
}

const NANOS_PER_SECOND: f64 = 1e9;

/// Sum a sequence of `<number><unit>` terms.
fn compound_nanos(mut rest: &str) -> Option<f64> {
    let mut total = 0.0;

    while !rest.is_empty() {
        let unit_start = rest.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
        let (number, tail) = rest.split_at(unit_start);
        let value: f64 = number.parse().ok()?;

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        total += value * unit_nanos(unit)?;
        rest = next;
    }

    Some(total)
}

fn unit_nanos(unit: &str) -> Option<f64> {
    let nanos = match unit {
        "ns" => 1.0,
        "us" | "µs" | "μs" => 1e3,
        "ms" => 1e6,
        "s" => NANOS_PER_SECOND,
        "m" => 60.0 * NANOS_PER_SECOND,
        "h" => 3600.0 * NANOS_PER_SECOND,
        _ => return None,
    };
    Some(nanos)
}
