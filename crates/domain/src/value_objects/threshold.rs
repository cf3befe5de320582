//! Numeric sanitizers for free-text sheet fields.
//!
//! Resource trackers (stress, debt, meat) and ability ratings are typed into
//! plain text inputs. Values are parsed leniently and then clamped, falling
//! back to a known-good value when the input is not a number at all.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Clamp `value` into `[min, max]`, or return `fallback` when it is not a
/// number.
///
/// The upper bound is applied before the lower bound, so with inverted
/// bounds (`min > max`) out-of-range values end up at `min`.
pub fn clamp_to_range(value: Option<i32>, min: i32, max: i32, fallback: i32) -> i32 {
    let Some(value) = value else {
        return fallback;
    };
    let mut clamped = value;
    if value > max {
        clamped = max;
    }
    if value < min {
        clamped = min;
    }
    clamped
}

/// Parse a form value as an integer prefix.
///
/// Leading whitespace and a single sign are accepted, then digits are read
/// until the first non-digit. Returns `None` when no digit is found.
/// Magnitudes beyond `i32` saturate.
pub fn parse_numeric_field(input: &str) -> Option<i32> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .bytes()
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    let signed = if negative { -magnitude } else { magnitude };
    Some(signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// An ability or skill field that is not a number resets to zero.
pub fn sanitize_attribute(input: &str) -> i32 {
    parse_numeric_field(input).unwrap_or(0)
}

/// A bounded resource on the contractor sheet (stress, debt, meat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTracker {
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

impl ResourceTracker {
    pub fn new(value: i32, min: i32, max: i32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::validation(format!(
                "tracker minimum {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self {
            value: value.clamp(min, max),
            min,
            max,
        })
    }

    /// Sanitize raw field input against this tracker. Non-numeric input
    /// keeps the current value.
    pub fn sanitize(&self, input: &str) -> i32 {
        clamp_to_range(parse_numeric_field(input), self.min, self.max, self.value)
    }

    /// Sanitize `input` and store the result.
    pub fn apply(&mut self, input: &str) -> i32 {
        self.value = self.sanitize(input);
        self.value
    }

    /// Pull a stored value that drifted out of bounds back in.
    pub fn normalize(&mut self) {
        self.value = clamp_to_range(Some(self.value), self.min, self.max, self.value);
    }

    pub fn is_maxed(&self) -> bool {
        self.value >= self.max
    }
}

impl Default for ResourceTracker {
    fn default() -> Self {
        Self {
            value: 0,
            min: 0,
            max: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_not_a_number_uses_fallback() {
        assert_eq!(clamp_to_range(None, 0, 10, 3), 3);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_to_range(Some(15), 0, 10, 3), 10);
        assert_eq!(clamp_to_range(Some(-2), 0, 10, 3), 0);
        assert_eq!(clamp_to_range(Some(5), 0, 10, 3), 5);
        assert_eq!(clamp_to_range(Some(10), 0, 10, 3), 10);
    }

    #[test]
    fn clamp_inverted_bounds_prefers_min() {
        assert_eq!(clamp_to_range(Some(7), 8, 2, 0), 8);
    }

    #[test]
    fn parse_numeric_prefixes() {
        assert_eq!(parse_numeric_field("12"), Some(12));
        assert_eq!(parse_numeric_field("  -4"), Some(-4));
        assert_eq!(parse_numeric_field("+3"), Some(3));
        assert_eq!(parse_numeric_field("7 dice"), Some(7));
        assert_eq!(parse_numeric_field("3.9"), Some(3));
    }

    #[test]
    fn parse_non_numbers() {
        assert_eq!(parse_numeric_field(""), None);
        assert_eq!(parse_numeric_field("abc"), None);
        assert_eq!(parse_numeric_field("-"), None);
        assert_eq!(parse_numeric_field("x12"), None);
    }

    #[test]
    fn parse_saturates() {
        assert_eq!(parse_numeric_field("99999999999"), Some(i32::MAX));
        assert_eq!(parse_numeric_field("-99999999999"), Some(i32::MIN));
    }

    #[test]
    fn attribute_resets_to_zero() {
        assert_eq!(sanitize_attribute("oops"), 0);
        assert_eq!(sanitize_attribute("4"), 4);
    }

    #[test]
    fn tracker_rejects_inverted_bounds() {
        assert!(matches!(
            ResourceTracker::new(0, 5, 1),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn tracker_sanitize() {
        let stress = ResourceTracker::new(4, 0, 6).unwrap();
        assert_eq!(stress.sanitize("9"), 6);
        assert_eq!(stress.sanitize("-1"), 0);
        assert_eq!(stress.sanitize("stressed"), 4);
        assert_eq!(stress.sanitize("2"), 2);
    }

    #[test]
    fn tracker_apply_stores_value() {
        let mut debt = ResourceTracker::new(0, 0, 100).unwrap();
        assert_eq!(debt.apply("250"), 100);
        assert_eq!(debt.value, 100);
        assert!(debt.is_maxed());
        assert_eq!(debt.apply("n/a"), 100);
    }

    #[test]
    fn tracker_normalize() {
        let mut meat = ResourceTracker {
            value: -3,
            min: 0,
            max: 5,
        };
        meat.normalize();
        assert_eq!(meat.value, 0);
    }
}
