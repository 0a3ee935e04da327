//! Workspace capacity bounds and clamping.
//!
//! Capacity input is never rejected: anything out of range is pulled to the
//! nearest bound, and text that does not parse as a number lands on the
//! lower bound.

use serde::{Deserialize, Deserializer};

/// Smallest capacity the workspace accepts.
pub const MIN_CAPACITY: usize = 5;

/// Largest capacity the workspace accepts.
pub const MAX_CAPACITY: usize = 50;

/// Capacity used when nothing is configured.
pub const DEFAULT_CAPACITY: usize = 15;

/// Fraction of capacity at which the near-capacity warning starts.
pub const DEFAULT_WARNING_THRESHOLD: f64 = 0.8;

/// Inclusive `[min, max]` range a workspace capacity is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityBounds {
    min: usize,
    max: usize,
}

impl CapacityBounds {
    /// The `[MIN_CAPACITY, MAX_CAPACITY]` range used by the dashboard.
    pub const STANDARD: CapacityBounds = CapacityBounds {
        min: MIN_CAPACITY,
        max: MAX_CAPACITY,
    };

    /// Create custom bounds.
    ///
    /// `min` is raised to 1 so a workspace can always hold a tab, and `max`
    /// is raised to `min` if the two are given in the wrong order.
    pub fn new(min: usize, max: usize) -> Self {
        let min = min.max(1);
        let max = max.max(min);
        Self { min, max }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether `capacity` is accepted without clamping
    pub fn contains(&self, capacity: usize) -> bool {
        (self.min..=self.max).contains(&capacity)
    }

    /// Pull `requested` into the bounds, logging when it had to move.
    pub fn clamp(&self, requested: usize) -> usize {
        let clamped = requested.clamp(self.min, self.max);
        if clamped != requested {
            log::warn!(
                "Capacity {} outside [{}, {}], using {}",
                requested,
                self.min,
                self.max,
                clamped
            );
        }
        clamped
    }

    /// Clamp free-form capacity input such as a settings field or an
    /// environment variable.
    ///
    /// Fractional values are truncated, negative values and non-numeric text
    /// land on the lower bound, and positive infinity lands on the upper bound.
    pub fn parse(&self, input: &str) -> usize {
        match input.trim().parse::<f64>() {
            Ok(value) if value == f64::INFINITY => self.max,
            Ok(value) if value.is_finite() && value >= 0.0 => self.clamp(value.trunc() as usize),
            Ok(_) => self.min,
            Err(_) => {
                log::warn!(
                    "Capacity input {:?} is not a number, using {}",
                    input,
                    self.min
                );
                self.min
            }
        }
    }
}

impl Default for CapacityBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Any scalar a config file might hold for a capacity
#[derive(Deserialize)]
#[serde(untagged)]
enum CapacityInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Serde helper for capacity fields: accepts integers, floats and text and
/// clamps them the same way as [`parse_capacity`] instead of failing.
pub(crate) fn deserialize_capacity<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match CapacityInput::deserialize(deserializer)? {
        CapacityInput::Integer(value) => value.to_string(),
        CapacityInput::Float(value) => value.to_string(),
        CapacityInput::Text(value) => value,
    };
    Ok(CapacityBounds::STANDARD.parse(&raw))
}

/// Clamp `requested` into `[MIN_CAPACITY, MAX_CAPACITY]`
pub fn clamp_capacity(requested: usize) -> usize {
    CapacityBounds::STANDARD.clamp(requested)
}

/// Parse and clamp textual capacity input into `[MIN_CAPACITY, MAX_CAPACITY]`
pub fn parse_capacity(input: &str) -> usize {
    CapacityBounds::STANDARD.parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_below_min() {
        assert_eq!(clamp_capacity(2), 5);
        assert_eq!(clamp_capacity(0), 5);
    }

    #[test]
    fn clamp_above_max() {
        assert_eq!(clamp_capacity(1000), 50);
    }

    #[test]
    fn clamp_in_range_is_identity() {
        for n in MIN_CAPACITY..=MAX_CAPACITY {
            assert_eq!(clamp_capacity(n), n);
        }
    }

    #[test]
    fn parse_numeric_text() {
        assert_eq!(parse_capacity("12"), 12);
        assert_eq!(parse_capacity("  20 "), 20);
        assert_eq!(parse_capacity("12.9"), 12);
    }

    #[test]
    fn parse_out_of_range_text() {
        assert_eq!(parse_capacity("-3"), MIN_CAPACITY);
        assert_eq!(parse_capacity("1e6"), MAX_CAPACITY);
        assert_eq!(parse_capacity("inf"), MAX_CAPACITY);
        assert_eq!(parse_capacity("-inf"), MIN_CAPACITY);
    }

    #[test]
    fn parse_non_numeric_lands_on_min() {
        assert_eq!(parse_capacity("many"), MIN_CAPACITY);
        assert_eq!(parse_capacity(""), MIN_CAPACITY);
        assert_eq!(parse_capacity("NaN"), MIN_CAPACITY);
    }

    #[test]
    fn custom_bounds_are_normalised() {
        let bounds = CapacityBounds::new(0, 3);
        assert_eq!(bounds.min(), 1);
        assert_eq!(bounds.max(), 3);

        let swapped = CapacityBounds::new(10, 4);
        assert_eq!(swapped.min(), 10);
        assert_eq!(swapped.max(), 10);
    }

    #[test]
    fn custom_bounds_clamp() {
        let bounds = CapacityBounds::new(1, 3);
        assert_eq!(bounds.clamp(3), 3);
        assert_eq!(bounds.clamp(7), 3);
        assert!(bounds.contains(2));
        assert!(!bounds.contains(4));
    }
}
