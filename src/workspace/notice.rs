//! Near-capacity and at-capacity warnings.
//!
//! The workspace only computes these; showing a banner is up to the UI.

use std::fmt;

/// How full the workspace is relative to its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityStatus {
    /// Below the warning threshold
    #[default]
    Normal,
    /// At or above the warning threshold but below capacity
    Near,
    /// Every slot is taken; the next new tab evicts the oldest one
    Full,
}

impl CapacityStatus {
    /// Classify `open_count` against `capacity` and `warning_threshold`.
    pub fn evaluate(open_count: usize, capacity: usize, warning_threshold: f64) -> Self {
        if open_count >= capacity {
            CapacityStatus::Full
        } else if open_count as f64 >= capacity as f64 * warning_threshold {
            CapacityStatus::Near
        } else {
            CapacityStatus::Normal
        }
    }
}

/// Banner-ready description of a non-normal capacity status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityNotice {
    pub status: CapacityStatus,
    pub open_count: usize,
    pub capacity: usize,
}

impl CapacityNotice {
    /// `None` when the workspace is comfortably below its threshold
    pub fn from_counts(open_count: usize, capacity: usize, warning_threshold: f64) -> Option<Self> {
        match CapacityStatus::evaluate(open_count, capacity, warning_threshold) {
            CapacityStatus::Normal => None,
            status => Some(Self {
                status,
                open_count,
                capacity,
            }),
        }
    }

    pub fn message(&self) -> String {
        match self.status {
            CapacityStatus::Full => format!(
                "{} of {} tabs open; opening another tab closes the oldest",
                self.open_count, self.capacity
            ),
            _ => format!(
                "{} of {} tabs open; the oldest tab will close when the limit is reached",
                self.open_count, self.capacity
            ),
        }
    }
}

impl fmt::Display for CapacityNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_for_capacity_ten() {
        assert_eq!(CapacityStatus::evaluate(7, 10, 0.8), CapacityStatus::Normal);
        assert_eq!(CapacityStatus::evaluate(8, 10, 0.8), CapacityStatus::Near);
        assert_eq!(CapacityStatus::evaluate(9, 10, 0.8), CapacityStatus::Near);
        assert_eq!(CapacityStatus::evaluate(10, 10, 0.8), CapacityStatus::Full);
    }

    #[test]
    fn near_compares_against_exact_product() {
        assert_eq!(CapacityStatus::evaluate(11, 15, 0.8), CapacityStatus::Normal);
        assert_eq!(CapacityStatus::evaluate(12, 15, 0.8), CapacityStatus::Near);
        assert_eq!(CapacityStatus::evaluate(5, 7, 0.8), CapacityStatus::Normal);
        assert_eq!(CapacityStatus::evaluate(6, 7, 0.8), CapacityStatus::Near);
        // 1 < 5 * 0.2000000001
        assert_eq!(
            CapacityStatus::evaluate(1, 5, 0.2000000001),
            CapacityStatus::Normal
        );
    }

    #[test]
    fn empty_workspace_is_never_near() {
        assert_eq!(CapacityStatus::evaluate(0, 5, 1e-12), CapacityStatus::Normal);
        assert_eq!(CapacityStatus::evaluate(0, 50, 0.01), CapacityStatus::Normal);
        assert_eq!(CapacityNotice::from_counts(0, 5, 1e-12), None);
    }

    #[test]
    fn threshold_of_one_only_reports_full() {
        assert_eq!(CapacityStatus::evaluate(4, 5, 1.0), CapacityStatus::Normal);
        assert_eq!(CapacityStatus::evaluate(5, 5, 1.0), CapacityStatus::Full);
    }

    #[test]
    fn notice_is_absent_when_normal() {
        assert_eq!(CapacityNotice::from_counts(3, 15, 0.8), None);
    }

    #[test]
    fn notice_messages() {
        let near = CapacityNotice::from_counts(12, 15, 0.8).unwrap();
        assert_eq!(near.status, CapacityStatus::Near);
        assert_eq!(
            near.to_string(),
            "12 of 15 tabs open; the oldest tab will close when the limit is reached"
        );

        let full = CapacityNotice::from_counts(15, 15, 0.8).unwrap();
        assert_eq!(
            full.to_string(),
            "15 of 15 tabs open; opening another tab closes the oldest"
        );
    }
}
