// SPDX-License-Identifier: MIT

//! Weight-trend classification.
//!
//! A fixed 4-point window over the client's weight history: average daily
//! change across the last three intervals, expressed as a percentage of
//! current weight and compared against fixed thresholds. Not a rolling
//! regression.

use serde::Serialize;

use crate::models::TrendStatus;

/// Daily change (as % of current weight) at or below which the client is
/// considered on track.
pub const ON_TRACK_LIMIT: f64 = -0.2;
/// Daily change (as % of current weight) above which the client is
/// considered regressing.
pub const REGRESSING_LIMIT: f64 = 0.2;
/// Number of data points required for a classification.
pub const TREND_WINDOW: usize = 4;

/// Coarse trend classification.
///
/// The thresholds assume a fat-loss goal: lower is always better, even for
/// clients whose stated goal is gaining. See DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendClass {
    OnTrack,
    Plateau,
    Regressing,
    InsufficientData,
}

impl TrendClass {
    /// Map to the status color stored on weight logs.
    ///
    /// Fewer than four points defaults to green rather than a separate
    /// "unknown" color.
    pub fn status(self) -> TrendStatus {
        match self {
            TrendClass::OnTrack | TrendClass::InsufficientData => TrendStatus::Green,
            TrendClass::Plateau => TrendStatus::Amber,
            TrendClass::Regressing => TrendStatus::Red,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            TrendClass::OnTrack => "On Track",
            TrendClass::Plateau => "Plateau",
            TrendClass::Regressing => "Regressing",
            TrendClass::InsufficientData => "Need more data",
        }
    }
}

/// Classifier output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendReport {
    pub class: TrendClass,
    /// Average kg change per day over the window (0 when insufficient data)
    pub slope_kg_per_day: f64,
    /// Slope as a percentage of the most recent weight
    pub percent_change: f64,
}

/// Classify a weight series sorted ascending by date.
pub fn classify_weights(weights_asc: &[f64]) -> TrendReport {
    if weights_asc.len() < TREND_WINDOW {
        return TrendReport {
            class: TrendClass::InsufficientData,
            slope_kg_per_day: 0.0,
            percent_change: 0.0,
        };
    }

    let current = weights_asc[weights_asc.len() - 1];
    let window_start = weights_asc[weights_asc.len() - TREND_WINDOW];
    let slope = (current - window_start) / (TREND_WINDOW as f64 - 1.0);
    let percent_change = (slope / current) * 100.0;

    let class = if percent_change <= ON_TRACK_LIMIT {
        TrendClass::OnTrack
    } else if percent_change > REGRESSING_LIMIT {
        TrendClass::Regressing
    } else {
        TrendClass::Plateau
    };

    TrendReport {
        class,
        slope_kg_per_day: slope,
        percent_change,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_losing_weight_is_on_track() {
        // slope = (79 - 80) / 3 ≈ -0.333, pct ≈ -0.422%
        let report = classify_weights(&[80.0, 80.0, 80.0, 79.0]);
        assert_eq!(report.class, TrendClass::OnTrack);
        assert!((report.slope_kg_per_day - (-1.0 / 3.0)).abs() < 1e-9);
        assert!((report.percent_change - (-0.4219409282700422)).abs() < 1e-9);
    }

    #[test]
    fn test_gaining_weight_is_regressing() {
        // pct ≈ +0.412%
        let report = classify_weights(&[80.0, 80.0, 80.0, 81.0]);
        assert_eq!(report.class, TrendClass::Regressing);
        assert!(report.percent_change > REGRESSING_LIMIT);
    }

    #[test]
    fn test_flat_weight_is_plateau() {
        // pct ≈ +0.0625%
        let report = classify_weights(&[80.0, 80.0, 80.0, 80.05]);
        assert_eq!(report.class, TrendClass::Plateau);
        assert!(report.percent_change.abs() < REGRESSING_LIMIT);
    }

    #[test]
    fn test_fewer_than_four_points_is_insufficient() {
        for weights in [&[][..], &[80.0][..], &[80.0, 79.0][..], &[80.0, 79.0, 78.0][..]] {
            let report = classify_weights(weights);
            assert_eq!(report.class, TrendClass::InsufficientData);
            assert_eq!(report.slope_kg_per_day, 0.0);
        }
    }

    #[test]
    fn test_window_ignores_older_entries() {
        // Only the last four points matter
        let report = classify_weights(&[100.0, 95.0, 80.0, 80.0, 80.0, 79.0]);
        assert_eq!(report.class, TrendClass::OnTrack);
        assert!((report.slope_kg_per_day - (-1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_status_mapping() {
        use crate::models::TrendStatus;
        assert_eq!(TrendClass::OnTrack.status(), TrendStatus::Green);
        assert_eq!(TrendClass::Plateau.status(), TrendStatus::Amber);
        assert_eq!(TrendClass::Regressing.status(), TrendStatus::Red);
        assert_eq!(TrendClass::InsufficientData.status(), TrendStatus::Green);
    }
}
