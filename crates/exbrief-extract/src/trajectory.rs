//! Trajectory bucketing.
//!
//! Maps the overall health score plus the upstream free-text trend onto
//! the four executive-facing trajectory buckets. Thresholds: a declining
//! trend below 50 dominates, 70+ with an improving trend is growing,
//! 50-69 is stable, the remainder is stagnating.

use exbrief_core::{OverallHealth, Trajectory};

/// Upstream trend text reduced to three directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    Improving,
    Flat,
    Declining,
}

fn classify_trend(text: &str) -> Trend {
    let lower = text.to_lowercase();
    if lower.contains("improv") || lower.contains("grow") || lower.contains("up") {
        Trend::Improving
    } else if lower.contains("declin") || lower.contains("deterior") || lower.contains("down") {
        Trend::Declining
    } else {
        Trend::Flat
    }
}

/// Bucket an overall health reading.
pub fn determine(health: &OverallHealth) -> Trajectory {
    let trend = classify_trend(&health.trajectory);
    let score = health.score;

    if trend == Trend::Declining && score < 50.0 {
        Trajectory::Declining
    } else if score >= 70.0 && trend == Trend::Improving {
        Trajectory::Growing
    } else if score >= 50.0 {
        Trajectory::Stable
    } else {
        Trajectory::Stagnating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(score: f64, trajectory: &str) -> OverallHealth {
        OverallHealth {
            score,
            band: String::new(),
            status: String::new(),
            trajectory: trajectory.to_string(),
        }
    }

    #[test]
    fn test_pinned_samples() {
        assert_eq!(determine(&health(75.0, "Improving")), Trajectory::Growing);
        assert_eq!(determine(&health(55.0, "Flat")), Trajectory::Stable);
        assert_eq!(determine(&health(42.0, "Flat")), Trajectory::Stagnating);
        assert_eq!(determine(&health(35.0, "Declining")), Trajectory::Declining);
    }

    #[test]
    fn test_high_score_without_improving_trend_is_stable() {
        assert_eq!(determine(&health(82.0, "Flat")), Trajectory::Stable);
    }

    #[test]
    fn test_declining_trend_with_healthy_score_stays_stable() {
        // A strong business trending down has not yet earned "declining".
        assert_eq!(determine(&health(68.0, "Declining")), Trajectory::Stable);
    }

    #[test]
    fn test_free_text_trends() {
        assert_eq!(determine(&health(75.0, "trending upward")), Trajectory::Growing);
        assert_eq!(determine(&health(30.0, "deteriorating fast")), Trajectory::Declining);
        assert_eq!(determine(&health(30.0, "")), Trajectory::Stagnating);
    }
}
