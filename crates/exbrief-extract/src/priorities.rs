//! Strategic priority derivation.
//!
//! Classic impact/effort prioritization over the recommendation list:
//! high impact and low effort float to the top, quick wins break ties.

use exbrief_core::{Horizon, Recommendation, StrategicPriority, Timeline};

/// Maximum priorities shown on the executive page.
const MAX_STRATEGIC_PRIORITIES: usize = 5;

/// Composite ordering score. Impact is weighted double against effort.
fn composite(rec: &Recommendation) -> f64 {
    2.0 * rec.impact_score - rec.effort_score
}

/// Total mapping from the upstream horizon enum to executive timelines.
pub fn timeline_for_horizon(horizon: Horizon) -> Timeline {
    match horizon {
        Horizon::Days30 => Timeline::ThirtyDay,
        Horizon::Days60 => Timeline::SixtyDay,
        Horizon::Days90 => Timeline::NinetyDay,
        Horizon::Months6 => Timeline::SixMonth,
        Horizon::Months12 => Timeline::TwelveMonth,
    }
}

/// Rank recommendations and keep the top slice with contiguous 1-based
/// ranks.
pub fn derive_strategic_priorities(recommendations: &[Recommendation]) -> Vec<StrategicPriority> {
    let mut ranked: Vec<&Recommendation> = recommendations.iter().collect();
    ranked.sort_by(|a, b| {
        composite(b)
            .total_cmp(&composite(a))
            .then(b.is_quick_win.cmp(&a.is_quick_win))
            .then(a.priority_rank.cmp(&b.priority_rank))
    });

    ranked
        .into_iter()
        .take(MAX_STRATEGIC_PRIORITIES)
        .enumerate()
        .map(|(i, rec)| StrategicPriority {
            rank: i as u32 + 1,
            title: rec.title.clone(),
            rationale: rec.rationale.clone(),
            timeline: timeline_for_horizon(rec.horizon),
            is_quick_win: rec.is_quick_win,
            action_steps: rec.action_steps.clone(),
        })
        .collect()
}
