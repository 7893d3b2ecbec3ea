//! 90-day execution roadmap construction.
//!
//! Always exactly three windows with fixed identifiers, independent of
//! the variable-length source roadmap.

use crate::narrative;
use exbrief_core::{ExecutionPhase, PhaseId, Roadmap, StrategicPriority, Timeline};

/// Window a priority lands in. Quick wins are pulled into the first
/// window regardless of their stated timeline; everything past 60 days
/// becomes groundwork in the third.
fn phase_for(priority: &StrategicPriority) -> PhaseId {
    if priority.is_quick_win {
        return PhaseId::Days1To30;
    }
    match priority.timeline {
        Timeline::ThirtyDay => PhaseId::Days1To30,
        Timeline::SixtyDay => PhaseId::Days31To60,
        Timeline::NinetyDay | Timeline::SixMonth | Timeline::TwelveMonth => PhaseId::Days61To90,
    }
}

/// Build the fixed three-phase roadmap from the ranked priorities plus
/// any narrative the source roadmap carries for the matching window.
pub fn build_execution_roadmap(
    priorities: &[StrategicPriority],
    source: &Roadmap,
) -> Vec<ExecutionPhase> {
    PhaseId::ORDERED
        .iter()
        .enumerate()
        .map(|(idx, &id)| {
            let mut actions: Vec<String> = priorities
                .iter()
                .filter(|p| phase_for(p) == id)
                .map(|p| p.title.clone())
                .collect();

            // Source roadmap phases line up positionally with the three
            // windows; extra source phases fold into the last window.
            let in_window = source.phases.iter().enumerate().filter(|(i, _)| {
                *i == idx || (idx == 2 && *i > 2)
            });
            for (_, phase) in in_window {
                if !phase.narrative.trim().is_empty() {
                    actions.push(phase.narrative.trim().to_string());
                }
            }

            let focus = narrative::phase_focus(id, actions.first().map(|s| s.as_str()));
            ExecutionPhase { id, focus, actions }
        })
        .collect()
}
