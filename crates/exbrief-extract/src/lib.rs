//! Exbrief Extract: Executive Overview Data Extractor
//!
//! Consumes a full assessment `ReportContext` and produces the compact
//! `ExecutiveOverviewData` view model sized for a single executive-facing
//! page. Pure and deterministic: no I/O, no side effects, identical input
//! yields identical output.
//!
//! # Example
//!
//! ```ignore
//! use exbrief_extract::extract_executive_overview;
//!
//! let overview = extract_executive_overview(&context);
//! assert_eq!(overview.execution_roadmap.len(), 3);
//! ```
//!
//! The extractor assumes its input already passed
//! `exbrief_quality::validate_prerequisites`; with insufficient input it
//! degrades (short lists, generic prose) rather than failing.

pub mod findings;
pub mod narrative;
pub mod priorities;
pub mod roadmap;
pub mod trajectory;

use exbrief_core::{
    ExecutiveOverviewData, ExecutiveSnapshot, FindingKind, HealthBand, OverviewMeta, ReportContext,
    ROUTING_MAP_ENTRIES,
};
use narrative::NarrativeInputs;
use tracing::debug;

pub use findings::select_material_findings;
pub use priorities::{derive_strategic_priorities, timeline_for_horizon};
pub use roadmap::build_execution_roadmap;

/// Extract the executive overview view model from a full report context.
pub fn extract_executive_overview(context: &ReportContext) -> ExecutiveOverviewData {
    debug!(
        company = %context.company_profile.name,
        score = context.overall_health.score,
        "extracting executive overview"
    );

    let material_findings = findings::select_material_findings(&context.findings);
    let strategic_priorities = priorities::derive_strategic_priorities(&context.recommendations);
    let execution_roadmap = roadmap::build_execution_roadmap(&strategic_priorities, &context.roadmap);

    let band = HealthBand::from_score(context.overall_health.score);
    let inputs = narrative_inputs(context, &strategic_priorities);

    // A validated Phase 4.5 BLUF is authoritative over synthesized prose.
    let bluf = context
        .phase45_output
        .as_ref()
        .and_then(|p| p.validated_overview_bluf())
        .map(str::to_string)
        .unwrap_or_else(|| narrative::synthesize_bluf(band, &inputs));

    ExecutiveOverviewData {
        meta: OverviewMeta {
            company_name: context.company_profile.name.clone(),
            industry: context.company_profile.industry.clone(),
            run_id: context.run_id,
            generated_at: context.generated_at,
        },
        executive_snapshot: ExecutiveSnapshot {
            bluf,
            trajectory: trajectory::determine(&context.overall_health),
        },
        material_findings,
        strategic_priorities,
        execution_roadmap,
        report_route_guide: ROUTING_MAP_ENTRIES.clone(),
        bottom_line: narrative::bottom_line(band, &inputs),
    }
}

/// Pull the company-specific details the narrative templates interpolate.
fn narrative_inputs(
    context: &ReportContext,
    priorities: &[exbrief_core::StrategicPriority],
) -> NarrativeInputs {
    let top_strength = context
        .findings
        .iter()
        .filter(|f| f.kind == FindingKind::Strength)
        .max_by(|a, b| a.severity.total_cmp(&b.severity))
        .map(|f| f.label.clone())
        .unwrap_or_else(|| "the resilience of its core operations".to_string());

    let top_finding = context
        .findings
        .iter()
        .filter(|f| f.kind != FindingKind::Strength)
        .max_by(|a, b| {
            a.severity
                .total_cmp(&b.severity)
                .then(a.confidence.total_cmp(&b.confidence))
        })
        .map(|f| f.label.clone())
        .unwrap_or_else(|| "the gaps surfaced in this assessment".to_string());

    let top_priority = priorities
        .first()
        .map(|p| p.title.clone())
        .unwrap_or_else(|| "act on the top recommendation in this report".to_string());

    let top_risk = context
        .risks
        .iter()
        .max_by(|a, b| (a.severity * a.likelihood).total_cmp(&(b.severity * b.likelihood)))
        .map(|r| r.label.clone())
        .unwrap_or_else(|| "The risk profile identified in this assessment".to_string());

    NarrativeInputs {
        company: context.company_profile.name.clone(),
        score: context.overall_health.score.round() as i64,
        trajectory_phrase: trajectory::determine(&context.overall_health).phrase().to_string(),
        top_strength,
        top_finding,
        top_priority,
        top_risk,
    }
}
