//! Structural validation for the report context and the extracted
//! overview.
//!
//! Error messages always contain the offending field name; downstream
//! tooling matches on those substrings.

use exbrief_core::{ExecutiveOverviewData, PhaseId, ReportContext};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of a validation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }
}

/// Check that a `ReportContext` carries enough data to produce a valid
/// executive overview.
pub fn validate_prerequisites(context: &ReportContext) -> ValidationReport {
    let mut errors = Vec::new();

    if context.findings.is_empty() {
        errors.push("findings is empty: at least 3 findings are required".to_string());
    } else if context.findings.len() < 3 {
        errors.push(format!(
            "findings has only {} entries: at least 3 are required",
            context.findings.len()
        ));
    }

    if context.recommendations.is_empty() {
        errors.push("recommendations is empty: at least 1 recommendation is required".to_string());
    }

    if context.dimensions.is_empty() {
        errors.push("dimensions is empty: dimension scores are required".to_string());
    }

    let score = context.overall_health.score;
    if !(0.0..=100.0).contains(&score) {
        errors.push(format!(
            "overallHealth.score {} is outside the 0-100 range",
            score
        ));
    }

    debug!(errors = errors.len(), "prerequisite validation complete");
    ValidationReport::from_errors(errors)
}

/// Re-check the structural invariants of an already-extracted overview.
pub fn validate_overview(data: &ExecutiveOverviewData) -> ValidationReport {
    let mut errors = Vec::new();

    let findings = data.material_findings.len();
    if !(3..=5).contains(&findings) {
        errors.push(format!(
            "materialFindings has {} entries, expected 3 to 5",
            findings
        ));
    }

    let priorities = data.strategic_priorities.len();
    if !(3..=5).contains(&priorities) {
        errors.push(format!(
            "strategicPriorities has {} entries, expected 3 to 5",
            priorities
        ));
    }
    for (i, priority) in data.strategic_priorities.iter().enumerate() {
        if priority.rank != i as u32 + 1 {
            errors.push(format!(
                "strategicPriorities rank {} at position {} breaks contiguous ordering",
                priority.rank, i
            ));
        }
    }

    let phase_ids: Vec<PhaseId> = data.execution_roadmap.iter().map(|p| p.id).collect();
    if phase_ids != PhaseId::ORDERED {
        errors.push(format!(
            "executionRoadmap phases {:?} do not match the fixed 3-phase order",
            phase_ids
        ));
    }

    let bluf_chars = data.executive_snapshot.bluf.chars().count();
    if bluf_chars <= 100 {
        errors.push(format!(
            "executiveSnapshot.bluf is {} characters, expected more than 100",
            bluf_chars
        ));
    }

    if data.report_route_guide.len() < 7 {
        errors.push(format!(
            "reportRouteGuide has {} entries, expected at least 7",
            data.report_route_guide.len()
        ));
    }

    debug!(errors = errors.len(), "overview validation complete");
    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use exbrief_core::{
        CompanyProfile, DimensionCode, DimensionScore, ExecutionPhase, ExecutiveSnapshot, Finding,
        FindingKind, Horizon, MaterialFinding, OverallHealth, OverviewMeta, Recommendation,
        Roadmap, StrategicPriority, Timeline, Trajectory, ROUTING_MAP_ENTRIES,
    };
    use uuid::Uuid;

    fn finding(id: &str) -> Finding {
        Finding {
            id: id.to_string(),
            kind: FindingKind::Gap,
            severity: 3.0,
            confidence: 0.8,
            label: format!("Finding {}", id),
            narrative: String::new(),
            dimension: DimensionCode::FIN,
        }
    }

    fn recommendation(id: &str) -> Recommendation {
        Recommendation {
            id: id.to_string(),
            title: format!("Priority {}", id),
            priority_rank: 1,
            impact_score: 5.0,
            effort_score: 2.0,
            horizon: Horizon::Days90,
            action_steps: vec![],
            is_quick_win: false,
            rationale: String::new(),
        }
    }

    fn valid_context() -> ReportContext {
        ReportContext {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            company_profile: CompanyProfile::default(),
            overall_health: OverallHealth { score: 60.0, ..Default::default() },
            dimensions: vec![DimensionScore {
                code: DimensionCode::STR,
                score: 60.0,
                band: String::new(),
                key_findings: vec![],
                key_risks: vec![],
                key_opportunities: vec![],
            }],
            findings: vec![finding("a"), finding("b"), finding("c")],
            recommendations: vec![recommendation("r1")],
            risks: vec![],
            roadmap: Roadmap::default(),
            financial_projections: None,
            quick_wins: vec![],
            phase45_output: None,
        }
    }

    fn overview_with_bluf(bluf: &str) -> ExecutiveOverviewData {
        ExecutiveOverviewData {
            meta: OverviewMeta {
                company_name: "Test Co".to_string(),
                industry: "Services".to_string(),
                run_id: Uuid::new_v4(),
                generated_at: Utc::now(),
            },
            executive_snapshot: ExecutiveSnapshot {
                bluf: bluf.to_string(),
                trajectory: Trajectory::Stable,
            },
            material_findings: (0..3)
                .map(|i| MaterialFinding {
                    id: format!("f{}", i),
                    kind: FindingKind::Gap,
                    severity: 3.0,
                    confidence: 0.8,
                    label: format!("Finding {}", i),
                    narrative: String::new(),
                    dimension: DimensionCode::OPS,
                })
                .collect(),
            strategic_priorities: (0..3)
                .map(|i| StrategicPriority {
                    rank: i + 1,
                    title: format!("Priority {}", i),
                    rationale: String::new(),
                    timeline: Timeline::NinetyDay,
                    is_quick_win: false,
                    action_steps: vec![],
                })
                .collect(),
            execution_roadmap: PhaseId::ORDERED
                .iter()
                .map(|&id| ExecutionPhase {
                    id,
                    focus: "Hold the cadence".to_string(),
                    actions: vec![],
                })
                .collect(),
            report_route_guide: ROUTING_MAP_ENTRIES.clone(),
            bottom_line: "Bottom line.".to_string(),
        }
    }

    #[test]
    fn test_valid_context_passes() {
        let report = validate_prerequisites(&valid_context());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_empty_findings_flagged_by_name() {
        let mut context = valid_context();
        context.findings.clear();
        let report = validate_prerequisites(&context);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("findings")));
    }

    #[test]
    fn test_empty_recommendations_flagged_by_name() {
        let mut context = valid_context();
        context.recommendations.clear();
        let report = validate_prerequisites(&context);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("recommendations")));
    }

    #[test]
    fn test_out_of_range_score_flagged() {
        let mut context = valid_context();
        context.overall_health.score = 130.0;
        let report = validate_prerequisites(&context);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("overallHealth.score")));
    }

    #[test]
    fn test_bluf_length_counts_characters_not_bytes() {
        // 60 CJK characters occupy 180 bytes but are still too short.
        let short_multibyte = "健".repeat(60);
        let report = validate_overview(&overview_with_bluf(&short_multibyte));
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("bluf")));

        let long_multibyte = "健".repeat(101);
        let report = validate_overview(&overview_with_bluf(&long_multibyte));
        assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = validate_prerequisites(&valid_context());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["isValid"], true);
        assert!(json["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_two_findings_insufficient() {
        let mut context = valid_context();
        context.findings.truncate(2);
        let report = validate_prerequisites(&context);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("findings")));
    }
}
