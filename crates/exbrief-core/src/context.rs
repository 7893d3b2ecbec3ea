//! Input Contract: the full assessment result for one company run.
//!
//! `ReportContext` is produced by the upstream assessment pipeline and is
//! read-only inside this core. Field names follow the upstream camelCase
//! wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Full assessment result consumed by the extractor.
///
/// Collections default to empty when the upstream omits them; structural
/// sufficiency is checked by `exbrief-quality`, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContext {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub company_profile: CompanyProfile,
    #[serde(default)]
    pub overall_health: OverallHealth,
    #[serde(default)]
    pub dimensions: Vec<DimensionScore>,
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub roadmap: Roadmap,
    pub financial_projections: Option<FinancialProjections>,
    /// Pre-filtered quick-win recommendations (upstream derivation).
    #[serde(default)]
    pub quick_wins: Vec<Recommendation>,
    /// Pre-generated narrative bundle, authoritative when validated.
    #[serde(rename = "phase45Output")]
    pub phase45_output: Option<Phase45Output>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub size_band: String,
    pub employee_count: Option<u32>,
    #[serde(default)]
    pub revenue_band: String,
    pub years_in_business: Option<u32>,
    #[serde(default)]
    pub lifecycle_stage: String,
}

/// Overall business health for the run.
///
/// `trajectory` is free text from upstream ("Improving", "Flat",
/// "Declining" or anything else an analyst typed).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallHealth {
    pub score: f64,
    #[serde(default)]
    pub band: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub trajectory: String,
}

/// The 12 fixed scored dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionCode {
    STR,
    SAL,
    MKT,
    CXP,
    OPS,
    FIN,
    HRS,
    LDG,
    TIN,
    ITD,
    RMS,
    CMP,
}

impl DimensionCode {
    /// Chapter grouping for this dimension.
    pub fn chapter(&self) -> crate::deliverables::Chapter {
        use crate::deliverables::Chapter;
        match self {
            DimensionCode::STR | DimensionCode::SAL | DimensionCode::MKT => Chapter::GE,
            DimensionCode::CXP | DimensionCode::OPS | DimensionCode::FIN => Chapter::PH,
            DimensionCode::HRS | DimensionCode::LDG | DimensionCode::TIN => Chapter::PL,
            DimensionCode::ITD | DimensionCode::RMS | DimensionCode::CMP => Chapter::RS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub code: DimensionCode,
    pub score: f64,
    #[serde(default)]
    pub band: String,
    #[serde(default)]
    pub key_findings: Vec<String>,
    #[serde(default)]
    pub key_risks: Vec<String>,
    #[serde(default)]
    pub key_opportunities: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Strength,
    Gap,
    Risk,
    Opportunity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    pub kind: FindingKind,
    /// Severity on the upstream numeric scale (higher = more material).
    pub severity: f64,
    /// Analyst confidence, 0.0 to 1.0.
    pub confidence: f64,
    pub label: String,
    pub narrative: String,
    pub dimension: DimensionCode,
}

/// Time horizon enum as produced by the upstream schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "30_days")]
    Days30,
    #[serde(rename = "60_days")]
    Days60,
    #[serde(rename = "90_days")]
    Days90,
    #[serde(rename = "6_months")]
    Months6,
    #[serde(rename = "12_months")]
    Months12,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub priority_rank: u32,
    pub impact_score: f64,
    pub effort_score: f64,
    pub horizon: Horizon,
    #[serde(default)]
    pub action_steps: Vec<String>,
    #[serde(default)]
    pub is_quick_win: bool,
    #[serde(default)]
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: String,
    pub severity: f64,
    pub likelihood: f64,
    pub category: String,
    pub label: String,
    #[serde(default)]
    pub mitigation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    #[serde(default)]
    pub phases: Vec<RoadmapPhase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub label: String,
    #[serde(default)]
    pub recommendation_ids: Vec<String>,
    #[serde(default)]
    pub narrative: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProjections {
    pub ninety_day_value: f64,
    pub annual_value: f64,
    pub roi_multiple: f64,
    pub investment_required: f64,
    pub payback_months: f64,
}

/// Pre-generated narrative bundle from the Phase 4.5 pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase45Output {
    pub meta: Phase45Meta,
    /// BLUF paragraphs keyed by section (e.g. "executive_overview").
    #[serde(default)]
    pub executive_blufs: HashMap<String, Phase45Bluf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase45Meta {
    #[serde(default)]
    pub validation_passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase45Bluf {
    pub content: String,
}

impl Phase45Output {
    /// The validated executive-overview BLUF, if one is present and usable.
    pub fn validated_overview_bluf(&self) -> Option<&str> {
        if !self.meta.validation_passed {
            return None;
        }
        self.executive_blufs
            .get("executive_overview")
            .map(|b| b.content.as_str())
            .filter(|c| !c.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_chapters_cover_all_codes() {
        use crate::deliverables::Chapter;
        let codes = [
            DimensionCode::STR,
            DimensionCode::SAL,
            DimensionCode::MKT,
            DimensionCode::CXP,
            DimensionCode::OPS,
            DimensionCode::FIN,
            DimensionCode::HRS,
            DimensionCode::LDG,
            DimensionCode::TIN,
            DimensionCode::ITD,
            DimensionCode::RMS,
            DimensionCode::CMP,
        ];
        let mut per_chapter = std::collections::HashMap::new();
        for code in codes {
            *per_chapter.entry(code.chapter()).or_insert(0u32) += 1;
        }
        assert_eq!(per_chapter[&Chapter::GE], 3);
        assert_eq!(per_chapter[&Chapter::PH], 3);
        assert_eq!(per_chapter[&Chapter::PL], 3);
        assert_eq!(per_chapter[&Chapter::RS], 3);
    }

    #[test]
    fn test_horizon_wire_names() {
        let h: Horizon = serde_json::from_str("\"90_days\"").unwrap();
        assert_eq!(h, Horizon::Days90);
        assert_eq!(serde_json::to_string(&Horizon::Months12).unwrap(), "\"12_months\"");
    }

    #[test]
    fn test_phase45_bluf_requires_validation() {
        let mut blufs = HashMap::new();
        blufs.insert(
            "executive_overview".to_string(),
            Phase45Bluf { content: "Pinned narrative.".to_string() },
        );
        let output = Phase45Output {
            meta: Phase45Meta { validation_passed: false },
            executive_blufs: blufs.clone(),
        };
        assert!(output.validated_overview_bluf().is_none());

        let output = Phase45Output {
            meta: Phase45Meta { validation_passed: true },
            executive_blufs: blufs,
        };
        assert_eq!(output.validated_overview_bluf(), Some("Pinned narrative."));
    }
}
