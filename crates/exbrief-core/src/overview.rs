//! Output Contract: the compact executive-facing view model.
//!
//! Constructed fresh per report run by `exbrief-extract`, consumed
//! read-only by the HTML renderer and by `exbrief-quality`.

use crate::context::{DimensionCode, FindingKind};
use crate::routes::RouteGuideEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveOverviewData {
    pub meta: OverviewMeta,
    pub executive_snapshot: ExecutiveSnapshot,
    /// 3 to 5 findings, ranked by severity then confidence.
    pub material_findings: Vec<MaterialFinding>,
    /// 3 to 5 priorities with contiguous 1-based ranks.
    pub strategic_priorities: Vec<StrategicPriority>,
    /// Always exactly 3 phases, `days_1_30` / `days_31_60` / `days_61_90`.
    pub execution_roadmap: Vec<ExecutionPhase>,
    /// Identity passthrough of `ROUTING_MAP_ENTRIES`.
    pub report_route_guide: Vec<RouteGuideEntry>,
    pub bottom_line: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewMeta {
    pub company_name: String,
    pub industry: String,
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSnapshot {
    /// Bottom Line Up Front. Synthesized BLUFs exceed 100 characters and
    /// name the company; Phase 4.5 BLUFs pass through verbatim.
    pub bluf: String,
    pub trajectory: Trajectory,
}

/// Executive-facing trajectory bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trajectory {
    Growing,
    Stable,
    Stagnating,
    Declining,
}

impl Trajectory {
    /// Short phrase for narrative interpolation.
    pub fn phrase(&self) -> &'static str {
        match self {
            Trajectory::Growing => "on a growth trajectory",
            Trajectory::Stable => "holding steady",
            Trajectory::Stagnating => "losing momentum",
            Trajectory::Declining => "on a declining path",
        }
    }
}

/// Health band derived from the overall 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// Below 45: structural problems need decisive action.
    AtRisk,
    /// 45-69: solid potential with clear gaps.
    Moderate,
    /// 70 and up: strong foundations.
    Strong,
}

impl HealthBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            HealthBand::Strong
        } else if score >= 45.0 {
            HealthBand::Moderate
        } else {
            HealthBand::AtRisk
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialFinding {
    pub id: String,
    pub kind: FindingKind,
    pub severity: f64,
    pub confidence: f64,
    pub label: String,
    pub narrative: String,
    pub dimension: DimensionCode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicPriority {
    /// 1-based position in the impact/effort ordering. Contiguous.
    pub rank: u32,
    pub title: String,
    pub rationale: String,
    pub timeline: Timeline,
    pub is_quick_win: bool,
    #[serde(default)]
    pub action_steps: Vec<String>,
}

/// Executive timeline labels. Closed set; every upstream `Horizon` maps
/// onto exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "30-day")]
    ThirtyDay,
    #[serde(rename = "60-day")]
    SixtyDay,
    #[serde(rename = "90-day")]
    NinetyDay,
    #[serde(rename = "6-month")]
    SixMonth,
    #[serde(rename = "12-month")]
    TwelveMonth,
}

impl Timeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::ThirtyDay => "30-day",
            Timeline::SixtyDay => "60-day",
            Timeline::NinetyDay => "90-day",
            Timeline::SixMonth => "6-month",
            Timeline::TwelveMonth => "12-month",
        }
    }
}

/// Fixed identifiers for the three 90-day execution windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseId {
    #[serde(rename = "days_1_30")]
    Days1To30,
    #[serde(rename = "days_31_60")]
    Days31To60,
    #[serde(rename = "days_61_90")]
    Days61To90,
}

impl PhaseId {
    /// The canonical phase order for every report.
    pub const ORDERED: [PhaseId; 3] = [PhaseId::Days1To30, PhaseId::Days31To60, PhaseId::Days61To90];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseId::Days1To30 => "days_1_30",
            PhaseId::Days31To60 => "days_31_60",
            PhaseId::Days61To90 => "days_61_90",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PhaseId::Days1To30 => "Days 1-30",
            PhaseId::Days31To60 => "Days 31-60",
            PhaseId::Days61To90 => "Days 61-90",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPhase {
    pub id: PhaseId,
    /// One-line focus statement for the window.
    pub focus: String,
    /// Action titles drawn from the strategic priorities in this window.
    pub actions: Vec<String>,
}
