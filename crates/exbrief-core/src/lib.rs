//! Exbrief Core: shared data model for the executive overview report core.
//!
//! Input contract (`ReportContext`), output contract
//! (`ExecutiveOverviewData`), the closed enums both sides share, and the
//! static route-guide table.

pub mod context;
pub mod deliverables;
pub mod error;
pub mod overview;
pub mod routes;

pub use context::{
    CompanyProfile, DimensionCode, DimensionScore, FinancialProjections, Finding, FindingKind,
    Horizon, OverallHealth, Phase45Bluf, Phase45Meta, Phase45Output, Recommendation, ReportContext,
    Risk, Roadmap, RoadmapPhase,
};
pub use deliverables::{Chapter, Deliverable, SourceFile};
pub use error::ExbriefError;
pub use overview::{
    ExecutionPhase, ExecutiveOverviewData, ExecutiveSnapshot, HealthBand, MaterialFinding,
    OverviewMeta, PhaseId, StrategicPriority, Timeline, Trajectory,
};
pub use routes::{RouteGuideEntry, ROUTING_MAP_ENTRIES};

/// Version of the report core engine
pub const EXBRIEF_VERSION: &str = "1.0.0";
