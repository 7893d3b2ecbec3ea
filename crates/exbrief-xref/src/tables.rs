//! Static routing tables.
//!
//! Immutable configuration data, initialized once at module start and
//! never mutated at runtime.

use exbrief_core::{Chapter, Deliverable, SourceFile};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Where the full detail behind a condensed content area lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLocation {
    pub report: Deliverable,
    pub section: &'static str,
}

/// Source content type to its detail location. Every current source
/// drills down into the Comprehensive Report.
pub static SOURCE_TO_DETAIL_MAP: Lazy<HashMap<SourceFile, DetailLocation>> = Lazy::new(|| {
    HashMap::from([
        (
            SourceFile::QuickWins,
            DetailLocation { report: Deliverable::Comprehensive, section: "quick-wins" },
        ),
        (
            SourceFile::Risk,
            DetailLocation { report: Deliverable::Comprehensive, section: "risk-register" },
        ),
        (
            SourceFile::Roadmap,
            DetailLocation {
                report: Deliverable::Comprehensive,
                section: "implementation-roadmap",
            },
        ),
        (
            SourceFile::Financial,
            DetailLocation {
                report: Deliverable::Comprehensive,
                section: "financial-projections",
            },
        ),
        (
            SourceFile::DeepDiveGE,
            DetailLocation { report: Deliverable::Comprehensive, section: "growth-engine" },
        ),
        (
            SourceFile::DeepDivePH,
            DetailLocation { report: Deliverable::Comprehensive, section: "performance-health" },
        ),
        (
            SourceFile::DeepDivePL,
            DetailLocation { report: Deliverable::Comprehensive, section: "people-leadership" },
        ),
        (
            SourceFile::DeepDiveRS,
            DetailLocation {
                report: Deliverable::Comprehensive,
                section: "resilience-safeguards",
            },
        ),
    ])
});

/// Human-readable deliverable names.
pub static REPORT_DISPLAY_NAMES: Lazy<HashMap<Deliverable, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Deliverable::Comprehensive, "Comprehensive Report"),
        (Deliverable::Owner, "Owner's Report"),
        (Deliverable::ExecutiveBrief, "Executive Brief"),
        (Deliverable::SalesMarketingManager, "Sales & Marketing Manager Report"),
        (Deliverable::OperationsManager, "Operations Manager Report"),
        (Deliverable::FinancialsManager, "Financials Manager Report"),
        (Deliverable::StrategyLeadershipManager, "Strategy & Leadership Manager Report"),
        (Deliverable::ItTechnologyManager, "IT & Technology Manager Report"),
        (Deliverable::Employee, "Employee Report"),
    ])
});

/// Output filenames for each deliverable.
pub static REPORT_FILENAMES: Lazy<HashMap<Deliverable, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Deliverable::Comprehensive, "comprehensive.html"),
        (Deliverable::Owner, "owner.html"),
        (Deliverable::ExecutiveBrief, "executiveBrief.html"),
        (Deliverable::SalesMarketingManager, "managersSalesMarketing.html"),
        (Deliverable::OperationsManager, "managersOperations.html"),
        (Deliverable::FinancialsManager, "managersFinancials.html"),
        (Deliverable::StrategyLeadershipManager, "managersStrategyLeadership.html"),
        (Deliverable::ItTechnologyManager, "managersItTechnology.html"),
        (Deliverable::Employee, "employee.html"),
    ])
});

/// Display name with a safe default for unmapped deliverables.
pub fn display_name(deliverable: Deliverable) -> &'static str {
    REPORT_DISPLAY_NAMES.get(&deliverable).copied().unwrap_or("Comprehensive Report")
}

/// Manager deliverables most related to a chapter's deep dive.
pub fn related_managers(chapter: Chapter) -> &'static [Deliverable] {
    match chapter {
        Chapter::GE => &[Deliverable::SalesMarketingManager],
        Chapter::PH => &[Deliverable::OperationsManager, Deliverable::FinancialsManager],
        Chapter::PL => &[Deliverable::OperationsManager, Deliverable::StrategyLeadershipManager],
        Chapter::RS => &[Deliverable::ItTechnologyManager, Deliverable::StrategyLeadershipManager],
    }
}
