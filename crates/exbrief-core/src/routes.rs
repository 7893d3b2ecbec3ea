//! Static "Where to Go Deeper" route guide.
//!
//! Immutable configuration data: the extractor passes this table through
//! unmodified, it is never derived from input.

use crate::deliverables::Deliverable;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGuideEntry {
    /// What the reader is looking for.
    pub topic: String,
    /// Which deliverable holds the full detail.
    pub deliverable: Deliverable,
    /// Section anchor inside that deliverable.
    pub section: String,
}

impl RouteGuideEntry {
    fn new(topic: &str, deliverable: Deliverable, section: &str) -> Self {
        Self {
            topic: topic.to_string(),
            deliverable,
            section: section.to_string(),
        }
    }
}

/// The fixed route-guide table rendered under "Where to Go Deeper".
pub static ROUTING_MAP_ENTRIES: Lazy<Vec<RouteGuideEntry>> = Lazy::new(|| {
    vec![
        RouteGuideEntry::new(
            "Quick wins and immediate actions",
            Deliverable::Comprehensive,
            "quick-wins",
        ),
        RouteGuideEntry::new(
            "Full risk register and mitigation plans",
            Deliverable::Comprehensive,
            "risk-register",
        ),
        RouteGuideEntry::new(
            "Complete implementation roadmap",
            Deliverable::Comprehensive,
            "implementation-roadmap",
        ),
        RouteGuideEntry::new(
            "Financial projections and ROI detail",
            Deliverable::Comprehensive,
            "financial-projections",
        ),
        RouteGuideEntry::new(
            "Growth Engine deep dive",
            Deliverable::Comprehensive,
            "growth-engine",
        ),
        RouteGuideEntry::new(
            "Performance & Health deep dive",
            Deliverable::Comprehensive,
            "performance-health",
        ),
        RouteGuideEntry::new(
            "People & Leadership deep dive",
            Deliverable::Comprehensive,
            "people-leadership",
        ),
        RouteGuideEntry::new(
            "Resilience & Safeguards deep dive",
            Deliverable::Comprehensive,
            "resilience-safeguards",
        ),
        RouteGuideEntry::new(
            "Investment summary for owners",
            Deliverable::Owner,
            "investment-summary",
        ),
    ]
});
