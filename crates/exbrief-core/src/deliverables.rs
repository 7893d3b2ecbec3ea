//! Deliverable and source-content identifiers shared by the extractor and
//! the cross-reference generator.

use serde::{Deserialize, Serialize};

/// The 4 top-level chapter groupings of dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chapter {
    /// Growth Engine
    GE,
    /// Performance & Health
    PH,
    /// People & Leadership
    PL,
    /// Resilience & Safeguards
    RS,
}

impl Chapter {
    pub fn title(&self) -> &'static str {
        match self {
            Chapter::GE => "Growth Engine",
            Chapter::PH => "Performance & Health",
            Chapter::PL => "People & Leadership",
            Chapter::RS => "Resilience & Safeguards",
        }
    }
}

/// The 8 intermediate content types condensed material can originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceFile {
    #[serde(rename = "quickWins")]
    QuickWins,
    #[serde(rename = "risk")]
    Risk,
    #[serde(rename = "roadmap")]
    Roadmap,
    #[serde(rename = "financial")]
    Financial,
    #[serde(rename = "deepDiveGE")]
    DeepDiveGE,
    #[serde(rename = "deepDivePH")]
    DeepDivePH,
    #[serde(rename = "deepDivePL")]
    DeepDivePL,
    #[serde(rename = "deepDiveRS")]
    DeepDiveRS,
}

impl SourceFile {
    pub const ALL: [SourceFile; 8] = [
        SourceFile::QuickWins,
        SourceFile::Risk,
        SourceFile::Roadmap,
        SourceFile::Financial,
        SourceFile::DeepDiveGE,
        SourceFile::DeepDivePH,
        SourceFile::DeepDivePL,
        SourceFile::DeepDiveRS,
    ];

    /// Chapter behind a deep-dive source, if this is one.
    pub fn deep_dive_chapter(&self) -> Option<Chapter> {
        match self {
            SourceFile::DeepDiveGE => Some(Chapter::GE),
            SourceFile::DeepDivePH => Some(Chapter::PH),
            SourceFile::DeepDivePL => Some(Chapter::PL),
            SourceFile::DeepDiveRS => Some(Chapter::RS),
            _ => None,
        }
    }
}

/// The 9 client-facing report deliverables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Deliverable {
    #[serde(rename = "comprehensive")]
    Comprehensive,
    #[serde(rename = "owner")]
    Owner,
    #[serde(rename = "executiveBrief")]
    ExecutiveBrief,
    #[serde(rename = "salesMarketingManager")]
    SalesMarketingManager,
    #[serde(rename = "operationsManager")]
    OperationsManager,
    #[serde(rename = "financialsManager")]
    FinancialsManager,
    #[serde(rename = "strategyLeadershipManager")]
    StrategyLeadershipManager,
    #[serde(rename = "itTechnologyManager")]
    ItTechnologyManager,
    #[serde(rename = "employee")]
    Employee,
}

impl Deliverable {
    pub const ALL: [Deliverable; 9] = [
        Deliverable::Comprehensive,
        Deliverable::Owner,
        Deliverable::ExecutiveBrief,
        Deliverable::SalesMarketingManager,
        Deliverable::OperationsManager,
        Deliverable::FinancialsManager,
        Deliverable::StrategyLeadershipManager,
        Deliverable::ItTechnologyManager,
        Deliverable::Employee,
    ];

    /// Wire identifier, as used in `data-target` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Deliverable::Comprehensive => "comprehensive",
            Deliverable::Owner => "owner",
            Deliverable::ExecutiveBrief => "executiveBrief",
            Deliverable::SalesMarketingManager => "salesMarketingManager",
            Deliverable::OperationsManager => "operationsManager",
            Deliverable::FinancialsManager => "financialsManager",
            Deliverable::StrategyLeadershipManager => "strategyLeadershipManager",
            Deliverable::ItTechnologyManager => "itTechnologyManager",
            Deliverable::Employee => "employee",
        }
    }

    /// Inverse of `as_str`. Unknown identifiers get no deliverable.
    pub fn parse(s: &str) -> Option<Deliverable> {
        Deliverable::ALL.iter().copied().find(|d| d.as_str() == s)
    }
}

impl std::fmt::Display for Deliverable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliverable_wire_roundtrip() {
        for d in Deliverable::ALL {
            assert_eq!(Deliverable::parse(d.as_str()), Some(d));
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(json, format!("\"{}\"", d.as_str()));
        }
        assert_eq!(Deliverable::parse("weeklyDigest"), None);
    }

    #[test]
    fn test_deep_dive_chapters() {
        assert_eq!(SourceFile::DeepDiveGE.deep_dive_chapter(), Some(Chapter::GE));
        assert_eq!(SourceFile::QuickWins.deep_dive_chapter(), None);
    }
}
