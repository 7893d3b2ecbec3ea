//! Cross-reference construction.

use crate::tables::{display_name, related_managers, SOURCE_TO_DETAIL_MAP};
use exbrief_core::{Deliverable, SourceFile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A navigable link from condensed content to fuller detail elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub label: String,
    pub target_report: Deliverable,
    pub target_section: String,
    pub link_text: String,
}

impl CrossReference {
    fn new(label: &str, target_report: Deliverable, target_section: &str, link_text: String) -> Self {
        Self {
            label: label.to_string(),
            target_report,
            target_section: target_section.to_string(),
            link_text,
        }
    }
}

/// Generate the cross-references for condensed content from `source`
/// rendered inside `target`.
///
/// `_section_label` is accepted for interface compatibility with
/// existing callers and is currently unread; reference text comes from
/// the routing tables.
pub fn generate(
    source: SourceFile,
    target: Deliverable,
    _section_label: &str,
) -> Vec<CrossReference> {
    let Some(detail) = SOURCE_TO_DETAIL_MAP.get(&source) else {
        return Vec::new();
    };

    // No self-references: content already lives in its detail report.
    if target == detail.report {
        return Vec::new();
    }

    let mut refs = vec![CrossReference::new(
        "Full Details",
        detail.report,
        detail.section,
        format!("See full details in the {}", display_name(detail.report)),
    )];

    match source {
        SourceFile::QuickWins => {
            if target != Deliverable::Comprehensive {
                refs.push(CrossReference::new(
                    "Implementation Timeline",
                    Deliverable::Comprehensive,
                    "implementation-roadmap",
                    format!(
                        "View the implementation timeline in the {}",
                        display_name(Deliverable::Comprehensive)
                    ),
                ));
            }
        }
        SourceFile::Risk => {
            refs.push(CrossReference::new(
                "Mitigation Plan",
                Deliverable::Comprehensive,
                "implementation-roadmap",
                format!(
                    "Mitigation plans are detailed in the {}",
                    display_name(Deliverable::Comprehensive)
                ),
            ));
        }
        SourceFile::Financial => {
            if target != Deliverable::Owner {
                refs.push(CrossReference::new(
                    "Investment Summary",
                    Deliverable::Owner,
                    "investment-summary",
                    format!(
                        "Investment summary in the {}",
                        display_name(Deliverable::Owner)
                    ),
                ));
            }
        }
        SourceFile::Roadmap => {}
        SourceFile::DeepDiveGE
        | SourceFile::DeepDivePH
        | SourceFile::DeepDivePL
        | SourceFile::DeepDiveRS => {
            if let Some(chapter) = source.deep_dive_chapter() {
                for manager in related_managers(chapter) {
                    if *manager != target {
                        refs.push(CrossReference::new(
                            "Manager View",
                            *manager,
                            "chapter-detail",
                            format!("Related detail in the {}", display_name(*manager)),
                        ));
                    }
                }
            }
        }
    }

    debug!(?source, ?target, count = refs.len(), "cross-references generated");
    refs
}

/// Cross-references for one source across all nine deliverables.
/// Deliverables with no references are omitted.
pub fn generate_for_source(source: SourceFile) -> BTreeMap<Deliverable, Vec<CrossReference>> {
    Deliverable::ALL
        .iter()
        .filter_map(|&target| {
            let refs = generate(source, target, "");
            if refs.is_empty() {
                None
            } else {
                Some((target, refs))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_reference_suppressed() {
        assert!(generate(SourceFile::QuickWins, Deliverable::Comprehensive, "").is_empty());
        assert!(generate(SourceFile::Risk, Deliverable::Comprehensive, "").is_empty());
    }

    #[test]
    fn test_full_details_comes_first() {
        let refs = generate(SourceFile::Roadmap, Deliverable::Owner, "");
        assert_eq!(refs[0].label, "Full Details");
        assert_eq!(refs[0].target_report, Deliverable::Comprehensive);
        assert_eq!(refs[0].target_section, "implementation-roadmap");
    }

    #[test]
    fn test_risk_always_carries_mitigation_plan() {
        for target in Deliverable::ALL {
            if target == Deliverable::Comprehensive {
                continue;
            }
            let refs = generate(SourceFile::Risk, target, "");
            assert!(
                refs.iter().any(|r| r.label == "Mitigation Plan"),
                "missing mitigation plan for {:?}",
                target
            );
        }
    }

    #[test]
    fn test_financial_investment_summary_targets_owner() {
        let refs = generate(SourceFile::Financial, Deliverable::ExecutiveBrief, "");
        let investment = refs.iter().find(|r| r.label == "Investment Summary").unwrap();
        assert_eq!(investment.target_report, Deliverable::Owner);

        // No investment pointer when the owner is already reading.
        let refs = generate(SourceFile::Financial, Deliverable::Owner, "");
        assert!(refs.iter().all(|r| r.label != "Investment Summary"));
    }

    #[test]
    fn test_deep_dive_excludes_current_target() {
        let refs = generate(SourceFile::DeepDiveGE, Deliverable::OperationsManager, "");
        assert!(refs
            .iter()
            .any(|r| r.target_report == Deliverable::SalesMarketingManager));
        assert!(refs.iter().all(|r| r.target_report != Deliverable::OperationsManager));

        let refs = generate(SourceFile::DeepDivePH, Deliverable::OperationsManager, "");
        assert!(refs
            .iter()
            .any(|r| r.target_report == Deliverable::FinancialsManager));
        assert!(refs.iter().all(|r| r.target_report != Deliverable::OperationsManager));
    }

    #[test]
    fn test_reference_serializes_camel_case() {
        let refs = generate(SourceFile::Financial, Deliverable::ExecutiveBrief, "");
        let json = serde_json::to_value(&refs[0]).unwrap();
        assert_eq!(json["targetReport"], "comprehensive");
        assert!(json["targetSection"].is_string());
        assert!(json["linkText"].is_string());
    }

    #[test]
    fn test_generate_for_source_omits_self_and_empties() {
        let by_target = generate_for_source(SourceFile::Risk);
        assert!(!by_target.contains_key(&Deliverable::Comprehensive));
        assert_eq!(by_target.len(), 8);
        for refs in by_target.values() {
            assert!(!refs.is_empty());
        }
    }
}
