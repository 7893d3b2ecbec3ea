//! Material findings selection.

use exbrief_core::{Finding, MaterialFinding};

/// Maximum findings shown on the executive page.
const MAX_MATERIAL_FINDINGS: usize = 5;

/// Rank findings by severity then confidence and keep the top slice.
///
/// Fewer than 3 findings in the source is a prerequisite failure the
/// caller is expected to have caught; this function emits what it has.
pub fn select_material_findings(findings: &[Finding]) -> Vec<MaterialFinding> {
    let mut ranked: Vec<&Finding> = findings.iter().collect();
    ranked.sort_by(|a, b| {
        b.severity
            .total_cmp(&a.severity)
            .then(b.confidence.total_cmp(&a.confidence))
            .then(a.id.cmp(&b.id))
    });

    ranked
        .into_iter()
        .take(MAX_MATERIAL_FINDINGS)
        .map(|f| MaterialFinding {
            id: f.id.clone(),
            kind: f.kind,
            severity: f.severity,
            confidence: f.confidence,
            label: f.label.clone(),
            narrative: f.narrative.clone(),
            dimension: f.dimension,
        })
        .collect()
}
