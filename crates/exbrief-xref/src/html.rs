//! HTML micro-format for cross-references.
//!
//! The one bit-exact wire format this core owns: anchors carrying a
//! `cross-reference` class token and a `data-target="{report}:{section}"`
//! attribute. `parse_from_html` is the best-effort inverse of the
//! emitters, not a general HTML parser; it assumes the attribute order
//! produced here.

use crate::generate::CrossReference;
use crate::tables::REPORT_FILENAMES;
use exbrief_core::Deliverable;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CROSS_REF_ANCHOR: Regex = Regex::new(
        r#"<a\s[^>]*class="[^"]*cross-reference[^"]*"[^>]*data-target="([^":]+):([^"]*)"[^>]*>([^<]*)</a>"#
    )
    .expect("cross-reference anchor pattern is valid");
}

/// Target URL for a reference: deliverable filename plus section anchor.
/// A leading `#` on the section is stripped exactly once so the result
/// never carries `##`.
pub fn build_target_url(reference: &CrossReference) -> String {
    let filename = REPORT_FILENAMES
        .get(&reference.target_report)
        .copied()
        .unwrap_or("comprehensive.html");
    let section = reference
        .target_section
        .strip_prefix('#')
        .unwrap_or(&reference.target_section);
    format!("{}#{}", filename, section)
}

fn anchor(reference: &CrossReference) -> String {
    format!(
        r#"<a class="cross-reference" data-target="{}:{}" href="{}">{}</a>"#,
        reference.target_report.as_str(),
        reference.target_section,
        build_target_url(reference),
        reference.link_text
    )
}

/// Render a reference list as a labeled container of anchors joined by
/// `" | "`. Empty input renders to the empty string.
pub fn generate_html(references: &[CrossReference], css_class: &str) -> String {
    if references.is_empty() {
        return String::new();
    }
    let anchors: Vec<String> = references.iter().map(anchor).collect();
    format!(
        r#"<div class="{}"><span class="cross-reference-label">See also:</span> {}</div>"#,
        css_class,
        anchors.join(" | ")
    )
}

/// Single anchor without going through reference generation.
pub fn create_inline_link(target_report: Deliverable, target_section: &str, link_text: &str) -> String {
    anchor(&CrossReference {
        label: link_text.to_string(),
        target_report,
        target_section: target_section.to_string(),
        link_text: link_text.to_string(),
    })
}

/// Extract cross-references back out of rendered HTML.
///
/// Anchors whose report identifier is unknown are skipped rather than
/// surfaced as errors.
pub fn parse_from_html(html: &str) -> Vec<CrossReference> {
    CROSS_REF_ANCHOR
        .captures_iter(html)
        .filter_map(|caps| {
            let target_report = Deliverable::parse(&caps[1])?;
            let link_text = caps[3].to_string();
            Some(CrossReference {
                label: link_text.clone(),
                target_report,
                target_section: caps[2].to_string(),
                link_text,
            })
        })
        .collect()
}
