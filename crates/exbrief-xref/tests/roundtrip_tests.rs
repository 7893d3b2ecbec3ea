//! Round-trip tests: generated HTML must parse back into equivalent
//! references, across every source and target combination.

use exbrief_core::{Deliverable, SourceFile};
use exbrief_xref::{generate, generate_for_source, generate_html, parse_from_html};

#[test]
fn test_html_roundtrip_for_every_source_and_target() {
    for source in SourceFile::ALL {
        for target in Deliverable::ALL {
            let refs = generate(source, target, "");
            let html = generate_html(&refs, "cross-reference-box");

            if refs.is_empty() {
                assert_eq!(html, "", "{:?} -> {:?}", source, target);
                continue;
            }

            let parsed = parse_from_html(&html);
            assert_eq!(parsed.len(), refs.len(), "{:?} -> {:?}", source, target);
            for (original, recovered) in refs.iter().zip(parsed.iter()) {
                assert_eq!(original.target_report, recovered.target_report);
                assert_eq!(original.target_section, recovered.target_section);
                assert_eq!(original.link_text, recovered.link_text);
            }
        }
    }
}

#[test]
fn test_generate_for_source_covers_all_non_self_targets() {
    for source in SourceFile::ALL {
        let by_target = generate_for_source(source);
        // Every source maps into comprehensive, so comprehensive is
        // always the suppressed self-target.
        assert!(!by_target.contains_key(&Deliverable::Comprehensive), "{:?}", source);
        assert_eq!(by_target.len(), 8, "{:?}", source);
    }
}

#[test]
fn test_roundtrip_survives_surrounding_markup() {
    let refs = generate(SourceFile::Financial, Deliverable::ExecutiveBrief, "");
    let html = format!(
        "<section><h2>Financial Snapshot</h2><p>Summary prose.</p>{}</section>",
        generate_html(&refs, "cross-reference-box")
    );
    let parsed = parse_from_html(&html);
    assert_eq!(parsed.len(), refs.len());
}
