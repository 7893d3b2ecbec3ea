//! Exbrief Xref: cross-reference generation between deliverables.
//!
//! Condensed content in any deliverable can point the reader at fuller
//! detail elsewhere. All routing knowledge lives in static lookup
//! tables; generation, HTML emission and best-effort parsing of the
//! emitted micro-format live here. Lookups never fail hard: an unmapped
//! source or target degrades to "no extra links".

pub mod generate;
pub mod html;
pub mod tables;

pub use generate::{generate, generate_for_source, CrossReference};
pub use html::{build_target_url, create_inline_link, generate_html, parse_from_html};
pub use tables::{
    display_name, related_managers, DetailLocation, REPORT_DISPLAY_NAMES, REPORT_FILENAMES,
    SOURCE_TO_DETAIL_MAP,
};
