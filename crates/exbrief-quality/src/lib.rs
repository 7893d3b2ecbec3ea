//! Exbrief Quality: report validation gates
//!
//! Two independent, pure checks around the extractor plus an advisory
//! word-count gate. Validators never panic and never return `Err`:
//! all failure is communicated through the returned report structure,
//! and the caller decides whether to halt generation, log, or proceed
//! with degraded output.
//!
//! # Example
//!
//! ```ignore
//! use exbrief_quality::{validate_prerequisites, validate_overview};
//!
//! let report = validate_prerequisites(&context);
//! if !report.is_valid {
//!     for error in &report.errors {
//!         tracing::warn!(%error, "prerequisite check failed");
//!     }
//! }
//! ```

pub mod checks;
pub mod wordcount;

pub use checks::{validate_overview, validate_prerequisites, ValidationReport};
pub use wordcount::{meets_word_count_targets, WordCountAssessment, MAX_WORDS, MIN_WORDS};
