//! Business drive diagnostic core - scoring, ranking, and report assembly
//!
//! Scores a fixed six-axis Likert questionnaire, classifies the overall
//! result into four rank bands, selects the three weakest axes for
//! remediation, and assembles a renderer-agnostic report model.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - All computations are pure functions over in-memory data; no I/O,
//   clocks, threads, or async
// - One answer store, one owner; the core never reads ambient state
// - Results are always a full recompute, never a partial update
// - Catalog enumeration order is canonical and drives tie-breaking and
//   chart layout
// - Identical answers yield bit-identical results

pub mod answers;
pub mod catalog;
pub mod error;
pub mod html;
pub mod priority;
pub mod rank;
pub mod report;
pub mod result;
pub mod scoring;

pub use answers::AnswerStore;
pub use catalog::{Axis, Catalog, Question};
pub use error::{Error, Result};
pub use html::render_html;
pub use priority::{PriorityAxis, Tier};
pub use rank::Rank;
pub use report::{build_report, render_json, render_text, ReportModel};
pub use result::{compute_result, OverallResult};
pub use scoring::AxisScore;

/// Compute the assessment result against the standard catalog.
pub fn diagnose(answers: &AnswerStore) -> OverallResult {
    compute_result(&Catalog::standard(), answers)
}
