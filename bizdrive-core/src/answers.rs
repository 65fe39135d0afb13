//! Per-session answer store
//!
//! One store, one owner: each respondent session owns exactly one store and
//! passes it explicitly into every core operation. Unanswered questions
//! contribute zero when aggregating, so partial progress scores without
//! special-casing.

use crate::catalog::{Catalog, MAX_ANSWER_VALUE};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Responses keyed by (axis name, 1-based question position).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    values: HashMap<(String, usize), u8>,
}

impl AnswerStore {
    pub fn new() -> Self {
        AnswerStore::default()
    }

    /// Record a response. Overwrites any prior value for the same question,
    /// so re-submission is idempotent.
    pub fn record(
        &mut self,
        catalog: &Catalog,
        axis_name: &str,
        position: usize,
        value: u8,
    ) -> Result<()> {
        if !(1..=MAX_ANSWER_VALUE).contains(&value) {
            return Err(Error::InvalidAnswerValue(value));
        }
        let axis = catalog.axis(axis_name)?;
        axis.question(position)?;
        self.values.insert((axis.name.to_string(), position), value);
        Ok(())
    }

    /// Recorded value for a question, if any.
    pub fn get(&self, axis_name: &str, position: usize) -> Option<u8> {
        self.values
            .get(&(axis_name.to_string(), position))
            .copied()
    }

    /// Value contributed to scoring: zero when unanswered.
    pub fn value_or_zero(&self, axis_name: &str, position: usize) -> u8 {
        self.get(axis_name, position).unwrap_or(0)
    }

    /// Number of questions answered so far.
    pub fn answered_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fraction of the catalog answered, in [0, 1]. Zero for an empty
    /// catalog.
    pub fn progress(&self, catalog: &Catalog) -> f64 {
        let total = catalog.question_count();
        if total == 0 {
            0.0
        } else {
            self.answered_count() as f64 / total as f64
        }
    }

    /// Discard every response (the "start over" action).
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
