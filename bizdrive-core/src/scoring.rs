//! Score aggregation over the answer store
//!
//! Global invariants enforced:
//! - Totals are exact integer sums; no rounding inside the engine
//! - The percentage stays an unrounded float; one-decimal formatting
//!   happens at presentation time only
//! - A zero-question axis yields ratio 0.0, never a division fault

use crate::answers::AnswerStore;
use crate::catalog::{Axis, Catalog};
use serde::{Deserialize, Serialize};

/// Derived score for one axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct AxisScore {
    pub axis: String,
    pub total: u32,
    pub maximum: u32,
    /// Achievement ratio total/maximum, 0.0 when maximum is 0.
    pub ratio: f64,
}

impl AxisScore {
    /// Achievement as a percentage of the axis maximum.
    pub fn percentage(&self) -> f64 {
        self.ratio * 100.0
    }
}

/// Aggregate totals across every axis, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ScoreSummary {
    pub axis_scores: Vec<AxisScore>,
    pub grand_total: u32,
    pub grand_maximum: u32,
    pub percentage: f64,
}

/// Score a single axis: sum of its answers, unanswered counting as zero.
pub fn score_axis(axis: &Axis, answers: &AnswerStore) -> AxisScore {
    let total = axis
        .questions
        .iter()
        .map(|q| u32::from(answers.value_or_zero(axis.name, q.position)))
        .sum();
    let maximum = axis.maximum_score();
    AxisScore {
        axis: axis.name.to_string(),
        total,
        maximum,
        ratio: ratio(total, maximum),
    }
}

/// Score every axis in catalog order and the grand aggregates.
pub fn score_all(catalog: &Catalog, answers: &AnswerStore) -> ScoreSummary {
    let axis_scores: Vec<AxisScore> = catalog
        .axes()
        .iter()
        .map(|axis| score_axis(axis, answers))
        .collect();

    let grand_total: u32 = axis_scores.iter().map(|s| s.total).sum();
    let grand_maximum: u32 = axis_scores.iter().map(|s| s.maximum).sum();

    ScoreSummary {
        axis_scores,
        grand_total,
        grand_maximum,
        percentage: ratio(grand_total, grand_maximum) * 100.0,
    }
}

fn ratio(total: u32, maximum: u32) -> f64 {
    if maximum == 0 {
        0.0
    } else {
        f64::from(total) / f64::from(maximum)
    }
}
