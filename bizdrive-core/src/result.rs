//! Whole-assessment result assembly
//!
//! `compute_result` is a total function over the current answer store:
//! always a full recompute, never a partial update. Recomputing an
//! unchanged store yields a bit-identical result.

use crate::answers::AnswerStore;
use crate::catalog::Catalog;
use crate::priority::{select_priorities, PriorityAxis};
use crate::rank::Rank;
use crate::scoring::{score_all, AxisScore};
use serde::{Deserialize, Serialize};

/// Fully-derived outcome for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct OverallResult {
    /// Per-axis scores in catalog order.
    pub axis_scores: Vec<AxisScore>,
    pub grand_total: u32,
    pub grand_maximum: u32,
    pub percentage: f64,
    pub rank: Rank,
    pub rank_label: String,
    /// The three weakest axes, ascending by achievement ratio.
    pub priorities: Vec<PriorityAxis>,
}

/// Reduce the current answer store into a complete result.
pub fn compute_result(catalog: &Catalog, answers: &AnswerStore) -> OverallResult {
    let summary = score_all(catalog, answers);
    let rank = Rank::classify(summary.percentage);
    let priorities = select_priorities(catalog, &summary.axis_scores);

    tracing::debug!(
        grand_total = summary.grand_total,
        grand_maximum = summary.grand_maximum,
        percentage = summary.percentage,
        rank = rank.as_str(),
        "computed assessment result"
    );

    OverallResult {
        axis_scores: summary.axis_scores,
        grand_total: summary.grand_total,
        grand_maximum: summary.grand_maximum,
        percentage: summary.percentage,
        rank,
        rank_label: rank.label().to_string(),
        priorities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_everything(catalog: &Catalog, value: u8) -> AnswerStore {
        let mut store = AnswerStore::new();
        for axis in catalog.axes() {
            for question in &axis.questions {
                store
                    .record(catalog, axis.name, question.position, value)
                    .unwrap();
            }
        }
        store
    }

    #[test]
    fn test_empty_store_is_rank_d_zero() {
        let catalog = Catalog::standard();
        let result = compute_result(&catalog, &AnswerStore::new());

        assert_eq!(result.grand_total, 0);
        assert_eq!(result.grand_maximum, 148);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.rank, Rank::D);
        assert_eq!(result.rank_label, "危機レベル");
        assert_eq!(result.axis_scores.len(), 6);
        assert_eq!(result.priorities.len(), 3);
    }

    #[test]
    fn test_all_fours_is_rank_a_full_marks() {
        let catalog = Catalog::standard();
        let store = answer_everything(&catalog, 4);
        let result = compute_result(&catalog, &store);

        assert_eq!(result.grand_total, 148);
        assert_eq!(result.grand_maximum, 148);
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.rank, Rank::A);
        assert!(result.axis_scores.iter().all(|s| s.ratio == 1.0));
    }

    #[test]
    fn test_all_threes_is_rank_b() {
        let catalog = Catalog::standard();
        let store = answer_everything(&catalog, 3);
        let result = compute_result(&catalog, &store);

        assert_eq!(result.grand_total, 111);
        assert_eq!(result.percentage, 75.0);
        assert_eq!(result.rank, Rank::B);
    }

    #[test]
    fn test_recompute_is_bit_identical() {
        let catalog = Catalog::standard();
        let mut store = AnswerStore::new();
        store.record(&catalog, "収益性の健全度", 2, 3).unwrap();
        store.record(&catalog, "組織体制の強さ", 6, 1).unwrap();

        let first = compute_result(&catalog, &store);
        let second = compute_result(&catalog, &store);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let catalog = Catalog::standard();
        let store = answer_everything(&catalog, 2);
        let result = compute_result(&catalog, &store);

        let json = serde_json::to_string(&result).unwrap();
        let parsed: OverallResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
