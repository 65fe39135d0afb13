//! Weakest-axis selection and improvement-theme tiers
//!
//! Global invariants enforced:
//! - The priority sort is stable: equal ratios keep catalog order
//! - Tier cut points (75/50) are independent of the overall rank bands

use crate::catalog::Catalog;
use crate::scoring::AxisScore;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of axes surfaced as remediation priorities.
pub const PRIORITY_COUNT: usize = 3;

/// Performance tier for a single axis, selected from that axis's own
/// percentage. Drives which improvement themes are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,   // >= 75
    Medium, // >= 50
    Low,    // everything below
}

impl Tier {
    /// Classify an axis percentage into a tier. Boundaries are inclusive
    /// on the lower edge: 75.0 is high, 50.0 is medium.
    pub fn for_percentage(percentage: f64) -> Tier {
        if percentage >= 75.0 {
            Tier::High
        } else if percentage >= 50.0 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }

    /// Evaluation word shown in the per-axis score table.
    pub fn evaluation(&self) -> &'static str {
        match self {
            Tier::High => "良好",
            Tier::Medium => "普通",
            Tier::Low => "要改善",
        }
    }
}

/// One entry of the top-3 priority section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PriorityAxis {
    pub axis: String,
    pub total: u32,
    pub maximum: u32,
    pub percentage: f64,
    pub tier: Tier,
    pub themes: Vec<String>,
}

/// Order axes by achievement ratio ascending and keep the weakest three,
/// each with the improvement themes matching its own tier.
///
/// `scores` must be in catalog order; ties keep that order.
pub fn select_priorities(catalog: &Catalog, scores: &[AxisScore]) -> Vec<PriorityAxis> {
    let axes = catalog.axes();
    let count = scores.len().min(axes.len());

    let mut order: Vec<usize> = (0..count).collect();
    order.sort_by(|&a, &b| {
        scores[a]
            .ratio
            .partial_cmp(&scores[b].ratio)
            .unwrap_or(Ordering::Equal)
    });

    order
        .into_iter()
        .take(PRIORITY_COUNT)
        .map(|i| {
            let score = &scores[i];
            let percentage = score.percentage();
            let tier = Tier::for_percentage(percentage);
            let themes = axes[i]
                .themes
                .for_tier(tier)
                .iter()
                .map(|t| t.to_string())
                .collect();
            PriorityAxis {
                axis: score.axis.clone(),
                total: score.total,
                maximum: score.maximum,
                percentage,
                tier,
                themes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerStore;
    use crate::scoring::score_all;

    fn fill_axis(catalog: &Catalog, store: &mut AnswerStore, axis_name: &str, value: u8) {
        let axis = catalog.axis(axis_name).unwrap();
        for question in &axis.questions {
            store
                .record(catalog, axis_name, question.position, value)
                .unwrap();
        }
    }

    #[test]
    fn test_tier_boundaries_inclusive() {
        assert_eq!(Tier::for_percentage(100.0), Tier::High);
        assert_eq!(Tier::for_percentage(75.0), Tier::High);
        assert_eq!(Tier::for_percentage(74.99), Tier::Medium);
        assert_eq!(Tier::for_percentage(50.0), Tier::Medium);
        assert_eq!(Tier::for_percentage(49.99), Tier::Low);
        assert_eq!(Tier::for_percentage(0.0), Tier::Low);
    }

    #[test]
    fn test_selects_exactly_three_ascending() {
        let catalog = Catalog::standard();
        let mut store = AnswerStore::new();
        fill_axis(&catalog, &mut store, "経営ビジョンの明確さ", 4);
        fill_axis(&catalog, &mut store, "事業計画の実行管理", 3);
        fill_axis(&catalog, &mut store, "組織体制の強さ", 2);
        fill_axis(&catalog, &mut store, "経営者の時間の使い方", 1);
        fill_axis(&catalog, &mut store, "数値管理の仕組み", 2);
        fill_axis(&catalog, &mut store, "収益性の健全度", 4);

        let summary = score_all(&catalog, &store);
        let priorities = select_priorities(&catalog, &summary.axis_scores);

        assert_eq!(priorities.len(), PRIORITY_COUNT);
        // Weakest first, then the 0.5-ratio tie in catalog order.
        assert_eq!(priorities[0].axis, "経営者の時間の使い方");
        assert_eq!(priorities[1].axis, "組織体制の強さ");
        assert_eq!(priorities[2].axis, "数値管理の仕組み");
        assert!(priorities[0].percentage <= priorities[1].percentage);
        assert!(priorities[1].percentage <= priorities[2].percentage);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::standard();
        let mut store = AnswerStore::new();
        // Every axis identical: selection must be the first three axes in
        // catalog enumeration order.
        for axis in catalog.axes() {
            fill_axis(&catalog, &mut store, axis.name, 2);
        }

        let summary = score_all(&catalog, &store);
        let priorities = select_priorities(&catalog, &summary.axis_scores);

        assert_eq!(priorities[0].axis, "経営ビジョンの明確さ");
        assert_eq!(priorities[1].axis, "事業計画の実行管理");
        assert_eq!(priorities[2].axis, "組織体制の強さ");
    }

    #[test]
    fn test_strong_axis_excluded() {
        let catalog = Catalog::standard();
        let mut store = AnswerStore::new();
        // One axis answered all 4s (ratio 1.0), the rest all 1s (0.25).
        fill_axis(&catalog, &mut store, "組織体制の強さ", 4);
        for axis in catalog.axes() {
            if axis.name != "組織体制の強さ" {
                fill_axis(&catalog, &mut store, axis.name, 1);
            }
        }

        let summary = score_all(&catalog, &store);
        let priorities = select_priorities(&catalog, &summary.axis_scores);

        assert!(priorities.iter().all(|p| p.axis != "組織体制の強さ"));
        // The remaining five tie at 0.25; catalog order breaks the tie.
        assert_eq!(priorities[0].axis, "経営ビジョンの明確さ");
        assert_eq!(priorities[1].axis, "事業計画の実行管理");
        assert_eq!(priorities[2].axis, "経営者の時間の使い方");
    }

    #[test]
    fn test_themes_match_tier() {
        let catalog = Catalog::standard();
        let mut store = AnswerStore::new();
        // Planning at 21/28 = exactly 75%: high-tier themes.
        let planning = catalog.axis("事業計画の実行管理").unwrap();
        for question in &planning.questions {
            store
                .record(&catalog, planning.name, question.position, 3)
                .unwrap();
        }

        let summary = score_all(&catalog, &store);
        let priorities = select_priorities(&catalog, &summary.axis_scores);

        // Planning scored 75%; every other axis is 0%, so Planning is not
        // among the bottom three and the selected axes carry low-tier
        // themes.
        for priority in &priorities {
            assert_eq!(priority.tier, Tier::Low);
            let axis = catalog.axis(&priority.axis).unwrap();
            let expected: Vec<String> = axis
                .themes
                .for_tier(Tier::Low)
                .iter()
                .map(|t| t.to_string())
                .collect();
            assert_eq!(priority.themes, expected);
        }

        // The Planning score itself selects the high tier at the 75%
        // boundary.
        let planning_score = &summary.axis_scores[1];
        assert_eq!(planning_score.total, 21);
        assert_eq!(planning_score.maximum, 28);
        assert_eq!(Tier::for_percentage(planning_score.percentage()), Tier::High);
    }

    #[test]
    fn test_evaluation_words() {
        assert_eq!(Tier::High.evaluation(), "良好");
        assert_eq!(Tier::Medium.evaluation(), "普通");
        assert_eq!(Tier::Low.evaluation(), "要改善");
    }
}
