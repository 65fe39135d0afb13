//! Report model assembly and text/JSON rendering
//!
//! `build_report` is pure assembly: the generation time is injected, and
//! the model carries every number a renderer needs. Renderers format
//! fields; they never recompute scores.

use crate::catalog::Catalog;
use crate::priority::Tier;
use crate::rank::RANK_CRITERIA;
use crate::result::OverallResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Radar magnitudes are normalized to this scale (one Likert answer).
pub const CHART_SCALE_MAX: f64 = 4.0;

/// One spoke of the radar chart: an angle in catalog order and a magnitude
/// on the 0-4 scale. Renderers only map polar to cartesian.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct RadarPoint {
    pub axis: String,
    pub short_label: String,
    pub english_label: String,
    pub angle_degrees: f64,
    pub magnitude: f64,
}

/// Pre-computed radar chart geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct RadarChart {
    pub scale_max: f64,
    pub points: Vec<RadarPoint>,
}

/// One row of the per-axis score table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct AxisRow {
    pub axis: String,
    pub icon: String,
    pub total: u32,
    pub maximum: u32,
    pub percentage: f64,
    /// Evaluation word for the row's tier (良好 / 普通 / 要改善).
    pub evaluation: String,
}

/// The renderer-agnostic output document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ReportModel {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    pub result: OverallResult,
    pub rows: Vec<AxisRow>,
    pub chart: RadarChart,
    pub closing_comment: String,
}

/// Assemble the report model from a computed result.
pub fn build_report(
    result: OverallResult,
    catalog: &Catalog,
    respondent: Option<&str>,
    generated_at: DateTime<Utc>,
) -> ReportModel {
    let axes = catalog.axes();
    let spoke_count = result.axis_scores.len().min(axes.len());

    let rows = axes
        .iter()
        .zip(&result.axis_scores)
        .map(|(axis, score)| {
            let percentage = score.percentage();
            AxisRow {
                axis: score.axis.clone(),
                icon: axis.icon.to_string(),
                total: score.total,
                maximum: score.maximum,
                percentage,
                evaluation: Tier::for_percentage(percentage).evaluation().to_string(),
            }
        })
        .collect();

    let points = axes
        .iter()
        .zip(&result.axis_scores)
        .enumerate()
        .map(|(i, (axis, score))| RadarPoint {
            axis: score.axis.clone(),
            short_label: axis.short_label.to_string(),
            english_label: axis.english_label.to_string(),
            angle_degrees: i as f64 * 360.0 / spoke_count as f64,
            magnitude: score.ratio * CHART_SCALE_MAX,
        })
        .collect();

    let closing_comment = result.rank.closing_comment().to_string();

    tracing::debug!(
        rank = result.rank.as_str(),
        respondent = respondent.unwrap_or(""),
        "assembled report model"
    );

    ReportModel {
        generated_at,
        respondent: respondent.map(str::to_string),
        result,
        rows,
        chart: RadarChart {
            scale_max: CHART_SCALE_MAX,
            points,
        },
        closing_comment,
    }
}

/// Render the report as terminal text.
pub fn render_text(report: &ReportModel) -> String {
    let mut output = String::new();
    let result = &report.result;

    output.push_str("事業推進力診断レポート\n");
    output.push_str("==============================\n");
    output.push_str(&format!(
        "診断日時: {}\n",
        report.generated_at.format("%Y年%m月%d日 %H:%M")
    ));
    if let Some(respondent) = &report.respondent {
        output.push_str(&format!("診断対象: {} 様\n", respondent));
    }

    output.push_str("\n【総合評価】\n");
    output.push_str(&format!(
        "総合ランク: {} {}（{}）\n",
        result.rank.symbol(),
        result.rank.as_str(),
        result.rank_label
    ));
    output.push_str(&format!(
        "総合スコア: {} / {} 点\n",
        result.grand_total, result.grand_maximum
    ));
    output.push_str(&format!("達成率: {:.1}%\n", result.percentage));

    output.push_str("\n【ランク基準】\n");
    for line in RANK_CRITERIA {
        output.push_str(&format!("  {}\n", line));
    }

    output.push_str("\n【各軸スコア】\n");
    for row in &report.rows {
        output.push_str(&format!(
            "  {} {}: {} / {} 点 ({:.1}%) {}\n",
            row.icon, row.axis, row.total, row.maximum, row.percentage, row.evaluation
        ));
    }

    output.push_str("\n【優先改善課題 TOP3】\n");
    for (i, priority) in result.priorities.iter().enumerate() {
        output.push_str(&format!(
            "  第{}位: {} ({:.1}%)\n",
            i + 1,
            priority.axis,
            priority.percentage
        ));
        output.push_str(&format!(
            "    現在のスコア: {} / {} 点\n",
            priority.total, priority.maximum
        ));
        output.push_str("    取り組むと良いテーマ:\n");
        for theme in &priority.themes {
            output.push_str(&format!("      - {}\n", theme));
        }
    }

    output.push_str("\n【総合診断コメント】\n");
    output.push_str(&format!("  {}\n", report.closing_comment));

    output
}

/// Render the report as JSON output.
pub fn render_json(report: &ReportModel) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerStore;
    use crate::rank::Rank;
    use crate::result::compute_result;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 4, 9, 30, 0).unwrap()
    }

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
    fn test_radar_geometry() {
        let catalog = Catalog::standard();
        let store = answer_everything(&catalog, 4);
        let result = compute_result(&catalog, &store);
        let report = build_report(result, &catalog, None, fixed_time());

        let angles: Vec<f64> = report
            .chart
            .points
            .iter()
            .map(|p| p.angle_degrees)
            .collect();
        assert_eq!(angles, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);

        assert_eq!(report.chart.scale_max, 4.0);
        assert!(report.chart.points.iter().all(|p| p.magnitude == 4.0));
    }

    #[test]
    fn test_magnitude_tracks_ratio() {
        let catalog = Catalog::standard();
        let mut store = AnswerStore::new();
        // Vision at half marks: ratio 0.5, magnitude 2.0.
        let vision = catalog.axis("経営ビジョンの明確さ").unwrap();
        for question in &vision.questions {
            store
                .record(&catalog, vision.name, question.position, 2)
                .unwrap();
        }

        let result = compute_result(&catalog, &store);
        let report = build_report(result, &catalog, None, fixed_time());
        assert_eq!(report.chart.points[0].magnitude, 2.0);
        assert!(report.chart.points[1..].iter().all(|p| p.magnitude == 0.0));
    }

    #[test]
    fn test_rows_carry_evaluation_words() {
        let catalog = Catalog::standard();
        let store = answer_everything(&catalog, 3);
        let result = compute_result(&catalog, &store);
        let report = build_report(result, &catalog, None, fixed_time());

        assert_eq!(report.rows.len(), 6);
        // 75% on every axis: boundary-inclusive high tier.
        assert!(report.rows.iter().all(|r| r.evaluation == "良好"));
    }

    #[test]
    fn test_metadata_passes_through() {
        let catalog = Catalog::standard();
        let result = compute_result(&catalog, &AnswerStore::new());
        let report = build_report(result, &catalog, Some("株式会社サンプル"), fixed_time());

        assert_eq!(report.generated_at, fixed_time());
        assert_eq!(report.respondent.as_deref(), Some("株式会社サンプル"));
    }

    #[test]
    fn test_closing_comment_follows_rank_band() {
        let catalog = Catalog::standard();

        let empty = compute_result(&catalog, &AnswerStore::new());
        let report = build_report(empty, &catalog, None, fixed_time());
        assert_eq!(report.closing_comment, Rank::D.closing_comment());

        let full = compute_result(&catalog, &answer_everything(&catalog, 4));
        let report = build_report(full, &catalog, None, fixed_time());
        assert_eq!(report.closing_comment, Rank::A.closing_comment());
    }

    #[test]
    fn test_render_text_contains_contract_fields() {
        let catalog = Catalog::standard();
        let store = answer_everything(&catalog, 4);
        let result = compute_result(&catalog, &store);
        let report = build_report(result, &catalog, Some("テスト商事"), fixed_time());

        let text = render_text(&report);
        assert!(text.contains("2025年11月04日 09:30"));
        assert!(text.contains("テスト商事 様"));
        assert!(text.contains("総合スコア: 148 / 148 点"));
        assert!(text.contains("達成率: 100.0%"));
        assert!(text.contains("優良レベル"));
        assert!(text.contains("第1位"));
        for axis in catalog.axes() {
            assert!(text.contains(axis.name));
        }
    }

    #[test]
    fn test_render_json_round_trips() {
        let catalog = Catalog::standard();
        let result = compute_result(&catalog, &AnswerStore::new());
        let report = build_report(result, &catalog, None, fixed_time());

        let json = render_json(&report);
        let parsed: ReportModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
