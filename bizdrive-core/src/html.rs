//! HTML report generation
//!
//! Renders a `ReportModel` as a self-contained HTML document with embedded
//! CSS and an inline SVG radar chart. Works offline, prints cleanly. The
//! renderer only formats model fields and maps the pre-computed polar
//! chart geometry to cartesian coordinates; it never recomputes scores.

use crate::rank::RANK_CRITERIA;
use crate::report::{RadarChart, ReportModel};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const POSITIONS: [&str; 3] = ["第1位", "第2位", "第3位"];

/// Render the diagnostic report as a standalone HTML page.
pub fn render_html(report: &ReportModel) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>事業推進力診断レポート</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        {summary}
        {radar}
        {table}
        {priorities}
        {closing}
        {next_steps}
        {footer}
    </div>
</body>
</html>"#,
        css = inline_css(),
        header = render_header(report),
        summary = render_summary(report),
        radar = render_radar_section(&report.chart),
        table = render_score_table(report),
        priorities = render_priorities(report),
        closing = render_closing(report),
        next_steps = render_next_steps(),
        footer = render_footer(),
    )
}

fn render_header(report: &ReportModel) -> String {
    let respondent = report
        .respondent
        .as_deref()
        .map(|name| format!("<div class=\"respondent\">{} 様</div>", escape_html(name)))
        .unwrap_or_default();

    format!(
        r#"<header>
    <h1>事業推進力診断レポート</h1>
    {respondent}
    <div class="generated-at">診断日時: {date}</div>
</header>"#,
        respondent = respondent,
        date = report.generated_at.format("%Y年%m月%d日 %H:%M"),
    )
}

fn render_summary(report: &ReportModel) -> String {
    let result = &report.result;
    let criteria: String = RANK_CRITERIA
        .iter()
        .map(|line| format!("        <li>{}</li>\n", line))
        .collect();

    format!(
        r#"<section class="section">
    <h2>1. 総合評価</h2>
    <div class="summary-grid">
        <div class="rank-card" style="background-color: {color};">
            <div class="rank-symbol">{symbol}</div>
            <div class="rank-letter">ランク {rank}</div>
            <div class="rank-label">{label}</div>
        </div>
        <div class="score-card">
            <div class="metric"><span class="metric-name">総合スコア</span> {total} / {maximum} 点</div>
            <div class="metric"><span class="metric-name">達成率</span> {percentage:.1}%</div>
        </div>
    </div>
    <h3>ランク基準</h3>
    <ul class="criteria">
{criteria}    </ul>
</section>"#,
        color = result.rank.color(),
        symbol = result.rank.symbol(),
        rank = result.rank.as_str(),
        label = result.rank_label,
        total = result.grand_total,
        maximum = result.grand_maximum,
        percentage = result.percentage,
        criteria = criteria,
    )
}

fn render_radar_section(chart: &RadarChart) -> String {
    format!(
        r#"<section class="section">
    <h2>2. 6軸バランス分析</h2>
    {svg}
</section>"#,
        svg = render_radar_svg(chart),
    )
}

/// Inline SVG radar chart. The polar geometry (angles, 0-4 magnitudes)
/// comes pre-computed in the model; only the polar-to-cartesian mapping
/// happens here.
fn render_radar_svg(chart: &RadarChart) -> String {
    const SIZE: f64 = 400.0;
    const CENTER: f64 = 200.0;
    const RADIUS: f64 = 140.0;
    const LABEL_RADIUS: f64 = 165.0;

    let mut grid = String::new();
    for ring in 1..=chart.scale_max as u32 {
        let r = RADIUS * f64::from(ring) / chart.scale_max;
        grid.push_str(&format!(
            r#"    <circle cx="{CENTER}" cy="{CENTER}" r="{r:.1}" class="radar-grid"/>
"#
        ));
    }

    let mut spokes = String::new();
    let mut labels = String::new();
    for point in &chart.points {
        let (x, y) = polar_to_xy(point.angle_degrees, RADIUS, CENTER);
        spokes.push_str(&format!(
            r#"    <line x1="{CENTER}" y1="{CENTER}" x2="{x:.1}" y2="{y:.1}" class="radar-grid"/>
"#
        ));
        let (lx, ly) = polar_to_xy(point.angle_degrees, LABEL_RADIUS, CENTER);
        labels.push_str(&format!(
            r#"    <text x="{lx:.1}" y="{ly:.1}" class="radar-label">{label}</text>
"#,
            label = point.short_label,
        ));
    }

    let polygon: Vec<String> = chart
        .points
        .iter()
        .map(|point| {
            let r = RADIUS * point.magnitude / chart.scale_max;
            let (x, y) = polar_to_xy(point.angle_degrees, r, CENTER);
            format!("{x:.1},{y:.1}")
        })
        .collect();

    format!(
        r#"<svg viewBox="0 0 {SIZE} {SIZE}" class="radar" role="img" aria-label="6軸バランス">
{grid}{spokes}    <polygon points="{points}" class="radar-area"/>
{labels}</svg>"#,
        points = polygon.join(" "),
    )
}

/// Map a (degrees, radius) pair to SVG coordinates, angle 0 at the top,
/// increasing clockwise.
fn polar_to_xy(angle_degrees: f64, radius: f64, center: f64) -> (f64, f64) {
    let radians = angle_degrees.to_radians();
    (
        center + radius * radians.sin(),
        center - radius * radians.cos(),
    )
}

fn render_score_table(report: &ReportModel) -> String {
    let rows: String = report
        .rows
        .iter()
        .map(|row| {
            format!(
                r#"        <tr>
            <td>{icon} {axis}</td>
            <td class="num">{total} / {maximum}</td>
            <td class="num">{percentage:.1}%</td>
            <td>{evaluation}</td>
        </tr>
"#,
                icon = row.icon,
                axis = escape_html(&row.axis),
                total = row.total,
                maximum = row.maximum,
                percentage = row.percentage,
                evaluation = row.evaluation,
            )
        })
        .collect();

    format!(
        r#"<section class="section">
    <h2>3. 各軸詳細スコア</h2>
    <table class="scores">
        <thead>
        <tr><th>診断軸</th><th>スコア</th><th>達成率</th><th>評価</th></tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
</section>"#,
    )
}

fn render_priorities(report: &ReportModel) -> String {
    let entries: String = report
        .result
        .priorities
        .iter()
        .enumerate()
        .map(|(i, priority)| {
            let themes: String = priority
                .themes
                .iter()
                .map(|theme| format!("            <li>{}</li>\n", escape_html(theme)))
                .collect();
            format!(
                r#"    <div class="priority">
        <h3>{medal} {position}: {axis} ({percentage:.1}%)</h3>
        <div class="priority-score">現在のスコア: {total} / {maximum} 点</div>
        <div class="priority-themes">取り組むと良いテーマ（ヒント）:</div>
        <ul>
{themes}        </ul>
    </div>
"#,
                medal = MEDALS.get(i).copied().unwrap_or("・"),
                position = POSITIONS.get(i).copied().unwrap_or("-"),
                axis = escape_html(&priority.axis),
                percentage = priority.percentage,
                total = priority.total,
                maximum = priority.maximum,
                themes = themes,
            )
        })
        .collect();

    format!(
        r#"<section class="section">
    <h2>4. 優先改善課題 TOP3</h2>
{entries}</section>"#,
    )
}

fn render_closing(report: &ReportModel) -> String {
    format!(
        r#"<section class="section">
    <h2>5. 総合診断コメント</h2>
    <p>{comment}</p>
</section>"#,
        comment = escape_html(&report.closing_comment),
    )
}

fn render_next_steps() -> String {
    r#"<section class="section">
    <h2>6. まとめと次のステップ</h2>
    <p>本診断レポートでは、事業推進力を6つの軸から総合的に評価しました。診断結果を踏まえ、以下のステップで改善を進めることをお勧めします。</p>
    <ol>
        <li>優先改善課題TOP3から、最も取り組みやすい課題を1つ選定する</li>
        <li>選定した課題について、具体的な改善アクションプランを策定する</li>
        <li>3ヶ月を目安に改善活動を実施する</li>
        <li>改善状況を確認するため、再診断を実施する</li>
    </ol>
</section>"#
        .to_string()
}

fn render_footer() -> String {
    r#"<footer>
    <div>© ADAMS Management Consulting Office</div>
    <div>本診断レポートの無断転用を禁じます</div>
</footer>"#
        .to_string()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn inline_css() -> &'static str {
    r#"
:root { --navy: #243666; --light-navy: #3d5a8f; --paper: #f8f9fa; }
* { box-sizing: border-box; }
body { font-family: "Hiragino Sans", "Noto Sans CJK JP", "Yu Gothic", sans-serif;
       margin: 0; color: #222; background: var(--paper); }
.container { max-width: 860px; margin: 0 auto; padding: 24px; }
header { text-align: center; border-bottom: 3px solid var(--navy); padding-bottom: 16px; }
h1 { color: var(--navy); margin: 8px 0; }
h2 { color: var(--navy); border-left: 6px solid var(--navy); padding-left: 10px; }
h3 { color: var(--light-navy); }
.respondent { font-size: 1.2rem; font-weight: bold; }
.generated-at { color: #666; font-size: 0.9rem; }
.section { background: #fff; border-radius: 8px; padding: 16px 20px; margin: 18px 0;
           box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.summary-grid { display: flex; gap: 20px; align-items: stretch; }
.rank-card { flex: 1; color: #fff; text-align: center; border-radius: 12px; padding: 20px; }
.rank-symbol { font-size: 2.5rem; }
.rank-letter { font-size: 1.8rem; font-weight: bold; }
.score-card { flex: 2; display: flex; flex-direction: column; justify-content: center; gap: 10px; }
.metric { font-size: 1.3rem; }
.metric-name { display: inline-block; min-width: 7em; font-weight: bold; color: var(--navy); }
.criteria { color: #444; line-height: 1.8; }
.radar { display: block; margin: 0 auto; width: 420px; max-width: 100%; }
.radar-grid { fill: none; stroke: #ccc; stroke-width: 1; }
.radar-area { fill: rgba(36, 54, 102, 0.25); stroke: var(--navy); stroke-width: 2.5; }
.radar-label { font-size: 12px; fill: #333; text-anchor: middle; dominant-baseline: middle; }
table.scores { width: 100%; border-collapse: collapse; }
table.scores th { background: var(--navy); color: #fff; padding: 8px; }
table.scores td { border: 1px solid #ddd; padding: 8px; }
table.scores td.num { text-align: center; }
.priority { border: 1px solid #e0e0e0; border-radius: 8px; padding: 10px 14px; margin: 10px 0; }
.priority-score { color: #444; }
.priority-themes { margin-top: 6px; font-weight: bold; }
footer { text-align: center; color: var(--navy); font-size: 0.85rem; margin: 24px 0;
         padding-top: 12px; border-top: 2px solid var(--navy); }
"#
}
