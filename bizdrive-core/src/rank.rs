//! Overall rank classification
//!
//! Four contiguous, non-overlapping bands over the overall percentage,
//! checked top-down with `>=` on each lower bound. The per-axis theme tier
//! ladder in `priority` uses different cut points (75/50); the two ladders
//! must never be unified.

use serde::{Deserialize, Serialize};

/// Overall grade derived from the achievement percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    A, // >= 85
    B, // >= 70
    C, // >= 55
    D, // everything below
}

/// Rank legend lines shown on every report, in band order.
pub const RANK_CRITERIA: [&str; 4] = [
    "Aランク（85%以上）: 優良レベル - 事業推進力が非常に高い状態",
    "Bランク（70-84%）: 標準レベル - 事業推進の基盤がしっかりしている",
    "Cランク（55-69%）: 要改善レベル - 改善の余地が大きい状態",
    "Dランク（55%未満）: 危機レベル - 早急な改善が必要な状態",
];

impl Rank {
    /// Classify an overall percentage into a band.
    pub fn classify(percentage: f64) -> Rank {
        if percentage >= 85.0 {
            Rank::A
        } else if percentage >= 70.0 {
            Rank::B
        } else if percentage >= 55.0 {
            Rank::C
        } else {
            Rank::D
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }

    /// Qualitative tier name.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::A => "優良レベル",
            Rank::B => "標準レベル",
            Rank::C => "要改善レベル",
            Rank::D => "危機レベル",
        }
    }

    /// Decorative glyph used by renderers.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::A => "🌟",
            Rank::B => "✅",
            Rank::C => "⚠️",
            Rank::D => "🚨",
        }
    }

    /// Display color (hex) used by renderers.
    pub fn color(&self) -> &'static str {
        match self {
            Rank::A => "#28a745",
            Rank::B => "#17a2b8",
            Rank::C => "#ffc107",
            Rank::D => "#dc3545",
        }
    }

    /// Closing commentary, keyed by the same four bands as `classify`.
    pub fn closing_comment(&self) -> &'static str {
        match self {
            Rank::A => {
                "素晴らしい結果です。事業推進力が非常に高い状態を維持されています。\
                 現状を維持しつつ、さらなる成長に向けた新たな挑戦を検討される段階です。"
            }
            Rank::B => {
                "良好な状態です。事業推進の基盤がしっかりしています。\
                 弱点となっている軸を強化することで、さらなる飛躍が期待できます。"
            }
            Rank::C => {
                "改善の余地が大きい状態です。優先改善課題から着手し、\
                 段階的に事業推進力を高めていくことをお勧めします。"
            }
            Rank::D => {
                "早急な改善が必要な状態です。\
                 まずは優先度の高い課題から集中的に取り組むことが重要です。"
            }
        }
    }
}
