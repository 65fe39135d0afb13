//! Fixed question catalog for the six diagnostic axes
//!
//! The catalog is immutable, compiled-in configuration: six axes, each with
//! an ordered question list and improvement-theme text keyed by performance
//! tier. Axis enumeration order is canonical and must never change; chart
//! layout and priority tie-breaking downstream depend on it.

use crate::error::{Error, Result};
use crate::priority::Tier;
use serde::Serialize;

/// Maximum points a single answer contributes.
pub const MAX_ANSWER_VALUE: u8 = 4;

/// Likert answer choices shared by every question, strongest first.
pub const ANSWER_OPTIONS: [(u8, &str); 4] = [
    (4, "非常に当てはまる"),
    (3, "やや当てはまる"),
    (2, "あまり当てはまらない"),
    (1, "全く当てはまらない"),
];

/// One Likert item. Position within its axis is 1-based and stable.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Question {
    pub position: usize,
    pub prompt: &'static str,
}

/// Improvement suggestions for one axis, keyed by performance tier.
///
/// Every tier list is non-empty. High-tier themes are framed as further
/// growth, medium as strengthening, low as foundational first steps.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ImprovementThemes {
    pub high: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub low: &'static [&'static str],
}

impl ImprovementThemes {
    /// Theme list for a tier.
    pub fn for_tier(&self, tier: Tier) -> &'static [&'static str] {
        match tier {
            Tier::High => self.high,
            Tier::Medium => self.medium,
            Tier::Low => self.low,
        }
    }
}

/// One diagnostic axis: identity, display labels, questions, themes.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Axis {
    /// Unique name, used as the answer-store key.
    pub name: &'static str,
    /// Compact label for chart display.
    pub short_label: &'static str,
    /// Latin label used where CJK rendering is unavailable.
    pub english_label: &'static str,
    /// Decorative glyph.
    pub icon: &'static str,
    pub questions: Vec<Question>,
    pub themes: ImprovementThemes,
}

impl Axis {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Maximum possible axis total: question count x 4.
    pub fn maximum_score(&self) -> u32 {
        self.questions.len() as u32 * u32::from(MAX_ANSWER_VALUE)
    }

    /// Question at a 1-based position.
    pub fn question(&self, position: usize) -> Result<&Question> {
        self.questions
            .get(position.wrapping_sub(1))
            .ok_or_else(|| Error::UnknownQuestion {
                axis: self.name.to_string(),
                position,
            })
    }
}

const VISION_QUESTIONS: &[&str] = &[
    "将来のビジョン（3年後にどうなりたいか）を、社員や取引先に明確に説明できますか？",
    "自社の「強み」と「弱み」をそれぞれ3つ以上、すぐに答えることができますか？",
    "会社の経営方針や戦略を、文書やデータとして記録していますか？",
    "日々の経営判断をする際に、明確な判断基準や優先順位がありますか？",
    "幹部社員や管理職は、あなたの経営方針をしっかり理解していますか？",
    "重要な経営判断について、他の人に筋道立てて説明することができますか？",
];

const PLANNING_QUESTIONS: &[&str] = &[
    "今年度の事業計画書（売上目標、利益目標など）を作成していますか？",
    "事業計画の進捗状況を、定期的（週次または月次）にチェックしていますか？",
    "昨年立てた計画に対して、80%以上達成できましたか？",
    "計画と実績にズレが生じた時、その原因を分析していますか？",
    "計画が未達成の場合、修正や改善のアクションをすぐに実行していますか？",
    "全社員が、今年度の会社の目標数値（売上・利益など）を知っていますか？",
    "3ヶ月ごとに、目標達成のための具体的な行動計画がありますか？",
];

const ORGANIZATION_QUESTIONS: &[&str] = &[
    "あなたが1週間不在にしても、会社の業務は問題なく回りますか？",
    "事業運営を任せられる「右腕」となる人材がいますか？",
    "幹部社員や管理職に、適切に権限を委譲（任せる）ことができていますか？",
    "社員が、上司の指示を待たずに自分で判断して行動できていますか？",
    "業務のやり方が標準化され、マニュアルや手順書が整備されていますか？",
    "定例会議で、報告だけでなく、実質的な意思決定ができていますか？",
];

const TIME_QUESTIONS: &[&str] = &[
    "1週間のうち、経営戦略を考える時間が20%以上（週8時間以上）ありますか？",
    "日々の業務に追われて、経営者としての本来の仕事に集中できていますか？",
    "現場の実務（営業・製造・事務作業など）に費やす時間は少ないですか？（週の20%未満）",
    "突発的なトラブル対応や問題解決に、時間を取られることは少ないですか？",
    "「やりたいけど時間がなくてできていないこと」は少ないですか？",
    "経営者がやるべき仕事と、他の人に任せるべき仕事を、明確に区別できていますか？",
];

const KPI_QUESTIONS: &[&str] = &[
    "重要な数値指標（売上、利益、顧客数など）を定め、週次で確認していますか？",
    "部門ごと、個人ごとに、明確な目標数値が設定されていますか？",
    "目標の達成状況を、グラフやダッシュボードなどで見える化していますか？",
    "目標未達成の時、必ず原因を分析して改善策を立てていますか？",
    "各社員が、自分の目標達成状況を常に把握できていますか？",
    "成果（業績）と報酬（給与・賞与）が、明確に連動する仕組みがありますか？",
];

const PROFIT_QUESTIONS: &[&str] = &[
    "過去3年間で、売上高は安定的に成長していますか？",
    "営業利益率（売上に対する利益の割合）は10%以上ありますか？",
    "主要な商品・サービスの粗利率（売上総利益率）を把握していますか？",
    "キャッシュフロー（現金の流れ）を毎月チェックし、資金繰りに問題はありませんか？",
    "不採算事業や赤字商品を定期的に見直し、改善または撤退の判断をしていますか？",
    "固定費（人件費・家賃など）は適正で、売上の変動に対応できる体質ですか？",
];

const VISION_THEMES: ImprovementThemes = ImprovementThemes {
    high: &[
        "ビジョンを社外（取引先・金融機関）へ発信し、共感の輪を広げる",
        "次世代幹部を交えて中期ビジョンを共創する",
        "ビジョンと年度戦略の接続を毎年点検する",
    ],
    medium: &[
        "経営方針を文書化し、全社員へ説明する場を設ける",
        "日々の判断基準を明文化して幹部と擦り合わせる",
        "方針の浸透度を半期ごとに確認する",
    ],
    low: &[
        "3年後のありたい姿をまず言葉にして書き出す",
        "自社の強み・弱みを3つずつ挙げて整理する",
        "経営方針を1枚にまとめて社内に共有する",
    ],
};

const PLANNING_THEMES: ImprovementThemes = ImprovementThemes {
    high: &[
        "計画のローリング更新（四半期見直し）を定着させる",
        "先行指標を使った早期の軌道修正に取り組む",
        "計画策定プロセスに現場リーダーを巻き込む",
    ],
    medium: &[
        "月次で計画と実績の差異を分析する場を設ける",
        "未達時の改善アクションを期限付きで管理する",
        "目標数値の進捗を全社員へ定期共有する",
    ],
    low: &[
        "今年度の売上・利益目標を明記した事業計画書を作る",
        "週次または月次の進捗チェックを始める",
        "3ヶ月単位の行動計画に落とし込む",
    ],
};

const ORGANIZATION_THEMES: ImprovementThemes = ImprovementThemes {
    high: &[
        "次の経営層を見据えた幹部育成計画を作る",
        "権限委譲の範囲を広げ、意思決定をさらに現場へ移す",
        "部門横断で改善を主導できるリーダーを増やす",
    ],
    medium: &[
        "右腕人材への権限委譲を計画的に進める",
        "業務マニュアル・手順書の整備範囲を広げる",
        "定例会議を報告の場から意思決定の場へ変える",
    ],
    low: &[
        "自分が不在でも回る業務と回らない業務を仕分ける",
        "主要業務のやり方を簡単な手順書にする",
        "任せられる業務をひとつ決めて委譲してみる",
    ],
};

const TIME_THEMES: ImprovementThemes = ImprovementThemes {
    high: &[
        "戦略立案の時間を定例化し、比率をさらに高める",
        "経営者にしかできない仕事へ時間配分を最適化する",
        "外部ネットワークや学習への投資時間を確保する",
    ],
    medium: &[
        "週に半日、戦略を考える時間をブロックする",
        "現場実務の引き継ぎ先を決めて移管を進める",
        "突発対応の原因を記録し、再発防止を仕組み化する",
    ],
    low: &[
        "1週間の時間の使い方を記録して見える化する",
        "やめる・減らす・任せる業務を書き出す",
        "経営者がやるべき仕事のリストを作る",
    ],
};

const KPI_THEMES: ImprovementThemes = ImprovementThemes {
    high: &[
        "ダッシュボードの指標を絞り込み、先行指標中心にする",
        "数値をもとにした改善サイクルを部門主導で回す",
        "成果連動の報酬制度を定期的に見直す",
    ],
    medium: &[
        "部門・個人ごとの目標数値を設定し共有する",
        "主要指標をグラフ化して毎週確認する",
        "未達原因の分析と改善策をセットで記録する",
    ],
    low: &[
        "売上・利益・顧客数など主要指標を決める",
        "週次で数値を確認する習慣を作る",
        "各社員が自分の数値を見られるようにする",
    ],
};

const PROFIT_THEMES: ImprovementThemes = ImprovementThemes {
    high: &[
        "商品・サービス別の収益性をもとに資源配分を見直す",
        "値決め（プライシング）の定期見直しを仕組み化する",
        "成長投資と内部留保のバランス方針を定める",
    ],
    medium: &[
        "粗利率を商品・サービス別に把握する",
        "不採算事業・赤字商品の見直しルールを決める",
        "固定費の構造を点検し、変動費化を検討する",
    ],
    low: &[
        "毎月のキャッシュフローを確認する習慣を作る",
        "営業利益率の現状を正確に把握する",
        "主要商品の原価と粗利を計算してみる",
    ],
};

/// The fixed set of axes, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    axes: Vec<Axis>,
}

impl Catalog {
    /// The standard six-axis question bank.
    pub fn standard() -> Self {
        Catalog {
            axes: vec![
                build_axis(
                    "経営ビジョンの明確さ",
                    "ビジョンの明確さ",
                    "Vision",
                    "🎯",
                    VISION_QUESTIONS,
                    VISION_THEMES,
                ),
                build_axis(
                    "事業計画の実行管理",
                    "計画の実行管理",
                    "Planning",
                    "📋",
                    PLANNING_QUESTIONS,
                    PLANNING_THEMES,
                ),
                build_axis(
                    "組織体制の強さ",
                    "組織体制の強さ",
                    "Organization",
                    "🏢",
                    ORGANIZATION_QUESTIONS,
                    ORGANIZATION_THEMES,
                ),
                build_axis(
                    "経営者の時間の使い方",
                    "時間の使い方",
                    "Time Mgmt",
                    "⏰",
                    TIME_QUESTIONS,
                    TIME_THEMES,
                ),
                build_axis(
                    "数値管理の仕組み",
                    "数値管理の仕組み",
                    "KPI",
                    "📊",
                    KPI_QUESTIONS,
                    KPI_THEMES,
                ),
                build_axis(
                    "収益性の健全度",
                    "収益性の健全度",
                    "Profitability",
                    "💰",
                    PROFIT_QUESTIONS,
                    PROFIT_THEMES,
                ),
            ],
        }
    }

    /// Axes in canonical enumeration order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Look up an axis by name.
    pub fn axis(&self, name: &str) -> Result<&Axis> {
        self.axes
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| Error::UnknownAxis(name.to_string()))
    }

    pub fn question_count(&self) -> usize {
        self.axes.iter().map(Axis::question_count).sum()
    }

    /// Maximum possible grand total across every axis.
    pub fn maximum_score(&self) -> u32 {
        self.axes.iter().map(Axis::maximum_score).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

fn build_axis(
    name: &'static str,
    short_label: &'static str,
    english_label: &'static str,
    icon: &'static str,
    prompts: &'static [&'static str],
    themes: ImprovementThemes,
) -> Axis {
    Axis {
        name,
        short_label,
        english_label,
        icon,
        questions: prompts
            .iter()
            .enumerate()
            .map(|(i, &prompt)| Question {
                position: i + 1,
                prompt,
            })
            .collect(),
        themes,
    }
}
