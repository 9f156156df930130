//! Layer extractor: text -> {process?, tool?, people?}.

use insight_core::{Layer, TargetLayers};
use once_cell::sync::Lazy;
use regex::Regex;

struct LayerTable {
    layer: Layer,
    keywords: &'static [&'static str],
    extractors: Vec<Regex>,
}

static PROCESS_KEYWORDS: &[&str] = &[
    "工程", "プロセス", "手順", "フロー", "運用", "業務", "作業", "承認フロー",
    "申請プロセス", "棚卸し", "発注", "納期管理", "在庫管理", "品質管理", "進捗管理",
    "引き継ぎ", "報告", "会議体", "レビュー", "検収", "出荷", "入荷", "配送",
    "スケジュール", "計画立案", "見積もり", "契約手続き", "請求処理", "精算", "監査",
    "審査",
];

static TOOL_KEYWORDS: &[&str] = &[
    "ツール", "システム", "ソフト", "アプリ", "エクセル", "スプレッドシート",
    "データベース", "API", "クラウド", "サーバー", "端末", "タブレット", "スキャナー",
    "プリンター", "チャットツール", "メールシステム", "基幹システム", "会計ソフト",
    "勤怠システム", "在庫システム", "CRM", "ERP", "RPA", "BIツール", "ダッシュボード",
    "自動化ツール", "通知システム", "管理画面", "ワークフローツール", "共有フォルダ",
];

static PEOPLE_KEYWORDS: &[&str] = &[
    "担当者", "上司", "部下", "チーム", "メンバー", "同僚", "取引先", "顧客",
    "お客様", "後輩", "先輩", "責任者", "マネージャー", "リーダー", "新人",
    "派遣社員", "パート", "現場スタッフ", "経営層", "役員", "他部署", "委託先",
    "ベンダー", "協力会社", "監督者", "人事", "採用担当", "外部パートナー",
    "関係部署", "窓口担当",
];

/// Compiled once at first use and shared for the process's lifetime —
/// read-only data, never rebuilt per call.
static LAYER_TABLES: Lazy<Vec<LayerTable>> = Lazy::new(|| {
    vec![
        LayerTable {
            layer: Layer::Process,
            keywords: PROCESS_KEYWORDS,
            extractors: compile(&[
                r"([^\s、。]+?工程)",
                r"([^\s、。]+?プロセス)",
                r"([^\s、。]+?フロー)",
            ]),
        },
        LayerTable {
            layer: Layer::Tool,
            keywords: TOOL_KEYWORDS,
            extractors: compile(&[r"([^\s、。]+?システム)", r"([^\s、。]+?ツール)"]),
        },
        LayerTable {
            layer: Layer::People,
            keywords: PEOPLE_KEYWORDS,
            extractors: compile(&[r"([^\s、。]+?担当者)", r"([^\s、。]+?チーム)"]),
        },
    ]
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Stateless extractor populating the three independent target layers.
#[derive(Default)]
pub struct LayerExtractor;

impl LayerExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> TargetLayers {
        let mut layers = TargetLayers::default();

        for table in LAYER_TABLES.iter() {
            let Some(matched_keyword) = table.keywords.iter().find(|kw| text.contains(*kw)) else {
                continue;
            };

            let value = table
                .extractors
                .iter()
                .find_map(|re| re.captures(text).and_then(|c| c.get(1)))
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| matched_keyword.to_string());

            layers.set(table.layer, value);
        }

        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_are_independent_and_optional() {
        let extractor = LayerExtractor::new();
        let layers = extractor.extract("今日は天気がいいですね");
        assert!(layers.is_empty());
    }

    #[test]
    fn extraction_regex_captures_the_named_entity() {
        let extractor = LayerExtractor::new();
        let layers = extractor.extract("発注工程で遅れが出ている");
        assert_eq!(layers.process.as_deref(), Some("発注工程"));
    }

    #[test]
    fn keyword_only_match_falls_back_to_keyword_itself() {
        let extractor = LayerExtractor::new();
        let layers = extractor.extract("承認フローが複雑だ");
        assert_eq!(layers.process.as_deref(), Some("承認フロー"));
    }

    #[test]
    fn multiple_layers_populate_independently() {
        let extractor = LayerExtractor::new();
        let layers = extractor.extract("発注工程で基幹システムの担当者が困っている");
        assert!(layers.process.is_some());
        assert!(layers.tool.is_some());
        assert!(layers.people.is_some());
    }
}
