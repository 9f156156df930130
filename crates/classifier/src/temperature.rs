//! Temperature detector: text -> {low, medium, high}.

use insight_core::Temperature;

static HIGH_WORDS: &[&str] = &[
    "絶対に", "必ず", "すぐに", "今すぐ", "緊急", "深刻", "限界", "耐えられない",
    "最悪", "致命的", "切実", "どうしても", "強く", "激しく", "非常に",
];

static MEDIUM_WORDS: &[&str] = &[
    "かなり", "だいぶ", "結構", "そこそこ", "わりと", "気になる", "困っている",
    "心配", "課題", "問題", "改善したい", "検討したい",
];

static LOW_WORDS: &[&str] = &[
    "少し", "ちょっと", "多少", "軽く", "そのうち", "時間があれば", "機会があれば",
    "いずれ", "余裕があれば",
];

/// Stateless intensifier/hedge detector.
#[derive(Default)]
pub struct TemperatureDetector;

impl TemperatureDetector {
    pub fn new() -> Self {
        Self
    }

    /// First matching category by the ordering high > medium > low; absent
    /// any keyword, defaults to medium.
    pub fn detect(&self, text: &str) -> Temperature {
        if HIGH_WORDS.iter().any(|w| text.contains(w)) {
            Temperature::High
        } else if MEDIUM_WORDS.iter().any(|w| text.contains(w)) {
            Temperature::Medium
        } else if LOW_WORDS.iter().any(|w| text.contains(w)) {
            Temperature::Low
        } else {
            Temperature::Medium
        }
    }
}
