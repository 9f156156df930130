//! Pattern classifier: text -> (voice, confidence, matched keywords,
//! matched patterns) via additive keyword + pattern scoring.

use insight_core::Voice;
use once_cell::sync::Lazy;
use regex::Regex;

/// Result of scoring a text against one voice's keyword/pattern tables.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternVerdict {
    pub voice: Voice,
    pub confidence: f32,
    pub matched_keywords: Vec<String>,
    pub matched_patterns: Vec<String>,
}

struct VoiceTable {
    voice: Voice,
    keywords: &'static [&'static str],
    patterns: Vec<Regex>,
}

static PAIN_KEYWORDS: &[&str] = &[
    "困っている", "問題がある", "課題がある", "苦労している", "負担が大きい",
    "トラブル", "不具合", "ミスが多い", "エラーが出る", "対応に追われている",
    "手間がかかる", "時間がかかっている", "労力がかかる", "疲弊している", "限界",
    "深刻", "悪化している", "止まってしまう", "滞ってしまう", "詰まってしまう",
];

static INSECURITY_KEYWORDS: &[&str] = &[
    "不安", "心配", "懸念", "自信がない", "わからない",
    "見通しが立たない", "先行き不透明", "リスクがある", "危うい", "頼りない",
    "不安定", "疑問", "信頼できない", "心もとない", "落ち着かない",
    "疑っている", "警戒している", "気がかり", "戸惑っている", "迷っている",
];

static VISION_KEYWORDS: &[&str] = &[
    "したい", "望んでいる", "目指したい", "改善したい", "理想としては",
    "将来的には", "こうなってほしい", "実現したい", "期待している", "希望している",
    "チャレンジしたい", "変えていきたい", "成長させたい", "強化したい", "広げたい",
    "高めたい", "目標", "ビジョン", "構想", "展望",
];

static OBJECTION_KEYWORDS: &[&str] = &[
    "反対", "納得できない", "疑問に思う", "違和感がある", "抵抗がある",
    "懸念を感じる", "受け入れられない", "賛成できない", "不満がある", "信用できない",
    "躊躇している", "消極的", "懐疑的", "様子を見たい", "見送りたい",
    "反発がある", "気が進まない", "踏み切れない", "同意できない", "拒否感がある",
];

static TRACTION_KEYWORDS: &[&str] = &[
    "できている", "うまくいっている", "成果が出ている", "効果を感じる", "改善した",
    "達成した", "成功した", "軌道に乗った", "前進している", "評価されている",
    "定着している", "満足している", "解決できた", "安定してきた", "向上した",
    "手応えがある", "成長を感じる", "順調", "軌道に乗ってきた", "好調",
];

/// Compiled once at first use and shared for the process's lifetime —
/// read-only data, never rebuilt per call.
static VOICE_TABLES: Lazy<Vec<VoiceTable>> = Lazy::new(|| {
    vec![
        VoiceTable {
            voice: Voice::Pain,
            keywords: PAIN_KEYWORDS,
            patterns: compile(&[
                r"困っている",
                r".+に苦労している",
                r".+が負担になっている",
                r".+でトラブルが発生している",
                r".+が滞っている",
                r".+に追われている",
            ]),
        },
        VoiceTable {
            voice: Voice::Insecurity,
            keywords: INSECURITY_KEYWORDS,
            patterns: compile(&[
                r".+が心配",
                r".+に不安を感じる",
                r".+が懸念される",
                r".+が見通せない",
                r".+に自信がない",
                r".+がリスクになっている",
            ]),
        },
        VoiceTable {
            voice: Voice::Vision,
            keywords: VISION_KEYWORDS,
            patterns: compile(&[
                r".+を実現したい",
                r".+を改善したい",
                r".+を目指したい",
                r".+を強化したい",
                r".+がこうなってほしい",
                r".+を期待している",
            ]),
        },
        VoiceTable {
            voice: Voice::Objection,
            keywords: OBJECTION_KEYWORDS,
            patterns: compile(&[
                r".+に反対している",
                r".+に納得できない",
                r".+に違和感がある",
                r".+を受け入れられない",
                r".+に抵抗がある",
                r".+に懐疑的である",
            ]),
        },
        VoiceTable {
            voice: Voice::Traction,
            keywords: TRACTION_KEYWORDS,
            patterns: compile(&[
                r".+がうまくいっている",
                r".+で成果が出ている",
                r".+を達成した",
                r".+が軌道に乗った",
                r".+が改善した",
                r".+に手応えを感じる",
            ]),
        },
    ]
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Stateless text -> voice scorer over the closed keyword/pattern tables.
#[derive(Default)]
pub struct PatternClassifier;

impl PatternClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Score `text` against every voice and return the winner, if any voice
    /// scored above zero.
    pub fn classify(&self, text: &str) -> Option<PatternVerdict> {
        let mut best: Option<PatternVerdict> = None;

        for table in VOICE_TABLES.iter() {
            let matched_keywords: Vec<String> = table
                .keywords
                .iter()
                .filter(|kw| text.contains(*kw))
                .map(|kw| kw.to_string())
                .collect();
            let matched_patterns: Vec<String> = table
                .patterns
                .iter()
                .filter(|re| re.is_match(text))
                .map(|re| re.as_str().to_string())
                .collect();

            let kw_score = (matched_keywords.len() as f32 * 0.2).min(0.6);
            let pat_score = (matched_patterns.len() as f32 * 0.3).min(0.6);
            let score = (kw_score + pat_score).min(0.95);

            if score <= 0.0 {
                continue;
            }

            let candidate = PatternVerdict {
                voice: table.voice,
                confidence: score,
                matched_keywords,
                matched_patterns,
            };

            best = Some(match best {
                None => candidate,
                Some(current) if candidate.confidence > current.confidence => candidate,
                Some(current) => current, // tie -> keep earlier (P,I,V,O,T order)
            });
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pain_keyword_alone_scores_and_wins() {
        let classifier = PatternClassifier::new();
        let verdict = classifier.classify("在庫管理で困っている").unwrap();
        assert_eq!(verdict.voice, Voice::Pain);
        assert!(verdict.confidence > 0.0);
    }

    #[test]
    fn each_voice_fires_in_isolation() {
        let classifier = PatternClassifier::new();
        assert_eq!(classifier.classify("不安がある").unwrap().voice, Voice::Insecurity);
        assert_eq!(classifier.classify("改善したい").unwrap().voice, Voice::Vision);
        assert_eq!(classifier.classify("納得できない").unwrap().voice, Voice::Objection);
        assert_eq!(classifier.classify("うまくいっている").unwrap().voice, Voice::Traction);
    }

    #[test]
    fn no_voice_scores_returns_none() {
        let classifier = PatternClassifier::new();
        assert!(classifier.classify("今日は天気がいいですね").is_none());
    }

    #[test]
    fn keyword_score_caps_at_point_six() {
        let classifier = PatternClassifier::new();
        // Five Pain keywords would be 1.0 uncapped; kw_score caps at 0.6.
        let text = "困っている、問題がある、課題がある、苦労している、負担が大きい";
        let verdict = classifier.classify(text).unwrap();
        assert!(verdict.confidence <= 0.95);
    }

    #[test]
    fn ties_break_in_pivot_order() {
        let classifier = PatternClassifier::new();
        // "反対" (Objection) and "したい" (Vision) both present as single keyword hits (score 0.2 each) -> tie -> Vision wins (V before O).
        let verdict = classifier.classify("反対したい").unwrap();
        assert_eq!(verdict.voice, Voice::Vision);
    }
}
