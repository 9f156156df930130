//! Closed adjective-sentiment lexicon.

use insight_core::AdjectiveSentiment;

pub const ADJECTIVES: &[(&str, AdjectiveSentiment)] = &[
    // POSITIVE
    ("良い", AdjectiveSentiment::Positive),
    ("嬉しい", AdjectiveSentiment::Positive),
    ("助かる", AdjectiveSentiment::Positive),
    ("便利", AdjectiveSentiment::Positive),
    ("楽", AdjectiveSentiment::Positive),
    ("簡単", AdjectiveSentiment::Positive),
    ("安心", AdjectiveSentiment::Positive),
    ("満足", AdjectiveSentiment::Positive),
    ("快適", AdjectiveSentiment::Positive),
    ("効果的", AdjectiveSentiment::Positive),
    ("有益", AdjectiveSentiment::Positive),
    ("頼もしい", AdjectiveSentiment::Positive),
    ("心強い", AdjectiveSentiment::Positive),
    ("ありがたい", AdjectiveSentiment::Positive),
    ("順調", AdjectiveSentiment::Positive),
    ("明るい", AdjectiveSentiment::Positive),
    ("前向き", AdjectiveSentiment::Positive),
    ("健全", AdjectiveSentiment::Positive),
    ("理想的", AdjectiveSentiment::Positive),
    ("優れている", AdjectiveSentiment::Positive),
    // NEGATIVE
    ("悪い", AdjectiveSentiment::Negative),
    ("辛い", AdjectiveSentiment::Negative),
    ("厳しい", AdjectiveSentiment::Negative),
    ("大変", AdjectiveSentiment::Negative),
    ("面倒", AdjectiveSentiment::Negative),
    ("煩雑", AdjectiveSentiment::Negative),
    ("非効率", AdjectiveSentiment::Negative),
    ("不便", AdjectiveSentiment::Negative),
    ("不満", AdjectiveSentiment::Negative),
    ("不十分", AdjectiveSentiment::Negative),
    ("不適切", AdjectiveSentiment::Negative),
    ("不安定", AdjectiveSentiment::Negative),
    ("危険", AdjectiveSentiment::Negative),
    ("深刻", AdjectiveSentiment::Negative),
    ("困難", AdjectiveSentiment::Negative),
    ("複雑", AdjectiveSentiment::Negative),
    ("重い", AdjectiveSentiment::Negative),
    ("苦しい", AdjectiveSentiment::Negative),
    ("情けない", AdjectiveSentiment::Negative),
    ("もどかしい", AdjectiveSentiment::Negative),
    // ANXIETY
    ("不安", AdjectiveSentiment::Anxiety),
    ("心配", AdjectiveSentiment::Anxiety),
    ("怖い", AdjectiveSentiment::Anxiety),
    ("恐ろしい", AdjectiveSentiment::Anxiety),
    ("気がかり", AdjectiveSentiment::Anxiety),
    ("懸念がある", AdjectiveSentiment::Anxiety),
    ("危うい", AdjectiveSentiment::Anxiety),
    ("頼りない", AdjectiveSentiment::Anxiety),
    ("自信がない", AdjectiveSentiment::Anxiety),
    ("見通せない", AdjectiveSentiment::Anxiety),
    ("先が読めない", AdjectiveSentiment::Anxiety),
    ("心もとない", AdjectiveSentiment::Anxiety),
    ("気が重い", AdjectiveSentiment::Anxiety),
    ("落ち着かない", AdjectiveSentiment::Anxiety),
    ("不透明", AdjectiveSentiment::Anxiety),
    ("不確か", AdjectiveSentiment::Anxiety),
    ("おぼつかない", AdjectiveSentiment::Anxiety),
    ("危惧している", AdjectiveSentiment::Anxiety),
    ("びくびくしている", AdjectiveSentiment::Anxiety),
    ("戦々恐々としている", AdjectiveSentiment::Anxiety),
];
