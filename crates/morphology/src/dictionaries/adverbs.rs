//! Degree and frequency adverb multiplier tables.

/// surface form -> degree multiplier, one of {1.5, 1.3, 1.0, 0.7, 0.4}.
pub const DEGREE_ADVERBS: &[(&str, f32)] = &[
    ("非常に", 1.5),
    ("極めて", 1.5),
    ("とても", 1.5),
    ("かなり", 1.3),
    ("だいぶ", 1.3),
    ("相当", 1.3),
    ("結構", 1.0),
    ("わりと", 1.0),
    ("少し", 0.7),
    ("ちょっと", 0.7),
    ("やや", 0.7),
    ("多少", 0.7),
    ("あまり", 0.4),
    ("そんなに", 0.4),
    ("ほとんど", 0.4),
];

/// surface form -> frequency multiplier, one of {1.5, 1.3, 1.0, 0.5}.
pub const FREQUENCY_ADVERBS: &[(&str, f32)] = &[
    ("いつも", 1.5),
    ("常に", 1.5),
    ("毎回", 1.5),
    ("よく", 1.3),
    ("しばしば", 1.3),
    ("たびたび", 1.3),
    ("時々", 1.0),
    ("たまに", 0.5),
    ("まれに", 0.5),
    ("めったに", 0.5),
];
