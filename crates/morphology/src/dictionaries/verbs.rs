//! Closed verb-category lexicon. Anything not listed here is simply absent
//! from a `MorphologyFeatures::verbs` list — there is no neutral entry to
//! match against.

use insight_core::VerbCategory;

pub const VERBS: &[(&str, VerbCategory)] = &[
    // OBSTACLE
    ("困っている", VerbCategory::Obstacle),
    ("詰まっている", VerbCategory::Obstacle),
    ("止まっている", VerbCategory::Obstacle),
    ("行き詰まっている", VerbCategory::Obstacle),
    ("滞っている", VerbCategory::Obstacle),
    ("邪魔されている", VerbCategory::Obstacle),
    ("妨げられている", VerbCategory::Obstacle),
    ("つまずいている", VerbCategory::Obstacle),
    ("手こずっている", VerbCategory::Obstacle),
    ("苦戦している", VerbCategory::Obstacle),
    ("苦労している", VerbCategory::Obstacle),
    ("難航している", VerbCategory::Obstacle),
    ("停滞している", VerbCategory::Obstacle),
    ("阻まれている", VerbCategory::Obstacle),
    ("遅れている", VerbCategory::Obstacle),
    ("遅延している", VerbCategory::Obstacle),
    ("渋滞している", VerbCategory::Obstacle),
    ("滞留している", VerbCategory::Obstacle),
    ("進まない", VerbCategory::Obstacle),
    ("進捗しない", VerbCategory::Obstacle),
    ("機能しない", VerbCategory::Obstacle),
    ("動かない", VerbCategory::Obstacle),
    ("壊れている", VerbCategory::Obstacle),
    ("故障している", VerbCategory::Obstacle),
    ("崩れている", VerbCategory::Obstacle),
    ("乱れている", VerbCategory::Obstacle),
    ("混乱している", VerbCategory::Obstacle),
    ("錯綜している", VerbCategory::Obstacle),
    ("複雑化している", VerbCategory::Obstacle),
    ("悪化している", VerbCategory::Obstacle),
    ("深刻化している", VerbCategory::Obstacle),
    ("逼迫している", VerbCategory::Obstacle),
    ("ひっ迫している", VerbCategory::Obstacle),
    ("限界に達している", VerbCategory::Obstacle),
    ("限界を超えている", VerbCategory::Obstacle),
    ("行き詰まる", VerbCategory::Obstacle),
    ("頭を抱えている", VerbCategory::Obstacle),
    ("手詰まりである", VerbCategory::Obstacle),
    ("八方塞がりである", VerbCategory::Obstacle),
    ("お手上げである", VerbCategory::Obstacle),
    // DIFFICULTY
    ("難しい", VerbCategory::Difficulty),
    ("厳しい", VerbCategory::Difficulty),
    ("手間がかかる", VerbCategory::Difficulty),
    ("時間がかかる", VerbCategory::Difficulty),
    ("労力がかかる", VerbCategory::Difficulty),
    ("負担が大きい", VerbCategory::Difficulty),
    ("わかりにくい", VerbCategory::Difficulty),
    ("理解しにくい", VerbCategory::Difficulty),
    ("判断しにくい", VerbCategory::Difficulty),
    ("対応しにくい", VerbCategory::Difficulty),
    ("把握しにくい", VerbCategory::Difficulty),
    ("処理しにくい", VerbCategory::Difficulty),
    ("調整が難しい", VerbCategory::Difficulty),
    ("管理が難しい", VerbCategory::Difficulty),
    ("運用が難しい", VerbCategory::Difficulty),
    ("習得が難しい", VerbCategory::Difficulty),
    ("継続が難しい", VerbCategory::Difficulty),
    ("維持が難しい", VerbCategory::Difficulty),
    ("改善が難しい", VerbCategory::Difficulty),
    ("解決が難しい", VerbCategory::Difficulty),
    ("見極めが難しい", VerbCategory::Difficulty),
    ("予測が難しい", VerbCategory::Difficulty),
    ("計画が難しい", VerbCategory::Difficulty),
    ("実現が難しい", VerbCategory::Difficulty),
    ("再現が難しい", VerbCategory::Difficulty),
    ("共有しづらい", VerbCategory::Difficulty),
    ("伝えづらい", VerbCategory::Difficulty),
    ("説明しづらい", VerbCategory::Difficulty),
    ("扱いづらい", VerbCategory::Difficulty),
    ("使いづらい", VerbCategory::Difficulty),
    ("読みづらい", VerbCategory::Difficulty),
    ("覚えづらい", VerbCategory::Difficulty),
    ("続けづらい", VerbCategory::Difficulty),
    ("慣れづらい", VerbCategory::Difficulty),
    ("入りづらい", VerbCategory::Difficulty),
    ("聞きづらい", VerbCategory::Difficulty),
    ("頼みづらい", VerbCategory::Difficulty),
    ("相談しづらい", VerbCategory::Difficulty),
    ("言い出しづらい", VerbCategory::Difficulty),
    ("踏み込みづらい", VerbCategory::Difficulty),
    // LOSS
    ("失っている", VerbCategory::Loss),
    ("失われている", VerbCategory::Loss),
    ("なくしている", VerbCategory::Loss),
    ("消えている", VerbCategory::Loss),
    ("奪われている", VerbCategory::Loss),
    ("減っている", VerbCategory::Loss),
    ("減少している", VerbCategory::Loss),
    ("落ちている", VerbCategory::Loss),
    ("低下している", VerbCategory::Loss),
    ("下がっている", VerbCategory::Loss),
    ("衰えている", VerbCategory::Loss),
    ("薄れている", VerbCategory::Loss),
    ("弱まっている", VerbCategory::Loss),
    ("離れていく", VerbCategory::Loss),
    ("離脱している", VerbCategory::Loss),
    ("離職している", VerbCategory::Loss),
    ("退職している", VerbCategory::Loss),
    ("辞めている", VerbCategory::Loss),
    ("去っている", VerbCategory::Loss),
    ("流出している", VerbCategory::Loss),
    ("逃げている", VerbCategory::Loss),
    ("逃げていく", VerbCategory::Loss),
    ("手放している", VerbCategory::Loss),
    ("手放さざるを得ない", VerbCategory::Loss),
    ("切り捨てられている", VerbCategory::Loss),
    ("切り離されている", VerbCategory::Loss),
    ("打ち切られている", VerbCategory::Loss),
    ("解約されている", VerbCategory::Loss),
    ("解雇されている", VerbCategory::Loss),
    ("解散している", VerbCategory::Loss),
    ("縮小している", VerbCategory::Loss),
    ("撤退している", VerbCategory::Loss),
    ("撤去されている", VerbCategory::Loss),
    ("撤廃されている", VerbCategory::Loss),
    ("消耗している", VerbCategory::Loss),
    ("摩耗している", VerbCategory::Loss),
    ("枯渇している", VerbCategory::Loss),
    ("尽きている", VerbCategory::Loss),
    ("途絶えている", VerbCategory::Loss),
    // DESIRE
    ("したい", VerbCategory::Desire),
    ("してほしい", VerbCategory::Desire),
    ("望んでいる", VerbCategory::Desire),
    ("求めている", VerbCategory::Desire),
    ("欲しい", VerbCategory::Desire),
    ("必要としている", VerbCategory::Desire),
    ("期待している", VerbCategory::Desire),
    ("希望している", VerbCategory::Desire),
    ("願っている", VerbCategory::Desire),
    ("目指している", VerbCategory::Desire),
    ("実現したい", VerbCategory::Desire),
    ("改善したい", VerbCategory::Desire),
    ("向上させたい", VerbCategory::Desire),
    ("効率化したい", VerbCategory::Desire),
    ("自動化したい", VerbCategory::Desire),
    ("簡素化したい", VerbCategory::Desire),
    ("標準化したい", VerbCategory::Desire),
    ("最適化したい", VerbCategory::Desire),
    ("強化したい", VerbCategory::Desire),
    ("拡大したい", VerbCategory::Desire),
    ("成長させたい", VerbCategory::Desire),
    ("育てたい", VerbCategory::Desire),
    ("伸ばしたい", VerbCategory::Desire),
    ("高めたい", VerbCategory::Desire),
    ("深めたい", VerbCategory::Desire),
    ("広げたい", VerbCategory::Desire),
    ("増やしたい", VerbCategory::Desire),
    ("整えたい", VerbCategory::Desire),
    ("整備したい", VerbCategory::Desire),
    ("構築したい", VerbCategory::Desire),
    ("導入したい", VerbCategory::Desire),
    ("活用したい", VerbCategory::Desire),
    ("実行したい", VerbCategory::Desire),
    ("推進したい", VerbCategory::Desire),
    ("加速したい", VerbCategory::Desire),
    ("変えたい", VerbCategory::Desire),
    ("変革したい", VerbCategory::Desire),
    ("刷新したい", VerbCategory::Desire),
    ("挑戦したい", VerbCategory::Desire),
    ("取り組みたい", VerbCategory::Desire),
    // REJECTION
    ("反対している", VerbCategory::Rejection),
    ("拒否している", VerbCategory::Rejection),
    ("断っている", VerbCategory::Rejection),
    ("納得できない", VerbCategory::Rejection),
    ("賛成できない", VerbCategory::Rejection),
    ("受け入れられない", VerbCategory::Rejection),
    ("同意できない", VerbCategory::Rejection),
    ("理解できない", VerbCategory::Rejection),
    ("信用できない", VerbCategory::Rejection),
    ("信頼できない", VerbCategory::Rejection),
    ("疑問に思っている", VerbCategory::Rejection),
    ("懸念している", VerbCategory::Rejection),
    ("不満を持っている", VerbCategory::Rejection),
    ("抵抗を感じている", VerbCategory::Rejection),
    ("抵抗がある", VerbCategory::Rejection),
    ("違和感がある", VerbCategory::Rejection),
    ("疑っている", VerbCategory::Rejection),
    ("警戒している", VerbCategory::Rejection),
    ("躊躇している", VerbCategory::Rejection),
    ("ためらっている", VerbCategory::Rejection),
    ("消極的である", VerbCategory::Rejection),
    ("否定的である", VerbCategory::Rejection),
    ("批判的である", VerbCategory::Rejection),
    ("懐疑的である", VerbCategory::Rejection),
    ("慎重になっている", VerbCategory::Rejection),
    ("二の足を踏んでいる", VerbCategory::Rejection),
    ("気が進まない", VerbCategory::Rejection),
    ("乗り気でない", VerbCategory::Rejection),
    ("踏み切れない", VerbCategory::Rejection),
    ("決断できない", VerbCategory::Rejection),
    ("様子見している", VerbCategory::Rejection),
    ("保留にしている", VerbCategory::Rejection),
    ("見送っている", VerbCategory::Rejection),
    ("却下している", VerbCategory::Rejection),
    ("撤回している", VerbCategory::Rejection),
    ("取り下げている", VerbCategory::Rejection),
    ("拒んでいる", VerbCategory::Rejection),
    ("嫌がっている", VerbCategory::Rejection),
    ("避けている", VerbCategory::Rejection),
    ("遠ざけている", VerbCategory::Rejection),
    // SUCCESS
    ("できている", VerbCategory::Success),
    ("うまくいっている", VerbCategory::Success),
    ("改善している", VerbCategory::Success),
    ("向上している", VerbCategory::Success),
    ("達成している", VerbCategory::Success),
    ("成功している", VerbCategory::Success),
    ("成果が出ている", VerbCategory::Success),
    ("効果が出ている", VerbCategory::Success),
    ("実現している", VerbCategory::Success),
    ("解決している", VerbCategory::Success),
    ("克服している", VerbCategory::Success),
    ("乗り越えている", VerbCategory::Success),
    ("定着している", VerbCategory::Success),
    ("浸透している", VerbCategory::Success),
    ("軌道に乗っている", VerbCategory::Success),
    ("順調に進んでいる", VerbCategory::Success),
    ("伸びている", VerbCategory::Success),
    ("育っている", VerbCategory::Success),
    ("成長している", VerbCategory::Success),
    ("拡大している", VerbCategory::Success),
    ("強化されている", VerbCategory::Success),
    ("安定している", VerbCategory::Success),
    ("円滑に進んでいる", VerbCategory::Success),
    ("スムーズに進んでいる", VerbCategory::Success),
    ("効率化できている", VerbCategory::Success),
    ("自動化できている", VerbCategory::Success),
    ("標準化できている", VerbCategory::Success),
    ("整備できている", VerbCategory::Success),
    ("確立している", VerbCategory::Success),
    ("根付いている", VerbCategory::Success),
    ("機能している", VerbCategory::Success),
    ("回っている", VerbCategory::Success),
    ("回り始めている", VerbCategory::Success),
    ("評価されている", VerbCategory::Success),
    ("信頼されている", VerbCategory::Success),
    ("満足している", VerbCategory::Success),
    ("納得している", VerbCategory::Success),
    ("合意できている", VerbCategory::Success),
    ("合意に至っている", VerbCategory::Success),
    ("前進している", VerbCategory::Success),
];
