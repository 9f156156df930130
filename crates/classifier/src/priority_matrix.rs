//! Priority matrix: per-process urgent/quick_win/watch classification.
//! Buckets are disjoint — first matching rule wins.

use std::collections::HashMap;

use insight_core::{ClassificationResult, PriorityMatrix, Voice};

/// `urgent` if Pain count >= 2 and Insecurity count >= 1; else `quick_win`
/// if Vision count >= 2 and Traction count >= 1; else `watch` if Objection
/// count >= 2; else the process is left unclassified (omitted).
pub fn build(result: &ClassificationResult) -> PriorityMatrix {
    let mut matrix = PriorityMatrix::new();

    for (process, voice_counts) in &result.by_process {
        if let Some(priority) = classify_counts(voice_counts) {
            matrix.insert(process.clone(), priority);
        }
    }

    matrix
}

fn classify_counts(voice_counts: &HashMap<Voice, u32>) -> Option<insight_core::mart::Priority> {
    use insight_core::mart::Priority;

    let count = |v: Voice| *voice_counts.get(&v).unwrap_or(&0);

    if count(Voice::Pain) >= 2 && count(Voice::Insecurity) >= 1 {
        Some(Priority::Urgent)
    } else if count(Voice::Vision) >= 2 && count(Voice::Traction) >= 1 {
        Some(Priority::QuickWin)
    } else if count(Voice::Objection) >= 2 {
        Some(Priority::Watch)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::mart::Priority;

    fn counts(pairs: &[(Voice, u32)]) -> HashMap<Voice, u32> {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn urgent_requires_both_pain_and_insecurity() {
        let c = counts(&[(Voice::Pain, 2), (Voice::Insecurity, 1)]);
        assert_eq!(classify_counts(&c), Some(Priority::Urgent));
    }

    #[test]
    fn pain_alone_is_not_urgent() {
        let c = counts(&[(Voice::Pain, 3)]);
        assert_eq!(classify_counts(&c), None);
    }

    #[test]
    fn quick_win_requires_vision_and_traction() {
        let c = counts(&[(Voice::Vision, 2), (Voice::Traction, 1)]);
        assert_eq!(classify_counts(&c), Some(Priority::QuickWin));
    }

    #[test]
    fn watch_fires_on_objection_alone() {
        let c = counts(&[(Voice::Objection, 2)]);
        assert_eq!(classify_counts(&c), Some(Priority::Watch));
    }

    #[test]
    fn urgent_takes_priority_over_quick_win_when_both_match() {
        let c = counts(&[
            (Voice::Pain, 2),
            (Voice::Insecurity, 1),
            (Voice::Vision, 2),
            (Voice::Traction, 1),
        ]);
        assert_eq!(classify_counts(&c), Some(Priority::Urgent));
    }

    #[test]
    fn below_threshold_counts_are_unclassified() {
        let c = counts(&[(Voice::Pain, 1), (Voice::Insecurity, 0)]);
        assert_eq!(classify_counts(&c), None);
    }
}
