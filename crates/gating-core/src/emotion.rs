//! Dominant-emotion aggregation.

use snapready_scene_model::EmotionScores;

/// Pick the dominant emotion from a score vector.
///
/// Walks the eight emotions in canonical order keeping the running maximum
/// under strict greater-than, so ties resolve to the earliest emotion in
/// canonical order. When every score is zero or below, returns `("", 0.0)` —
/// a defined degenerate case, not an error.
pub fn dominant_emotion(scores: &EmotionScores) -> (&'static str, f64) {
    let mut dominant = "";
    let mut max_score = 0.0;
    for (label, score) in scores.labeled() {
        if score > max_score {
            max_score = score;
            dominant = label;
        }
    }
    (dominant, max_score)
}

/// Format the dominant emotion for overlay display, e.g. `"Happiness: 0.9"`.
pub fn summarize_emotion(scores: &EmotionScores) -> String {
    let (label, score) = dominant_emotion(scores);
    format!("{label}: {score:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_positive_score_wins() {
        let scores = EmotionScores {
            surprise: 0.7,
            ..Default::default()
        };
        assert_eq!(dominant_emotion(&scores), ("Surprise", 0.7));
    }

    #[test]
    fn test_all_zero_scores_return_empty_label() {
        assert_eq!(dominant_emotion(&EmotionScores::default()), ("", 0.0));
    }

    #[test]
    fn test_tie_resolves_to_canonical_order() {
        let scores = EmotionScores {
            anger: 5.0,
            contempt: 5.0,
            ..Default::default()
        };
        assert_eq!(dominant_emotion(&scores), ("Anger", 5.0));
    }

    #[test]
    fn test_later_strictly_greater_score_replaces_earlier() {
        let scores = EmotionScores {
            anger: 0.3,
            neutral: 0.4,
            ..Default::default()
        };
        assert_eq!(dominant_emotion(&scores), ("Neutral", 0.4));
    }

    #[test]
    fn test_summarize_formats_one_decimal() {
        let scores = EmotionScores {
            happiness: 0.87,
            ..Default::default()
        };
        assert_eq!(summarize_emotion(&scores), "Happiness: 0.9");
    }

    #[test]
    fn test_summarize_degenerate_case() {
        assert_eq!(summarize_emotion(&EmotionScores::default()), ": 0.0");
    }

    proptest! {
        #[test]
        fn prop_dominant_score_is_the_maximum(
            values in proptest::collection::vec(0.0f64..1.0, 8)
        ) {
            let scores = EmotionScores {
                anger: values[0],
                contempt: values[1],
                disgust: values[2],
                fear: values[3],
                happiness: values[4],
                neutral: values[5],
                sadness: values[6],
                surprise: values[7],
            };
            let (label, score) = dominant_emotion(&scores);
            let max = values.iter().cloned().fold(0.0f64, f64::max);
            prop_assert_eq!(score, max);
            prop_assert_eq!(label.is_empty(), max <= 0.0);
        }
    }
}
