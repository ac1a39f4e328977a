//! Per-face emotion score vectors.

use serde::{Deserialize, Serialize};

/// The eight emotion scores returned by the remote emotion analyzer.
///
/// Scores are non-negative. The API convention is that they sum to one,
/// but nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub contempt: f64,
    pub disgust: f64,
    pub fear: f64,
    pub happiness: f64,
    pub neutral: f64,
    pub sadness: f64,
    pub surprise: f64,
}

impl EmotionScores {
    /// The scores paired with their labels, in canonical order.
    ///
    /// The canonical order is load-bearing: dominant-emotion selection
    /// breaks ties in favor of the earliest entry.
    pub fn labeled(&self) -> [(&'static str, f64); 8] {
        [
            ("Anger", self.anger),
            ("Contempt", self.contempt),
            ("Disgust", self.disgust),
            ("Fear", self.fear),
            ("Happiness", self.happiness),
            ("Neutral", self.neutral),
            ("Sadness", self.sadness),
            ("Surprise", self.surprise),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_order_is_canonical() {
        let labels: Vec<&str> = EmotionScores::default()
            .labeled()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Anger",
                "Contempt",
                "Disgust",
                "Fear",
                "Happiness",
                "Neutral",
                "Sadness",
                "Surprise"
            ]
        );
    }

    #[test]
    fn test_scores_roundtrip() {
        let scores = EmotionScores {
            happiness: 0.9,
            neutral: 0.1,
            ..Default::default()
        };
        let json = serde_json::to_string(&scores).unwrap();
        let parsed: EmotionScores = serde_json::from_str(&json).unwrap();
        assert_eq!(scores, parsed);
    }
}
