/// The sentiment-scoring collaborator boundary.
///
/// Implementations map free text onto a single polarity score in
/// `[-1.0, 1.0]`. The classifier only consumes the score, so alternative
/// scorers (a heavier lexicon, a remote model) can be swapped in here.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f32;
}

// Compact general-purpose polarity lexicon, AFINN-style. Scores follow
// the [-1, 1] convention of the scorer contract.
const LEXICON: &[(&str, f32)] = &[
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("excellent", 1.0),
    ("fantastic", 0.9),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.4),
    ("love", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("thanks", 0.2),
    ("wonderful", 1.0),
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("awful", -1.0),
    ("bad", -0.7),
    ("broken", -0.4),
    ("defective", -0.5),
    ("disappointed", -0.6),
    ("frustrated", -0.6),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("poor", -0.4),
    ("terrible", -1.0),
    ("unhappy", -0.6),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Default lexicon-backed scorer: the mean polarity of all scored words
/// in the text, 0.0 when nothing is scored.
pub struct LexiconScorer;

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f32 {
        let lower = text.to_lowercase();
        let mut sum = 0.0f32;
        let mut hits = 0usize;

        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() {
                continue;
            }
            if let Some(&(_, score)) = LEXICON.iter().find(|(w, _)| *w == word) {
                sum += score;
                hits += 1;
            }
        }

        if hits == 0 {
            0.0
        } else {
            (sum / hits as f32).clamp(-1.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscored_text_is_zero() {
        let scorer = LexiconScorer;
        assert_eq!(scorer.polarity("I want to book a table"), 0.0);
        assert_eq!(scorer.polarity(""), 0.0);
    }

    #[test]
    fn scored_words_average() {
        let scorer = LexiconScorer;
        assert!(scorer.polarity("this is great") > 0.1);
        assert!(scorer.polarity("the wrong item arrived") < -0.1);
        // Mixed signal lands in the dead zone.
        let mixed = scorer.polarity("great but wrong");
        assert!(mixed.abs() <= 0.2, "mixed polarity was {mixed}");
    }
}
