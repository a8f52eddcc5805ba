//! Keyword and star-rating sentiment classification.
//!
//! Each distinct sentiment term found anywhere in the comment set counts
//! once. Star ratings count double: every 4–5 star review adds two to the
//! positive side and every 1–2 star review adds two to the negative side.

use digest_core::{CommentSet, SentimentVerdict, Vocabulary};

const RATING_WEIGHT: usize = 2;
const NEUTRAL_RATIO: f64 = 0.5;

/// Lexicon-based classifier that folds in star ratings.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SentimentClassifier {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            positive: vocabulary.positive_terms.clone(),
            negative: vocabulary.negative_terms.clone(),
        }
    }

    /// Distinct positive and negative terms present in `buffer`.
    pub fn keyword_counts(&self, buffer: &str) -> (usize, usize) {
        let positive = self.positive.iter().filter(|w| buffer.contains(w.as_str())).count();
        let negative = self.negative.iter().filter(|w| buffer.contains(w.as_str())).count();
        (positive, negative)
    }

    pub fn classify(&self, comments: &CommentSet) -> SentimentVerdict {
        let buffer = comments.scan_buffer();
        let (mut positive_count, mut negative_count) = self.keyword_counts(&buffer);

        let ratings: Vec<u8> = comments.ratings().collect();
        let low_ratings = ratings.iter().filter(|&&r| r <= 2).count();
        let high_ratings = ratings.iter().filter(|&&r| r >= 4).count();
        let average_rating = if ratings.is_empty() {
            None
        } else {
            let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
            Some(f64::from(sum) / ratings.len() as f64)
        };

        positive_count += high_ratings * RATING_WEIGHT;
        negative_count += low_ratings * RATING_WEIGHT;

        let total = positive_count + negative_count;
        let sentiment_ratio = if total > 0 {
            positive_count as f64 / total as f64
        } else {
            NEUTRAL_RATIO
        };

        tracing::debug!(
            "Sentiment: positive={} negative={} avg_rating={:?} ratio={:.3}",
            positive_count,
            negative_count,
            average_rating,
            sentiment_ratio
        );

        SentimentVerdict {
            positive_count,
            negative_count,
            average_rating,
            sentiment_ratio,
            low_ratings,
            high_ratings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SentimentClassifier {
        SentimentClassifier::new(&Vocabulary::default())
    }

    #[test]
    fn test_no_evidence_is_neutral() {
        let verdict = classifier().classify(&CommentSet::from_texts(["ok", "fine", "meh"]));
        assert_eq!(verdict.positive_count, 0);
        assert_eq!(verdict.negative_count, 0);
        assert_eq!(verdict.average_rating, None);
        assert!((verdict.sentiment_ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_keywords_counted_once() {
        let verdict = classifier().classify(&CommentSet::from_texts([
            "Great great GREAT",
            "really great",
        ]));
        assert_eq!(verdict.positive_count, 1);
        assert_eq!(verdict.negative_count, 0);
        assert!((verdict.sentiment_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_vocabulary_file_duplicates_counted_once() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"positive_terms": ["great", "good", "Great"]}}"#).unwrap();
        let vocabulary = Vocabulary::from_file(file.path()).unwrap();

        let verdict = SentimentClassifier::new(&vocabulary)
            .classify(&CommentSet::from_texts(["great stuff", "really great"]));
        assert_eq!(verdict.positive_count, 1);
    }

    #[test]
    fn test_ratings_weigh_double() {
        let comments = CommentSet::from_rated([
            ("Great quality but shipping was late", Some(3)),
            ("Love it, fast and well made", Some(5)),
            ("Box arrived broken and late", Some(1)),
        ]);
        let verdict = classifier().classify(&comments);
        // great, love, fast, quality + 2 for the five-star review
        assert_eq!(verdict.positive_count, 6);
        // late, broken + 2 for the one-star review
        assert_eq!(verdict.negative_count, 4);
        assert_eq!(verdict.low_ratings, 1);
        assert_eq!(verdict.high_ratings, 1);
        assert_eq!(verdict.average_rating, Some(3.0));
        assert!((verdict.sentiment_ratio - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_three_star_ratings_leave_counts_keyword_only() {
        let comments = CommentSet::from_rated([("It is okay", Some(3)), ("Average", Some(3))]);
        let verdict = classifier().classify(&comments);
        assert_eq!(verdict.positive_count, 0);
        assert_eq!(verdict.negative_count, 0);
        assert_eq!(verdict.average_rating, Some(3.0));
        assert!((verdict.sentiment_ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_all_one_star() {
        let comments = CommentSet::from_rated([("Terrible", Some(1)), ("Awful", Some(1))]);
        let verdict = classifier().classify(&comments);
        assert!(verdict.average_rating.unwrap() <= 2.0);
        assert_eq!(verdict.negative_count, 2 + 4);
        assert_eq!(verdict.positive_count, 0);
        assert_eq!(verdict.sentiment_ratio, 0.0);
    }
}
