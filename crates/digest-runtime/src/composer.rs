//! Template-based summaries built from sentiment evidence.
//!
//! Used when extraction is skipped or fails. Output is a pure function of the
//! comment set: one sentiment phrase, the most common issue and praise
//! categories, and a closing recommendation or warning.

use once_cell::sync::Lazy;
use regex::Regex;

use digest_core::{Comment, CommentSet, DigestConfig, SentimentVerdict, SummaryResult};
use digest_extract::SentimentClassifier;

static CLAUSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

const CONCERNS_CLAUSE: &str = " Potential buyers should consider these concerns.";
const RECOMMEND_CLAUSE: &str = " Overall, buyers highly recommend this product.";
const CAUTION_CLAUSE: &str =
    " Several concerns were raised that potential buyers should carefully consider.";

/// Complaint categories found by phrase scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    DeliveryDelays,
    QualityIssues,
    ProductMismatch,
}

impl Issue {
    pub fn label(&self) -> &'static str {
        match self {
            Issue::DeliveryDelays => "delivery delays",
            Issue::QualityIssues => "quality issues",
            Issue::ProductMismatch => "product mismatch",
        }
    }
}

/// Praise categories found by phrase scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Praise {
    FastDelivery,
    ProductQuality,
}

impl Praise {
    pub fn label(&self) -> &'static str {
        match self {
            Praise::FastDelivery => "fast delivery",
            Praise::ProductQuality => "product quality",
        }
    }
}

fn contains_any(buffer: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| buffer.contains(p))
}

/// Issue categories mentioned in a lower-cased buffer, in fixed order.
pub fn detect_issues(buffer: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    if contains_any(buffer, &["late", "slow"]) {
        issues.push(Issue::DeliveryDelays);
    }
    if contains_any(
        buffer,
        &["bad quality", "poor quality", "defective", "broken", "damaged"],
    ) {
        issues.push(Issue::QualityIssues);
    }
    if contains_any(buffer, &["wrong", "incorrect", "not as described"]) {
        issues.push(Issue::ProductMismatch);
    }
    issues
}

/// Praise categories mentioned in a lower-cased buffer.
///
/// Any mention of lateness cancels delivery praise, and "bad quality"
/// cancels quality praise.
pub fn detect_praise(buffer: &str) -> Vec<Praise> {
    let mut praise = Vec::new();
    if contains_any(buffer, &["fast", "quick"]) && !buffer.contains("late") {
        praise.push(Praise::FastDelivery);
    }
    if contains_any(buffer, &["quality", "durable", "well-made"]) && !buffer.contains("bad quality") {
        praise.push(Praise::ProductQuality);
    }
    praise
}

/// Headline phrase for a verdict.
///
/// Ratings decide when present. When low ratings are at least as common as
/// high ones, the pessimistic ladder is used even if the average is above 3.
pub fn sentiment_phrase(verdict: &SentimentVerdict) -> &'static str {
    match verdict.average_rating {
        Some(avg) if verdict.low_ratings_prevail() => {
            if avg <= 2.0 {
                "Buyers reported significant issues"
            } else if avg <= 2.5 {
                "Many buyers were dissatisfied"
            } else if avg <= 3.0 {
                "Several buyers reported concerns"
            } else {
                "Buyers had mixed experiences with some reporting issues"
            }
        }
        Some(avg) => {
            if avg <= 2.5 {
                "Many buyers were dissatisfied"
            } else if avg <= 3.0 {
                "Buyers had mixed experiences"
            } else if avg <= 3.5 {
                "Buyers generally had positive experiences"
            } else if avg <= 4.0 {
                "Most buyers were satisfied"
            } else {
                "Most buyers were very satisfied"
            }
        }
        None => {
            let ratio = verdict.sentiment_ratio;
            if verdict.negative_count > verdict.positive_count {
                if ratio <= 0.3 {
                    "Many buyers reported issues"
                } else {
                    "Some buyers reported significant concerns"
                }
            } else if ratio <= 0.4 {
                "Some buyers reported concerns"
            } else if ratio <= 0.5 {
                "Buyers had mixed experiences"
            } else if ratio <= 0.6 {
                "Buyers generally had positive experiences"
            } else if ratio <= 0.75 {
                "Most buyers were satisfied"
            } else {
                "Most buyers were very satisfied"
            }
        }
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Longest text among 1–2 star comments; the earliest wins ties.
fn longest_low_rated(comments: &CommentSet) -> Option<&Comment> {
    comments
        .iter()
        .filter(|c| c.rating.map(|r| r <= 2).unwrap_or(false))
        .fold(None, |best: Option<&Comment>, c| match best {
            Some(b) if b.char_len() >= c.char_len() => Some(b),
            _ => Some(c),
        })
}

/// Builds templated summaries from sentiment and phrase evidence.
#[derive(Debug, Clone)]
pub struct SummaryComposer {
    classifier: SentimentClassifier,
    single_comment_limit: usize,
}

impl SummaryComposer {
    pub fn new(config: &DigestConfig) -> Self {
        Self {
            classifier: SentimentClassifier::new(&config.vocabulary),
            single_comment_limit: config.fallback_single_comment_limit,
        }
    }

    pub fn compose(&self, comments: &CommentSet) -> String {
        match comments.len() {
            0 => SummaryResult::NO_COMMENTS.to_string(),
            1 => match comments.first() {
                Some(comment) => self.compose_single(&comment.text),
                None => SummaryResult::NO_COMMENTS.to_string(),
            },
            _ => self.compose_multi(comments),
        }
    }

    /// A short comment verbatim, a long one cut to its first two clauses.
    pub fn compose_single(&self, text: &str) -> String {
        if text.chars().count() <= self.single_comment_limit {
            return text.to_string();
        }

        let clauses: Vec<&str> = CLAUSE_RE
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(2)
            .collect();

        if clauses.is_empty() {
            format!("{}...", truncate_chars(text, self.single_comment_limit))
        } else {
            format!("{}.", clauses.join(". "))
        }
    }

    fn compose_multi(&self, comments: &CommentSet) -> String {
        let verdict = self.classifier.classify(comments);
        let buffer = comments.scan_buffer();
        let sentiment = sentiment_phrase(&verdict);
        let issues = detect_issues(&buffer);
        let praise = detect_praise(&buffer);

        let negative_dominant = verdict.negative_count > verdict.positive_count
            || verdict.low_ratings_prevail()
            || verdict.average_at_most(2.5);
        let mild_negative = verdict.negative_count > 0
            || verdict.has_low_ratings()
            || verdict.average_at_most(3.5);

        if negative_dominant {
            let mut text = if !issues.is_empty() {
                let top: Vec<&str> = issues.iter().take(2).map(Issue::label).collect();
                format!(
                    "{}. {} were frequently mentioned.",
                    sentiment,
                    capitalize_first(&top.join(", "))
                )
            } else {
                match longest_low_rated(comments) {
                    Some(c) if c.char_len() > 10 => {
                        format!("{}. Buyers mentioned: \"{}\".", sentiment, c.text)
                    }
                    _ => format!("{} with this product.", sentiment),
                }
            };
            text.push_str(CONCERNS_CLAUSE);
            return text;
        }

        let mut summary = if mild_negative {
            let mut parts = Vec::new();
            if let Some(issue) = issues.first() {
                parts.push(format!("some concerns about {}", issue.label()));
            } else if verdict.has_low_ratings() {
                parts.push("some reported issues".to_string());
            }
            if let Some(p) = praise.first() {
                parts.push(format!("positive feedback on {}", p.label()));
            }
            if parts.is_empty() {
                format!("{} about this product.", sentiment)
            } else {
                format!("{}. {}.", sentiment, capitalize_first(&parts.join(", ")))
            }
        } else if !praise.is_empty() {
            let points: Vec<&str> = praise.iter().take(2).map(Praise::label).collect();
            format!("{} with the {}.", sentiment, points.join(", "))
        } else {
            format!("{} about this product.", sentiment)
        };

        if (verdict.sentiment_ratio >= 0.75 || verdict.average_at_least(4.5))
            && verdict.positive_count > 2
            && !verdict.has_low_ratings()
        {
            summary.push_str(RECOMMEND_CLAUSE);
        } else if verdict.negative_count > verdict.positive_count
            || verdict.has_low_ratings()
            || verdict.average_at_most(2.5)
        {
            summary.push_str(CAUTION_CLAUSE);
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> SummaryComposer {
        SummaryComposer::new(&DigestConfig::default())
    }

    fn verdict(avg: Option<f64>, low: usize, high: usize, pos: usize, neg: usize) -> SentimentVerdict {
        let total = pos + neg;
        SentimentVerdict {
            positive_count: pos,
            negative_count: neg,
            average_rating: avg,
            sentiment_ratio: if total > 0 { pos as f64 / total as f64 } else { 0.5 },
            low_ratings: low,
            high_ratings: high,
        }
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(composer().compose(&CommentSet::new()), SummaryResult::NO_COMMENTS);
    }

    #[test]
    fn test_single_short_comment_verbatim() {
        let comments = CommentSet::from_texts(["Nice mug, keeps coffee hot"]);
        assert_eq!(composer().compose(&comments), "Nice mug, keeps coffee hot");
    }

    #[test]
    fn test_single_long_comment_first_two_clauses() {
        let text = format!(
            "The handle is sturdy and the glaze looks great. It keeps coffee warm for a long time! {}",
            "Also ".repeat(30)
        );
        let comments = CommentSet::from_texts([text]);
        assert_eq!(
            composer().compose(&comments),
            "The handle is sturdy and the glaze looks great. It keeps coffee warm for a long time."
        );
    }

    #[test]
    fn test_single_long_punctuation_only() {
        let comments = CommentSet::from_texts(["!".repeat(160)]);
        assert_eq!(composer().compose(&comments), format!("{}...", "!".repeat(150)));
    }

    #[test]
    fn test_all_one_star_reviews() {
        let comments = CommentSet::from_rated([
            ("Terrible, would not buy this again", Some(1)),
            ("Awful", Some(1)),
        ]);
        let summary = composer().compose(&comments);
        assert_eq!(
            summary,
            "Buyers reported significant issues. Buyers mentioned: \
             \"Terrible, would not buy this again\". Potential buyers should consider these concerns."
        );
    }

    #[test]
    fn test_quoted_comment_keeps_buyer_text() {
        let comments = CommentSet::from_rated([
            ("Terrible,  would not\nbuy again", Some(1)),
            ("Awful", Some(2)),
        ]);
        assert_eq!(
            composer().compose(&comments),
            "Buyers reported significant issues. Buyers mentioned: \
             \"Terrible,  would not\nbuy again\". Potential buyers should consider these concerns."
        );
    }

    #[test]
    fn test_all_five_star_reviews() {
        let comments = CommentSet::from_rated([
            ("Great product", Some(5)),
            ("Excellent value", Some(5)),
            ("Love it", Some(5)),
        ]);
        assert_eq!(
            composer().compose(&comments),
            "Most buyers were very satisfied about this product. \
             Overall, buyers highly recommend this product."
        );
    }

    #[test]
    fn test_mixed_ratings_tie_favors_pessimism() {
        let comments = CommentSet::from_rated([
            ("Great quality but shipping was late", Some(3)),
            ("Love it, fast and well made", Some(5)),
            ("Box arrived broken and late", Some(1)),
        ]);
        let buffer = comments.scan_buffer();
        assert_eq!(detect_issues(&buffer), vec![Issue::DeliveryDelays, Issue::QualityIssues]);
        assert_eq!(detect_praise(&buffer), vec![Praise::ProductQuality]);
        assert_eq!(
            composer().compose(&comments),
            "Several buyers reported concerns. Delivery delays, quality issues were \
             frequently mentioned. Potential buyers should consider these concerns."
        );
    }

    #[test]
    fn test_short_unrated_comments() {
        let comments = CommentSet::from_texts(["ok", "fine", "meh"]);
        assert_eq!(
            composer().compose(&comments),
            "Buyers had mixed experiences about this product."
        );
    }

    #[test]
    fn test_mixed_keywords_mention_issue_and_praise() {
        let comments = CommentSet::from_texts([
            "Arrived a bit late but works",
            "Decent build quality overall",
        ]);
        assert_eq!(
            composer().compose(&comments),
            "Buyers had mixed experiences. Some concerns about delivery delays, \
             positive feedback on product quality."
        );
    }

    #[test]
    fn test_positive_keywords_name_praise_points() {
        let comments = CommentSet::from_texts([
            "Fast shipping and durable material",
            "Quick delivery, great quality",
        ]);
        assert_eq!(
            composer().compose(&comments),
            "Most buyers were very satisfied with the fast delivery, product quality. \
             Overall, buyers highly recommend this product."
        );
    }

    #[test]
    fn test_minority_low_rating_adds_caution() {
        let comments = CommentSet::from_rated([
            ("Love it, works great", Some(5)),
            ("Nice and easy to use", Some(4)),
            ("Stopped working", Some(2)),
        ]);
        assert_eq!(
            composer().compose(&comments),
            "Most buyers were satisfied. Some reported issues. \
             Several concerns were raised that potential buyers should carefully consider."
        );
    }

    #[test]
    fn test_product_mismatch_detected() {
        let comments = CommentSet::from_texts(["Received the wrong color", "Size was incorrect too"]);
        let summary = composer().compose(&comments);
        assert!(summary.starts_with("Many buyers reported issues. Product mismatch"));
        assert!(summary.ends_with("consider these concerns."));
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(sentiment_phrase(&verdict(Some(1.5), 2, 0, 0, 4)), "Buyers reported significant issues");
        assert_eq!(sentiment_phrase(&verdict(Some(2.5), 2, 1, 2, 4)), "Many buyers were dissatisfied");
        assert_eq!(
            sentiment_phrase(&verdict(Some(3.4), 2, 2, 4, 4)),
            "Buyers had mixed experiences with some reporting issues"
        );
        assert_eq!(sentiment_phrase(&verdict(Some(2.8), 0, 0, 0, 0)), "Buyers had mixed experiences");
        assert_eq!(
            sentiment_phrase(&verdict(Some(3.2), 0, 1, 2, 0)),
            "Buyers generally had positive experiences"
        );
        assert_eq!(sentiment_phrase(&verdict(Some(4.0), 1, 3, 6, 2)), "Most buyers were satisfied");
        assert_eq!(sentiment_phrase(&verdict(Some(4.6), 0, 5, 10, 0)), "Most buyers were very satisfied");
    }

    #[test]
    fn test_keyword_bands() {
        assert_eq!(sentiment_phrase(&verdict(None, 0, 0, 1, 3)), "Many buyers reported issues");
        assert_eq!(sentiment_phrase(&verdict(None, 0, 0, 2, 3)), "Some buyers reported significant concerns");
        assert_eq!(sentiment_phrase(&verdict(None, 0, 0, 0, 0)), "Buyers had mixed experiences");
        assert_eq!(sentiment_phrase(&verdict(None, 0, 0, 3, 2)), "Buyers generally had positive experiences");
        assert_eq!(sentiment_phrase(&verdict(None, 0, 0, 7, 3)), "Most buyers were satisfied");
        assert_eq!(sentiment_phrase(&verdict(None, 0, 0, 4, 0)), "Most buyers were very satisfied");
    }

    #[test]
    fn test_late_suppresses_fast_delivery_praise() {
        assert_eq!(detect_praise("fast but late"), Vec::<Praise>::new());
        assert_eq!(detect_praise("bad quality, quick though"), vec![Praise::FastDelivery]);
    }

    #[test]
    fn test_longest_low_rated_prefers_first_on_tie() {
        let comments = CommentSet::from_rated([
            ("first bad", Some(1)),
            ("great one here", Some(5)),
            ("other bad", Some(2)),
        ]);
        assert_eq!(longest_low_rated(&comments).unwrap().text, "first bad");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("delivery delays, Quality issues"), "Delivery delays, quality issues");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_compose_is_deterministic() {
        let comments = CommentSet::from_rated([
            ("Works fine but the strap broke", Some(2)),
            ("Good value", Some(4)),
        ]);
        assert_eq!(composer().compose(&comments), composer().compose(&comments));
    }
}
