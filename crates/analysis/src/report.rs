//! Aggregation of per-message results into a chat report.

use crate::error::{AnalysisError, AnalysisResult};
use moodline_core::constants::TOP_NEGATIVE_LIMIT;
use moodline_core::types::{
    ChatReport, Sentiment, SentimentCounts, SentimentPercentages, SentimentResult,
};

/// Fold an ordered sequence of per-message results into a chat report.
///
/// Fails with [`AnalysisError::EmptyInput`] when the sequence is empty; the
/// caller at the API boundary maps that to a user-facing "no valid messages
/// found" response instead of dividing by zero.
pub fn build_report(results: &[SentimentResult]) -> AnalysisResult<ChatReport> {
    if results.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut counts = SentimentCounts::default();
    for result in results {
        counts.increment(result.sentiment);
    }
    let total = results.len() as u64;

    let percentages = SentimentPercentages {
        positive: share(counts.positive, total),
        neutral: share(counts.neutral, total),
        negative: share(counts.negative, total),
    };

    Ok(ChatReport {
        total,
        counts,
        percentages,
        overall_mood: overall_mood(&counts),
        health_score: health_score(&percentages),
        top_negative: top_negative(results),
    })
}

/// Label share in percent, rounded to 2 decimal places.
fn share(count: u64, total: u64) -> f64 {
    round2(count as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Label with the highest count; ties break in [`Sentiment::SCAN_ORDER`].
fn overall_mood(counts: &SentimentCounts) -> Sentiment {
    let mut best = Sentiment::SCAN_ORDER[0];
    let mut best_count = counts.get(best);
    for label in Sentiment::SCAN_ORDER {
        if counts.get(label) > best_count {
            best = label;
            best_count = counts.get(label);
        }
    }
    best
}

/// Linear composite on the rounded percentages: full weight to positive,
/// half weight to neutral, negative penalized one-for-one. The clamp guards
/// degenerate rounding only; percentages sum to at most 100 by construction.
fn health_score(percentages: &SentimentPercentages) -> u8 {
    let raw = percentages.positive + 0.5 * percentages.neutral - percentages.negative;
    (raw.round() as i64).clamp(0, 100) as u8
}

/// All Negative results by descending confidence, original order breaking
/// ties (stable sort), truncated to the ranking limit.
fn top_negative(results: &[SentimentResult]) -> Vec<SentimentResult> {
    let mut negatives: Vec<SentimentResult> = results
        .iter()
        .filter(|r| r.sentiment == Sentiment::Negative)
        .cloned()
        .collect();
    negatives.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    negatives.truncate(TOP_NEGATIVE_LIMIT);
    negatives
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodline_core::types::Message;

    fn result(position: usize, sentiment: Sentiment, confidence: f64) -> SentimentResult {
        SentimentResult {
            message: Message {
                text: format!("message {position}"),
                position,
            },
            sentiment,
            confidence,
        }
    }

    #[test]
    fn empty_input_fails_instead_of_dividing_by_zero() {
        let err = build_report(&[]).err().expect("empty must fail");
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[test]
    fn counts_percentages_score_and_mood_for_two_positive_one_negative() {
        let results = vec![
            result(0, Sentiment::Positive, 0.6),
            result(1, Sentiment::Positive, 0.7),
            result(2, Sentiment::Negative, 0.5),
        ];
        let report = build_report(&results).expect("report");

        assert_eq!(report.total, 3);
        assert_eq!(report.counts.positive, 2);
        assert_eq!(report.counts.neutral, 0);
        assert_eq!(report.counts.negative, 1);
        assert_eq!(report.percentages.positive, 66.67);
        assert_eq!(report.percentages.neutral, 0.0);
        assert_eq!(report.percentages.negative, 33.33);
        // round(66.67 + 0 - 33.33) = round(33.34) = 33
        assert_eq!(report.health_score, 33);
        assert_eq!(report.overall_mood, Sentiment::Positive);
    }

    #[test]
    fn all_positive_chat_scores_one_hundred() {
        let results = vec![
            result(0, Sentiment::Positive, 0.9),
            result(1, Sentiment::Positive, 0.8),
        ];
        let report = build_report(&results).expect("report");
        assert_eq!(report.health_score, 100);
        assert!(report.top_negative.is_empty());
    }

    #[test]
    fn all_negative_chat_clamps_to_zero() {
        let results = vec![result(0, Sentiment::Negative, 0.9)];
        let report = build_report(&results).expect("report");
        assert_eq!(report.health_score, 0);
    }

    #[test]
    fn mood_ties_break_in_fixed_scan_order() {
        let positive_vs_negative = build_report(&[
            result(0, Sentiment::Negative, 0.5),
            result(1, Sentiment::Positive, 0.5),
        ])
        .expect("report");
        assert_eq!(positive_vs_negative.overall_mood, Sentiment::Positive);

        let neutral_vs_negative = build_report(&[
            result(0, Sentiment::Negative, 0.5),
            result(1, Sentiment::Neutral, 0.5),
        ])
        .expect("report");
        assert_eq!(neutral_vs_negative.overall_mood, Sentiment::Neutral);
    }

    #[test]
    fn top_negative_is_sorted_truncated_and_stable() {
        let results = vec![
            result(0, Sentiment::Negative, 0.55),
            result(1, Sentiment::Positive, 0.9),
            result(2, Sentiment::Negative, 0.80),
            result(3, Sentiment::Negative, 0.55),
            result(4, Sentiment::Negative, 0.70),
        ];
        let report = build_report(&results).expect("report");

        assert_eq!(report.top_negative.len(), TOP_NEGATIVE_LIMIT);
        assert_eq!(report.top_negative[0].message.position, 2);
        assert_eq!(report.top_negative[1].message.position, 4);
        // 0.55 tie: original order puts position 0 ahead of position 3.
        assert_eq!(report.top_negative[2].message.position, 0);
    }
}
