//! Probability-to-label decision engine.
//!
//! Converts one probability distribution into a final label. The thresholds
//! are asymmetric: negative sentiment triggers at a lower mass than positive.
//! Anything not confidently negative or positive collapses to Neutral.

use moodline_core::constants::{NEGATIVE_THRESHOLD, POSITIVE_BOOST_RATIO, POSITIVE_THRESHOLD};
use moodline_core::types::{DecisionPolicy, Sentiment, SentimentDistribution};

/// Decide the final label and its backing confidence for one distribution.
///
/// Confidence is always the probability mass of the chosen label, with one
/// exception: the threshold policy's Neutral fallback uses the largest mass
/// in the distribution when the classifier reported no Neutral class at all.
pub fn decide(distribution: &SentimentDistribution, policy: DecisionPolicy) -> (Sentiment, f64) {
    match policy {
        DecisionPolicy::Threshold => decide_threshold(distribution),
        DecisionPolicy::PositiveBoost => decide_positive_boost(distribution),
    }
}

/// Reference policy: hard thresholds, first satisfied rule wins.
fn decide_threshold(distribution: &SentimentDistribution) -> (Sentiment, f64) {
    let negative = distribution.probability(Sentiment::Negative);
    if negative >= NEGATIVE_THRESHOLD {
        return (Sentiment::Negative, negative);
    }
    let positive = distribution.probability(Sentiment::Positive);
    if positive >= POSITIVE_THRESHOLD {
        return (Sentiment::Positive, positive);
    }
    let confidence = if distribution.reports(Sentiment::Neutral) {
        distribution.probability(Sentiment::Neutral)
    } else {
        distribution.max_probability()
    };
    (Sentiment::Neutral, confidence)
}

/// Alternate policy: Positive wins once its mass beats a fraction of the
/// Neutral mass; plain argmax otherwise, ties broken by scan order.
fn decide_positive_boost(distribution: &SentimentDistribution) -> (Sentiment, f64) {
    let positive = distribution.probability(Sentiment::Positive);
    let neutral = distribution.probability(Sentiment::Neutral);
    if positive > POSITIVE_BOOST_RATIO * neutral {
        return (Sentiment::Positive, positive);
    }

    let mut best = Sentiment::Positive;
    let mut best_mass = positive;
    for label in Sentiment::SCAN_ORDER {
        let mass = distribution.probability(label);
        if mass > best_mass {
            best = label;
            best_mass = mass;
        }
    }
    (best, best_mass)
}
