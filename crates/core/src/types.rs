//! Shared data model for the Moodline analysis pipeline.
//!
//! Every stage of the pipeline consumes its input and produces a new
//! immutable value; none of the types here are mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment label vocabulary.
///
/// The variant order is load-bearing: whenever several labels tie (argmax
/// over counts or probabilities), the first label in this order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Positive sentiment.
    Positive,
    /// Neutral / undecided sentiment.
    Neutral,
    /// Negative sentiment.
    Negative,
}

impl Sentiment {
    /// Fixed scan order used for every tie-break in the pipeline.
    pub const SCAN_ORDER: [Sentiment; 3] =
        [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Parse a classifier-reported label name, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    /// Canonical label name as reported by the classifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision policy converting a probability distribution into a label.
///
/// Two policies exist in the wild and both are supported; `Threshold` is the
/// reference policy. They can disagree on the same input, so the choice is
/// explicit configuration, never a silent default swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionPolicy {
    /// Hard thresholds: Negative at 0.40, Positive at 0.45, Neutral otherwise.
    #[default]
    Threshold,
    /// Positive wins when its mass exceeds 0.75x the Neutral mass; argmax
    /// over the three classes otherwise.
    PositiveBoost,
}

/// A single user message extracted from a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message body, trimmed. Never empty, never a media placeholder.
    pub text: String,
    /// 0-based position among accepted messages, in order of appearance.
    pub position: usize,
}

/// Probability distribution over the sentiment labels, as reported by the
/// classifier for one message.
///
/// Built from the classifier's `(label, probability)` pairs without assuming
/// any label ordering. Absent labels read as 0, but absence itself stays
/// observable for the Neutral-confidence fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentDistribution {
    positive: Option<f64>,
    neutral: Option<f64>,
    negative: Option<f64>,
    max_probability: f64,
}

impl SentimentDistribution {
    /// Build a distribution from parallel label/probability sequences.
    ///
    /// Labels the vocabulary does not know are ignored for lookup but still
    /// contribute to [`max_probability`](Self::max_probability).
    pub fn from_labelled(labels: &[String], probabilities: &[f64]) -> Self {
        let mut dist = Self {
            positive: None,
            neutral: None,
            negative: None,
            max_probability: 0.0,
        };
        for (label, &prob) in labels.iter().zip(probabilities.iter()) {
            if prob > dist.max_probability {
                dist.max_probability = prob;
            }
            match Sentiment::from_label(label) {
                Some(Sentiment::Positive) => dist.positive = Some(prob),
                Some(Sentiment::Neutral) => dist.neutral = Some(prob),
                Some(Sentiment::Negative) => dist.negative = Some(prob),
                None => {}
            }
        }
        dist
    }

    /// Build a distribution from explicit per-label masses (test + fixture use).
    pub fn new(positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            positive: Some(positive),
            neutral: Some(neutral),
            negative: Some(negative),
            max_probability: positive.max(neutral).max(negative),
        }
    }

    /// Probability mass for a label, defaulting to 0 when the classifier did
    /// not report it.
    pub fn probability(&self, label: Sentiment) -> f64 {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
        .unwrap_or(0.0)
    }

    /// Whether the classifier reported the label at all.
    pub fn reports(&self, label: Sentiment) -> bool {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
        .is_some()
    }

    /// Largest probability mass in the distribution, including masses
    /// attached to labels outside the vocabulary.
    pub fn max_probability(&self) -> f64 {
        self.max_probability
    }
}

/// Final sentiment verdict for one message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// The message this verdict applies to.
    pub message: Message,
    /// Chosen label.
    pub sentiment: Sentiment,
    /// Probability mass backing the chosen label, in [0, 1].
    pub confidence: f64,
}

/// Per-label message counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    /// Number of Positive messages.
    #[serde(rename = "Positive")]
    pub positive: u64,
    /// Number of Neutral messages.
    #[serde(rename = "Neutral")]
    pub neutral: u64,
    /// Number of Negative messages.
    #[serde(rename = "Negative")]
    pub negative: u64,
}

impl SentimentCounts {
    /// Count for one label.
    pub fn get(&self, label: Sentiment) -> u64 {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Increment the count for one label.
    pub fn increment(&mut self, label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }
}

/// Per-label shares of the chat, in percent, rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentPercentages {
    /// Share of Positive messages.
    #[serde(rename = "Positive")]
    pub positive: f64,
    /// Share of Neutral messages.
    #[serde(rename = "Neutral")]
    pub neutral: f64,
    /// Share of Negative messages.
    #[serde(rename = "Negative")]
    pub negative: f64,
}

impl SentimentPercentages {
    /// Percentage for one label.
    pub fn get(&self, label: Sentiment) -> f64 {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

/// Chat-level statistics for one analysis run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReport {
    /// Number of messages that reached classification.
    #[serde(rename = "total_messages")]
    pub total: u64,
    /// Message counts per label.
    #[serde(rename = "sentiment_counts")]
    pub counts: SentimentCounts,
    /// Label shares in percent, 2 decimal places.
    #[serde(rename = "sentiment_percentages")]
    pub percentages: SentimentPercentages,
    /// Label with the highest count. Ties break in
    /// [`Sentiment::SCAN_ORDER`].
    pub overall_mood: Sentiment,
    /// Bounded [0, 100] composite summarizing the chat's sentiment.
    pub health_score: u8,
    /// Up to three Negative results, by descending confidence, original
    /// message order breaking ties.
    #[serde(rename = "top_negative_messages")]
    pub top_negative: Vec<SentimentResult>,
}
