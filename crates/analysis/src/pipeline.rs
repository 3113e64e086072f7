//! The immutable analysis context tying the pipeline together.
//!
//! Constructed once at process start, then shared read-only across requests;
//! since nothing in it is mutated after load, concurrent use needs no
//! locking. Every per-request value stays local to that request.

use crate::classifier::{LinearSentimentClassifier, SentimentClassifier};
use crate::clean::TextCleaner;
use crate::decision;
use crate::error::AnalysisResult;
use crate::extract::{self, ExtractorConfig};
use crate::normalize;
use crate::report;
use encoding_rs::Encoding;
use moodline_core::config::MoodlineConfig;
use moodline_core::types::{ChatReport, DecisionPolicy, SentimentDistribution, SentimentResult};
use std::sync::Arc;
use tracing::{debug, info};

/// Everything one analysis run needs, loaded once and immutable thereafter.
pub struct AnalysisContext {
    classifier: Arc<dyn SentimentClassifier>,
    cleaner: TextCleaner,
    extractor: ExtractorConfig,
    policy: DecisionPolicy,
}

impl AnalysisContext {
    /// Build a context around an already-loaded classifier.
    pub fn new(classifier: Arc<dyn SentimentClassifier>, policy: DecisionPolicy) -> Self {
        Self {
            classifier,
            cleaner: TextCleaner::new(),
            extractor: ExtractorConfig::default(),
            policy,
        }
    }

    /// Override the extractor configuration.
    pub fn with_extractor(mut self, extractor: ExtractorConfig) -> Self {
        self.extractor = extractor;
        self
    }

    /// Load the classifier artifacts named by the configuration and build
    /// the context. Artifact failure here is fatal: without a model the
    /// process cannot serve predictions.
    pub fn from_config(config: &MoodlineConfig) -> AnalysisResult<Self> {
        let classifier = LinearSentimentClassifier::load(
            &config.model.model_path(),
            &config.model.vectorizer_path(),
        )?;
        let extractor = ExtractorConfig::new(
            &config.pipeline.system_phrases,
            &config.pipeline.media_marker,
        );
        Ok(Self::new(Arc::new(classifier), config.pipeline.policy).with_extractor(extractor))
    }

    /// The configured decision policy.
    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    /// Run the pipeline up to per-message verdicts.
    ///
    /// Returns one result per accepted message, in transcript order. The
    /// sequence may be empty when nothing in the transcript parses as a
    /// user message.
    pub fn score_bytes(
        &self,
        bytes: &[u8],
        encoding: Option<&'static Encoding>,
    ) -> AnalysisResult<Vec<SentimentResult>> {
        let lines = normalize::normalize_lines(bytes, encoding);
        let messages = extract::extract_messages(&lines, &self.extractor);
        debug!(
            lines = lines.len(),
            messages = messages.len(),
            "scoring transcript"
        );

        let cleaned: Vec<String> = messages
            .iter()
            .map(|message| self.cleaner.clean(&message.text))
            .collect();
        let probabilities = self.classifier.predict_proba(&cleaned)?;
        let classes = self.classifier.classes();

        Ok(messages
            .into_iter()
            .zip(probabilities)
            .map(|(message, probs)| {
                let distribution = SentimentDistribution::from_labelled(classes, &probs);
                let (sentiment, confidence) = decision::decide(&distribution, self.policy);
                SentimentResult {
                    message,
                    sentiment,
                    confidence,
                }
            })
            .collect())
    }

    /// Run the whole pipeline: bytes in, chat report out.
    ///
    /// Fails with [`crate::AnalysisError::EmptyInput`] when no valid
    /// messages survive extraction.
    pub fn analyze_bytes(
        &self,
        bytes: &[u8],
        encoding: Option<&'static Encoding>,
    ) -> AnalysisResult<ChatReport> {
        let results = self.score_bytes(bytes, encoding)?;
        let chat_report = report::build_report(&results)?;
        info!(
            total = chat_report.total,
            mood = %chat_report.overall_mood,
            health = chat_report.health_score,
            "chat report built"
        );
        Ok(chat_report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use moodline_core::types::Sentiment;

    /// Deterministic stand-in for the trained model: keyword lookup on the
    /// cleaned text, neutral otherwise.
    struct KeywordClassifier {
        classes: Vec<String>,
    }

    impl KeywordClassifier {
        fn new() -> Self {
            Self {
                classes: vec![
                    "Positive".to_string(),
                    "Neutral".to_string(),
                    "Negative".to_string(),
                ],
            }
        }
    }

    impl SentimentClassifier for KeywordClassifier {
        fn predict_proba(&self, texts: &[String]) -> AnalysisResult<Vec<Vec<f64>>> {
            Ok(texts
                .iter()
                .map(|text| {
                    if text.contains("love") || text.contains("great") {
                        vec![0.8, 0.15, 0.05]
                    } else if text.contains("hate") || text.contains("terribl") {
                        vec![0.05, 0.15, 0.8]
                    } else {
                        vec![0.2, 0.6, 0.2]
                    }
                })
                .collect())
        }

        fn classes(&self) -> &[String] {
            &self.classes
        }
    }

    fn context() -> AnalysisContext {
        AnalysisContext::new(Arc::new(KeywordClassifier::new()), DecisionPolicy::Threshold)
    }

    const TRANSCRIPT: &str = "\
1/2/24, 09:00 - Messages and calls are end-to-end encrypted. Tap to learn more.
1/2/24, 09:01 - Ana: I love this plan
1/2/24, 09:02 - Ben: <Media omitted>
1/2/24, 09:03 - Ben: I hate waiting so long
1/2/24, 09:04 - Ana: see you at the station
";

    #[test]
    fn end_to_end_report_over_android_transcript() {
        let report = context()
            .analyze_bytes(TRANSCRIPT.as_bytes(), None)
            .expect("report");

        assert_eq!(report.total, 3);
        assert_eq!(report.counts.positive, 1);
        assert_eq!(report.counts.negative, 1);
        assert_eq!(report.counts.neutral, 1);
        assert_eq!(report.overall_mood, Sentiment::Positive);
        assert_eq!(report.top_negative.len(), 1);
        assert_eq!(report.top_negative[0].message.text, "I hate waiting so long");
    }

    #[test]
    fn per_message_results_keep_transcript_order() {
        let results = context()
            .score_bytes(TRANSCRIPT.as_bytes(), None)
            .expect("results");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].message.position, 0);
        assert_eq!(results[0].sentiment, Sentiment::Positive);
        assert_eq!(results[1].sentiment, Sentiment::Negative);
        assert_eq!(results[2].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn transcript_without_messages_reports_empty_input() {
        let err = context()
            .analyze_bytes(b"no transcript shape at all\n", None)
            .err()
            .expect("must fail");
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[test]
    fn ios_transcript_with_narrow_spaces_parses_the_same() {
        let transcript =
            "[1/2/24, 9:01:10\u{202F}AM] Ana: I love this plan\n[1/2/24, 9:03:00\u{202F}AM] Ben: I hate waiting so long\n";
        let report = context()
            .analyze_bytes(transcript.as_bytes(), None)
            .expect("report");
        assert_eq!(report.total, 2);
        assert_eq!(report.counts.positive, 1);
        assert_eq!(report.counts.negative, 1);
    }
}
