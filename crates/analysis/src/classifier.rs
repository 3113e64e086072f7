//! Sentiment classifier interface and the loadable linear model.
//!
//! The pipeline treats the classifier as a black box behind
//! [`SentimentClassifier`]: cleaned texts in, one probability distribution
//! per text out. The concrete implementation shipped here is a TF-IDF
//! vectorizer feeding a multinomial logistic regression, both restored from
//! opaque serialized artifacts at process start and immutable afterwards,
//! which makes shared concurrent use safe without locking.

use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Black-box scoring interface owed by the classifier collaborator.
///
/// The contract: each returned row is aligned with [`classes`](Self::classes),
/// each value lies in [0, 1], and rows sum to 1. The pipeline relies on the
/// alignment but does not enforce the distribution invariants.
pub trait SentimentClassifier: Send + Sync {
    /// Compute one probability distribution per cleaned input text.
    ///
    /// Empty strings are valid inputs and must still produce a distribution.
    fn predict_proba(&self, texts: &[String]) -> AnalysisResult<Vec<Vec<f64>>>;

    /// Label names actually produced, aligned with `predict_proba` rows.
    fn classes(&self) -> &[String];
}

/// Serialized TF-IDF vectorizer artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// Term to feature-index mapping.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    pub idf: Vec<f64>,
    /// Inclusive n-gram range used at training time.
    pub ngram_range: (usize, usize),
}

/// Serialized logistic regression artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Class label names, aligned with the coefficient rows.
    pub classes: Vec<String>,
    /// One coefficient row per class, one column per feature.
    pub coef: Vec<Vec<f64>>,
    /// One intercept per class.
    pub intercept: Vec<f64>,
}

/// TF-IDF vectorizer restored from a serialized artifact.
///
/// Mirrors the vectorizer the model was trained with: word n-grams over
/// whitespace tokens, term-frequency times idf, L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_min: usize,
    ngram_max: usize,
}

impl TfidfVectorizer {
    /// Validate and adopt a deserialized artifact.
    pub fn from_artifact(artifact: VectorizerArtifact) -> AnalysisResult<Self> {
        let (ngram_min, ngram_max) = artifact.ngram_range;
        if ngram_min == 0 || ngram_min > ngram_max {
            return Err(AnalysisError::ModelLoading(format!(
                "invalid ngram range ({ngram_min}, {ngram_max})"
            )));
        }
        let features = artifact.idf.len();
        if let Some((term, &index)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= features)
        {
            return Err(AnalysisError::ModelLoading(format!(
                "vocabulary term {term:?} maps to index {index} beyond {features} features"
            )));
        }
        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_min,
            ngram_max,
        })
    }

    /// Number of features the vectorizer produces.
    pub fn features(&self) -> usize {
        self.idf.len()
    }

    /// Transform one cleaned text into a sparse L2-normalized tf-idf vector
    /// of `(feature_index, value)` pairs.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut counts: HashMap<usize, f64> = HashMap::new();

        for n in self.ngram_min..=self.ngram_max {
            if tokens.len() < n {
                break;
            }
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&index) = self.vocabulary.get(&term) {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut weighted: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();

        let norm: f64 = weighted.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in &mut weighted {
                *value /= norm;
            }
        }
        weighted.sort_by_key(|&(index, _)| index);
        weighted
    }
}

/// Multinomial logistic regression over tf-idf features, restored from two
/// serialized artifacts.
pub struct LinearSentimentClassifier {
    vectorizer: TfidfVectorizer,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    classes: Vec<String>,
}

impl LinearSentimentClassifier {
    /// Load the classifier and vectorizer from their artifact files.
    ///
    /// Any failure here is fatal for the caller: the process cannot serve
    /// predictions without a model.
    pub fn load(model_path: &Path, vectorizer_path: &Path) -> AnalysisResult<Self> {
        let model: ModelArtifact = read_artifact(model_path)?;
        let vectorizer: VectorizerArtifact = read_artifact(vectorizer_path)?;
        let classifier = Self::from_artifacts(model, vectorizer)?;
        info!(
            classes = ?classifier.classes,
            features = classifier.vectorizer.features(),
            "sentiment model loaded"
        );
        Ok(classifier)
    }

    /// Assemble a classifier from already-deserialized artifacts.
    pub fn from_artifacts(
        model: ModelArtifact,
        vectorizer: VectorizerArtifact,
    ) -> AnalysisResult<Self> {
        let vectorizer = TfidfVectorizer::from_artifact(vectorizer)?;
        let classes = model.classes;
        if classes.is_empty() {
            return Err(AnalysisError::ModelLoading(
                "model artifact declares no classes".to_string(),
            ));
        }
        if model.coef.len() != classes.len() || model.intercept.len() != classes.len() {
            return Err(AnalysisError::ModelLoading(format!(
                "class count mismatch: {} classes, {} coefficient rows, {} intercepts",
                classes.len(),
                model.coef.len(),
                model.intercept.len()
            )));
        }
        if let Some(row) = model
            .coef
            .iter()
            .find(|row| row.len() != vectorizer.features())
        {
            return Err(AnalysisError::ModelLoading(format!(
                "coefficient row has {} columns, vectorizer has {} features",
                row.len(),
                vectorizer.features()
            )));
        }
        Ok(Self {
            vectorizer,
            coef: model.coef,
            intercept: model.intercept,
            classes,
        })
    }

    fn score(&self, features: &[(usize, f64)]) -> Vec<f64> {
        let mut scores: Vec<f64> = self.intercept.clone();
        for (class_idx, row) in self.coef.iter().enumerate() {
            for &(feature, value) in features {
                scores[class_idx] += row[feature] * value;
            }
        }
        softmax(&scores)
    }
}

impl SentimentClassifier for LinearSentimentClassifier {
    fn predict_proba(&self, texts: &[String]) -> AnalysisResult<Vec<Vec<f64>>> {
        Ok(texts
            .iter()
            .map(|text| self.score(&self.vectorizer.transform(text)))
            .collect())
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> AnalysisResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AnalysisError::ModelLoading(format!("cannot read artifact {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        AnalysisError::ModelLoading(format!("cannot parse artifact {}: {e}", path.display()))
    })
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_classifier() -> LinearSentimentClassifier {
        let vectorizer = VectorizerArtifact {
            vocabulary: HashMap::from([
                ("love".to_string(), 0),
                ("hate".to_string(), 1),
                ("love love".to_string(), 2),
            ]),
            idf: vec![1.0, 1.0, 1.5],
            ngram_range: (1, 2),
        };
        let model = ModelArtifact {
            classes: vec![
                "Negative".to_string(),
                "Neutral".to_string(),
                "Positive".to_string(),
            ],
            coef: vec![
                vec![-2.0, 3.0, -1.0],
                vec![0.0, 0.0, 0.0],
                vec![3.0, -2.0, 1.0],
            ],
            intercept: vec![0.0, 0.2, 0.0],
        };
        LinearSentimentClassifier::from_artifacts(model, vectorizer).expect("valid artifacts")
    }

    #[test]
    fn probabilities_sum_to_one_and_align_with_classes() {
        let classifier = tiny_classifier();
        let probs = classifier
            .predict_proba(&["love love".to_string()])
            .expect("predict");
        assert_eq!(probs.len(), 1);
        assert_eq!(probs[0].len(), classifier.classes().len());
        let sum: f64 = probs[0].iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        // "love" features point at the Positive row (index 2).
        assert!(probs[0][2] > probs[0][0]);
    }

    #[test]
    fn empty_text_is_valid_input() {
        let classifier = tiny_classifier();
        let probs = classifier
            .predict_proba(&[String::new()])
            .expect("predict on empty");
        // Only the intercepts remain; Neutral has the largest one.
        let max_idx = probs[0]
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).expect("finite"))
            .map(|(i, _)| i)
            .expect("non-empty row");
        assert_eq!(classifier.classes()[max_idx], "Neutral");
    }

    #[test]
    fn bigrams_fire_when_in_vocabulary() {
        let classifier = tiny_classifier();
        let features = classifier.vectorizer.transform("love love");
        let indices: Vec<usize> = features.iter().map(|&(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
        // L2 norm of the weighted vector is 1.
        let norm: f64 = features.iter().map(|(_, v)| v * v).sum::<f64>();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_artifacts_are_rejected() {
        let vectorizer = VectorizerArtifact {
            vocabulary: HashMap::from([("love".to_string(), 0)]),
            idf: vec![1.0],
            ngram_range: (1, 1),
        };
        let model = ModelArtifact {
            classes: vec!["Positive".to_string(), "Negative".to_string()],
            coef: vec![vec![1.0, 2.0], vec![0.5, 0.1]],
            intercept: vec![0.0, 0.0],
        };
        let err = LinearSentimentClassifier::from_artifacts(model, vectorizer)
            .err()
            .expect("should reject");
        assert!(matches!(err, AnalysisError::ModelLoading(_)));
    }

    #[test]
    fn out_of_range_vocabulary_index_is_rejected() {
        let artifact = VectorizerArtifact {
            vocabulary: HashMap::from([("love".to_string(), 5)]),
            idf: vec![1.0],
            ngram_range: (1, 1),
        };
        assert!(TfidfVectorizer::from_artifact(artifact).is_err());
    }
}
