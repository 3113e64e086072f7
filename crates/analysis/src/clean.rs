//! Text cleaning matched to the classifier's training pipeline.
//!
//! The classifier was trained on text that went through exactly this
//! normalization; any drift here silently degrades prediction quality
//! without raising an error, so the steps and their order are fixed:
//! lowercase, strip URL runs, strip non-ASCII-letter characters, split on
//! whitespace, drop stop words, stem, re-join.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

/// Contiguous non-whitespace runs beginning with "http".
static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("valid URL pattern"));

/// Fixed English stop-word list, as used when the classifier was trained.
/// Entries with apostrophes can never match a cleaned token (apostrophes are
/// stripped first) and are kept only for parity with the training list.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Normalizes a message into the token form the classifier expects.
///
/// Deterministic and free of cross-message state; cleaning one message never
/// depends on another.
pub struct TextCleaner {
    stemmer: Stemmer,
}

impl TextCleaner {
    /// Create a cleaner with the English suffix-stripping stemmer.
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Clean one message body.
    ///
    /// The output may legitimately be empty (a punctuation-only message,
    /// for instance); that is valid classifier input, not an error.
    pub fn clean(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let without_urls = URL_REGEX.replace_all(&lowered, "");
        // Non-letter characters are deleted, not blanked: "don't" must
        // tokenize as "dont" the way the model saw it in training, never
        // split into fragments.
        let letters_only: String = without_urls
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();

        letters_only
            .split_whitespace()
            .filter(|token| !STOP_WORD_SET.contains(token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
