//! Application constants and configuration defaults.

/// Default HTTP server port.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Maximum transcript upload size (10 MB).
pub const MAX_UPLOAD_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Probability mass at or above which a message is labelled Negative.
pub const NEGATIVE_THRESHOLD: f64 = 0.40;

/// Probability mass at or above which a message is labelled Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.45;

/// Ratio used by the positive-boost policy: Positive wins when its mass
/// exceeds this fraction of the Neutral mass.
pub const POSITIVE_BOOST_RATIO: f64 = 0.75;

/// Maximum number of entries in the top-negative ranking.
pub const TOP_NEGATIVE_LIMIT: usize = 3;

/// Minimum length, in characters, of an accepted message body.
pub const MIN_MESSAGE_CHARS: usize = 2;

/// Placeholder WhatsApp inserts in place of stripped media attachments.
pub const MEDIA_PLACEHOLDER: &str = "<media omitted>";

/// Platform-generated notice fragments. A transcript line containing any of
/// these (case-insensitive) is administrative, not a user message.
pub const DEFAULT_SYSTEM_PHRASES: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "end-to-end encrypted",
    "is a contact",
    "you deleted this message",
];

/// File name of the serialized classifier artifact inside the model directory.
pub const MODEL_ARTIFACT_FILE: &str = "model.json";

/// File name of the serialized vectorizer artifact inside the model directory.
pub const VECTORIZER_ARTIFACT_FILE: &str = "tfidf.json";
