use thiserror::Error;

/// Errors produced while loading translations or switching languages.
///
/// `Retrieval` and `Parse` describe a single failed candidate location and are
/// normally recovered inside the loader. Only `Load` escapes initialization.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A candidate location could not be fetched (transport error or non-success status).
    #[error("failed to retrieve {location}: {reason}")]
    Retrieval {
        /// Location that was requested.
        location: String,
        /// Transport error or HTTP status.
        reason: String,
    },

    /// A candidate location returned content that is not a translation bundle.
    #[error("failed to parse translation bundle from {location}: {reason}")]
    Parse {
        /// Location the content came from.
        location: String,
        /// Parser message.
        reason: String,
    },

    /// Every candidate for the language (and its fallback) failed.
    #[error("failed to load translations for '{language}'")]
    Load {
        /// Last language that was attempted.
        language: String,
    },

    /// A language code that is not in the supported set.
    #[error("unsupported language: '{0}'")]
    UnsupportedLanguage(String),
}

pub type I18nResult<T> = Result<T, I18nError>;
