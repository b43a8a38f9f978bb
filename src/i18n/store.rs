//! Session-scoped translation store and key lookup.

use crate::i18n::{Language, LoadedBundle, TranslationBundle, TranslationMetrics};
use std::sync::Arc;
use tracing::debug;

/// Holds the active language and the bundle loaded for this page session.
///
/// Written once when the session is initialized and only read afterwards.
/// `active` comes from resolution; `loaded` is the language the bundle was
/// actually loaded for and differs from `active` after a fallback.
#[derive(Debug)]
pub struct TranslationStore {
    active: Language,
    loaded: Language,
    bundle: TranslationBundle,
    metrics: Arc<TranslationMetrics>,
}

impl TranslationStore {
    pub fn new(active: Language, loaded: LoadedBundle, metrics: Arc<TranslationMetrics>) -> Self {
        Self {
            active,
            loaded: loaded.language,
            bundle: loaded.bundle,
            metrics,
        }
    }

    pub fn active_language(&self) -> Language {
        self.active
    }

    pub fn bundle_language(&self) -> Language {
        self.loaded
    }

    pub fn bundle(&self) -> &TranslationBundle {
        &self.bundle
    }

    /// Translate a dotted key path. A miss returns the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.t_or(key, "")
    }

    /// Translate a dotted key path with an explicit default.
    ///
    /// On a miss the default is returned if it is non-empty, otherwise the key
    /// path itself, so the result is never empty unless the bundle holds an
    /// empty string for that key.
    pub fn t_or<'a>(&'a self, key: &'a str, default: &'a str) -> &'a str {
        if let Some(value) = self.bundle.lookup(key) {
            return value;
        }

        self.metrics.record_key_miss();
        debug!("[i18n] Missing translation for '{}' ({})", key, self.loaded);

        if default.is_empty() {
            key
        } else {
            default
        }
    }
}
