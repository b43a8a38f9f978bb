//! Loads the translation bundle for a language, falling back to the default.

use crate::error::{I18nError, I18nResult};
use crate::i18n::{BundleSource, Language, TranslationBundle, TranslationMetrics};
use std::sync::Arc;
use tracing::{debug, warn};

/// A bundle together with the language it was actually loaded for.
///
/// `language` differs from the requested language when the loader fell back
/// to the default.
#[derive(Debug, Clone)]
pub struct LoadedBundle {
    pub language: Language,
    pub bundle: TranslationBundle,
}

impl LoadedBundle {
    pub fn is_fallback_for(&self, requested: Language) -> bool {
        self.language != requested
    }
}

/// Candidate locations for a language, in the order they are tried.
pub fn candidate_locations(language: Language) -> [String; 2] {
    [
        format!("/translations/{}.json", language.code()),
        format!("translations/{}.json", language.code()),
    ]
}

pub struct TranslationLoader<'a, S: BundleSource + ?Sized> {
    source: &'a S,
    metrics: Arc<TranslationMetrics>,
}

impl<'a, S: BundleSource + ?Sized> TranslationLoader<'a, S> {
    pub fn new(source: &'a S, metrics: Arc<TranslationMetrics>) -> Self {
        Self { source, metrics }
    }

    /// Load the bundle for `requested`, or for the default language if every
    /// candidate for `requested` fails.
    ///
    /// The fallback happens at most once; if the default language cannot be
    /// loaded either, `I18nError::Load` is returned.
    pub async fn load(&self, requested: Language) -> I18nResult<LoadedBundle> {
        let first_error = match self.load_language(requested).await {
            Ok(bundle) => {
                return Ok(LoadedBundle {
                    language: requested,
                    bundle,
                })
            }
            Err(e) => e,
        };

        if requested.is_canonical() {
            return Err(first_error);
        }

        let default = Language::canonical();

        warn!(
            "[i18n] Failed to load {}, falling back to {}",
            requested, default
        );
        self.metrics.record_fallback();

        let bundle = self.load_language(default).await?;
        Ok(LoadedBundle {
            language: default,
            bundle,
        })
    }

    /// Try each candidate location for one language, without fallback.
    async fn load_language(&self, language: Language) -> I18nResult<TranslationBundle> {
        for location in candidate_locations(language) {
            self.metrics.record_retrieval_attempt();

            match self.fetch_bundle(&location).await {
                Ok(bundle) => {
                    debug!("[i18n] Loaded {} from {}", language, location);
                    return Ok(bundle);
                }
                Err(e) => {
                    self.metrics.record_retrieval_failure();
                    warn!("[i18n] {}", e);
                }
            }
        }

        Err(I18nError::Load {
            language: language.code().to_string(),
        })
    }

    async fn fetch_bundle(&self, location: &str) -> I18nResult<TranslationBundle> {
        let text = self.source.fetch(location).await?;

        TranslationBundle::from_json(&text).map_err(|e| I18nError::Parse {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}
