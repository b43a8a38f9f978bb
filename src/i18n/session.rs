//! Page session: runs the localization pipeline once per page load and
//! exposes the lookup and switching API to the rest of the page.

use crate::dom::Document;
use crate::error::I18nResult;
use crate::i18n::{
    language_name, BundleSource, DomApplier, Language, LanguageResolver, LanguageSwitcher,
    LinkRewriter, MetricsReport, Navigator, TranslationLoader, TranslationMetrics,
    TranslationStore,
};
use reqwest::Url;
use std::sync::Arc;
use tracing::info;

/// What the page knows about the visit before localization starts.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub url: Url,
    /// Locale reported by the browser (e.g. `fr-CA`), if any.
    pub browser_locale: Option<String>,
}

impl PageContext {
    pub fn new(url: Url, browser_locale: Option<String>) -> Self {
        Self {
            url,
            browser_locale,
        }
    }
}

/// Localization state for one page load.
///
/// Built by [`I18nSession::initialize`] and never mutated afterwards; a
/// language switch navigates away and a new session is built for the new page.
pub struct I18nSession {
    page_url: Url,
    store: TranslationStore,
    metrics: Arc<TranslationMetrics>,
}

impl I18nSession {
    /// Resolve the language, load its bundle and localize `document`.
    ///
    /// The document's `lang` attribute reflects the resolved language even when
    /// the bundle had to come from the default language. Fails only when the
    /// default language itself cannot be loaded.
    pub async fn initialize<S: BundleSource + ?Sized>(
        page: &PageContext,
        document: &mut Document,
        source: &S,
    ) -> I18nResult<Self> {
        let active = LanguageResolver::resolve(page.url.path(), page.browser_locale.as_deref());
        document.set_lang(active.code());

        let metrics = Arc::new(TranslationMetrics::new());
        let loaded = TranslationLoader::new(source, metrics.clone())
            .load(active)
            .await?;
        if loaded.is_fallback_for(active) {
            info!(
                "[i18n] Page language {} is showing {} text",
                active, loaded.language
            );
        }

        let session = Self {
            page_url: page.url.clone(),
            store: TranslationStore::new(active, loaded, metrics.clone()),
            metrics,
        };

        session.apply(document);
        info!("[i18n] Initialized with language: {}", active);

        Ok(session)
    }

    /// Localize text, metadata and links. Safe to call again on the same page.
    pub fn apply(&self, document: &mut Document) {
        DomApplier::apply(document, &self.store);
        LinkRewriter::rewrite(document, self.store.active_language());
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.store.t(key)
    }

    pub fn t_or<'a>(&'a self, key: &'a str, default: &'a str) -> &'a str {
        self.store.t_or(key, default)
    }

    /// Navigate to this page in another language.
    pub fn switch_to<N: Navigator + ?Sized>(&self, code: &str, navigator: &mut N) -> I18nResult<()> {
        LanguageSwitcher::switch_to(&self.page_url, code, navigator)
    }

    /// The resolved language of this page view.
    pub fn current_language(&self) -> Language {
        self.store.active_language()
    }

    /// The language the bundle was loaded for; differs from
    /// `current_language` after a fallback.
    pub fn bundle_language(&self) -> Language {
        self.store.bundle_language()
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    pub fn language_name(code: &str) -> &str {
        language_name(code)
    }

    pub fn supported_languages() -> Vec<Language> {
        Language::supported()
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}
