//! Internationalization for the marketing site.
//!
//! The pipeline for a page load is:
//!
//! - `resolver`: pick the language from the URL slug, browser locale, or default
//! - `loader`: fetch the bundle for that language, falling back to the default once
//! - `store`: hold the bundle for the session and answer key lookups
//! - `applier`: write translations into marked elements and page metadata
//! - `links`: prefix internal links with the language slug
//! - `switcher`: navigate to the same page in another language
//!
//! `session` wires these together; `registry` and `language` define the
//! supported set, `metrics` and `validator` support diagnostics.
//!
//! # Example
//!
//! ```rust,ignore
//! use site_i18n::i18n::{HttpSource, I18nSession, PageContext};
//!
//! let page = PageContext::new(url, Some("fr-CA".to_string()));
//! let source = HttpSource::new(page.url.clone(), timeout)?;
//! let session = I18nSession::initialize(&page, &mut document, &source).await?;
//! let title = session.t("hero.title");
//! ```

mod applier;
mod bundle;
mod language;
mod links;
mod loader;
mod metrics;
mod registry;
mod resolver;
mod session;
mod source;
mod store;
mod switcher;
mod validator;

pub use applier::{DomApplier, RenderTarget, HTML_ATTR, KEY_ATTR, NEWLINE_ATTR};
pub use bundle::{PageMeta, TranslationBundle};
pub use language::{language_name, Language};
pub use links::{has_language_prefix, is_external, localize_href, LinkRewriter};
pub use loader::{candidate_locations, LoadedBundle, TranslationLoader};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::LanguageResolver;
pub use session::{I18nSession, PageContext};
pub use source::{BundleSource, FsSource, HttpSource};
pub use store::TranslationStore;
pub use switcher::{LanguageSwitcher, Navigator, RecordingNavigator};
pub use validator::{BundleValidator, ValidationReport};
