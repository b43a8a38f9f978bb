//! Decides which language a page view is in.

use crate::i18n::Language;

/// Resolves the active language for a page view.
///
/// Precedence, strictest first:
/// 1. first non-empty path segment, if it is a supported code
/// 2. primary subtag of the browser locale, if supported
/// 3. the default language
pub struct LanguageResolver;

impl LanguageResolver {
    pub fn resolve(path: &str, browser_locale: Option<&str>) -> Language {
        Self::from_path(path)
            .or_else(|| browser_locale.and_then(Self::from_locale))
            .unwrap_or_else(Language::canonical)
    }

    /// Language slug at the start of a URL path, if any.
    pub fn from_path(path: &str) -> Option<Language> {
        path.split('/')
            .find(|segment| !segment.is_empty())
            .and_then(|segment| Language::from_code(segment).ok())
    }

    /// Supported language matching a locale's primary subtag.
    ///
    /// Accepts BCP 47 tags (`fr-CA`) as well as POSIX locales (`fr_CA.UTF-8`).
    pub fn from_locale(locale: &str) -> Option<Language> {
        let primary = locale
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        Language::from_code(&primary).ok()
    }
}
