//! Explicit language changes via full navigation.

use crate::error::I18nResult;
use crate::i18n::{Language, LanguageResolver};
use reqwest::Url;
use tracing::{info, warn};

/// Performs a full navigation to a new page.
///
/// Switching language never mutates the running session; the page is
/// reloaded at the new URL and initialization starts over.
pub trait Navigator {
    fn navigate(&mut self, url: Url);
}

/// Records navigations instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<Url>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: Url) {
        self.visited.push(url);
    }
}

pub struct LanguageSwitcher;

impl LanguageSwitcher {
    /// The current URL with its language slug replaced by `target`.
    ///
    /// Query string and fragment are preserved. A path without a slug gains
    /// one; `/es/plans` becomes `/de/plans`, and `/` becomes `/de`.
    pub fn localized_url(current: &Url, target: Language) -> Url {
        let mut segments: Vec<&str> = current
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        if LanguageResolver::from_path(current.path()).is_some() {
            segments.remove(0);
        }

        let path = if segments.is_empty() {
            format!("/{}", target.code())
        } else {
            format!("/{}/{}", target.code(), segments.join("/"))
        };

        let mut url = current.clone();
        url.set_path(&path);
        url
    }

    /// Navigate to the current page in the language `code`.
    ///
    /// An unsupported code is logged and returned as an error; nothing is
    /// navigated and the caller may ignore it.
    pub fn switch_to<N: Navigator + ?Sized>(
        current: &Url,
        code: &str,
        navigator: &mut N,
    ) -> I18nResult<()> {
        let target = match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                warn!("[i18n] Unsupported language: {}", code);
                return Err(e);
            }
        };

        let url = Self::localized_url(current, target);
        info!("[i18n] Switching language to {}: {}", target, url);
        navigator.navigate(url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::I18nError;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid url")
    }

    fn lang(code: &str) -> Language {
        Language::from_code(code).unwrap()
    }

    #[test]
    fn test_replaces_existing_slug() {
        let next = LanguageSwitcher::localized_url(&url("https://forgefit.app/es/plans"), lang("de"));
        assert_eq!(next.as_str(), "https://forgefit.app/de/plans");
    }

    #[test]
    fn test_adds_slug_to_unprefixed_path() {
        let next = LanguageSwitcher::localized_url(&url("https://forgefit.app/pricing/"), lang("fr"));
        assert_eq!(next.as_str(), "https://forgefit.app/fr/pricing");
    }

    #[test]
    fn test_root_path() {
        let next = LanguageSwitcher::localized_url(&url("https://forgefit.app/"), lang("ja"));
        assert_eq!(next.as_str(), "https://forgefit.app/ja");

        let next = LanguageSwitcher::localized_url(&url("https://forgefit.app/es"), lang("ja"));
        assert_eq!(next.as_str(), "https://forgefit.app/ja");
    }

    #[test]
    fn test_preserves_query_and_fragment() {
        let next = LanguageSwitcher::localized_url(
            &url("https://forgefit.app/es/plans?utm=ad&x=1#annual"),
            lang("pt"),
        );
        assert_eq!(next.as_str(), "https://forgefit.app/pt/plans?utm=ad&x=1#annual");
    }

    #[test]
    fn test_only_leading_slug_is_stripped() {
        let next = LanguageSwitcher::localized_url(&url("https://forgefit.app/blog/es/post"), lang("it"));
        assert_eq!(next.as_str(), "https://forgefit.app/it/blog/es/post");
    }

    #[test]
    fn test_switch_to_navigates() {
        let mut navigator = RecordingNavigator::default();
        LanguageSwitcher::switch_to(&url("https://forgefit.app/es/plans"), "ko", &mut navigator)
            .expect("supported language");

        assert_eq!(navigator.visited.len(), 1);
        assert_eq!(navigator.visited[0].path(), "/ko/plans");
    }

    #[test]
    fn test_switch_to_unsupported_is_noop() {
        let mut navigator = RecordingNavigator::default();
        let result = LanguageSwitcher::switch_to(&url("https://forgefit.app/es/plans"), "zz", &mut navigator);

        assert!(matches!(result, Err(I18nError::UnsupportedLanguage(code)) if code == "zz"));
        assert!(navigator.visited.is_empty());
    }
}
