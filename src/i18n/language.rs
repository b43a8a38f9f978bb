//! Language type: a code validated against the registry.
//!
//! A `Language` can only be built from a code that is registered,
//! which is how the rest of the crate keeps the active language inside the
//! supported set.

use crate::error::{I18nError, I18nResult};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;

/// A validated, supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err(I18nError::UnsupportedLanguage)` otherwise
    pub fn from_code(code: &str) -> I18nResult<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => Err(I18nError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// The default language, used when nothing else matches and as the
    /// loader's fallback.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Every supported language, in registry order.
    pub fn supported() -> Vec<Language> {
        LanguageRegistry::get()
            .list()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not registered, which cannot happen for a
    /// `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native-script name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Display name for a language code.
///
/// Returns the native-script name for supported codes and the code itself
/// for anything else, so a picker never renders an empty label.
pub fn language_name(code: &str) -> &str {
    LanguageRegistry::get()
        .get_by_code(code)
        .map(|config| config.native_name)
        .unwrap_or(code)
}
