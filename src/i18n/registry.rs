//! Language registry: the fixed set of languages the site is published in.
//!
//! The registry is built once on first access and never changes afterwards,
//! so it is safe to hand out `&'static` references to its entries. Order is
//! significant: it is the order languages are offered in a language picker.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also used as the URL slug (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "German")
    pub name: &'static str,

    /// Native-script name shown in the language picker (e.g., "Deutsch")
    pub native_name: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Matching is exact: URL slugs are lower-case and so are the codes.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages, in registry order.
    pub fn list(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the built-in table does not declare exactly one canonical
    /// language.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

fn language(code: &'static str, name: &'static str, native_name: &'static str) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
        is_canonical: false,
    }
}

/// The languages the site ships translations for. English is the default.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            is_canonical: true,
            ..language("en", "English", "English")
        },
        language("es", "Spanish", "Español"),
        language("pt", "Portuguese", "Português"),
        language("de", "German", "Deutsch"),
        language("fr", "French", "Français"),
        language("it", "Italian", "Italiano"),
        language("ja", "Japanese", "日本語"),
        language("ko", "Korean", "한국어"),
        language("zh", "Chinese", "中文"),
        language("ru", "Russian", "Русский"),
        language("tr", "Turkish", "Türkçe"),
    ]
}
