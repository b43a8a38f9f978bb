use anyhow::{Context, Result};
use reqwest::Url;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub site_url: Url,

    // Serve bundles from a local site directory instead of over HTTP
    pub translations_dir: Option<String>,

    // Visitor
    pub browser_locale: Option<String>,

    // HTTP
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_url = std::env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

        Ok(Self {
            site_url: Url::parse(&site_url).context(format!("SITE_URL is not a valid URL: {}", site_url))?,

            translations_dir: std::env::var("TRANSLATIONS_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty()),

            // Explicit override first, then the POSIX locale variables
            browser_locale: ["BROWSER_LOCALE", "LC_ALL", "LANG"]
                .iter()
                .filter_map(|name| std::env::var(name).ok())
                .find(|value| !value.trim().is_empty()),

            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve a page path or absolute URL against the site URL.
    pub fn page_url(&self, page: &str) -> Result<Url> {
        self.site_url
            .join(page)
            .context(format!("Invalid page URL: {}", page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "SITE_URL",
        "TRANSLATIONS_DIR",
        "BROWSER_LOCALE",
        "LC_ALL",
        "LANG",
        "REQUEST_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for name in VARS {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults are valid");

        assert_eq!(config.site_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.translations_dir, None);
        assert_eq!(config.browser_locale, None);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_browser_locale_precedence() {
        clear_env();
        std::env::set_var("LANG", "de_DE.UTF-8");
        assert_eq!(Config::from_env().unwrap().browser_locale.as_deref(), Some("de_DE.UTF-8"));

        std::env::set_var("BROWSER_LOCALE", "fr-CA");
        assert_eq!(Config::from_env().unwrap().browser_locale.as_deref(), Some("fr-CA"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_translations_dir_is_ignored() {
        clear_env();
        std::env::set_var("TRANSLATIONS_DIR", "  ");
        assert_eq!(Config::from_env().unwrap().translations_dir, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_site_url() {
        clear_env();
        std::env::set_var("SITE_URL", "not a url");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SITE_URL"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("SITE_URL", "https://forgefit.app");
        std::env::set_var("TRANSLATIONS_DIR", "public");
        std::env::set_var("REQUEST_TIMEOUT_SECS", "3");

        let config = Config::from_env().unwrap();
        assert_eq!(config.page_url("/es/plans").unwrap().as_str(), "https://forgefit.app/es/plans");
        assert_eq!(config.translations_dir.as_deref(), Some("public"));
        assert_eq!(config.request_timeout_secs, 3);
        clear_env();
    }
}
