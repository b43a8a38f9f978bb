//! Prefixes internal links with the active language slug.

use crate::dom::Document;
use crate::i18n::{Language, LanguageRegistry};
use regex::Regex;
use std::sync::OnceLock;

/// Paths that always land on the localized index of their section.
const SECTION_PATHS: [&str; 2] = ["privacy", "terms"];

static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();

fn scheme_regex() -> &'static Regex {
    SCHEME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("Invalid scheme regex")
    })
}

/// Whether an href points off-site: any URL scheme (`https:`, `mailto:`, `tel:`)
/// or a protocol-relative `//host/...` reference.
pub fn is_external(href: &str) -> bool {
    href.starts_with("//") || scheme_regex().is_match(href)
}

/// Whether an href already starts with some supported language slug.
pub fn has_language_prefix(href: &str) -> bool {
    LanguageRegistry::get().list().iter().any(|lang| {
        href.strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(lang.code))
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Localized form of an href, or `None` when it must be left as is.
pub fn localize_href(href: &str, active: Language) -> Option<String> {
    if href.starts_with('#') || is_external(href) || has_language_prefix(href) {
        return None;
    }

    let code = active.code();

    for section in SECTION_PATHS {
        let prefix = format!("/{}/", section);
        if href.starts_with(&prefix) {
            return Some(format!("/{}/{}/", code, section));
        }
    }

    if href.starts_with('/') {
        Some(format!("/{}{}", code, href))
    } else {
        Some(format!("/{}/{}", code, href))
    }
}

pub struct LinkRewriter;

impl LinkRewriter {
    /// Rewrite root-relative anchors to carry the active language.
    ///
    /// Only anchors whose href starts with `/` or `#` are considered. Running
    /// it twice is a no-op the second time because rewritten links carry a
    /// language prefix.
    pub fn rewrite(document: &mut Document, active: Language) {
        for id in document.elements_by_tag("a") {
            let element = document.element_mut(id);
            let Some(href) = element.attr("href") else {
                continue;
            };
            if !(href.starts_with('/') || href.starts_with('#')) {
                continue;
            }

            if let Some(localized) = localize_href(href, active) {
                element.set_attr("href", &localized);
            }
        }
    }
}
