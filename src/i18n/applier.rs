//! Applies translations to marked elements of a document.

use crate::dom::{Document, Element};
use crate::i18n::TranslationStore;

/// Primary marker: the element's key path.
pub const KEY_ATTR: &str = "data-i18n";
/// Render the translation as raw HTML.
pub const HTML_ATTR: &str = "data-i18n-html";
/// Newline marker: key path whose `\n`s become `<br>`.
pub const NEWLINE_ATTR: &str = "data-i18n-nl";

/// Where a translated string is written on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    Html,
    FormValue,
    Placeholder,
    Title,
    AriaLabel,
    TextContent,
}

impl RenderTarget {
    /// Pick the target for an element. The order is fixed: existing markup
    /// relies on placeholder winning over title, and title over aria-label.
    pub fn for_element(element: &Element) -> Self {
        if element.has_attr(HTML_ATTR) {
            RenderTarget::Html
        } else if element.is_form_control() {
            RenderTarget::FormValue
        } else if element.has_attr("placeholder") {
            RenderTarget::Placeholder
        } else if element.has_attr("title") {
            RenderTarget::Title
        } else if element.has_attr("aria-label") {
            RenderTarget::AriaLabel
        } else {
            RenderTarget::TextContent
        }
    }

    pub fn write(self, element: &mut Element, translation: &str) {
        match self {
            RenderTarget::Html => element.set_html(translation),
            RenderTarget::FormValue => element.set_value(translation),
            RenderTarget::Placeholder => element.set_attr("placeholder", translation),
            RenderTarget::Title => element.set_attr("title", translation),
            RenderTarget::AriaLabel => element.set_attr("aria-label", translation),
            RenderTarget::TextContent => element.set_text(translation),
        }
    }
}

pub struct DomApplier;

impl DomApplier {
    /// Translate every marked element and the page metadata.
    ///
    /// Running it again with the same store leaves the document unchanged.
    pub fn apply(document: &mut Document, store: &TranslationStore) {
        Self::apply_meta(document, store);

        for id in document.elements_with_attr(KEY_ATTR) {
            let element = document.element_mut(id);
            let target = RenderTarget::for_element(element);
            let key = element.attr(KEY_ATTR).unwrap_or_default().to_string();

            let translation = store.t(&key);
            if translation.is_empty() {
                continue;
            }
            target.write(element, translation);
        }

        for id in document.elements_with_attr(NEWLINE_ATTR) {
            let element = document.element_mut(id);
            let key = element.attr(NEWLINE_ATTR).unwrap_or_default().to_string();

            let translation = store.t(&key);
            if translation.is_empty() {
                continue;
            }
            element.set_html(&translation.replace('\n', "<br>"));
        }
    }

    fn apply_meta(document: &mut Document, store: &TranslationStore) {
        let meta = store.bundle().meta();

        if let Some(title) = meta.title {
            document.set_title(&title);
        }

        if let Some(description) = meta.description {
            if let Some(element) = document.meta_description_mut() {
                element.set_attr("content", &description);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Content;
    use crate::i18n::{Language, LoadedBundle, TranslationBundle, TranslationMetrics};
    use std::sync::Arc;

    fn store(json: &str) -> TranslationStore {
        let loaded = LoadedBundle {
            language: Language::SPANISH,
            bundle: TranslationBundle::from_json(json).unwrap(),
        };
        TranslationStore::new(Language::SPANISH, loaded, Arc::new(TranslationMetrics::new()))
    }

    fn marked(tag: &str, key: &str) -> Element {
        Element::new(tag).with_attr(KEY_ATTR, key)
    }

    // ==================== RenderTarget Tests ====================

    #[test]
    fn test_render_target_precedence() {
        let html_input = marked("input", "k").with_attr(HTML_ATTR, "");
        assert_eq!(RenderTarget::for_element(&html_input), RenderTarget::Html);

        let input = marked("input", "k").with_attr("placeholder", "Email");
        assert_eq!(RenderTarget::for_element(&input), RenderTarget::FormValue);

        let all = marked("span", "k")
            .with_attr("aria-label", "a")
            .with_attr("title", "t")
            .with_attr("placeholder", "p");
        assert_eq!(RenderTarget::for_element(&all), RenderTarget::Placeholder);

        let titled = marked("span", "k").with_attr("aria-label", "a").with_attr("title", "t");
        assert_eq!(RenderTarget::for_element(&titled), RenderTarget::Title);

        let labelled = marked("button", "k").with_attr("aria-label", "a");
        assert_eq!(RenderTarget::for_element(&labelled), RenderTarget::AriaLabel);

        assert_eq!(RenderTarget::for_element(&marked("h1", "k")), RenderTarget::TextContent);
    }

    // ==================== apply Tests ====================

    #[test]
    fn test_apply_text_content() {
        let mut doc = Document::new();
        let id = doc.push(marked("h1", "hero.title").with_text("Hello"));

        DomApplier::apply(&mut doc, &store(r#"{"hero": {"title": "Hola"}}"#));

        assert_eq!(doc.element(id).content(), &Content::Text("Hola".to_string()));
    }

    #[test]
    fn test_apply_each_target() {
        let store = store(
            r#"{"f": {"html": "<b>Gratis</b>", "email": "Correo", "search": "Buscar",
                "tip": "Ayuda", "close": "Cerrar", "msg": "Mensaje"}}"#,
        );
        let mut doc = Document::new();
        let html = doc.push(marked("p", "f.html").with_attr(HTML_ATTR, ""));
        let textarea = doc.push(marked("textarea", "f.msg"));
        let search = doc.push(marked("div", "f.search").with_attr("placeholder", "Search"));
        let tip = doc.push(marked("span", "f.tip").with_attr("title", "Help").with_text("?"));
        let close = doc.push(marked("button", "f.close").with_attr("aria-label", "Close"));
        let email = doc.push(marked("input", "f.email"));

        DomApplier::apply(&mut doc, &store);

        assert_eq!(doc.element(html).content(), &Content::Html("<b>Gratis</b>".to_string()));
        assert_eq!(doc.element(textarea).value(), "Mensaje");
        assert_eq!(doc.element(search).attr("placeholder"), Some("Buscar"));
        assert_eq!(doc.element(tip).attr("title"), Some("Ayuda"));
        assert_eq!(doc.element(tip).text(), "?");
        assert_eq!(doc.element(close).attr("aria-label"), Some("Cerrar"));
        assert_eq!(doc.element(email).value(), "Correo");
    }

    #[test]
    fn test_missing_key_renders_key_path() {
        let mut doc = Document::new();
        let id = doc.push(marked("h2", "pricing.heading").with_text("Pricing"));

        DomApplier::apply(&mut doc, &store("{}"));

        assert_eq!(doc.element(id).text(), "pricing.heading");
    }

    #[test]
    fn test_empty_translation_leaves_element_untouched() {
        let mut doc = Document::new();
        let id = doc.push(marked("p", "banner").with_text("Original"));
        let nl = doc.push(Element::new("p").with_attr(NEWLINE_ATTR, "banner").with_text("Keep"));

        DomApplier::apply(&mut doc, &store(r#"{"banner": ""}"#));

        assert_eq!(doc.element(id).text(), "Original");
        assert_eq!(doc.element(nl).content(), &Content::Text("Keep".to_string()));
    }

    #[test]
    fn test_newline_marker_converts_to_br() {
        let mut doc = Document::new();
        let id = doc.push(Element::new("p").with_attr(NEWLINE_ATTR, "hero.body"));

        DomApplier::apply(&mut doc, &store(r#"{"hero": {"body": "Line one\nLine two\n"}}"#));

        assert_eq!(
            doc.element(id).content(),
            &Content::Html("Line one<br>Line two<br>".to_string())
        );
    }

    #[test]
    fn test_newline_marker_runs_after_primary_marker() {
        let mut doc = Document::new();
        let id = doc.push(marked("p", "a").with_attr(NEWLINE_ATTR, "b"));

        DomApplier::apply(&mut doc, &store(r#"{"a": "first", "b": "x\ny"}"#));

        assert_eq!(doc.element(id).content(), &Content::Html("x<br>y".to_string()));
    }

    #[test]
    fn test_meta_title_and_description() {
        let mut doc = Document::new().with_title("ForgeFit");
        let meta = doc.push(
            Element::new("meta")
                .with_attr("name", "description")
                .with_attr("content", "Your AI coach"),
        );

        DomApplier::apply(
            &mut doc,
            &store(r#"{"meta": {"title": "ForgeFit - Entrenador", "description": "Tu entrenador"}}"#),
        );

        assert_eq!(doc.title(), "ForgeFit - Entrenador");
        assert_eq!(doc.element(meta).attr("content"), Some("Tu entrenador"));
    }

    #[test]
    fn test_meta_description_without_element() {
        let mut doc = Document::new().with_title("Old");

        DomApplier::apply(&mut doc, &store(r#"{"meta": {"description": "Only description"}}"#));

        assert_eq!(doc.title(), "Old");
        assert_eq!(doc.elements().count(), 0);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let store = store(r#"{"hero": {"title": "Hola", "body": "a\nb"}, "meta": {"title": "T"}}"#);
        let mut doc = Document::new();
        doc.push(marked("h1", "hero.title"));
        doc.push(marked("input", "hero.title"));
        doc.push(Element::new("p").with_attr(NEWLINE_ATTR, "hero.body"));
        doc.push(marked("p", "missing.key"));

        DomApplier::apply(&mut doc, &store);
        let once = doc.clone();
        DomApplier::apply(&mut doc, &store);

        assert_eq!(doc, once);
    }
}
