//! In-memory snapshot of a rendered page.
//!
//! Only what localization touches is modelled: the root `lang` attribute, the
//! document title, and a flat list of elements in document order with their
//! attributes, content and (for form controls) current value.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Element content as last written: plain text or an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Html(String),
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    content: Content,
    value: String,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Text content. For HTML content this is the raw fragment.
    pub fn text(&self) -> &str {
        match &self.content {
            Content::Text(text) | Content::Html(text) => text,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.content = Content::Text(text.to_string());
    }

    pub fn set_html(&mut self, html: &str) {
        self.content = Content::Html(html.to_string());
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// `input` and `textarea` elements, whose visible text is their value.
    pub fn is_form_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lang: String,
    title: String,
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Append an element in document order.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Elements carrying `name`, in document order.
    pub fn elements_with_attr(&self, name: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.has_attr(name))
            .map(|(idx, _)| ElementId(idx))
            .collect()
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.tag.eq_ignore_ascii_case(tag))
            .map(|(idx, _)| ElementId(idx))
            .collect()
    }

    /// The first `<meta name="description">` element, if the page declares one.
    pub fn meta_description_mut(&mut self) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|element| element.tag == "meta" && element.attr("name") == Some("description"))
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_lowercased() {
        assert_eq!(Element::new("TEXTAREA").tag(), "textarea");
        assert!(Element::new("INPUT").is_form_control());
        assert!(!Element::new("button").is_form_control());
    }

    #[test]
    fn test_set_attr_replaces_existing() {
        let mut element = Element::new("a").with_attr("href", "/pricing");
        element.set_attr("href", "/es/pricing");

        assert_eq!(element.attr("href"), Some("/es/pricing"));
        assert_eq!(element.attributes.len(), 1);
    }

    #[test]
    fn test_content_kinds() {
        let mut element = Element::new("p").with_text("Hello");
        assert_eq!(element.content(), &Content::Text("Hello".to_string()));

        element.set_html("Line<br>Break");
        assert_eq!(element.content(), &Content::Html("Line<br>Break".to_string()));
        assert_eq!(element.text(), "Line<br>Break");
    }

    #[test]
    fn test_query_helpers() {
        let mut doc = Document::new();
        let heading = doc.push(Element::new("h1").with_attr("data-i18n", "hero.title"));
        doc.push(Element::new("p"));
        let link = doc.push(Element::new("A").with_attr("href", "/"));

        assert_eq!(doc.elements_with_attr("data-i18n"), vec![heading]);
        assert_eq!(doc.elements_by_tag("a"), vec![link]);
        assert_eq!(doc.elements().count(), 3);
    }

    #[test]
    fn test_meta_description_lookup() {
        let mut doc = Document::new();
        doc.push(Element::new("meta").with_attr("name", "viewport"));
        doc.push(
            Element::new("meta")
                .with_attr("name", "description")
                .with_attr("content", "old"),
        );

        let meta = doc.meta_description_mut().expect("meta description");
        meta.set_attr("content", "new");

        assert_eq!(
            doc.elements().nth(1).and_then(|element| element.attr("content")),
            Some("new")
        );
    }

    #[test]
    fn test_meta_description_absent() {
        let mut doc = Document::new().with_title("ForgeFit");
        assert!(doc.meta_description_mut().is_none());
        assert_eq!(doc.title(), "ForgeFit");
    }
}
