//! Translation bundles: one JSON tree of strings per language.

use serde_json::{Map, Value};

/// Reserved top-level subtree carrying page metadata.
const META_KEY: &str = "meta";

/// The full set of translated strings for one language.
///
/// A bundle is a JSON object whose leaves are strings. Keys are addressed by
/// dotted paths (`hero.title`). Bundles are immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationBundle {
    root: Map<String, Value>,
}

/// Page metadata carried in the bundle's `meta` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TranslationBundle {
    /// Parse a bundle from JSON text. Anything other than a top-level object is rejected.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let root: Map<String, Value> = serde_json::from_str(text)?;
        Ok(Self { root })
    }

    /// Walk the tree along a dotted key path and return the string leaf, if any.
    ///
    /// Arrays are entered by numeric index (`features.1`). Returns `None` when
    /// a segment is missing, when an intermediate node is a scalar, or when
    /// the final value is not a string.
    pub fn lookup(&self, key_path: &str) -> Option<&str> {
        let mut segments = key_path.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;

        for segment in segments {
            node = match node {
                Value::Object(children) => children.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        node.as_str()
    }

    /// Page metadata, ignoring fields that are not strings.
    pub fn meta(&self) -> PageMeta {
        let Some(meta) = self.root.get(META_KEY).and_then(Value::as_object) else {
            return PageMeta::default();
        };

        let field = |name: &str| meta.get(name).and_then(Value::as_str).map(str::to_string);

        PageMeta {
            title: field("title"),
            description: field("description"),
        }
    }

    /// Every leaf in the bundle as `(dotted path, value)`, sorted by path.
    pub fn leaves(&self) -> Vec<(String, &Value)> {
        let mut out = Vec::new();
        for (key, value) in &self.root {
            collect_leaves(key.clone(), value, &mut out);
        }
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn collect_leaves<'a>(path: String, value: &'a Value, out: &mut Vec<(String, &'a Value)>) {
    match value {
        Value::Object(children) if !children.is_empty() => {
            for (key, child) in children {
                collect_leaves(format!("{}.{}", path, key), child, out);
            }
        }
        _ => out.push((path, value)),
    }
}
