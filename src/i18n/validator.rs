//! Bundle completeness validation.
//!
//! Compares a language's bundle with the default-language bundle so missing
//! or malformed keys are caught before they show up on the site as raw key
//! paths.

use crate::i18n::TranslationBundle;
use serde_json::Value;
use std::collections::BTreeMap;

/// Validation report containing errors and warnings about a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the page render a key path instead of text
    pub errors: Vec<String>,

    /// Suspicious entries that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BundleValidator;

impl BundleValidator {
    /// Validate `candidate` against the canonical bundle.
    ///
    /// Errors:
    /// - a canonical key is missing from the candidate
    /// - a candidate value is not a string where the canonical one is
    ///
    /// Warnings:
    /// - a candidate string is empty (the page keeps its original text)
    /// - a key exists only in the candidate
    pub fn validate(canonical: &TranslationBundle, candidate: &TranslationBundle) -> ValidationReport {
        let mut report = ValidationReport::new();

        let expected: BTreeMap<String, &Value> = canonical.leaves().into_iter().collect();
        let actual: BTreeMap<String, &Value> = candidate.leaves().into_iter().collect();

        for (key, expected_value) in &expected {
            match actual.get(key) {
                None => report.errors.push(format!("Missing key: {}", key)),
                Some(value) if expected_value.is_string() && !value.is_string() => {
                    report.errors.push(format!("Key {} is not a string", key))
                }
                Some(Value::String(text)) if text.is_empty() => {
                    report.warnings.push(format!("Key {} is empty", key))
                }
                Some(_) => {}
            }
        }

        for key in actual.keys().filter(|key| !expected.contains_key(*key)) {
            report.warnings.push(format!("Unexpected key: {}", key));
        }

        report
    }
}
