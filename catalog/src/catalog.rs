//! Embedded example catalog.
//!
//! DESIGN
//! ======
//! Examples are authored in `data/examples.yaml` and compiled into the binary.
//! Loading validates the invariants every consumer relies on (unique ids,
//! at least one language per example, no repeated language) and formats
//! each snippet once, so rendering never re-runs the highlighter.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::highlight::to_html;

const BUILTIN_YAML: &str = include_str!("../data/examples.yaml");

static BUILTIN: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

/// Errors produced while loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The source is not valid YAML or does not match the catalog schema.
    #[error("catalog parse failed: {0}")]
    Parse(String),

    /// A required text field is empty.
    #[error("example #{index} has an empty `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// Two examples share an id.
    #[error("duplicate example id: {0}")]
    DuplicateId(String),

    /// An example lists no languages.
    #[error("example {id} has no languages")]
    NoLanguages { id: String },

    /// An example lists the same language more than once.
    #[error("example {id} lists {language} more than once")]
    DuplicateLanguage { id: String, language: String },
}

/// One language's rendition of an example.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageVariant {
    pub language: String,
    /// Source as authored.
    pub code: String,
    /// `code` run through [`to_html`].
    pub html: String,
    pub explanation: String,
    /// Advisory only. Controls whether the inert run button is shown.
    pub compilable: bool,
}

/// One comparable task shown across several languages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Example {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Variants in authored order. Never empty.
    pub languages: Vec<LanguageVariant>,
}

impl Example {
    /// Language names in authored order.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|v| v.language.as_str())
    }

    #[must_use]
    pub fn variant(&self, language: &str) -> Option<&LanguageVariant> {
        self.languages.iter().find(|v| v.language == language)
    }
}

/// Ordered, read-only list of examples.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    examples: Vec<Example>,
}

#[derive(Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    examples: Vec<ExampleDoc>,
}

#[derive(Deserialize)]
struct ExampleDoc {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    category: String,
    #[serde(default)]
    languages: Vec<VariantDoc>,
}

#[derive(Deserialize)]
struct VariantDoc {
    language: String,
    code: String,
    #[serde(default)]
    explanation: String,
    #[serde(default = "default_compilable")]
    compilable: bool,
}

fn default_compilable() -> bool {
    true
}

impl Catalog {
    /// The catalog compiled into this binary, parsed on first use.
    ///
    /// # Errors
    ///
    /// Returns the load error if the embedded YAML is malformed or violates a
    /// catalog invariant. The same error is returned on every call.
    pub fn builtin() -> Result<&'static Catalog, CatalogError> {
        BUILTIN
            .get_or_init(|| Self::from_yaml(BUILTIN_YAML))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Parse and validate a catalog from YAML source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed input and the matching
    /// variant for the first violated invariant.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDoc = serde_yaml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut ids = HashSet::new();
        let mut examples = Vec::with_capacity(doc.examples.len());
        for (index, raw) in doc.examples.into_iter().enumerate() {
            let example = build_example(index, raw)?;
            if !ids.insert(example.id.clone()) {
                return Err(CatalogError::DuplicateId(example.id));
            }
            examples.push(example);
        }

        Ok(Self { examples })
    }

    #[must_use]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    #[must_use]
    pub fn example(&self, id: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.examples.iter().map(|e| e.category.as_str()))
    }

    /// Distinct language names across all examples, in order of first appearance.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        distinct(self.examples.iter().flat_map(Example::language_names))
    }
}

fn build_example(index: usize, raw: ExampleDoc) -> Result<Example, CatalogError> {
    let id = raw.id.trim().to_owned();
    if id.is_empty() {
        return Err(CatalogError::MissingField { index, field: "id" });
    }
    if raw.category.trim().is_empty() {
        return Err(CatalogError::MissingField { index, field: "category" });
    }
    if raw.languages.is_empty() {
        return Err(CatalogError::NoLanguages { id });
    }

    let mut seen = HashSet::new();
    let mut languages = Vec::with_capacity(raw.languages.len());
    for variant in raw.languages {
        let language = variant.language.trim().to_owned();
        if language.is_empty() {
            return Err(CatalogError::MissingField { index, field: "language" });
        }
        if !seen.insert(language.clone()) {
            return Err(CatalogError::DuplicateLanguage { id, language });
        }
        languages.push(LanguageVariant {
            html: to_html(&variant.code),
            language,
            code: variant.code,
            explanation: variant.explanation,
            compilable: variant.compilable,
        });
    }

    Ok(Example {
        id,
        title: raw.title,
        description: raw.description,
        category: raw.category,
        languages,
    })
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
