//! Category and language filter state plus the derived view model.
//!
//! DESIGN
//! ======
//! `Selection` is a plain value owned by whoever renders the page. Commands
//! mutate it, and every derivation takes the catalog explicitly, so filtering
//! stays a pure function of (catalog, selection).

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

use crate::catalog::{Catalog, Example};

/// The user's current category and language filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    category: String,
    languages: BTreeSet<String>,
}

/// One example as it should be rendered under the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleView {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Selected languages in the example's authored order.
    pub tabs: Vec<TabView>,
}

/// One language tab of an [`ExampleView`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabView {
    pub language: String,
    /// Formatted snippet markup.
    pub html: String,
    pub explanation: String,
    pub compilable: bool,
}

impl Selection {
    pub fn new<I, S>(category: impl Into<String>, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    /// Initial state: first category, every known language.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let category = catalog.categories().first().copied().unwrap_or_default();
        Self::new(category, catalog.languages())
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Selected languages, sorted by name.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_language_selected(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    /// Switch category. Unknown categories are accepted and simply match nothing.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Add `language` if absent, remove it if present.
    pub fn toggle_language(&mut self, language: &str) {
        if !self.languages.remove(language) {
            self.languages.insert(language.to_owned());
        }
    }

    /// Examples in the active category, in catalog order.
    #[must_use]
    pub fn visible_examples<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Example> {
        catalog
            .examples()
            .iter()
            .filter(|e| e.category == self.category)
            .collect()
    }

    /// Languages of `example` that are selected, in the example's authored order.
    #[must_use]
    pub fn visible_languages<'a>(&self, example: &'a Example) -> Vec<&'a str> {
        example
            .language_names()
            .filter(|language| self.is_language_selected(language))
            .collect()
    }

    /// Tabs of `example` under this selection.
    #[must_use]
    pub fn tab_views(&self, example: &Example) -> Vec<TabView> {
        example
            .languages
            .iter()
            .filter(|v| self.is_language_selected(&v.language))
            .map(|v| TabView {
                language: v.language.clone(),
                html: v.html.clone(),
                explanation: v.explanation.clone(),
                compilable: v.compilable,
            })
            .collect()
    }

    /// `example` as rendered under this selection, ignoring the category.
    #[must_use]
    pub fn example_view(&self, example: &Example) -> ExampleView {
        ExampleView {
            id: example.id.clone(),
            title: example.title.clone(),
            description: example.description.clone(),
            tabs: self.tab_views(example),
        }
    }

    /// Full view model for the page.
    #[must_use]
    pub fn view(&self, catalog: &Catalog) -> Vec<ExampleView> {
        self.visible_examples(catalog)
            .into_iter()
            .map(|example| self.example_view(example))
            .collect()
    }
}
