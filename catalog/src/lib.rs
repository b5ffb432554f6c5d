//! Snippet catalog, token highlighter and selection model for LangCompare.
//!
//! This crate is UI-framework agnostic so the Leptos client can render what it
//! derives and the server can validate the embedded catalog before it serves
//! a single page.

pub mod catalog;
pub mod highlight;
pub mod selection;

pub use catalog::{Catalog, CatalogError, Example, LanguageVariant};
pub use highlight::{Token, TokenClass, highlight, to_html};
pub use selection::{ExampleView, Selection, TabView};
