//! Landing page: intro, filter controls and the filtered example list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Reads the catalog and the `Selection` signal from context,
//! turns control events into `Selection` commands and renders one
//! `ExampleTabs` per visible example.

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

use catalog::{Catalog, CatalogError, Selection};
use leptos::prelude::*;

use crate::app::CatalogContext;
use crate::components::category_selector::CategorySelector;
use crate::components::example_tabs::ExampleTabs;
use crate::components::header::Header;
use crate::components::language_selector::LanguageSelector;
use crate::components::site_footer::SiteFooter;

/// Index page.
#[component]
pub fn IndexPage() -> impl IntoView {
    let catalog = expect_context::<CatalogContext>();
    let selection = expect_context::<RwSignal<Selection>>();

    let content = match catalog {
        Ok(catalog) => catalog_view(catalog, selection).into_any(),
        Err(e) => view! { <p class="index-page__error">{load_error_message(&e)}</p> }.into_any(),
    };

    view! {
        <div class="index-page">
            <Header/>

            <main class="index-page__main">
                <section class="index-page__intro">
                    <h2 class="index-page__heading">"Visual Playground for Language Syntax"</h2>
                    <p class="index-page__lede">
                        "Compare syntax for common programming tasks across different languages. "
                        "Each card shows the same functionality implemented in various languages with explanations."
                    </p>
                </section>

                {content}
            </main>

            <SiteFooter/>
        </div>
    }
}

fn catalog_view(catalog: &'static Catalog, selection: RwSignal<Selection>) -> impl IntoView {
    let categories = owned(catalog.categories());
    let languages = owned(catalog.languages());

    let on_category = Callback::new(move |category: String| {
        leptos::logging::log!("category selected: {category}");
        selection.update(|s| s.set_category(category));
    });
    let on_language = Callback::new(move |language: String| {
        selection.update(|s| s.toggle_language(&language));
        leptos::logging::log!("language toggled: {language}");
    });

    let selected_category = Signal::derive(move || selection.with(|s| s.category().to_owned()));
    let visible_ids = Memo::new(move |_| selection.with(|s| visible_example_ids(s, catalog)));

    view! {
        <div class="index-page__controls">
            <CategorySelector categories selected=selected_category on_select=on_category/>
            <LanguageSelector languages selection on_toggle=on_language/>
        </div>

        <div class="index-page__examples">
            <Show
                when=move || !visible_ids.get().is_empty()
                fallback=|| view! { <p class="index-page__empty">"No examples in this category."</p> }
            >
                <For
                    each=move || visible_ids.get()
                    key=|id| id.clone()
                    children=move |id| view! { <ExampleTabs catalog id/> }
                />
            </Show>
        </div>
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_owned).collect()
}

fn visible_example_ids(selection: &Selection, catalog: &Catalog) -> Vec<String> {
    selection
        .visible_examples(catalog)
        .into_iter()
        .map(|e| e.id.clone())
        .collect()
}

fn load_error_message(error: &CatalogError) -> String {
    format!("The snippet catalog could not be loaded: {error}")
}
