//! One example with a tab per visible language.
//!
//! DESIGN
//! ======
//! Keyed by example id so the component survives filter changes; the
//! `ExampleView` is re-derived from the `Selection` signal and the requested
//! tab is kept while it stays visible. See `state::tabs` for the fallback rule.

use catalog::{Catalog, Selection, TabView};
use leptos::prelude::*;

use crate::components::code_card::CodeCard;
use crate::state::tabs::resolve_active_tab;

/// Title, description, tab strip and the active language's code card.
#[component]
pub fn ExampleTabs(catalog: &'static Catalog, id: String) -> impl IntoView {
    let selection = expect_context::<RwSignal<Selection>>();
    let example = catalog.example(&id);

    let example_view = Memo::new(move |_| selection.with(|s| example.map(|e| s.example_view(e))));
    let (title, description) = example_view.with_untracked(|v| {
        v.as_ref()
            .map(|v| (v.title.clone(), v.description.clone()))
            .unwrap_or_default()
    });
    let tabs = Memo::new(move |_| example_view.with(|v| v.as_ref().map(|v| v.tabs.clone()).unwrap_or_default()));
    let requested = RwSignal::new(None::<String>);
    let active = Memo::new(move |_| {
        let tabs = tabs.get();
        let names = tabs.iter().map(|t| t.language.as_str()).collect::<Vec<_>>();
        resolve_active_tab(requested.get().as_deref(), &names).map(str::to_owned)
    });

    let card_title = title.clone();
    let card_description = description.clone();
    let active_card = move || {
        let tab = active
            .get()
            .and_then(|language| tabs.get().into_iter().find(|t| t.language == language));
        match tab {
            Some(tab) => view! {
                <CodeCard
                    title=format!("{card_title} in {}", tab.language)
                    description=card_description.clone()
                    tab=tab
                />
            }
            .into_any(),
            None => view! {
                <p class="example-tabs__empty">"No selected languages for this example."</p>
            }
            .into_any(),
        }
    };

    view! {
        <section class="example-tabs" id=format!("example-{id}")>
            <h3 class="example-tabs__title">{title}</h3>
            <p class="example-tabs__description">{description}</p>

            <div class="example-tabs__list" role="tablist">
                {move || {
                    tabs.get()
                        .into_iter()
                        .map(|tab| tab_trigger(tab, active, requested))
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="example-tabs__panel" role="tabpanel">
                {active_card}
            </div>
        </section>
    }
}

fn tab_trigger(tab: TabView, active: Memo<Option<String>>, requested: RwSignal<Option<String>>) -> impl IntoView {
    let language = tab.language;
    let is_active = Signal::derive({
        let language = language.clone();
        move || active.get().as_deref() == Some(language.as_str())
    });
    let clicked = language.clone();

    view! {
        <button
            class="example-tabs__trigger"
            class:example-tabs__trigger--active=move || is_active.get()
            type="button"
            role="tab"
            aria-selected=move || is_active.get().to_string()
            on:click=move |_| requested.set(Some(clicked.clone()))
        >
            {language}
        </button>
    }
}
