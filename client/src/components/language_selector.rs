//! Multi-choice language filter presented as a dropdown menu.
//!
//! DESIGN
//! ======
//! Open/closed is local to the dropdown. It closes on a second trigger
//! click, on Escape, or on a click anywhere outside the menu (a transparent
//! backdrop catches those). Check marks read the shared `Selection` signal,
//! and clicks are reported through `on_toggle` so the page decides how
//! selection changes.

#[cfg(test)]
#[path = "language_selector_test.rs"]
mod language_selector_test;

use catalog::Selection;
use leptos::prelude::*;

/// "Filter Languages" dropdown with one checkable item per language.
#[component]
pub fn LanguageSelector(
    languages: Vec<String>,
    selection: RwSignal<Selection>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let languages = StoredValue::new(languages);

    view! {
        <div
            class="language-selector"
            class:language-selector--open=move || open.get()
            on:keydown=move |ev| {
                if closes_menu(&ev.key()) {
                    open.set(false);
                }
            }
        >
            <button
                class="btn language-selector__trigger"
                type="button"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "Filter Languages"
                <span class="language-selector__chevron" aria-hidden="true">"▾"</span>
            </button>

            <Show when=move || open.get()>
                <div class="language-selector__backdrop" on:click=move |_| open.set(false)></div>
                <div class="language-selector__menu" role="menu">
                    <span class="language-selector__label">"Select Languages"</span>
                    <hr class="language-selector__separator"/>
                    {move || {
                        languages
                            .get_value()
                            .into_iter()
                            .map(|language| language_item(language, selection, on_toggle))
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

fn closes_menu(key: &str) -> bool {
    key == "Escape"
}

fn language_item(language: String, selection: RwSignal<Selection>, on_toggle: Callback<String>) -> impl IntoView {
    let checked = Signal::derive({
        let language = language.clone();
        move || selection.with(|s| s.is_language_selected(&language))
    });
    let toggled = language.clone();

    view! {
        <button
            class="language-selector__item"
            type="button"
            role="menuitemcheckbox"
            aria-checked=move || checked.get().to_string()
            on:click=move |_| on_toggle.run(toggled.clone())
        >
            <span>{language}</span>
            <span class="language-selector__check" aria-hidden="true">
                {move || if checked.get() { "✓" } else { "" }}
            </span>
        </button>
    }
}
