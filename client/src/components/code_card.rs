//! Card showing one language's rendition of an example.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `ExampleTabs` for the active tab. The snippet markup was
//! produced by `catalog::to_html` at catalog load and is already escaped, so
//! it is injected as inner HTML.

#[cfg(test)]
#[path = "code_card_test.rs"]
mod code_card_test;

use catalog::TabView;
use leptos::prelude::*;

use crate::state::card::CardState;

/// Code card with explanation toggle, run button and compilation switch.
#[component]
pub fn CodeCard(title: String, description: String, tab: TabView) -> impl IntoView {
    let card = RwSignal::new(CardState::default());
    let badge_class = language_badge_class(&tab.language);
    let toggle_id = switch_id(&title);
    let label_for = toggle_id.clone();
    let explanation = StoredValue::new(tab.explanation);
    let compilable = tab.compilable;

    view! {
        <article class="code-card">
            <header class="code-card__header">
                <div class="code-card__title-row">
                    <h4 class="code-card__title">{title}</h4>
                    <span class=badge_class>{tab.language}</span>
                </div>
                <p class="code-card__description">{description}</p>
            </header>

            <div class="code-card__body">
                <pre class="code-card__code">
                    <code inner_html=tab.html></code>
                </pre>

                <Show when=move || card.get().show_explanation>
                    <div class="code-card__explanation">
                        <h5 class="code-card__explanation-title">"Explanation:"</h5>
                        <p>{move || explanation.get_value()}</p>
                    </div>
                </Show>
            </div>

            <footer class="code-card__footer">
                <div class="code-card__actions">
                    <button
                        class="btn code-card__details"
                        type="button"
                        on:click=move |_| card.update(CardState::toggle_explanation)
                    >
                        "ⓘ "
                        {move || card.get().details_label()}
                    </button>
                    <Show when=move || compilable>
                        <button class="btn btn--primary code-card__run" type="button">
                            "▶ Run Example"
                        </button>
                    </Show>
                </div>

                <label class="code-card__mode" for=label_for>
                    <input
                        id=toggle_id
                        class="code-card__switch"
                        type="checkbox"
                        role="switch"
                        prop:checked=move || card.get().compilation_view
                        on:change=move |_| card.update(CardState::toggle_compilation_view)
                    />
                    <span class="code-card__mode-label">{move || card.get().mode_label()}</span>
                </label>
            </footer>
        </article>
    }
}

/// Badge classes: the shared indicator class plus a lowercased language hook.
fn language_badge_class(language: &str) -> String {
    format!("lang-indicator {}", language.to_lowercase())
}

/// DOM id for the compilation switch, derived from the card title.
fn switch_id(title: &str) -> String {
    let slug = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>();
    format!("compilation-toggle-{slug}")
}
