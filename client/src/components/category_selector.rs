//! Single-choice category picker.

use leptos::prelude::*;

/// Native `<select>` over the catalog's categories.
#[component]
pub fn CategorySelector(
    categories: Vec<String>,
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="category-selector">
            <span class="category-selector__label">"Category"</span>
            <select
                class="category-selector__select"
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                {categories
                    .into_iter()
                    .map(|category| {
                        let value = category.clone();
                        let is_selected = move || selected.get() == value;
                        let option_value = category.clone();
                        view! {
                            <option value=option_value selected=is_selected>
                                {category}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
