//! Top bar with the product mark and tagline.

use leptos::prelude::*;

/// Site header.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <span class="site-header__logo" aria-hidden="true">"LC"</span>
                <h1 class="site-header__title">"LangCompare"</h1>
            </div>
            <div class="site-header__meta">
                <span class="site-header__tagline">"Visual Playground for Language Syntax"</span>
                <button class="btn site-header__github" type="button" title="Source on GitHub">
                    "GitHub"
                </button>
            </div>
        </header>
    }
}
