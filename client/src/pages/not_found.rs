//! Fallback view for paths no route matches.

use leptos::prelude::*;

/// "Page not found." body; marks the SSR response as 404.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <main class="not-found">
            <p>"Page not found."</p>
            <a href="/">"Back to LangCompare"</a>
        </main>
    }
}
