//! Page footer.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"LangCompare - Visual Playground for Programming Language Syntax"</p>
            <p class="site-footer__stack">"Built with Rust, Leptos and axum"</p>
        </footer>
    }
}
