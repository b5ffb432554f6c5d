//! Root application component with routing and context providers.

use catalog::{Catalog, CatalogError, Selection};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::index::IndexPage;
use crate::pages::not_found::NotFound;

/// Outcome of loading the built-in catalog, provided as context.
pub type CatalogContext = Result<&'static Catalog, CatalogError>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the catalog and the selection signal, then routes to the index page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog: CatalogContext = Catalog::builtin();
    if let Err(e) = &catalog {
        leptos::logging::error!("snippet catalog failed to load: {e}");
    }
    let selection = RwSignal::new(
        catalog
            .as_ref()
            .map_or_else(|_| Selection::default(), |c| Selection::for_catalog(c)),
    );

    provide_context(catalog);
    provide_context(selection);

    view! {
        <Stylesheet id="leptos" href="/pkg/langcompare.css"/>
        <Title text="LangCompare"/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("") view=IndexPage/>
            </Routes>
        </Router>
    }
}
