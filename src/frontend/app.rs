use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_navigate,
    path,
};

use crate::components::SearchBar;
use crate::pages::{Home, ProductDetail};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="vitrine"/>
        <Router>
            <NavAndContent/>
        </Router>
    }
}

#[component]
fn NavAndContent() -> impl IntoView {
    // The search popover gets a navigation capability, not the router
    let navigate = use_navigate();
    let on_select = Callback::new(move |variant_id: String| {
        navigate(&format!("/product/{variant_id}"), Default::default());
    });

    view! {
        <main class="min-h-screen bg-ctp-base flex flex-col">
            <nav class="bg-ctp-surface0 border-b border-ctp-surface1">
                <div class="container mx-auto flex justify-between items-center px-6 py-4">
                    <div class="flex items-center gap-2">
                        <a
                            href="/"
                            class="text-3xl font-bold bg-gradient-to-r from-ctp-mauve to-ctp-blue bg-clip-text text-transparent"
                        >
                            "vitrine"
                        </a>
                        <span class="text-xs text-ctp-subtext0 font-mono">
                            {env!("CARGO_PKG_VERSION")}
                        </span>
                    </div>
                    <SearchBar on_select=on_select/>
                </div>
            </nav>

            <div class="flex-1">
                <Routes fallback=|| view! { <p class="p-6 text-ctp-subtext0">"Page not found"</p> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/product/:id") view=ProductDetail/>
                </Routes>
            </div>

            <footer class="py-6 px-6 border-t border-ctp-surface1 bg-ctp-surface0">
                <div class="container mx-auto text-center text-sm text-ctp-subtext0">
                    <p>"vitrine v" {env!("CARGO_PKG_VERSION")}</p>
                </div>
            </footer>
        </main>
    }
}
