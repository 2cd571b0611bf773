use leptos::prelude::*;

use crate::components::{SearchInput, VariantHitRow};
use crate::hooks::{UseVariantSearchReturn, use_variant_search};

/// The navbar search popover.
///
/// A toggle button opens a small panel holding a debounced input; hits
/// render as rows that hand the selected variant id to `on_select`. The
/// component owns no routing knowledge at all.
#[component]
pub fn SearchBar(
    /// Invoked with the variant id when a hit is selected
    on_select: Callback<String>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let UseVariantSearchReturn {
        input,
        hits,
        searching,
        on_immediate_change,
        on_debounced_change,
        ..
    } = use_variant_search();

    view! {
        <div class="relative">
            <button
                on:click=move |_| is_open.update(|open| *open = !*open)
                class="p-2 rounded-lg text-ctp-subtext1 hover:text-ctp-text hover:bg-ctp-surface1 transition-colors"
                title=move || if is_open.get() { "Close search" } else { "Search products" }
            >
                "🔍"
            </button>

            {move || {
                is_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="absolute right-0 top-12 w-72 bg-ctp-surface0 border border-ctp-surface1 rounded-lg shadow-lg p-4 z-10">
                                <h4 class="text-sm text-center text-ctp-subtext0 mb-2">"Search"</h4>

                                <SearchInput
                                    value=input
                                    on_change=on_debounced_change
                                    on_immediate_change=on_immediate_change
                                />

                                {move || {
                                    if searching.get() {
                                        view! {
                                            <p class="mt-4 text-xs text-ctp-subtext0">"Searching..."</p>
                                        }
                                            .into_any()
                                    } else if !hits.get().is_empty() {
                                        view! {
                                            <div class="mt-4 border-t border-ctp-surface1 pt-2 max-h-52 overflow-y-auto">
                                                {hits
                                                    .get()
                                                    .into_iter()
                                                    .map(|hit| {
                                                        view! { <VariantHitRow hit=hit on_click=on_select/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    } else if !input.get().trim().is_empty() {
                                        view! {
                                            <p class="mt-4 text-xs text-ctp-subtext0">"No products found."</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <div></div> }.into_any()
                                    }
                                }}

                            </div>
                        }
                    })
            }}

        </div>
    }
}
