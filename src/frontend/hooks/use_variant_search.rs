use leptos::prelude::*;
use leptos::task::spawn_local;

use vitrine::search::Keyword;

use crate::api::variants;
use crate::models::VariantHit;

/// Return type for use_variant_search hook
pub struct UseVariantSearchReturn {
    /// Raw input, updated on every keystroke
    pub input: ReadSignal<String>,
    /// Settled keyword, updated after the quiet period
    pub query: ReadSignal<String>,
    /// Hits for the newest settled keyword, at most `MAX_HITS`
    pub hits: ReadSignal<Vec<VariantHit>>,
    /// Whether a search call is in flight
    pub searching: ReadSignal<bool>,
    pub on_immediate_change: Callback<String>,
    pub on_debounced_change: Callback<String>,
}

/// Hook wiring a debounced search input to the variant search API.
///
/// Every settled query bumps a generation counter before it is
/// dispatched, and a response is dropped on arrival if a newer query
/// settled while it was in flight. Responses therefore apply in request
/// order, never arrival order. Blank queries bump the counter too, so
/// clearing the input invalidates anything still in flight.
pub fn use_variant_search() -> UseVariantSearchReturn {
    let (input, set_input) = signal(String::new());
    let (query, set_query) = signal(String::new());
    let (hits, set_hits) = signal(Vec::<VariantHit>::new());
    let (searching, set_searching) = signal(false);
    let (generation, set_generation) = signal(0u64);

    let on_immediate_change = Callback::new(move |value: String| {
        set_input.set(value);
    });

    let on_debounced_change = Callback::new(move |value: String| {
        set_query.set(value);
    });

    Effect::new(move || {
        let settled = query.get();
        let current = generation.get_untracked().wrapping_add(1);
        set_generation.set(current);

        let Some(keyword) = Keyword::parse(&settled) else {
            // Blank input clears the list without touching the network
            set_hits.set(Vec::new());
            set_searching.set(false);
            return;
        };

        set_searching.set(true);
        spawn_local(async move {
            let result = variants::search(&keyword).await;

            if generation.get_untracked() != current {
                // A newer query settled while this one was in flight
                return;
            }

            match result {
                Ok(found) => set_hits.set(found),
                Err(err) => {
                    web_sys::console::error_1(&format!("variant search failed: {err}").into());
                    set_hits.set(Vec::new());
                }
            }
            set_searching.set(false);
        });
    });

    UseVariantSearchReturn {
        input,
        query,
        hits,
        searching,
        on_immediate_change,
        on_debounced_change,
    }
}
