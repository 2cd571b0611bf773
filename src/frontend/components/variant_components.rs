use leptos::prelude::*;

use vitrine::search::format_price;

use crate::models::VariantHit;

/// A single search hit: thumbnail, name, price.
///
/// Rendered as a real link to the product page so middle-click and
/// copy-link keep working, but a plain click is intercepted and handed to
/// `on_click` with the variant id; the owner decides how navigation
/// happens.
#[component]
pub fn VariantHitRow(hit: VariantHit, on_click: Callback<String>) -> impl IntoView {
    let variant_id = hit.id.clone();
    let href = format!("/product/{}", hit.id);

    view! {
        <a
            href=href
            on:click=move |ev| {
                ev.prevent_default();
                on_click.run(variant_id.clone());
            }

            class="flex items-center gap-3 mb-2 p-1 rounded hover:bg-ctp-surface1 transition-colors cursor-pointer"
        >
            <img
                src=hit.image_url.clone()
                alt=hit.name.clone()
                class="w-12 h-12 object-cover rounded flex-shrink-0"
            />
            <div class="min-w-0">
                <p class="text-xs text-ctp-text truncate">{hit.name.clone()}</p>
                <p class="text-xs text-ctp-subtext0">{format_price(hit.price)}</p>
            </div>
        </a>
    }
}
