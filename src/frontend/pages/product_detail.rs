use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use vitrine::search::format_price;

use crate::api::{ApiClientError, variants};
use crate::models::Variant;

#[component]
pub fn ProductDetail() -> impl IntoView {
    let params = use_params_map();
    let variant_id = move || params.read().get("id").unwrap_or_default();

    let (variant_data, set_variant_data) = signal(None::<Result<Variant, ApiClientError>>);

    // Fetch variant details
    Effect::new(move || {
        let id = variant_id();
        if !id.is_empty() {
            set_variant_data.set(None);
            spawn_local(async move {
                let result = variants::get(&id).await;
                set_variant_data.set(Some(result));
            });
        }
    });

    view! {
        <div class="container mx-auto p-6">
            {move || match variant_data.get() {
                None => {
                    view! {
                        <div class="text-center py-12">
                            <p class="text-ctp-subtext0">"Loading product..."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(variant)) => {
                    view! {
                        <div class="flex flex-col md:flex-row gap-8">
                            <img
                                src=variant.image_url.clone()
                                alt=variant.name.clone()
                                class="w-64 h-64 object-cover rounded-lg border border-ctp-surface1"
                            />
                            <div>
                                <h2 class="text-3xl font-bold text-ctp-text mb-2">
                                    {variant.name.clone()}
                                </h2>
                                <p class="text-xl text-ctp-green mb-4">
                                    {format_price(variant.price)}
                                </p>
                                {variant
                                    .description
                                    .as_ref()
                                    .map(|desc| {
                                        view! { <p class="text-ctp-subtext0">{desc.clone()}</p> }
                                    })}

                                <a
                                    href="/"
                                    class="inline-block mt-6 text-ctp-blue hover:text-ctp-lavender text-sm"
                                >
                                    "← Back to the shop"
                                </a>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                Some(Err(err)) => {
                    view! {
                        <div class="bg-ctp-red/10 border border-ctp-red rounded p-4">
                            <p class="text-ctp-red font-semibold">"Error loading product"</p>
                            <p class="text-ctp-subtext0 text-sm mt-2">{err.to_string()}</p>
                        </div>
                    }
                        .into_any()
                }
            }}

        </div>
    }
}
