use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// A text input that reports every keystroke immediately and the settled
/// value once typing has been quiet for `debounce_ms`.
///
/// Each keystroke cancels the previous pending timer and schedules a new
/// one, so `on_change` fires exactly once per burst of typing, with the
/// final text. The pending timer is also cancelled when the component is
/// torn down; a late callback can never touch disposed state.
///
/// # Props
/// - `value`: the current input value to display
/// - `on_change`: called with the settled search value
/// - `on_immediate_change`: called on every keystroke, before debouncing
#[component]
pub fn SearchInput(
    /// The current value of the search input
    value: ReadSignal<String>,
    /// Callback when the settled search value changes
    on_change: Callback<String>,
    /// Callback when the input value changes immediately (before debounce)
    on_immediate_change: Callback<String>,
    /// Placeholder text for the input
    #[prop(optional, default = "Search products...")]
    placeholder: &'static str,
    /// Quiet period in milliseconds
    #[prop(optional, default = 1000)]
    debounce_ms: u32,
) -> impl IntoView {
    // Id of the pending timeout, if any, so it can be cancelled
    let pending_timeout = RwSignal::new(None::<i32>);

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);

        // The displayed value tracks every keystroke
        on_immediate_change.run(value.clone());

        // Last write wins: drop whatever was already scheduled
        if let Some(timeout_id) = pending_timeout.get() {
            web_sys::window()
                .unwrap()
                .clear_timeout_with_handle(timeout_id);
        }

        let callback = Closure::once(move || {
            pending_timeout.set(None);
            on_change.run(value);
        });

        let timeout_id = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                debounce_ms as i32,
            )
            .unwrap();

        pending_timeout.set(Some(timeout_id));
        callback.forget();
    };

    // A timer outliving the input would fire into disposed signals
    on_cleanup(move || {
        if let Some(timeout_id) = pending_timeout.try_get_untracked().flatten() {
            web_sys::window()
                .unwrap()
                .clear_timeout_with_handle(timeout_id);
        }
    });

    view! {
        <input
            type="text"
            placeholder=placeholder
            autocomplete="off"
            prop:value=move || value.get()
            on:input=on_input
            class="w-full rounded-lg border border-ctp-surface1 bg-ctp-base px-3 py-2 text-sm text-ctp-text placeholder-ctp-subtext0 focus:border-ctp-blue focus:ring-2 focus:ring-ctp-blue focus:outline-none"
        />
    }
}
