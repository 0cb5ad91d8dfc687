//! Chat Input
//!
//! Prompt form. Enter sends, Shift+Enter starts a new line. Disabled while a
//! reply is pending.

use leptos::*;

use crate::state::use_chat_state;

#[component]
pub fn ChatInput() -> impl IntoView {
    let state = use_chat_state();
    let (input, set_input) = create_signal(String::new());

    let send = move || {
        if state.submit(&input.get_untracked()) {
            set_input.set(String::new());
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <form on:submit=on_submit class="border-t border-gray-700 bg-gray-800">
            <div class="max-w-4xl mx-auto px-4 py-3 flex items-end space-x-3">
                <textarea
                    placeholder="e.g. Plot monthly sales as a bar chart"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || state.busy.get()
                    rows="2"
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none
                           resize-none disabled:opacity-60"
                />

                <button
                    type="submit"
                    disabled=move || state.busy.get() || input.get().trim().is_empty()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if state.busy.get() { "Waiting..." } else { "Send" }}
                </button>
            </div>
        </form>
    }
}
