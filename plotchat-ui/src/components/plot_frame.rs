//! Plot Frame
//!
//! Renders a plot document inside a sandboxed iframe, with a toggle that
//! expands it to cover the whole window.

use leptos::*;

use crate::state::use_chat_state;

#[component]
pub fn PlotFrame(index: usize, #[prop(into)] document: String) -> impl IntoView {
    let state = use_chat_state();
    let is_fullscreen = move || state.fullscreen.get() == Some(index);

    view! {
        <div class=move || {
            if is_fullscreen() {
                "fixed inset-0 z-50 bg-gray-900 flex flex-col p-4"
            } else {
                "w-full max-w-[90%] bg-gray-800 rounded-2xl rounded-bl-sm p-2 flex flex-col"
            }
        }>
            <div class="flex justify-end mb-2">
                <button
                    type="button"
                    on:click=move |_| state.toggle_fullscreen(index)
                    title=move || if is_fullscreen() { "Exit full screen (Esc)" } else { "Full screen" }
                    class="px-3 py-1 text-sm rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                >
                    {move || if is_fullscreen() { "✕ Close" } else { "⤢ Expand" }}
                </button>
            </div>

            <iframe
                srcdoc=document
                sandbox="allow-scripts"
                title="Plot"
                class=move || {
                    if is_fullscreen() {
                        "flex-1 w-full bg-white rounded-lg border-0"
                    } else {
                        "w-full h-96 bg-white rounded-lg border-0"
                    }
                }
            />
        </div>
    }
}
