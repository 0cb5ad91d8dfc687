//! Header bar with the app name and request status.

use leptos::*;

use crate::state::use_chat_state;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_chat_state();

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="max-w-4xl mx-auto px-4 h-16 flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <span class="text-2xl">"📈"</span>
                    <span class="text-xl font-bold text-white">"PlotChat"</span>
                </div>

                {move || {
                    if state.busy.get() {
                        view! {
                            <span class="flex items-center space-x-2 text-sm text-primary-400">
                                <span class="w-2 h-2 bg-primary-400 rounded-full pulse" />
                                <span>"Working..."</span>
                            </span>
                        }.into_view()
                    } else {
                        view! {
                            <span class="flex items-center space-x-2 text-sm text-gray-400">
                                <span class="w-2 h-2 bg-green-400 rounded-full" />
                                <span>"Ready"</span>
                            </span>
                        }.into_view()
                    }
                }}
            </div>
        </header>
    }
}
