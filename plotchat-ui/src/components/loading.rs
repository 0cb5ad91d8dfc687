//! Loading Component
//!
//! Shown at the end of the transcript while a reply is pending.

use leptos::*;

/// Three pulsing dots in a bot-style bubble
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start">
            <div class="bg-gray-800 rounded-2xl rounded-bl-sm px-4 py-3 flex space-x-1 animate-pulse">
                <span class="w-2 h-2 bg-gray-500 rounded-full" />
                <span class="w-2 h-2 bg-gray-500 rounded-full" />
                <span class="w-2 h-2 bg-gray-500 rounded-full" />
            </div>
        </div>
    }
}
