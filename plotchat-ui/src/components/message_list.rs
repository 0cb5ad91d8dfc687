//! Message List
//!
//! The scrolling transcript. Keeps the newest entry in view.

use leptos::*;

use crate::components::{MessageBubble, TypingIndicator};
use crate::state::use_chat_state;

#[component]
pub fn MessageList() -> impl IntoView {
    let state = use_chat_state();
    let list_ref = create_node_ref::<html::Div>();

    // Scroll to the bottom after every append and when the indicator toggles
    create_effect(move |_| {
        state.messages.with(|m| m.len());
        state.busy.get();
        request_animation_frame(move || {
            if let Some(list) = list_ref.get_untracked() {
                list.set_scroll_top(list.scroll_height());
            }
        });
    });

    view! {
        <div node_ref=list_ref class="flex-1 overflow-y-auto">
            <div class="max-w-4xl mx-auto px-4 py-6 space-y-4">
                <For
                    each=move || state.messages.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(index, message)| view! {
                        <MessageBubble index=index message=message />
                    }
                />

                <Show when=move || state.busy.get()>
                    <TypingIndicator />
                </Show>
            </div>
        </div>
    }
}
