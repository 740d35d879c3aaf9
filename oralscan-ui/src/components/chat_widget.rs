//! Chat Widget Component
//!
//! Floating AskOral chatbot. History lives for as long as the widget is
//! mounted and survives closing and reopening the panel.

use leptos::*;

use oralscan_core::{render_entry, ChatMessage, ChatTransport, ReplyFormat, ReplyView};

use crate::api::Gateway;
use crate::components::InlineLoading;
use crate::state::global::GlobalState;

/// Floating chat toggle and panel
#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let widget = create_rw_signal(oralscan_core::ChatWidget::new());

    let send = move || {
        let Some(Some(request)) = widget.try_update(|w| w.begin_send()) else {
            return;
        };

        spawn_local(async move {
            let result = Gateway.send_chat(&request).await;
            if let Err(e) = &result {
                logging::warn!("Chat request failed: {}", e);
            }
            widget.update(|w| w.finish_send(result));
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if sends_on(&ev) {
            ev.prevent_default();
            send();
        }
    };

    let is_open = move || widget.with(|w| w.is_open());
    let reply_format = move || state.settings.with(|s| s.reply_format);

    view! {
        <div class="fixed bottom-6 right-6 z-40 flex flex-col items-end">
            <Show when=is_open>
                <div class="mb-4 w-80 sm:w-96 bg-white rounded-2xl shadow-xl border border-green-100 flex flex-col">
                    <div class="flex items-center justify-between px-4 py-3 bg-green-700 text-white rounded-t-2xl">
                        <div class="flex items-center gap-2 font-semibold">
                            <span>"🤖"</span>
                            <span>"AskOral Chatbot"</span>
                        </div>
                        <button
                            class="px-2 hover:text-green-200"
                            aria-label="Close chat"
                            on:click=move |_| widget.update(|w| w.close())
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="flex-1 max-h-80 overflow-y-auto p-4 space-y-3">
                        <For
                            each=move || widget.with(|w| w.log().iter().cloned().enumerate().collect::<Vec<_>>())
                            key=|(index, _)| *index
                            children=move |(_, message)| view! {
                                <MessageBubble message=message format=Signal::derive(reply_format) />
                            }
                        />
                    </div>

                    <div class="flex items-end gap-2 p-3 border-t border-gray-100">
                        <textarea
                            class="flex-1 resize-none rounded-lg border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:border-green-600"
                            rows="2"
                            placeholder="Type your message..."
                            prop:value=move || widget.with(|w| w.input().to_string())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                widget.update(|w| w.set_input(text));
                            }
                            on:keydown=on_keydown
                        />
                        <button
                            class="px-4 py-2 bg-green-600 hover:bg-green-700 disabled:opacity-50 text-white rounded-lg text-sm font-medium"
                            disabled=move || !widget.with(|w| w.can_send())
                            on:click=move |_| send()
                        >
                            {move || if widget.with(|w| w.is_loading()) {
                                view! { <span class="flex items-center gap-2"><InlineLoading />"Thinking..."</span> }.into_view()
                            } else {
                                "Send".into_view()
                            }}
                        </button>
                    </div>
                </div>
            </Show>

            <button
                class="w-14 h-14 rounded-full bg-green-600 hover:bg-green-700 text-white text-2xl shadow-lg"
                aria-label="Toggle chat"
                on:click=move |_| widget.update(|w| w.toggle())
            >
                {move || if is_open() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}

/// Enter sends; Shift+Enter inserts a newline
fn sends_on(ev: &web_sys::KeyboardEvent) -> bool {
    ev.key() == "Enter" && !ev.shift_key()
}

/// One history entry
#[component]
fn MessageBubble(message: ChatMessage, format: Signal<ReplyFormat>) -> impl IntoView {
    let bubble_class = if message.is_user() {
        "ml-auto bg-green-600 text-white"
    } else {
        "mr-auto bg-gray-100 text-gray-800"
    };

    view! {
        <div class=format!("max-w-[85%] rounded-lg px-3 py-2 text-sm whitespace-pre-line {}", bubble_class)>
            {move || match render_entry(&message, format.get()) {
                ReplyView::Text(text) => view! { <span>{text}</span> }.into_view(),
                ReplyView::Bullets(items) => view! {
                    <ul class="list-disc list-inside space-y-1">
                        {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn keydown(key: &str, shift: bool) -> web_sys::KeyboardEvent {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_shift_key(shift);
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_enter_sends() {
        assert!(sends_on(&keydown("Enter", false)));
    }

    #[wasm_bindgen_test]
    fn test_shift_enter_and_other_keys_do_not_send() {
        assert!(!sends_on(&keydown("Enter", true)));
        assert!(!sends_on(&keydown("a", false)));
    }
}
