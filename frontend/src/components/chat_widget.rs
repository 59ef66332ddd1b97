//! 聊天助手悬浮窗
//!
//! 无状态规则匹配（见 chat::rules），转录只追加。每条机器人
//! 回复前有固定的"正在输入"延迟；定时器句柄保存在组件里，
//! 关窗或卸载时 drop 即取消，不会把回复写进已销毁的视图。

use crate::chat::{ChatMessage, Sender, TYPING_DELAY_MS, rules};
use crate::components::icons::{Bot, MessageCircle, Send, User, X};
use crate::web::Timeout;
use leptos::prelude::*;

/// 本地时钟的 HH:MM
fn now_hhmm() -> String {
    let d = js_sys::Date::new_0();
    format!("{:02}:{:02}", d.get_hours(), d.get_minutes())
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (messages, set_messages) = signal(vec![ChatMessage::new(
        Sender::Bot,
        rules::GREETING,
        now_hhmm(),
    )]);
    let (input, set_input) = signal(String::new());

    // 未触发的回复定时器；清空即取消
    let pending_replies = StoredValue::new_local(Vec::<Timeout>::new());

    let send_text = move |text: String| {
        if !rules::is_sendable(&text) {
            return;
        }
        let reply = rules::respond(&text);
        set_messages.update(|m| m.push(ChatMessage::new(Sender::User, text, now_hhmm())));
        set_input.set(String::new());

        let timeout = Timeout::new(TYPING_DELAY_MS, move || {
            set_messages.try_update(|m| {
                m.push(ChatMessage::new(Sender::Bot, reply, now_hhmm()));
            });
        });
        pending_replies.update_value(|v| v.push(timeout));
    };

    let send_message = move || send_text(input.get_untracked());

    let close_widget = move |_| {
        // 关窗取消仍在"输入中"的回复
        pending_replies.update_value(Vec::clear);
        set_open.set(false);
    };

    on_cleanup(move || {
        pending_replies.update_value(Vec::clear);
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_message();
        }
    };

    view! {
        <Show when=move || !open.get()>
            <button
                class="fixed bottom-6 right-6 w-14 h-14 bg-primary-600 text-white rounded-full shadow-xl flex items-center justify-center z-50 hover:scale-110 transition-transform"
                on:click=move |_| set_open.set(true)
            >
                <MessageCircle attr:class="h-7 w-7" />
            </button>
        </Show>

        <Show when=move || open.get()>
            <div class="fixed bottom-6 right-6 w-96 h-[600px] bg-white rounded-2xl shadow-2xl flex flex-col z-50">
                // 标题栏
                <div class="bg-primary-600 text-white p-4 rounded-t-2xl flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <Bot attr:class="h-8 w-8" />
                        <div>
                            <h3 class="font-semibold">"Job Assistant"</h3>
                            <p class="text-xs opacity-80">"Online"</p>
                        </div>
                    </div>
                    <button class="hover:bg-white/20 p-2 rounded-lg" on:click=close_widget>
                        <X attr:class="h-5 w-5" />
                    </button>
                </div>

                // 转录
                <div class="flex-1 overflow-y-auto p-4 space-y-4 bg-gray-50">
                    <For
                        each=move || { messages.get().into_iter().enumerate().collect::<Vec<_>>() }
                        key=|(i, _)| *i
                        children=move |(_, msg)| {
                            let is_user = msg.sender == Sender::User;
                            view! {
                                <div class=if is_user { "flex justify-end" } else { "flex justify-start" }>
                                    <div class="flex items-start gap-2 max-w-[80%]">
                                        <div class=if is_user {
                                            "w-8 h-8 rounded-full flex items-center justify-center shrink-0 bg-gray-300 text-gray-700 order-last"
                                        } else {
                                            "w-8 h-8 rounded-full flex items-center justify-center shrink-0 bg-primary-600 text-white"
                                        }>
                                            {if is_user {
                                                view! { <User attr:class="h-5 w-5" /> }.into_any()
                                            } else {
                                                view! { <Bot attr:class="h-5 w-5" /> }.into_any()
                                            }}
                                        </div>
                                        <div>
                                            <div class=if is_user {
                                                "rounded-2xl p-3 bg-primary-600 text-white"
                                            } else {
                                                "rounded-2xl p-3 bg-white shadow-md"
                                            }>
                                                <p class="text-sm whitespace-pre-line">{msg.text.clone()}</p>
                                            </div>
                                            <p class="text-xs text-gray-500 mt-1 px-2">{msg.time.clone()}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                // 快捷提问（只在只有开场白时展示）
                <Show when=move || messages.with(|m| m.len() == 1)>
                    <div class="px-4 py-2 bg-white border-t border-gray-200">
                        <p class="text-xs text-gray-600 mb-2">"Quick questions:"</p>
                        <div class="flex flex-wrap gap-2">
                            {rules::QUICK_REPLIES
                                .into_iter()
                                .map(|reply| view! {
                                    <button
                                        class="text-xs bg-gray-100 hover:bg-primary-100 text-gray-700 px-3 py-1.5 rounded-full"
                                        on:click=move |_| send_text(reply.to_string())
                                    >
                                        {reply}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>

                // 输入框
                <div class="p-4 bg-white border-t border-gray-200 rounded-b-2xl">
                    <div class="flex gap-2">
                        <input
                            type="text"
                            class="flex-1 px-4 py-2 border border-gray-300 rounded-full focus:outline-none"
                            placeholder="Type your message..."
                            prop:value=input
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="w-10 h-10 bg-primary-600 text-white rounded-full flex items-center justify-center disabled:opacity-50"
                            disabled=move || !rules::is_sendable(&input.get())
                            on:click=move |_| send_message()
                        >
                            <Send attr:class="h-5 w-5" />
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
