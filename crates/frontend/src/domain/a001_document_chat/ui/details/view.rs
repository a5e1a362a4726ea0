//! Document Chat - View Components

use super::session::{is_submit_key, SOURCES_TITLE};
use super::view_model::DocumentChatVm;
use crate::shared::config::{use_config, ClientConfig};
use crate::shared::date_utils::format_time_of_day;
use crate::shared::icons::icon;
use crate::shared::modal::ErrorModal;
use contracts::domain::a001_document_chat::ChatMessage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexAlign, FlexJustify};
use wasm_bindgen_futures::spawn_local;

const EXAMPLE_QUESTIONS: [&str; 3] = [
    "Quais são as regras para uso do salão de festas?",
    "Qual o horário permitido para mudanças?",
    "Como é calculada a taxa condominial?",
];

#[component]
#[allow(non_snake_case)]
pub fn DocumentChatPage() -> impl IntoView {
    let config = use_config();
    let vm = DocumentChatVm::new(config.clone());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    // Initial status check
    spawn_local(vm.check_status());

    // Grow the message box with its content, up to the configured cap
    let max_height = config.clone();
    Effect::new(move |_| {
        vm.input.track();
        if let Some(textarea) = input_ref.get() {
            autosize_input(&textarea, &max_height);
        }
    });

    // The transcript only grows, so its length is enough to re-render it
    let message_count = Memo::new(move |_| vm.session.with(|s| s.messages().len()));
    let loading = Memo::new(move |_| vm.session.with(|s| s.is_loading()));
    let error = Memo::new(move |_| vm.session.with(|s| s.error().map(str::to_string)));

    // Scroll to the newest bubble (or the loading indicator) once laid out
    let scroll_key = Memo::new(move |_| (message_count.get(), loading.get()));
    let scroll_delay = config.scroll_delay_ms;
    Effect::new(move |_| {
        scroll_key.track();
        if let Some(container) = messages_ref.get() {
            spawn_local(async move {
                TimeoutFuture::new(scroll_delay).await;
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    // Ask before leaving the page while a question is in flight
    let listeners = [
        window_event_listener(leptos::ev::beforeunload, move |ev| {
            if vm.is_loading_untracked() {
                ev.prevent_default();
                ev.set_return_value("");
            }
        }),
        window_event_listener(leptos::ev::online, |_| {
            log::info!("Conexão restaurada");
        }),
        window_event_listener(leptos::ev::offline, |_| {
            log::warn!("Conexão perdida");
        }),
    ];
    on_cleanup(move || listeners.into_iter().for_each(|handle| handle.remove()));

    let close_error = Callback::new(move |_: ()| vm.dismiss_error());

    view! {
        <div class="chat-app">
            <StatusPanel vm=vm />

            <main class="chat-container">
                <div class="chat-messages" node_ref=messages_ref>
                    <Show when=move || vm.session.with(|s| s.welcome_visible())>
                        <WelcomeBanner vm=vm />
                    </Show>

                    <For
                        each=move || {
                            message_count.track();
                            vm.session.with_untracked(|s| s.messages().to_vec())
                        }
                        key=|msg| msg.id
                        let:msg
                    >
                        <MessageBubble message=msg />
                    </For>

                    <Show when=move || loading.get()>
                        <div class="loading-indicator">
                            <div class="typing-dots">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                            <span class="loading-text">"Consultando documentos..."</span>
                        </div>
                    </Show>
                </div>

                <div class="chat-input">
                    <Flex style="gap: 8px; align-items: flex-end;">
                        <textarea
                            node_ref=input_ref
                            class="message-input"
                            rows="1"
                            placeholder="Digite sua pergunta sobre os documentos..."
                            prop:value=move || vm.input.get()
                            on:input=move |ev| vm.input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if is_submit_key(&ev.key(), ev.shift_key()) {
                                    ev.prevent_default();
                                    spawn_local(vm.send_message());
                                }
                            }
                        ></textarea>

                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !vm.can_send())
                            on_click=move |_| spawn_local(vm.send_message())
                        >
                            {icon("send")}
                        </Button>
                    </Flex>
                </div>
            </main>

            {move || {
                error
                    .get()
                    .map(|message| view! { <ErrorModal message=message on_close=close_error /> })
            }}
        </div>
    }
}

/// Set the textarea height to its content height, capped by the config
fn autosize_input(textarea: &web_sys::HtmlTextAreaElement, config: &ClientConfig) {
    // `ElementExt::style` from the leptos prelude shadows the web-sys getter
    let style = web_sys::HtmlElement::style(textarea);
    let _ = style.set_property("height", "auto");
    let height = config.input_height(textarea.scroll_height());
    let _ = style.set_property("height", &format!("{}px", height));
}

/// Header: status dot and line, index counters, reprocess control
#[component]
#[allow(non_snake_case)]
fn StatusPanel(vm: DocumentChatVm) -> impl IntoView {
    let refreshing = Signal::derive(move || vm.session.with(|s| s.refreshing()));

    view! {
        <header class="status-panel">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex align=FlexAlign::Center style="gap: 12px;">
                    <span class=move || {
                        if vm.session.with(|s| s.status_online()) {
                            "status-dot online"
                        } else {
                            "status-dot offline"
                        }
                    }></span>
                    <span class=move || vm.session.with(|s| s.status_line().kind.css_class())>
                        {move || vm.session.with(|s| s.status_line().text.clone())}
                    </span>
                </Flex>

                <Flex align=FlexAlign::Center style="gap: 16px;">
                    <div class="stat">
                        <span class="stat-value">
                            {move || vm.session.with(|s| s.document_count())}
                        </span>
                        <span class="stat-label">"Documentos"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">
                            {move || vm.session.with(|s| s.chunk_count())}
                        </span>
                        <span class="stat-label">"Trechos"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">
                            {move || vm.session.with(|s| s.file_count())}
                        </span>
                        <span class="stat-label">"Arquivos"</span>
                    </div>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=refreshing
                        on_click=move |_| spawn_local(vm.process_documents())
                    >
                        {icon("refresh")}
                        {move || {
                            if refreshing.get() {
                                " Processando..."
                            } else {
                                " Reprocessar Documentos"
                            }
                        }}
                    </Button>
                </Flex>
            </Flex>
        </header>
    }
}

#[component]
#[allow(non_snake_case)]
fn WelcomeBanner(vm: DocumentChatVm) -> impl IntoView {
    view! {
        <div class="welcome-message">
            <div class="welcome-icon">{icon("chat")}</div>
            <h2>"Olá! Sou o assistente dos documentos do condomínio."</h2>
            <p>"Faça uma pergunta e eu respondo com base nos documentos processados, citando as fontes."</p>
            <div class="example-questions">
                {EXAMPLE_QUESTIONS
                    .iter()
                    .map(|question| {
                        let question = question.to_string();
                        let label = question.clone();
                        view! {
                            <button
                                class="example-btn"
                                on:click=move |_| spawn_local(vm.ask_example(question.clone()))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One transcript entry
#[component]
#[allow(non_snake_case)]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let sender = message.sender;
    let time = format_time_of_day(&message.timestamp);
    let sources = message.has_sources().then(|| {
        view! {
            <div class="message-sources">
                <div class="sources-title">{SOURCES_TITLE}</div>
                {message
                    .sources
                    .iter()
                    .map(|source| view! { <div class="source-item">{source.clone()}</div> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class=format!("message {}", sender.as_str())>
            <div class="message-avatar">{sender.avatar()}</div>
            <div class="message-content">
                <div class="message-text">{message.text.clone()}</div>
                {sources}
                <div class="message-time">{time}</div>
            </div>
        </div>
    }
}
