use crate::domain::a001_document_chat::ui::details::DocumentChatPage;
use crate::shared::config::ClientConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the client settings to the whole app via context.
    provide_context(ClientConfig::load());

    view! {
        <DocumentChatPage />
    }
}
