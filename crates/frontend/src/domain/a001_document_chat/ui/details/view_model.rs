//! Document Chat - View Model

use super::model;
use super::session::ChatSession;
use crate::shared::config::ClientConfig;
use crate::shared::date_utils::local_now;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DocumentChatVm {
    pub session: RwSignal<ChatSession>,
    /// Text currently in the message box
    pub input: RwSignal<String>,
    pub config: StoredValue<ClientConfig>,
}

impl DocumentChatVm {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            input: RwSignal::new(String::new()),
            config: StoredValue::new(config),
        }
    }

    fn api_base(&self) -> String {
        self.config.with_value(|c| c.api_base.clone())
    }

    /// Reactive: send button state for the current input
    pub fn can_send(&self) -> bool {
        let input = self.input.get();
        self.session.with(|s| s.can_send(&input))
    }

    pub fn is_loading_untracked(&self) -> bool {
        self.session.with_untracked(|s| s.is_loading())
    }

    pub fn dismiss_error(&self) {
        self.session.update(|s| s.dismiss_error());
    }

    /// GET /status and refresh readiness, counters and the status line
    pub async fn check_status(self) {
        self.session.update(|s| s.status_check_started());

        let result = model::fetch_status(&self.api_base()).await;
        match &result {
            Ok(snapshot) => log::debug!(
                "Status: processed={} documents={} chunks={} files={}",
                snapshot.processed,
                snapshot.document_count,
                snapshot.chunk_count,
                snapshot.file_count()
            ),
            Err(e) => log::error!("Erro ao verificar status: {}", e),
        }

        self.session.update(|s| s.status_received(result));
    }

    /// POST /process_documents, then re-check status on success.
    /// The reprocess control is released whatever the outcome.
    pub async fn process_documents(self) {
        if !self.session.try_update(|s| s.refresh_started()).unwrap_or(false) {
            return;
        }

        let result = model::process_documents(&self.api_base()).await;
        if let Err(e) = &result {
            log::error!("Erro ao processar documentos: {}", e);
        }

        let recheck = self
            .session
            .try_update(|s| s.refresh_received(result))
            .unwrap_or(false);
        if recheck {
            self.check_status().await;
        }

        self.session.update(|s| s.refresh_finished());
    }

    /// POST /chat with the trimmed input. Ignored while a question is in
    /// flight, while the server is not ready, or when the box is empty.
    pub async fn send_message(self) {
        let input = self.input.get_untracked();
        let request = match self.session.try_update(|s| s.submit(&input, local_now())) {
            Some(Ok(request)) => request,
            Some(Err(reason)) => {
                log::debug!("Send ignored: {:?}", reason);
                return;
            }
            None => return,
        };
        self.input.set(String::new());

        let result = model::ask_question(&self.api_base(), &request).await;
        match &result {
            Ok(resp) if !resp.success => log::warn!(
                "Chat failed on server: {}",
                resp.message.as_deref().unwrap_or("-")
            ),
            Err(e) => log::error!("Erro ao enviar mensagem: {}", e),
            _ => {}
        }

        self.session.update(|s| s.chat_received(result, local_now()));
    }

    /// Example question from the welcome banner: fill the box and send it
    pub async fn ask_example(self, question: String) {
        self.input.set(question);
        self.send_message().await;
    }
}
