//! Document Chat - Session state
//!
//! Pure state of one chat page: readiness of the server index, the single
//! in-flight question, the transcript and what the status bar and the error
//! modal show. No I/O here; the view model feeds network results in.

use chrono::NaiveDateTime;
use contracts::domain::a001_document_chat::ChatMessage;
use contracts::usecases::u001_check_status::StatusSnapshot;
use contracts::usecases::u002_process_documents::ProcessDocumentsResponse;
use contracts::usecases::u003_ask_question::{ChatRequest, ChatResponse};

pub const MSG_CHECKING: &str = "Verificando status do sistema...";
pub const MSG_READY: &str = "Sistema pronto para uso";
pub const MSG_NOT_READY: &str =
    "Sistema não está pronto. Clique em \"Reprocessar Documentos\" para começar.";
pub const MSG_CONNECTION_ERROR: &str = "Erro ao conectar com o servidor";
pub const MSG_PROCESS_FAILED: &str = "Erro ao processar documentos";
pub const MSG_CHAT_FAILED: &str = "Erro ao processar pergunta";
pub const SOURCES_TITLE: &str = "Fontes consultadas:";

/// Success line after a reprocess run
pub fn processed_message(document_count: u64) -> String {
    format!("Processados {} documentos com sucesso", document_count)
}

/// Enter sends, Shift+Enter inserts a newline
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Lifecycle of the session.
///
/// `Sending` keeps the latest readiness so that a status check resolving
/// while a question is in flight is applied once the answer arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AwaitingStatus,
    Ready,
    Unavailable,
    Sending { ready: bool },
}

/// Why a send attempt was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejection {
    /// A question is already in flight
    Busy,
    /// Server index is not ready (or its state is unknown)
    NotReady,
    /// Nothing but whitespace in the box
    EmptyInput,
}

impl SessionPhase {
    pub fn begin_status_check(self) -> Self {
        match self {
            SessionPhase::Idle => SessionPhase::AwaitingStatus,
            other => other,
        }
    }

    pub fn apply_readiness(self, ready: bool) -> Self {
        match self {
            SessionPhase::Sending { .. } => SessionPhase::Sending { ready },
            _ if ready => SessionPhase::Ready,
            _ => SessionPhase::Unavailable,
        }
    }

    pub fn begin_send(self) -> Result<Self, SendRejection> {
        match self {
            SessionPhase::Ready => Ok(SessionPhase::Sending { ready: true }),
            SessionPhase::Sending { .. } => Err(SendRejection::Busy),
            _ => Err(SendRejection::NotReady),
        }
    }

    pub fn finish_send(self) -> Self {
        match self {
            SessionPhase::Sending { ready: true } => SessionPhase::Ready,
            SessionPhase::Sending { ready: false } => SessionPhase::Unavailable,
            other => other,
        }
    }

    pub fn is_loading(self) -> bool {
        matches!(self, SessionPhase::Sending { .. })
    }

    pub fn system_ready(self) -> bool {
        matches!(self, SessionPhase::Ready | SessionPhase::Sending { ready: true })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "status-success",
            StatusKind::Warning => "status-warning",
            StatusKind::Error => "status-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusLine {
    pub fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    phase: SessionPhase,
    messages: Vec<ChatMessage>,
    snapshot: Option<StatusSnapshot>,
    status_line: StatusLine,
    refreshing: bool,
    welcome_visible: bool,
    error: Option<String>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            messages: Vec::new(),
            snapshot: None,
            status_line: StatusLine::new(MSG_CHECKING, StatusKind::Warning),
            refreshing: false,
            welcome_visible: true,
            error: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn system_ready(&self) -> bool {
        self.phase.system_ready()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn document_count(&self) -> u64 {
        self.snapshot.as_ref().map_or(0, |s| s.document_count)
    }

    pub fn chunk_count(&self) -> u64 {
        self.snapshot.as_ref().map_or(0, |s| s.chunk_count)
    }

    pub fn file_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, StatusSnapshot::file_count)
    }

    /// Status dot; follows the last successful snapshot only
    pub fn status_online(&self) -> bool {
        self.snapshot.as_ref().is_some_and(StatusSnapshot::is_ready)
    }

    pub fn refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn welcome_visible(&self) -> bool {
        self.welcome_visible
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate a send attempt and return the trimmed question
    pub fn check_send<'a>(&self, input: &'a str) -> Result<&'a str, SendRejection> {
        if self.phase.is_loading() {
            return Err(SendRejection::Busy);
        }
        if self.phase != SessionPhase::Ready {
            return Err(SendRejection::NotReady);
        }
        let question = input.trim();
        if question.is_empty() {
            return Err(SendRejection::EmptyInput);
        }
        Ok(question)
    }

    /// Whether the send button is enabled for this input
    pub fn can_send(&self, input: &str) -> bool {
        self.check_send(input).is_ok()
    }

    pub fn status_check_started(&mut self) {
        self.phase = self.phase.begin_status_check();
    }

    pub fn status_received(&mut self, result: Result<StatusSnapshot, String>) {
        match result {
            Ok(snapshot) => {
                let ready = snapshot.is_ready();
                self.snapshot = Some(snapshot);
                self.phase = self.phase.apply_readiness(ready);
                self.status_line = if ready {
                    StatusLine::new(MSG_READY, StatusKind::Success)
                } else {
                    StatusLine::new(MSG_NOT_READY, StatusKind::Warning)
                };
            }
            Err(_) => {
                self.phase = self.phase.apply_readiness(false);
                self.status_line = StatusLine::new(MSG_CONNECTION_ERROR, StatusKind::Error);
            }
        }
    }

    /// Mark the reprocess control busy. `false` if a run is already going.
    pub fn refresh_started(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.refreshing = true;
        true
    }

    /// Apply a reprocess result. Returns `true` when status must be re-checked.
    pub fn refresh_received(&mut self, result: Result<ProcessDocumentsResponse, String>) -> bool {
        match result {
            Ok(resp) if resp.success => {
                self.status_line = StatusLine::new(
                    processed_message(resp.document_count.unwrap_or(0)),
                    StatusKind::Success,
                );
                true
            }
            Ok(resp) => {
                self.show_error(resp.message.unwrap_or_else(|| MSG_PROCESS_FAILED.to_string()));
                false
            }
            Err(_) => {
                self.show_error(MSG_CONNECTION_ERROR);
                false
            }
        }
    }

    pub fn refresh_finished(&mut self) {
        self.refreshing = false;
    }

    /// Start sending `input`: hide the welcome banner, put the user's bubble
    /// in the transcript and enter `Sending`. Nothing changes on rejection.
    pub fn submit(
        &mut self,
        input: &str,
        now: NaiveDateTime,
    ) -> Result<ChatRequest, SendRejection> {
        let question = self.check_send(input)?.to_string();
        self.phase = self.phase.begin_send()?;
        self.welcome_visible = false;
        self.append_message(ChatMessage::user(question.clone(), now));
        Ok(ChatRequest::new(question))
    }

    /// Apply the answer to the in-flight question and leave `Sending`.
    ///
    /// On failure the user's bubble stays without a reply.
    pub fn chat_received(&mut self, result: Result<ChatResponse, String>, now: NaiveDateTime) {
        match result {
            Ok(resp) if resp.success => {
                let sources = resp.sources().to_vec();
                let answer = resp.answer.unwrap_or_default();
                self.append_message(ChatMessage::assistant(answer, sources, now));
            }
            Ok(resp) => {
                self.show_error(resp.message.unwrap_or_else(|| MSG_CHAT_FAILED.to_string()));
            }
            Err(_) => self.show_error(MSG_CONNECTION_ERROR),
        }
        self.phase = self.phase.finish_send();
    }

    /// Add an entry to the end of the transcript
    pub fn append_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_document_chat::ChatSender;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap()
    }

    fn snapshot(processed: bool, documents: u64) -> StatusSnapshot {
        StatusSnapshot {
            processed,
            document_count: documents,
            chunk_count: documents * 8,
            files_in_folder: (0..documents).map(|i| format!("doc{}.pdf", i)).collect(),
        }
    }

    fn ready_session() -> ChatSession {
        let mut session = ChatSession::new();
        session.status_check_started();
        session.status_received(Ok(snapshot(true, 2)));
        session
    }

    fn answer(text: &str, sources: &[&str]) -> ChatResponse {
        ChatResponse {
            success: true,
            answer: Some(text.to_string()),
            sources: Some(sources.iter().map(|s| s.to_string()).collect()),
            message: None,
        }
    }

    #[test]
    fn test_new_session_waits_for_status() {
        let mut session = ChatSession::new();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.system_ready());
        assert!(session.welcome_visible());
        assert_eq!(session.status_line().kind, StatusKind::Warning);

        session.status_check_started();
        assert_eq!(session.phase(), SessionPhase::AwaitingStatus);
        assert_eq!(session.check_send("oi"), Err(SendRejection::NotReady));
    }

    #[test]
    fn test_scenario_ready_snapshot() {
        let mut session = ChatSession::new();
        session.status_check_started();
        session.status_received(Ok(StatusSnapshot {
            processed: true,
            document_count: 5,
            chunk_count: 40,
            files_in_folder: vec!["a.pdf".into(), "b.pdf".into()],
        }));

        assert_eq!(session.document_count(), 5);
        assert_eq!(session.chunk_count(), 40);
        assert_eq!(session.file_count(), 2);
        assert!(session.status_online());
        assert_eq!(session.status_line(), &StatusLine::new(MSG_READY, StatusKind::Success));
        assert!(!session.can_send(""));
        assert!(session.can_send("What is X?"));
    }

    #[test]
    fn test_zero_documents_never_ready() {
        for processed in [true, false] {
            let mut session = ChatSession::new();
            session.status_received(Ok(snapshot(processed, 0)));
            assert!(!session.system_ready());
            assert!(!session.status_online());
            assert_eq!(session.status_line().text, MSG_NOT_READY);
            assert_eq!(session.status_line().kind, StatusKind::Warning);
        }
    }

    #[test]
    fn test_status_failure_keeps_counters() {
        let mut session = ready_session();
        session.status_received(Err("Failed to send request".into()));

        assert_eq!(session.phase(), SessionPhase::Unavailable);
        assert_eq!(session.status_line().text, MSG_CONNECTION_ERROR);
        assert_eq!(session.status_line().kind.css_class(), "status-error");
        assert_eq!(session.document_count(), 2);
        assert!(session.status_online());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_send_enabled_iff_ready_idle_and_text() {
        let inputs = ["", "   ", "\n\t", "a", "  pergunta  "];
        let phases = [
            SessionPhase::Idle,
            SessionPhase::AwaitingStatus,
            SessionPhase::Ready,
            SessionPhase::Unavailable,
            SessionPhase::Sending { ready: true },
            SessionPhase::Sending { ready: false },
        ];
        for phase in phases {
            for input in inputs {
                let mut session = ChatSession::new();
                session.phase = phase;
                let expected = phase.system_ready()
                    && !phase.is_loading()
                    && !input.trim().is_empty();
                assert_eq!(session.can_send(input), expected, "{:?} / {:?}", phase, input);
            }
        }
    }

    #[test]
    fn test_rejection_order() {
        let mut session = ready_session();
        assert_eq!(session.check_send("  "), Err(SendRejection::EmptyInput));
        session.submit("primeira", now()).unwrap();
        assert_eq!(session.check_send("segunda"), Err(SendRejection::Busy));
        assert_eq!(session.submit("segunda", now()), Err(SendRejection::Busy));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_rejected_submit_changes_nothing() {
        let mut session = ChatSession::new();
        let before = session.clone();
        assert_eq!(session.submit("oi", now()), Err(SendRejection::NotReady));
        assert_eq!(session, before);
    }

    #[test]
    fn test_submit_trims_and_enters_sending() {
        let mut session = ready_session();
        let request = session.submit("  What is X?\n", now()).unwrap();

        assert_eq!(request, ChatRequest::new("What is X?"));
        assert!(session.is_loading());
        assert!(!session.welcome_visible());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].text, "What is X?");
        assert_eq!(session.messages()[0].sender, ChatSender::User);
    }

    #[test]
    fn test_scenario_successful_exchange() {
        let mut session = ready_session();
        session.submit("What is X?", now()).unwrap();
        session.chat_received(Ok(answer("X is Y", &["doc1.pdf"])), now());

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, ChatSender::User);
        assert_eq!(messages[0].text, "What is X?");
        assert_eq!(messages[1].sender, ChatSender::Assistant);
        assert_eq!(messages[1].text, "X is Y");
        assert_eq!(messages[1].sources, vec!["doc1.pdf".to_string()]);
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_server_failure_keeps_user_bubble_only() {
        let mut session = ready_session();
        session.submit("What is X?", now()).unwrap();
        session.chat_received(
            Ok(ChatResponse {
                success: false,
                message: Some("X".into()),
                ..Default::default()
            }),
            now(),
        );

        assert_eq!(session.error(), Some("X"));
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, ChatSender::User);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_server_failure_without_message_uses_fallback() {
        let mut session = ready_session();
        session.submit("pergunta", now()).unwrap();
        session.chat_received(Ok(ChatResponse::default()), now());
        assert_eq!(session.error(), Some(MSG_CHAT_FAILED));
    }

    #[test]
    fn test_network_failure_reenables_send() {
        let mut session = ready_session();
        session.submit("pergunta", now()).unwrap();
        assert!(!session.can_send("outra"));

        session.chat_received(Err("Failed to send request".into()), now());

        assert!(!session.is_loading());
        assert_eq!(session.error(), Some(MSG_CONNECTION_ERROR));
        assert!(!session.can_send(""));
        assert!(session.can_send("outra"));
    }

    #[test]
    fn test_status_during_send_applies_after_answer() {
        let mut session = ready_session();
        session.submit("pergunta", now()).unwrap();

        session.status_received(Ok(snapshot(false, 0)));
        assert_eq!(session.phase(), SessionPhase::Sending { ready: false });
        assert!(session.is_loading());

        session.chat_received(Ok(answer("resposta", &[])), now());
        assert_eq!(session.phase(), SessionPhase::Unavailable);
        assert!(!session.can_send("mais uma"));
    }

    #[test]
    fn test_empty_sources_are_not_kept() {
        let mut session = ready_session();
        session.submit("pergunta", now()).unwrap();
        session.chat_received(
            Ok(ChatResponse {
                success: true,
                answer: Some("Desculpe".into()),
                sources: None,
                message: None,
            }),
            now(),
        );
        assert!(!session.messages()[1].has_sources());
    }

    #[test]
    fn test_refresh_success_requests_status_check() {
        let mut session = ChatSession::new();
        assert!(session.refresh_started());
        assert!(!session.refresh_started());

        let recheck = session.refresh_received(Ok(ProcessDocumentsResponse {
            success: true,
            document_count: Some(3),
            message: None,
        }));
        session.refresh_finished();

        assert!(recheck);
        assert!(!session.refreshing());
        assert_eq!(
            session.status_line(),
            &StatusLine::new("Processados 3 documentos com sucesso", StatusKind::Success)
        );
        assert!(session.error().is_none());
    }

    #[test]
    fn test_refresh_failures_go_to_modal() {
        let mut session = ChatSession::new();
        session.refresh_started();
        let recheck = session.refresh_received(Ok(ProcessDocumentsResponse {
            success: false,
            document_count: None,
            message: Some("Erro ao processar documentos: sem permissão".into()),
        }));
        session.refresh_finished();
        assert!(!recheck);
        assert_eq!(session.error(), Some("Erro ao processar documentos: sem permissão"));
        assert!(!session.refreshing());

        session.dismiss_error();
        session.refresh_started();
        assert!(!session.refresh_received(Ok(ProcessDocumentsResponse::default())));
        assert_eq!(session.error(), Some(MSG_PROCESS_FAILED));

        session.refresh_received(Err("Failed to parse response".into()));
        session.refresh_finished();
        assert_eq!(session.error(), Some(MSG_CONNECTION_ERROR));
        assert!(!session.refreshing());
    }

    #[test]
    fn test_open_error_survives_unrelated_updates() {
        let mut session = ready_session();
        session.refresh_started();
        session.refresh_received(Err("Failed to fetch".into()));
        let shown = session.error().map(str::to_string);

        // Later state changes must not alter the message the modal was built from
        session.refresh_finished();
        session.status_check_started();
        session.status_received(Ok(snapshot(true, 2)));
        session.append_message(ChatMessage::user("Oi", now()));

        assert_eq!(session.error().map(str::to_string), shown);
        assert_eq!(session.error(), Some(MSG_CONNECTION_ERROR));
    }

    #[test]
    fn test_dismiss_error() {
        let mut session = ChatSession::new();
        session.show_error("falhou");
        assert_eq!(session.error(), Some("falhou"));
        session.dismiss_error();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_submit_key() {
        assert!(is_submit_key("Enter", false));
        assert!(!is_submit_key("Enter", true));
        assert!(!is_submit_key("a", false));
        assert!(!is_submit_key("Escape", false));
    }
}
