use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Автор сообщения в чате
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Assistant,
}

impl ChatSender {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatSender::User => "user",
            ChatSender::Assistant => "assistant",
        }
    }

    /// Буква в кружке аватара
    pub fn avatar(&self) -> &'static str {
        match self {
            ChatSender::User => "U",
            ChatSender::Assistant => "A",
        }
    }
}

/// Сообщение чата.
///
/// Живёт только в памяти страницы и после создания не изменяется.
/// `timestamp` - локальное время клиента в момент добавления в ленту.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: ChatSender,
    #[serde(default)]
    pub sources: Vec<String>,
    pub timestamp: NaiveDateTime,
}

impl ChatMessage {
    pub fn new(
        text: impl Into<String>,
        sender: ChatSender,
        sources: Vec<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            sources,
            timestamp,
        }
    }

    /// Создать сообщение пользователя
    pub fn user(text: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self::new(text, ChatSender::User, Vec::new(), timestamp)
    }

    /// Создать ответ ассистента с источниками
    pub fn assistant(
        text: impl Into<String>,
        sources: Vec<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self::new(text, ChatSender::Assistant, sources, timestamp)
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}
