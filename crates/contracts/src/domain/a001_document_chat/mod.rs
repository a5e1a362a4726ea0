//! Document Chat Domain Module
//!
//! Записи диалога с ассистентом по документам: вопрос пользователя,
//! ответ ассистента и список источников, на которые опирается ответ.

pub mod aggregate;

pub use aggregate::{ChatMessage, ChatSender};
