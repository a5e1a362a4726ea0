use serde::{Deserialize, Serialize};

/// Ответ RAG-сервера на вопрос.
///
/// При `success == true` заполнены `answer` и `sources`,
/// иначе в `message` лежит текст ошибки.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub answer: Option<String>,
    /// `null` и отсутствие ключа равнозначны пустому списку
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatResponse {
    pub fn sources(&self) -> &[String] {
        self.sources.as_deref().unwrap_or_default()
    }
}
