use serde::{Deserialize, Serialize};

/// Ответ на запуск переобработки документов
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessDocumentsResponse {
    #[serde(default)]
    pub success: bool,
    /// Количество обработанных файлов (только при успехе)
    #[serde(default)]
    pub document_count: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}
