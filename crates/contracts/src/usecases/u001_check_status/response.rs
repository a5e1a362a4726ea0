use serde::{Deserialize, Serialize};

/// Снимок состояния индекса документов на сервере.
///
/// Все поля имеют значения по умолчанию: отсутствующий ключ читается
/// как `false`, `0` или пустой список.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub processed: bool,
    #[serde(default)]
    pub document_count: u64,
    #[serde(default)]
    pub chunk_count: u64,
    #[serde(default)]
    pub files_in_folder: Vec<String>,
}

impl StatusSnapshot {
    /// Система готова отвечать, только если индекс построен и в нём есть документы
    pub fn is_ready(&self) -> bool {
        self.processed && self.document_count > 0
    }

    pub fn file_count(&self) -> usize {
        self.files_in_folder.len()
    }
}
