use serde::{Deserialize, Serialize};

/// Тело запроса на переобработку документов: пустой JSON-объект `{}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessDocumentsRequest {}
