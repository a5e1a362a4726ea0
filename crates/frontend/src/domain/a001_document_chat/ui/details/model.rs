//! Document Chat - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::usecases::u001_check_status::StatusSnapshot;
use contracts::usecases::u002_process_documents::{
    ProcessDocumentsRequest, ProcessDocumentsResponse,
};
use contracts::usecases::u003_ask_question::{ChatRequest, ChatResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Parse the JSON body whatever the HTTP status is.
///
/// The server reports its own failures as `{ "success": false, ... }`,
/// so only an unreadable or malformed body is an error here.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        log::warn!("{} -> HTTP {}", response.url(), response.status());
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Состояние индекса документов
pub async fn fetch_status(base: &str) -> Result<StatusSnapshot, String> {
    let response = Request::get(&api_url(base, "/status"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_json(response).await
}

/// Запустить переобработку папки документов
pub async fn process_documents(base: &str) -> Result<ProcessDocumentsResponse, String> {
    let response = Request::post(&api_url(base, "/process_documents"))
        .json(&ProcessDocumentsRequest::default())
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_json(response).await
}

/// Задать вопрос по документам
pub async fn ask_question(base: &str, request: &ChatRequest) -> Result<ChatResponse, String> {
    let response = Request::post(&api_url(base, "/chat"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_json(response).await
}
