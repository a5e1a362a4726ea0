//! POST /process_documents

pub mod request;
pub mod response;

pub use request::ProcessDocumentsRequest;
pub use response::ProcessDocumentsResponse;
