//! Document Chat Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions for /status, /process_documents, /chat
//! - session.rs: ChatSession state machine (pure, unit tested)
//! - view_model.rs: DocumentChatVm with RwSignals and async operations
//! - view.rs: Main component DocumentChatPage and its parts

mod model;
pub mod session;
mod view;
mod view_model;

pub use session::{ChatSession, SendRejection, SessionPhase, StatusKind, StatusLine};
pub use view::DocumentChatPage;
pub use view_model::DocumentChatVm;
