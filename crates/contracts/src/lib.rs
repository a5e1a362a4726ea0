//! Shared types between the document chat frontend and the RAG server.

pub mod domain;
pub mod usecases;
