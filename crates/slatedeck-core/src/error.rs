//! Error types for document and host-facing operations.
//!
//! Interaction paths never return errors; invalid sequences degrade to
//! logged no-ops so a live editing surface is never interrupted. These types
//! cover the fallible edges: document construction and JSON round-trips.

use crate::element::ElementId;
use thiserror::Error;

/// Errors from deck/slide construction and persistence.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("duplicate element id in slide: {0}")]
    DuplicateElement(ElementId),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;
