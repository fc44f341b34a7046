//! Error types for the Product actor.

use crate::model::ProductId;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Another product already uses this SKU (compared case-insensitively).
    #[error("SKU already in use: {0}")]
    DuplicateSku(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Conflict(sku) => ProductError::DuplicateSku(sku),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
