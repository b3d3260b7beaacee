//! Product service contract and HTTP implementation

mod http;

pub use http::*;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::model::FieldValues;

/// Status code for a successful create.
pub const CREATED_STATUS: u16 = 201;
/// Status code for a generic backend failure.
pub const ERROR_SERVER_STATUS: u16 = 500;
/// Status code for a rejected payload carrying a structured message.
pub const INVALID_REQUEST_STATUS: u16 = 400;

/// The classified result of a create call that produced a response.
///
/// Only three status classes carry meaning for the form; everything else
/// lands in [`SaveOutcome::Other`] and is treated as a connection problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The product was stored.
    Created,
    /// The backend failed generically.
    ServerError {
        /// The HTTP status that was returned.
        status: u16,
    },
    /// The backend rejected the payload with a structured message.
    InvalidRequest {
        /// The backend-provided message, shown to the user verbatim.
        message: String,
    },
    /// A response the form does not know how to classify.
    Other {
        /// The HTTP status that was returned.
        status: u16,
    },
}

/// The remote collaborator that stores products.
///
/// The form core depends only on this contract; the shipped implementation
/// is [`HttpProductService`], and tests substitute their own.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Sends the product to the backend and classifies the result.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when no classifiable response was
    /// obtained (network failure, undecodable body).
    async fn save_product(&self, values: &FieldValues) -> Result<SaveOutcome, ServiceError>;
}
