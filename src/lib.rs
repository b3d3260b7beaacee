//! Product creation form core
//!
//! The validation-and-submission state machine behind a single-page
//! product-creation form. A rendering layer (terminal, web, ...) displays
//! [`FormState`] and forwards [`FormEvent`]s into a [`FormController`];
//! the controller validates the three fields, drives one create call
//! through a [`ProductService`], and reflects the outcome back as state.

pub mod error;
pub mod form;
pub mod model;
pub mod service;
pub mod validate;

pub use form::FormController;
pub use form::FormEvent;
pub use form::FormState;
pub use form::SubmissionStatus;
pub use model::FieldErrors;
pub use model::FieldName;
pub use model::FieldValues;
pub use model::ProductType;
pub use service::HttpProductService;
pub use service::ProductService;
pub use service::SaveOutcome;
