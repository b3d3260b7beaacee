//! User-facing submission failure classification

/// Why a submission failed, as shown to the user.
///
/// The `Display` output is the exact message the view renders, so the
/// fixed wordings live here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend failed generically.
    #[error("Unexpected error, please try again")]
    Server,

    /// The backend rejected the payload; its message is shown verbatim.
    #[error("{0}")]
    InvalidRequest(String),

    /// The request never reached or returned from the backend. Also the
    /// catch-all for outcomes the form does not know how to classify.
    #[error("Connection error, please try later")]
    Connection,
}
