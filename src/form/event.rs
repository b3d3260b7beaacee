//! View-to-core events

use crate::model::FieldName;
use crate::model::FieldValues;

/// A user event forwarded by the rendering layer.
///
/// The view translates its platform events into these commands, so the core
/// never sees a toolkit type. Suppressing the host's default submit
/// behavior (page navigation and the like) stays the view's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Focus left an input.
    Blur {
        /// The field that was left.
        field: FieldName,
        /// The raw value it held.
        value: String,
    },
    /// The submit affordance was triggered.
    Submit {
        /// A snapshot of all three field values.
        values: FieldValues,
    },
}
