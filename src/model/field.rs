//! Field names, values, and per-field error state

use serde::Serialize;

/// The three named inputs of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Free-text product name.
    Name,
    /// Free-text product size.
    Size,
    /// Single-select product type.
    Type,
}

impl FieldName {
    /// All fields in fixed form order.
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Size, FieldName::Type];

    /// Returns the lowercase field name as used in the payload and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Size => "size",
            FieldName::Type => "type",
        }
    }

    /// Looks up a field by its lowercase name.
    ///
    /// View layers that address inputs by string name can map them back to
    /// the typed field here.
    pub fn from_name(name: &str) -> Option<FieldName> {
        match name {
            "name" => Some(FieldName::Name),
            "size" => Some(FieldName::Size),
            "type" => Some(FieldName::Type),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw user input for every field.
///
/// Serializes as the create-call payload: `{"name": …, "size": …, "type": …}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldValues {
    /// Raw name input.
    pub name: String,
    /// Raw size input.
    pub size: String,
    /// Raw type selection.
    #[serde(rename = "type")]
    pub product_type: String,
}

impl FieldValues {
    /// Creates values for all three fields.
    pub fn new(
        name: impl Into<String>,
        size: impl Into<String>,
        product_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            product_type: product_type.into(),
        }
    }

    /// Returns the raw value of a field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Size => &self.size,
            FieldName::Type => &self.product_type,
        }
    }

    /// Replaces the raw value of a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::Name => self.name = value,
            FieldName::Size => self.size = value,
            FieldName::Type => self.product_type = value,
        }
    }

    /// Resets all three fields to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Validation error state, one optional message per field.
///
/// An entry is `Some` iff the corresponding value was empty at the last
/// validation of that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<String>,
    size: Option<String>,
    product_type: Option<String>,
}

impl FieldErrors {
    /// Returns the error message for a field, if any.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => self.name.as_deref(),
            FieldName::Size => self.size.as_deref(),
            FieldName::Type => self.product_type.as_deref(),
        }
    }

    /// Replaces the error entry for one field.
    pub fn set(&mut self, field: FieldName, message: Option<String>) {
        match field {
            FieldName::Name => self.name = message,
            FieldName::Size => self.size = message,
            FieldName::Type => self.product_type = message,
        }
    }

    /// Returns `true` when no field has an error.
    pub fn is_clear(&self) -> bool {
        self.count() == 0
    }

    /// Number of fields currently in error.
    pub fn count(&self) -> usize {
        FieldName::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }
}
