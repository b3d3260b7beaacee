//! Product type option set

/// The fixed option set for the type select.
///
/// The core submits whatever raw string the view holds; this enum is the
/// contract for what the view offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Electronic,
    Furniture,
    Clothing,
}

impl ProductType {
    /// All options in display order.
    pub const ALL: [ProductType; 3] = [
        ProductType::Electronic,
        ProductType::Furniture,
        ProductType::Clothing,
    ];

    /// Returns the option value as submitted in the payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Electronic => "electronic",
            ProductType::Furniture => "furniture",
            ProductType::Clothing => "clothing",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
