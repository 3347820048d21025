use crate::domain::catalog;
use crate::domain::errors::EncodeError;

/// Number of model input features.
pub const FEATURE_COUNT: usize = 6;

/// Ordered list of feature names.
/// This order MUST match exactly with the order used when the scaler and
/// model were fitted. Any change here silently corrupts predictions.
pub const FEATURE_NAMES: &[&str] = &[
    "brand_code",
    "type_code",
    "ram_gb",
    "weight_kg",
    "os_code",
    "screen_inches",
];

/// One laptop specification with categorical fields already encoded.
///
/// Codes are always validated against the catalog at construction, so a
/// `LaptopSpec` can be decoded back to display names without failure.
#[derive(Debug, Clone, PartialEq)]
pub struct LaptopSpec {
    pub brand_code: usize,
    pub type_code: usize,
    pub os_code: usize,
    pub ram_gb: f64,
    pub weight_kg: f64,
    pub screen_inches: f64,
}

impl LaptopSpec {
    /// Build from display names (dropdown-style selection).
    pub fn from_names(
        brand: &str,
        type_name: &str,
        os: &str,
        ram_gb: f64,
        weight_kg: f64,
        screen_inches: f64,
    ) -> Result<Self, EncodeError> {
        Ok(Self {
            brand_code: catalog::brand_code(brand)?,
            type_code: catalog::type_code(type_name)?,
            os_code: catalog::os_code(os)?,
            ram_gb,
            weight_kg,
            screen_inches,
        })
    }

    /// Build from raw category codes, bounds-checked against the catalog.
    pub fn from_codes(
        brand_code: usize,
        type_code: usize,
        os_code: usize,
        ram_gb: f64,
        weight_kg: f64,
        screen_inches: f64,
    ) -> Result<Self, EncodeError> {
        catalog::brand_name(brand_code)?;
        catalog::type_name(type_code)?;
        catalog::os_name(os_code)?;
        Ok(Self {
            brand_code,
            type_code,
            os_code,
            ram_gb,
            weight_kg,
            screen_inches,
        })
    }

    /// Raw feature vector in training order.
    pub fn to_feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.brand_code as f64,
            self.type_code as f64,
            self.ram_gb,
            self.weight_kg,
            self.os_code as f64,
            self.screen_inches,
        ]
    }
}
