use serde::{Deserialize, Serialize};

/// Fuel / powertrain type of a listed vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "Gasoline",
            Self::Diesel => "Diesel",
            Self::Electric => "Electric",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gearbox type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
        }
    }
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body style of a vehicle.
///
/// The serialized names are the display names (`"SUV"`, `"Sedan"`, ...),
/// which are also the values the intent interpreter is told to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    #[serde(rename = "SUV")]
    Suv,
    Sedan,
    Truck,
    Coupe,
    Convertible,
    Hatchback,
}

impl BodyType {
    /// Every body type, in display order.
    pub const ALL: [BodyType; 6] = [
        Self::Suv,
        Self::Sedan,
        Self::Truck,
        Self::Coupe,
        Self::Convertible,
        Self::Hatchback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suv => "SUV",
            Self::Sedan => "Sedan",
            Self::Truck => "Truck",
            Self::Coupe => "Coupe",
            Self::Convertible => "Convertible",
            Self::Hatchback => "Hatchback",
        }
    }

    /// Case-insensitive comparison against free-form text (surrounding
    /// whitespace ignored).
    pub fn matches_name(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name.trim())
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single immutable catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Unique within a catalog.
    pub id: u32,
    pub make: String,
    pub model: String,
    pub year: u32,
    /// Asking price in the smallest currency unit.
    pub price: u64,
    pub mileage: u64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    #[serde(alias = "type")]
    pub body_type: BodyType,
    /// Lower-case feature tags (e.g. "safety", "off-road").
    #[serde(default)]
    pub features: Vec<String>,
    /// Opaque image reference for the presentation layer.
    #[serde(default, alias = "imageUrl")]
    pub image_ref: String,
}

impl VehicleRecord {
    /// Case-insensitive feature check.
    pub fn has_feature(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.features.iter().any(|f| f.to_lowercase() == wanted)
    }
}
