use serde::{Deserialize, Serialize};

/// Canonical, typed filter specification.
///
/// Produced either by normalizing form input or by sanitizing the intent
/// interpreter's output. Every field is independent and `None` (or an empty
/// feature list) means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredCriteria {
    /// Exact make, case-insensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Substring of the model name, case-insensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Inclusive lower price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    /// Inclusive upper price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    /// Inclusive lower bound on model year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_year: Option<u32>,
    /// Body type name, case-insensitive ("SUV", "sedan", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    /// Tags that must all be present on a record, case-insensitive.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_features: Vec<String>,
}

impl StructuredCriteria {
    /// True when no field constrains the search.
    pub fn is_unconstrained(&self) -> bool {
        self.make.is_none()
            && self.model.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_year.is_none()
            && self.body_type.is_none()
            && self.required_features.is_empty()
    }
}

/// Form fields exactly as typed by the user. Empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFormCriteria {
    pub make: String,
    pub model: String,
    pub min_price: String,
    pub max_price: String,
    pub min_year: String,
}

impl RawFormCriteria {
    /// Build from `key=value` pairs (keys as in the form: `make`, `model`,
    /// `minPrice`, `maxPrice`, `minYear`). Unknown keys are returned.
    pub fn from_pairs<'a, I>(pairs: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut raw = Self::default();
        let mut unknown = Vec::new();
        for (key, value) in pairs {
            let slot = match key {
                "make" => &mut raw.make,
                "model" => &mut raw.model,
                "minPrice" | "min_price" => &mut raw.min_price,
                "maxPrice" | "max_price" => &mut raw.max_price,
                "minYear" | "min_year" => &mut raw.min_year,
                other => {
                    unknown.push(other.to_string());
                    continue;
                }
            };
            *slot = value.to_string();
        }
        (raw, unknown)
    }
}
