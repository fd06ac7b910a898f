//! Instruction prompt and output contract sent to the interpreter service.

use cf_catalog::BodyType;
use serde_json::{Value, json};

/// Feature tags the service is told it may emit.
pub const FEATURE_VOCABULARY: &[&str] = &[
    "fuel economy",
    "safety",
    "luxury",
    "off-road",
    "family-friendly",
];

/// Sample requests offered to users as starting points.
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "A safe family SUV under $30,000 with good fuel economy.",
    "A luxury sedan from 2021 or newer.",
    "An off-road truck that's great for adventures.",
];

/// Build the instruction prompt around the user's verbatim request.
pub fn build_prompt(user_text: &str) -> String {
    format!(
        "You are an expert car sales assistant. Analyze the user's request and extract \
         structured filtering criteria for a car search. \
         The user's request is: \"{user_text}\".\n\n\
         Only include fields if they are mentioned or strongly implied in the request."
    )
}

fn quoted_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON Schema (lower-case type names) for the expected reply.
///
/// Every property is optional.
pub fn response_schema() -> Value {
    let body_types = quoted_list(BodyType::ALL.iter().map(|b| b.as_str()));
    let features = quoted_list(FEATURE_VOCABULARY.iter().copied());

    json!({
        "type": "object",
        "properties": {
            "type": {
                "type": "string",
                "description": format!("The type of car. Possible values: {body_types}.")
            },
            "make": {
                "type": "string",
                "description": "The make of the car."
            },
            "minPrice": {
                "type": "number",
                "description": "The minimum price."
            },
            "maxPrice": {
                "type": "number",
                "description": "The maximum price."
            },
            "minYear": {
                "type": "number",
                "description": "The minimum manufacturing year."
            },
            "features": {
                "type": "array",
                "items": { "type": "string" },
                "description": format!("List of features. Possible values: {features}.")
            }
        }
    })
}

/// Extract JSON from model output that may be wrapped in markdown fences.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    trimmed
}
