//! Validation of generated profile payloads
//!
//! A generated profile is a JSON object carrying all seven input fields as
//! non-negative whole numbers. Anything else is rejected.

use crate::error::GenerationError;
use roi_core::{InputField, ProfilePatch};
use serde_json::Value;

/// Parse and validate the raw text returned by a generation service
pub fn parse_profile_response(text: &str) -> Result<ProfilePatch, GenerationError> {
    let body = strip_code_fence(text.trim());

    let value: Value =
        serde_json::from_str(body).map_err(|e| GenerationError::Malformed(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| GenerationError::Schema("expected a JSON object".to_string()))?;

    let mut patch = ProfilePatch::default();
    for field in InputField::ALL {
        let name = field.as_str();
        let raw = object
            .get(name)
            .ok_or_else(|| GenerationError::Schema(format!("missing required field '{}'", name)))?;
        let number = raw
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                GenerationError::Schema(format!(
                    "field '{}' must be a non-negative integer, got {}",
                    name, raw
                ))
            })?;
        patch.set(field, number);
    }

    Ok(patch)
}

/// Drop a surrounding Markdown code fence, if any
fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
