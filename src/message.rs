// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Body sent to the inference endpoint.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub query: &'a str,
}

/// Body returned by the inference endpoint.
///
/// The backend answers `{ "error": ..., "suggestion": ... }` without `matches`
/// when its own model call fails, so every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<CareerRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pathway: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub avg_salary_inr: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills_core: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills_nice: Vec<String>,
    #[serde(default)]
    pub industry: Option<String>,
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CareerRecord {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..Default::default()
        }
    }
}

// Browser form payloads.

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub value: String,
}
