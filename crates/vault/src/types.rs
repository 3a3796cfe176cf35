use serde::{Deserialize, Serialize};

/// Request body and query parameters for the synthesize endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SynthesizeRequest {
    /// Text to synthesize; must be non-empty after trimming
    pub text: String,
    /// Target group name; the configured default is used when absent
    #[serde(default)]
    pub group_name: Option<String>,
    /// Voice identifier; the provider default is used when absent
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Successful synthesize response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    /// Public URL of the stored audio artifact
    pub file_url: String,
}
