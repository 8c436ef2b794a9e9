//! Hugging Face Inference API types.
//!
//! Wire structures for the text2text-generation task. These are NOT the
//! generic generation types from learnix-types -- those are backend-agnostic.

use serde::{Deserialize, Serialize};

use learnix_types::llm::GenerationConfig;

/// Request body for `POST /models/{model}`.
#[derive(Debug, Clone, Serialize)]
pub struct HfRequest {
    pub inputs: String,
    pub parameters: HfParameters,
    pub options: HfOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct HfParameters {
    pub max_length: u32,
    pub num_return_sequences: u32,
    pub pad_token_id: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HfOptions {
    /// Block until a cold model is loaded instead of returning 503.
    pub wait_for_model: bool,
}

impl HfRequest {
    pub fn new(prompt: &str, config: &GenerationConfig) -> Self {
        Self {
            inputs: prompt.to_string(),
            parameters: HfParameters {
                max_length: config.max_output_tokens,
                num_return_sequences: config.num_return_sequences,
                pad_token_id: config.pad_token_id,
            },
            options: HfOptions {
                wait_for_model: true,
            },
        }
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct HfGeneration {
    pub generated_text: String,
}

/// Successful response body: a list of candidates, or a bare candidate on
/// some deployments.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HfResponse {
    Many(Vec<HfGeneration>),
    One(HfGeneration),
}

impl HfResponse {
    /// Text of the first candidate, if any.
    pub fn into_first_text(self) -> Option<String> {
        match self {
            HfResponse::Many(generations) => {
                generations.into_iter().next().map(|g| g.generated_text)
            }
            HfResponse::One(generation) => Some(generation.generated_text),
        }
    }
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct HfErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = HfRequest::new("User: hi", &GenerationConfig::default());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "inputs": "User: hi",
                "parameters": {
                    "max_length": 100,
                    "num_return_sequences": 1,
                    "pad_token_id": 2
                },
                "options": { "wait_for_model": true }
            })
        );
    }

    #[test]
    fn test_parse_list_response() {
        let body = r#"[{"generated_text": " Try a weekly planner."}]"#;
        let response: HfResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.into_first_text().as_deref(),
            Some(" Try a weekly planner.")
        );
    }

    #[test]
    fn test_parse_single_response() {
        let body = r#"{"generated_text": "Hello"}"#;
        let response: HfResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_first_text().as_deref(), Some("Hello"));
    }

    #[test]
    fn test_parse_empty_list() {
        let response: HfResponse = serde_json::from_str("[]").unwrap();
        assert!(response.into_first_text().is_none());
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error": "Model is currently loading", "estimated_time": 20.5}"#;
        let err: HfErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(err.error, "Model is currently loading");
        assert_eq!(err.estimated_time, Some(20.5));
    }
}
