use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::forwarder::TextGenerator;

const MODEL: &str = "gemini-2.5-flash";

const BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Review policy sent with every request as the system instruction.
const REVIEW_INSTRUCTIONS: &str = "\
You are a highly experienced software engineer and code reviewer.
Your role is to critically evaluate code for correctness, efficiency,
readability, scalability, and adherence to modern best practices.
You identify bugs, code smells, anti-patterns, and security issues,
and provide clear, actionable suggestions for improvement.
Your reviews are concise, professional, and focused on writing clean, maintainable, and production-ready code.
Follow these review guidelines:

Correctness - Ensure the code functions as intended and meets the specified requirements.

Code Quality - Check for clean, readable, and well-structured code (naming conventions, formatting, meaningful comments).

Best Practices - Confirm adherence to language/framework-specific best practices and design patterns.

Performance - Identify unnecessary computations, inefficient algorithms, or memory-heavy logic.

Security - Watch for vulnerabilities such as injection attacks, unsafe API usage, or exposed secrets.

Scalability & Maintainability - Ensure the code is modular, reusable, and easy to test, debug, and extend.

Edge Cases & Error Handling - Check for proper validation, error handling, and support for edge inputs or failure scenarios.

Dependencies & Architecture - Identify tight coupling, unnecessary dependencies, or violations of separation of concerns.

Constructive Feedback - Offer precise, respectful, and actionable suggestions with improved code snippets where possible.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {body}")]
    Status { status: StatusCode, body: String },
    #[error("no text in generation response")]
    MissingText,
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()
            .expect("failed to build http client");
        Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// One `generateContent` round trip: the prompt goes out as user content
    /// together with the fixed model and review instructions.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, ApiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "error reading response body".to_string());
            return Err(ApiError::Status { status, body });
        }

        let payload: GenerateContentResponse = response.json().await?;
        extract_text(payload)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        Ok(self.generate_content(prompt).await?)
    }
}

fn request_body(prompt: &str) -> serde_json::Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "systemInstruction": {
            "parts": [{ "text": REVIEW_INSTRUCTIONS }]
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn extract_text(response: GenerateContentResponse) -> Result<String, ApiError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or(ApiError::MissingText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "looks good" }, { "text": "second part" }]
                }
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(payload).unwrap(), "looks good");
    }

    #[test]
    fn text_is_returned_unaltered() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  ```rust\nfn main() {}\n```  " }] }
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(payload).unwrap(), "  ```rust\nfn main() {}\n```  ");
    }

    #[test]
    fn missing_candidates_is_an_error() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(extract_text(payload), Err(ApiError::MissingText)));
    }

    #[test]
    fn candidate_without_text_is_an_error() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [] } }]
        }))
        .unwrap();
        assert!(matches!(extract_text(payload), Err(ApiError::MissingText)));
    }

    #[test]
    fn body_carries_prompt_and_fixed_instructions() {
        let body = request_body("review this diff");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "review this diff");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            REVIEW_INSTRUCTIONS
        );
    }
}
