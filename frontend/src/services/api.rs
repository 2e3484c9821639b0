use gloo::net::http::Request;
use shared::{CalculateRequest, CalculateResponse};

/// API client for communicating with the calculation backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// POST the calculation request and parse the response envelope.
    ///
    /// Validation failures come back as a well-formed envelope with a 400
    /// status, so the body is parsed regardless of the status code; only a
    /// network failure or an unparsable body is a transport error.
    pub async fn calculate(&self, request: &CalculateRequest) -> Result<CalculateResponse, String> {
        let url = format!("{}/api/calculate", self.base_url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        response
            .json::<CalculateResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
