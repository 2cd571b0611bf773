use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Base URL of the storefront API server.
const API_BASE: &str = "http://localhost:8080";

/// API client error type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApiClientError {
    Network(String),
    Server(u16),
    Malformed(String),
}

impl std::fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiClientError::Server(status) => write!(f, "Server error: HTTP {}", status),
            ApiClientError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

type Result<T> = std::result::Result<T, ApiClientError>;

/// Helper function to handle API responses
async fn handle_response<T: DeserializeOwned>(
    request: gloo_net::http::RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiClientError::Network(e.to_string()))?;

    let status = response.status();

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiClientError::Malformed(e.to_string()))
    } else {
        Err(ApiClientError::Server(status))
    }
}

/// Variants API
pub mod variants {
    use vitrine::search::{Keyword, VariantHit, parse_hits, search_url};

    use super::*;
    use crate::models::Variant;

    /// Run a keyword search. At most `MAX_HITS` hits come back, in the
    /// order the server ranked them.
    pub async fn search(keyword: &Keyword) -> Result<Vec<VariantHit>> {
        let url = search_url(API_BASE, keyword);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(ApiClientError::Server(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        parse_hits(&body).map_err(|e| ApiClientError::Malformed(e.to_string()))
    }

    pub async fn get(id: &str) -> Result<Variant> {
        let url = format!("{}/user/api/variants/{}", API_BASE, id);
        handle_response(Request::get(&url)).await
    }
}
