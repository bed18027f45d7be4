//! HTTP client for the SwipeFund platform API.
//!
//! Both the web and mobile hosts use this client so the opportunity
//! listing, preferences and invest calls behave the same everywhere.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use swipefund_core::errors::{Error, Result};
use swipefund_core::opportunities::{Opportunity, OpportunitySourceTrait};
use swipefund_core::preferences::{InvestorPreferences, PreferencesSourceTrait};
use swipefund_core::swipe::{InvestGatewayTrait, InvestReceipt, InvestRequest};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for a locally running platform API.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Header carrying the wallet-signed proof on invest calls.
pub const AUTH_PROOF_HEADER: &str = "x-auth-proof";

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for parsing platform responses)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct ApiOpportunitiesResponse {
    #[serde(default)]
    opportunities: Vec<Opportunity>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiInvestmentResponse {
    id: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Platform API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the platform REST API.
///
/// # Example
///
/// ```ignore
/// let client = PlatformApiClient::new("https://api.example.org", None)?;
/// let deck = client.list_opportunities().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PlatformApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl PlatformApiClient {
    /// Create a client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains invalid header characters or
    /// the HTTP client cannot be initialized.
    pub fn new(base_url: &str, access_token: Option<&str>) -> Result<Self> {
        Self::with_timeout(
            base_url,
            access_token,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a client with a custom request timeout.
    ///
    /// A timed-out invest call surfaces as an ordinary `Error::Api`.
    pub fn with_timeout(
        base_url: &str,
        access_token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self> {
        let auth_header = access_token
            .map(|token| {
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))
            })
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    /// Make a GET request and return status and body.
    async fn get_raw(&self, path: &str) -> Result<(StatusCode, String)> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[PlatformApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Api(format!("Request failed: {}", e)))?;

        read_response(response).await
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (status, body) = self.get_raw(path).await?;
        parse_body(status, &body)
    }
}

async fn read_response(response: reqwest::Response) -> Result<(StatusCode, String)> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Api(format!("Failed to read response: {}", e)))?;
    Ok((status, body))
}

/// Parse a response body, turning non-2xx statuses into `Error::Api`.
fn parse_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if !status.is_success() {
        // Try to parse error response for a better message
        if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
            let msg = err
                .message
                .or(err.error)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(Error::Api(format!("API error: {}", msg)));
        }
        return Err(Error::Api(format!(
            "API error {}: {}",
            status,
            body.chars().take(200).collect::<String>()
        )));
    }

    serde_json::from_str(body)
        .map_err(|e| Error::Api(format!("Failed to parse response: {} - {}", e, body)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Collaborator Trait Implementations
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl OpportunitySourceTrait for PlatformApiClient {
    /// Fetch the ordered opportunity listing for the deck.
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>> {
        let api_response: ApiOpportunitiesResponse = self.get("/api/opportunities").await?;
        info!(
            "[PlatformApi] Fetched {} opportunities",
            api_response.opportunities.len()
        );
        Ok(api_response.opportunities)
    }
}

#[async_trait]
impl PreferencesSourceTrait for PlatformApiClient {
    /// Fetch saved preferences. A 404 means none saved yet.
    async fn get_preferences(&self, wallet_address: &str) -> Result<Option<InvestorPreferences>> {
        let path = format!(
            "/api/investors/{}/preferences",
            urlencoding::encode(wallet_address)
        );
        let (status, body) = self.get_raw(&path).await?;
        if status == StatusCode::NOT_FOUND {
            debug!("[PlatformApi] No preferences saved for {}", wallet_address);
            return Ok(None);
        }
        parse_body(status, &body).map(Some)
    }
}

#[async_trait]
impl InvestGatewayTrait for PlatformApiClient {
    /// Submit an investment with the wallet-signed proof attached.
    async fn invest(&self, request: InvestRequest) -> Result<InvestReceipt> {
        let url = format!("{}/api/investments", self.base_url);
        debug!(
            "[PlatformApi] POST {} ({} {} -> {})",
            url, request.amount, request.currency, request.target_id
        );

        let mut headers = self.headers();
        let proof = HeaderValue::from_str(request.auth_proof.as_str())
            .map_err(|e| Error::Session(format!("Auth proof is not a valid header: {}", e)))?;
        headers.insert(HeaderName::from_static(AUTH_PROOF_HEADER), proof);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("[PlatformApi] Invest request failed: {}", e);
                Error::Api(format!("Invest request failed: {}", e))
            })?;

        let (status, body) = read_response(response).await?;
        let api_response: ApiInvestmentResponse = parse_body(status, &body)?;

        info!(
            "[PlatformApi] Investment {} recorded for {}",
            api_response.id, request.target_id
        );
        Ok(InvestReceipt {
            id: api_response.id,
            status: api_response.status.unwrap_or_else(|| "submitted".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use swipefund_core::opportunities::OpportunityType;
    use swipefund_core::swipe::AuthProof;

    #[test]
    fn test_client_creation() {
        assert!(PlatformApiClient::new(DEFAULT_API_URL, None).is_ok());
        assert!(PlatformApiClient::new(DEFAULT_API_URL, Some("test-token")).is_ok());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let client = PlatformApiClient::new(DEFAULT_API_URL, Some("bad\ntoken"));
        assert!(matches!(client, Err(Error::Unexpected(_))));
    }

    #[test]
    fn test_client_url_normalization() {
        let client = PlatformApiClient::new("https://api.example.org/", None).unwrap();
        assert_eq!(client.base_url(), "https://api.example.org");
    }

    #[test]
    fn test_headers_include_bearer_only_with_token() {
        let anonymous = PlatformApiClient::new(DEFAULT_API_URL, None).unwrap();
        assert!(anonymous.headers().get(AUTHORIZATION).is_none());

        let authed = PlatformApiClient::new(DEFAULT_API_URL, Some("abc")).unwrap();
        assert_eq!(authed.headers().get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn test_parse_opportunity_listing() {
        let body = r#"{"opportunities":[{
            "id":"dao-3","type":"dao","title":"Ocean DAO","description":"Reef monitoring",
            "fundingGoal":250000,"fundingRaised":90000,"category":"Climate","urgency":"high",
            "location":"Lisbon"
        }]}"#;
        let parsed: ApiOpportunitiesResponse = parse_body(StatusCode::OK, body).unwrap();
        assert_eq!(parsed.opportunities.len(), 1);
        let opp = &parsed.opportunities[0];
        assert_eq!(opp.opportunity_type, OpportunityType::Dao);
        assert_eq!(opp.funding_goal, dec!(250000));
        assert_eq!(opp.location.as_deref(), Some("Lisbon"));
    }

    #[test]
    fn test_error_body_message_is_surfaced() {
        let err = parse_body::<ApiInvestmentResponse>(
            StatusCode::BAD_REQUEST,
            r#"{"error":"bad_request","message":"Amount exceeds remaining goal"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "API request failed: API error: Amount exceeds remaining goal"
        );
        assert!(matches!(err, Error::Api(_)));
    }

    #[test]
    fn test_non_json_error_body_is_truncated() {
        let body = "x".repeat(500);
        let err = parse_body::<ApiInvestmentResponse>(StatusCode::BAD_GATEWAY, &body).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.len() < 300);
    }

    #[test]
    fn test_invest_payload_omits_auth_proof() {
        let request = InvestRequest {
            target_type: "grant".to_string(),
            target_id: "grant-1".to_string(),
            amount: dec!(100),
            currency: "USD".to_string(),
            auth_proof: AuthProof::new("sig"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["targetType"], "grant");
        assert_eq!(json["targetId"], "grant-1");
        assert!(json.get("authProof").is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_api_error() {
        let client = PlatformApiClient::with_timeout(
            "http://127.0.0.1:9",
            None,
            Duration::from_millis(500),
        )
        .unwrap();
        let err = client.list_opportunities().await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }
}
