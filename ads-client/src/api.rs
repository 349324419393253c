use keywordscout_core::{AdsApiError, Competition, CoreError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

const GOOGLE_ADS_API_BASE: &str = "https://googleads.googleapis.com/v17";

/// URL seed channel of an idea-generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlSeed {
    pub url: String,
}

/// Keyword seed channel of an idea-generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSeed {
    pub keywords: Vec<String>,
}

/// One `generateKeywordIdeas` request. URL and keyword seeds are distinct
/// channels; combining them is the upstream service's job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateKeywordIdeasRequest {
    pub language: String,
    pub geo_target_constants: Vec<String>,
    pub keyword_plan_network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_seed: Option<UrlSeed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_seed: Option<KeywordSeed>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateKeywordIdeasResponse {
    #[serde(default)]
    pub results: Vec<KeywordIdea>,
}

/// One idea record as returned upstream. Metrics are optional; the service
/// omits them for some suggestions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordIdea {
    #[serde(default)]
    pub text: String,
    pub keyword_idea_metrics: Option<KeywordIdeaMetrics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordIdeaMetrics {
    #[serde(default, deserialize_with = "int64_value")]
    pub avg_monthly_searches: u64,
    #[serde(default, deserialize_with = "int64_value")]
    pub high_top_of_page_bid_micros: u64,
    #[serde(default)]
    pub competition: Competition,
}

// proto3 JSON renders int64 as a string; some gateways emit plain numbers.
fn int64_value<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Thin client for the keyword-ideas endpoint of the Google Ads REST API.
#[derive(Debug)]
pub struct KeywordIdeaService {
    http_client: Client,
    base_url: String,
    developer_token: String,
    login_customer_id: String,
}

impl KeywordIdeaService {
    pub fn new(developer_token: String, login_customer_id: String) -> Result<Self, CoreError> {
        Self::with_base_url(
            GOOGLE_ADS_API_BASE.to_string(),
            developer_token,
            login_customer_id,
        )
    }

    pub fn with_base_url(
        base_url: String,
        developer_token: String,
        login_customer_id: String,
    ) -> Result<Self, CoreError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(CoreError::Network)?;

        Ok(Self {
            http_client,
            base_url,
            developer_token,
            login_customer_id,
        })
    }

    /// Issue exactly one synchronous idea-generation call. The service
    /// decides how many ideas come back; no delivery count is requested.
    pub async fn generate_keyword_ideas(
        &self,
        access_token: &str,
        customer_id: &str,
        request: &GenerateKeywordIdeasRequest,
    ) -> Result<Vec<KeywordIdea>, CoreError> {
        let url = format!(
            "{}/customers/{}:generateKeywordIdeas",
            self.base_url, customer_id
        );

        info!("Requesting keyword ideas for customer {}", customer_id);
        let response = match self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .header("developer-token", &self.developer_token)
            .header("login-customer-id", &self.login_customer_id)
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Network error for generateKeywordIdeas: {}", e);
                if e.is_timeout() {
                    return Err(CoreError::AdsApi(AdsApiError::RequestTimeout));
                }
                return Err(CoreError::Network(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            error!(
                "generateKeywordIdeas failed with status {}: {}",
                status, details
            );
            return Err(CoreError::AdsApi(match status.as_u16() {
                401 => AdsApiError::AuthenticationFailed { reason: details },
                403 => AdsApiError::Forbidden {
                    resource: format!("customers/{customer_id}"),
                },
                429 => AdsApiError::QuotaExceeded { details },
                code if status.is_server_error() => AdsApiError::ServerError { status_code: code },
                code => AdsApiError::RequestFailed {
                    status_code: code,
                    details,
                },
            }));
        }

        let body: GenerateKeywordIdeasResponse = response.json().await.map_err(|e| {
            error!("Failed to parse keyword ideas response: {}", e);
            CoreError::AdsApi(AdsApiError::InvalidResponse {
                details: format!("Failed to parse keyword ideas response: {e}"),
            })
        })?;

        debug!("Upstream returned {} idea records", body.results.len());
        Ok(body.results)
    }
}
