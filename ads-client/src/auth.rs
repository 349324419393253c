use crate::credentials::GoogleAdsConfig;
use keywordscout_core::{AdsApiError, CoreError};
use oauth2::basic::BasicClient;
use oauth2::reqwest::async_http_client;
use oauth2::{AuthUrl, ClientId, ClientSecret, RefreshToken, TokenResponse, TokenUrl};
use tracing::{debug, info};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Exchange the stored refresh token for a short-lived access token.
/// One exchange per "Generate" action; tokens are not cached.
pub async fn refresh_access_token(config: &GoogleAdsConfig) -> Result<String, CoreError> {
    let client = oauth_client(config)?;

    debug!("Requesting access token via refresh token exchange");
    let token = client
        .exchange_refresh_token(&RefreshToken::new(config.refresh_token.clone()))
        .request_async(async_http_client)
        .await
        .map_err(|e| {
            CoreError::AdsApi(AdsApiError::AuthenticationFailed {
                reason: e.to_string(),
            })
        })?;

    info!("Obtained Google Ads access token");
    Ok(token.access_token().secret().clone())
}

fn oauth_client(config: &GoogleAdsConfig) -> Result<BasicClient, CoreError> {
    let auth_url = AuthUrl::new(GOOGLE_AUTH_URL.to_string()).map_err(|e| {
        CoreError::AdsApi(AdsApiError::AuthenticationFailed {
            reason: format!("invalid auth URL: {e}"),
        })
    })?;
    let token_url = TokenUrl::new(GOOGLE_TOKEN_URL.to_string()).map_err(|e| {
        CoreError::AdsApi(AdsApiError::AuthenticationFailed {
            reason: format!("invalid token URL: {e}"),
        })
    })?;

    Ok(BasicClient::new(
        ClientId::new(config.client_id.clone()),
        Some(ClientSecret::new(config.client_secret.clone())),
        auth_url,
        Some(token_url),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GoogleAdsConfig {
        GoogleAdsConfig {
            developer_token: "dev-token".to_string(),
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            refresh_token: "refresh-token".to_string(),
            login_customer_id: "1234567890".to_string(),
            use_proto_plus: true,
        }
    }

    #[test]
    fn test_oauth_client_construction() {
        let client = oauth_client(&test_config());
        assert!(client.is_ok());
    }
}
