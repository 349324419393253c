pub mod api;
pub mod auth;
pub mod credentials;
pub mod ideas;


pub use api::{
    GenerateKeywordIdeasRequest, KeywordIdea, KeywordIdeaMetrics, KeywordIdeaService, KeywordSeed,
    UrlSeed,
};
pub use credentials::{GoogleAdsConfig, MaterializedCredentials, SecretStore};
pub use ideas::{is_long_tail, micros_to_usd, shape_results};

use keywordscout_core::{geo_target_id, CoreError, KeywordQuery, KeywordRecord, ENGLISH_LANGUAGE_ID};
use std::path::Path;
use tracing::info;

const GOOGLE_SEARCH_NETWORK: &str = "GOOGLE_SEARCH";

/// Google Ads client, constructed from a materialized credentials file.
/// Credentials arrive as an explicit value; nothing reaches into global
/// secret state from the request path.
#[derive(Debug)]
pub struct GoogleAdsClient {
    config: GoogleAdsConfig,
    service: KeywordIdeaService,
}

impl GoogleAdsClient {
    /// Build a client from a credentials file, the one consumer of
    /// `GoogleAdsConfig::materialize`. The file can be removed as soon as
    /// this returns.
    pub fn from_storage(path: &Path) -> Result<Self, CoreError> {
        let config = GoogleAdsConfig::from_yaml_file(path)?;
        let service = KeywordIdeaService::new(
            config.developer_token.clone(),
            config.login_customer_id.clone(),
        )?;
        Ok(Self { config, service })
    }

    pub fn login_customer_id(&self) -> &str {
        &self.config.login_customer_id
    }

    /// Run one keyword-ideas fetch: resolve the geo target, refresh the
    /// access token, issue the single upstream call, then shape the raw
    /// ideas into the bounded, sorted, long-tail-only result set. Either the
    /// whole set comes back or the action fails; there are no partial
    /// results and no retries.
    pub async fn generate_keyword_ideas(
        &self,
        customer_id: &str,
        query: &KeywordQuery,
    ) -> Result<Vec<KeywordRecord>, CoreError> {
        let geo_id = geo_target_id(&query.country)?;
        let request = build_idea_request(query, geo_id);

        let access_token = auth::refresh_access_token(&self.config).await?;
        let ideas = self
            .service
            .generate_keyword_ideas(&access_token, customer_id, &request)
            .await?;

        let records = shape_results(ideas, query.result_limit);
        info!(
            "Generated {} long-tail keywords for {} ({})",
            records.len(),
            query.seed_url,
            query.country
        );
        Ok(records)
    }
}

/// Assemble the upstream request from a query and a resolved geo target id.
/// Seed keywords ride alongside the URL seed as a second channel only when
/// present; the upstream service combines the two.
pub fn build_idea_request(query: &KeywordQuery, geo_id: &str) -> GenerateKeywordIdeasRequest {
    GenerateKeywordIdeasRequest {
        language: format!("languageConstants/{ENGLISH_LANGUAGE_ID}"),
        geo_target_constants: vec![format!("geoTargetConstants/{geo_id}")],
        keyword_plan_network: GOOGLE_SEARCH_NETWORK.to_string(),
        url_seed: Some(UrlSeed {
            url: query.seed_url.clone(),
        }),
        keyword_seed: if query.seed_keywords.is_empty() {
            None
        } else {
            Some(KeywordSeed {
                keywords: query.seed_keywords.clone(),
            })
        },
    }
}
