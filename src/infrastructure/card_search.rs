//! Card search client for the remote trading card API

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::outbound::{CardSearchError, CardSearchPort, CardSearchQuery};
use crate::domain::entities::RemoteCardCandidate;

const CLIENT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Client for the card search endpoint
///
/// No request timeout is set: a hung search keeps the card loading.
pub struct CardSearchClient {
    client: Client,
    base_url: String,
}

impl CardSearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CardSearchResponse {
    #[serde(default)]
    data: Option<Vec<RemoteCardCandidate>>,
}

impl From<reqwest::Error> for CardSearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CardSearchError::Decode(e.to_string())
        } else {
            CardSearchError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl CardSearchPort for CardSearchClient {
    async fn search(
        &self,
        query: CardSearchQuery,
    ) -> Result<Vec<RemoteCardCandidate>, CardSearchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", format!("nationalPokedexNumbers:{}", query.number)),
                ("pageSize", query.page_size.to_string()),
            ])
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(CardSearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: CardSearchResponse = response.json().await?;
        Ok(body.data.unwrap_or_default())
    }
}
