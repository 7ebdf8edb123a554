use crate::catalog::{CatalogPage, PageNumber};
use crate::config::Config;
use crate::error::FeedError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

/// Source of popular-movie pages.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_popular(&self, page: PageNumber) -> Result<CatalogPage, FeedError>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self, FeedError> {
        let user_agent = format!("moviegrid/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            api_key: config.tmdb_api_key.clone(),
            api_base: config.tmdb_api_base.clone(),
        })
    }

    fn popular_url(&self, page: PageNumber) -> String {
        format!(
            "{}/movie/popular?api_key={}&page={}",
            self.api_base,
            urlencoding::encode(&self.api_key),
            page
        )
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, FeedError> {
        let res = self.client.get(url).send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            warn!("Catalog responded with HTTP {}", status.as_u16());
        }
        decode_body(status.as_u16(), &text)
    }
}

#[async_trait]
impl CatalogApi for TmdbClient {
    async fn fetch_popular(&self, page: PageNumber) -> Result<CatalogPage, FeedError> {
        debug!(page = %page, "Fetching popular movies");
        let url = self.popular_url(page);
        let data: CatalogPage = self.get_json(&url).await?;
        debug!(
            page = ?data.page,
            results = data.results.len(),
            total_pages = data.total_pages,
            "Fetched popular movies"
        );
        Ok(data)
    }
}

fn decode_body<T: for<'de> Deserialize<'de>>(status: u16, text: &str) -> Result<T, FeedError> {
    serde_json::from_str(text).map_err(|source| FeedError::InvalidPayload { status, source })
}
