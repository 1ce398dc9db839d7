// src/stackexchange/client.rs
use async_trait::async_trait;
use reqwest::Client;

use super::{QuestionPage, QuestionQuery, QuestionSource};
use crate::errors::FetchFailure;

pub const DEFAULT_API_URL: &str = "https://api.stackexchange.com/2.2/questions/unanswered";
const SITE: &str = "stackoverflow";
const SORT: &str = "creation";

pub struct StackExchangeClient {
    base_url: String,
    key: Option<String>,
    client: Client,
}

impl StackExchangeClient {
    /// `key` is optional; without it the daily quota is lower.
    pub fn new(key: Option<String>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            key,
            client: Client::new(),
        }
    }

    /// Optional builder for tests/tools
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn query_params(&self, q: &QuestionQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        if let Some(key) = &self.key {
            params.push(("key", key.clone()));
        }
        params.push(("site", SITE.to_string()));
        params.push(("sort", SORT.to_string()));
        params.push(("pagesize", q.page_size.to_string()));
        params.push(("tagged", q.tag.clone()));
        params
    }
}

#[async_trait]
impl QuestionSource for StackExchangeClient {
    async fn fetch_page(&self, query: &QuestionQuery) -> Result<QuestionPage, FetchFailure> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(query))
            .send()
            .await?;

        // Error envelopes come with 4xx codes, so decode before looking at the status.
        let status = resp.status();
        let body = resp.text().await?;
        match QuestionPage::from_json(&body) {
            Err(FetchFailure::Malformed(_)) if !status.is_success() => {
                Err(FetchFailure::Status(status.as_u16()))
            }
            other => other,
        }
    }

    fn name(&self) -> &'static str {
        "stackexchange"
    }
}
