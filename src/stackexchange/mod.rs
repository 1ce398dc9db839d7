// src/stackexchange/mod.rs
pub mod client;
pub mod types;

pub use client::StackExchangeClient;
pub use types::{Question, QuestionPage};

use crate::errors::FetchFailure;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// What the updater asks for on every poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub tag: String,
    pub page_size: u32,
}

impl QuestionQuery {
    pub fn for_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Newest unanswered questions, most recent first.
#[async_trait::async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_page(&self, query: &QuestionQuery) -> Result<QuestionPage, FetchFailure>;
    fn name(&self) -> &'static str;
}
