// src/notify/slack.rs
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;

use super::{ChatMessage, Notifier};

pub const DEFAULT_POST_URL: &str = "https://slack.com/api/chat.postMessage";

/// Posts through the Slack Web API with a bot token.
pub struct SlackNotifier {
    token: String,
    url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SlackReply {
    ok: bool,
    error: Option<String>,
}

impl SlackNotifier {
    pub fn new(token: String) -> Self {
        Self {
            token,
            url: DEFAULT_POST_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Optional builder for tests/tools
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Slack answers 200 even on failure; the verdict is in `ok`.
fn check_reply(body: &str) -> Result<()> {
    let reply: SlackReply = serde_json::from_str(body).context("slack reply json")?;
    if reply.ok {
        Ok(())
    } else {
        Err(anyhow!(
            "slack rejected message: {}",
            reply.error.unwrap_or_else(|| "unknown_error".to_string())
        ))
    }
}

#[async_trait::async_trait]
impl Notifier for SlackNotifier {
    async fn post(&self, msg: &ChatMessage) -> Result<()> {
        let body = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(msg)
            .send()
            .await
            .context("slack post")?
            .error_for_status()
            .context("slack non-2xx")?
            .text()
            .await
            .context("slack body")?;

        check_reply(&body)
    }
}
