// src/notify/mod.rs
pub mod slack;

pub use slack::SlackNotifier;

use anyhow::Result;
use serde::Serialize;

use crate::stackexchange::Question;

pub const DEFAULT_BOT_NAME: &str = "lazy_lizard";
pub const DEFAULT_ICON_EMOJI: &str = ":robot_face:";

/// Display identity the bot posts under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    pub username: String,
    pub icon_emoji: String,
}

impl Default for BotIdentity {
    fn default() -> Self {
        Self {
            username: DEFAULT_BOT_NAME.to_string(),
            icon_emoji: DEFAULT_ICON_EMOJI.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub channel: String,
    pub text: String,
    pub username: String,
    pub icon_emoji: String,
}

impl ChatMessage {
    pub fn for_question(q: &Question, channel: &str, bot: &BotIdentity) -> Self {
        Self {
            channel: channel.to_string(),
            text: format_question(q),
            username: bot.username.clone(),
            icon_emoji: bot.icon_emoji.clone(),
        }
    }
}

/// Two lines: the title (entities decoded), then the link.
pub fn format_question(q: &Question) -> String {
    let title = html_escape::decode_html_entities(&q.title);
    format!("{}\n{}", title, q.link)
}

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn post(&self, msg: &ChatMessage) -> Result<()>;
}
