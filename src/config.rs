// src/config.rs
use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::channel::channel_for_tag;
use crate::errors::ConfigError;
use crate::notify::{BotIdentity, DEFAULT_BOT_NAME, DEFAULT_ICON_EMOJI};
use crate::updater::UpdaterSettings;

pub const ENV_SLACK_KEY: &str = "SLACK_KEY";
pub const ENV_SO_KEY: &str = "SO_KEY";

/// Forward new unanswered Stack Overflow questions to Slack.
#[derive(Debug, Clone, Parser)]
#[command(name = "so2slack", version, about)]
pub struct Cli {
    /// Tag to monitor
    #[arg(long, default_value = "python")]
    pub tag: String,

    /// Minutes between two polls
    #[arg(long, default_value_t = 1.0)]
    pub freq: f64,

    /// Skip questions carrying any of these tags (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub illegal_tags: Vec<String>,

    /// Display name of the bot
    #[arg(long, default_value = DEFAULT_BOT_NAME)]
    pub bot_name: String,

    #[arg(long, default_value = DEFAULT_ICON_EMOJI)]
    pub icon_emoji: String,

    /// Post here instead of the channel mapped from the tag
    #[arg(long)]
    pub channel: Option<String>,

    /// Serve Prometheus metrics on this address
    #[arg(long)]
    pub metrics_addr: Option<SocketAddr>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UpdaterSettings,
    pub slack_key: String,
    pub so_key: Option<String>,
    pub metrics_addr: Option<SocketAddr>,
}

impl Config {
    /// Read secrets from the process environment.
    pub fn from_env(cli: Cli) -> Result<Self, ConfigError> {
        Self::from_lookup(cli, |k| std::env::var(k).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(cli: Cli, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slack_key = lookup(ENV_SLACK_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingEnv(ENV_SLACK_KEY))?;
        let so_key = lookup(ENV_SO_KEY).filter(|v| !v.trim().is_empty());

        if !(cli.freq.is_finite() && cli.freq > 0.0) {
            return Err(ConfigError::InvalidFreq(cli.freq));
        }
        let freq = Duration::try_from_secs_f64(cli.freq * 60.0)
            .map_err(|_| ConfigError::InvalidFreq(cli.freq))?;

        let channel = cli
            .channel
            .unwrap_or_else(|| channel_for_tag(&cli.tag).to_string());

        Ok(Self {
            settings: UpdaterSettings {
                illegal_tags: clean_tags(cli.illegal_tags),
                channel,
                freq,
                bot: BotIdentity {
                    username: cli.bot_name,
                    icon_emoji: cli.icon_emoji,
                },
                tag: cli.tag,
            },
            slack_key,
            so_key,
            metrics_addr: cli.metrics_addr,
        })
    }
}

fn clean_tags(items: Vec<String>) -> HashSet<String> {
    items
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
