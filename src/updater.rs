// src/updater.rs
//! # Updater
//! One poll cycle is fetch → filter → notify, then the loop sleeps.
//!
//! All mutable state (`last_update` and the seen ids) lives on the
//! [`Updater`] value; nothing is global.

use std::collections::HashSet;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use once_cell::sync::OnceCell;

use crate::clock::{Clock, SystemClock};
use crate::errors::FetchFailure;
use crate::notify::{BotIdentity, ChatMessage, Notifier};
use crate::seen::SeenSet;
use crate::stackexchange::{Question, QuestionQuery, QuestionSource};

/// Items created up to this many seconds before the previous poll still count.
/// Covers clock skew between us and the API.
pub const TIME_TOLERANCE_SECS: i64 = 100;

fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("so2slack_polls_total", "Poll cycles started.");
        describe_counter!(
            "so2slack_fetch_failures_total",
            "Polls that produced no items because the fetch failed."
        );
        describe_counter!(
            "so2slack_new_questions_total",
            "Questions that passed all filters."
        );
        describe_counter!(
            "so2slack_filtered_total",
            "Questions dropped by window/illegal_tag/seen filters."
        );
        describe_counter!("so2slack_posts_total", "Chat messages posted.");
        describe_counter!("so2slack_post_failures_total", "Chat posts that failed.");
        describe_gauge!(
            "so2slack_quota_remaining",
            "API calls left in the current quota window."
        );
        describe_gauge!(
            "so2slack_backoff_secs",
            "Last backoff the API asked for, in seconds."
        );
    });
}

#[derive(Debug, Clone)]
pub struct UpdaterSettings {
    pub tag: String,
    pub illegal_tags: HashSet<String>,
    pub channel: String,
    pub freq: Duration,
    pub bot: BotIdentity,
}

impl UpdaterSettings {
    /// Defaults for everything but the tag; channel comes from the routing table.
    pub fn for_tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            channel: crate::channel::channel_for_tag(&tag).to_string(),
            tag,
            illegal_tags: HashSet::new(),
            freq: Duration::from_secs(60),
            bot: BotIdentity::default(),
        }
    }
}

/// Outcome of one [`Updater::run_cycle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub new_items: usize,
    pub posted: usize,
    pub failure: Option<FetchFailure>,
}

pub struct Updater<S, N, C = SystemClock> {
    settings: UpdaterSettings,
    query: QuestionQuery,
    source: S,
    notifier: N,
    clock: C,
    last_update: i64,
    seen: SeenSet,
}

impl<S, N, C> Updater<S, N, C>
where
    S: QuestionSource,
    N: Notifier,
    C: Clock,
{
    pub fn new(settings: UpdaterSettings, source: S, notifier: N, clock: C) -> Self {
        ensure_metrics_described();
        let last_update = clock.now_unix();
        Self {
            query: QuestionQuery::for_tag(settings.tag.clone()),
            settings,
            source,
            notifier,
            clock,
            last_update,
            seen: SeenSet::new(),
        }
    }

    pub fn settings(&self) -> &UpdaterSettings {
        &self.settings
    }

    pub fn channel(&self) -> &str {
        &self.settings.channel
    }

    pub fn last_update(&self) -> i64 {
        self.last_update
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetch the newest page and keep what is new, in range and allowed.
    ///
    /// `last_update` moves to "now" whether or not the fetch succeeded.
    pub async fn fetch_new(&mut self) -> Result<Vec<Question>, FetchFailure> {
        let since = self.last_update - TIME_TOLERANCE_SECS;
        let fetched = self.source.fetch_page(&self.query).await;

        let out = match fetched {
            Ok(page) => {
                if let Some(q) = page.quota_remaining {
                    tracing::info!(quota_remaining = q, quota_max = ?page.quota_max, "API calls left: {q}");
                    gauge!("so2slack_quota_remaining").set(q as f64);
                }
                if let Some(secs) = page.backoff {
                    tracing::warn!(backoff_secs = secs, "API asked us to back off");
                    gauge!("so2slack_backoff_secs").set(secs as f64);
                }
                Ok(self.filter(page.items, since))
            }
            Err(e) => Err(e),
        };

        self.last_update = self.clock.now_unix();
        out
    }

    fn filter(&mut self, items: Vec<Question>, since: i64) -> Vec<Question> {
        let mut keep = Vec::with_capacity(items.len());
        for it in items {
            if it.creation_date < since {
                counter!("so2slack_filtered_total", "reason" => "window").increment(1);
                continue;
            }
            if it.tags.iter().any(|t| self.settings.illegal_tags.contains(t)) {
                tracing::debug!(id = it.question_id, tags = ?it.tags, "skipping question with illegal tag");
                counter!("so2slack_filtered_total", "reason" => "illegal_tag").increment(1);
                continue;
            }
            if self.seen.contains(it.question_id) {
                counter!("so2slack_filtered_total", "reason" => "seen").increment(1);
                continue;
            }
            self.seen.insert(it.question_id);
            keep.push(it);
        }
        counter!("so2slack_new_questions_total").increment(keep.len() as u64);
        keep
    }

    /// Post each item as its own message, in order. Returns how many went through.
    pub async fn notify(&self, items: &[Question]) -> usize {
        let mut posted = 0usize;
        for it in items {
            let msg = ChatMessage::for_question(it, &self.settings.channel, &self.settings.bot);
            match self.notifier.post(&msg).await {
                Ok(()) => {
                    posted += 1;
                    counter!("so2slack_posts_total").increment(1);
                }
                Err(e) => {
                    tracing::warn!(error = ?e, id = it.question_id, channel = %msg.channel, "chat post failed");
                    counter!("so2slack_post_failures_total").increment(1);
                }
            }
        }
        posted
    }

    /// One tick of the loop without the sleep.
    pub async fn run_cycle(&mut self) -> CycleReport {
        counter!("so2slack_polls_total").increment(1);
        let polled_at = chrono::DateTime::<chrono::Utc>::from_timestamp(self.last_update, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default();

        let (items, failure) = match self.fetch_new().await {
            Ok(items) => (items, None),
            Err(e) => {
                tracing::warn!(error = %e, source = self.source.name(), "Something went wrong with the request");
                counter!("so2slack_fetch_failures_total", "kind" => e.kind()).increment(1);
                (Vec::new(), Some(e))
            }
        };

        let posted = if items.is_empty() {
            tracing::info!(target: "so2slack", at = %polled_at, "no new items");
            0
        } else {
            tracing::info!(target: "so2slack", at = %polled_at, count = items.len(), "{} new items", items.len());
            self.notify(&items).await
        };

        CycleReport {
            new_items: items.len(),
            posted,
            failure,
        }
    }

    /// Poll forever. Only stops when the process does.
    pub async fn run(&mut self) {
        tracing::info!(
            tag = %self.settings.tag,
            channel = %self.settings.channel,
            freq_secs = self.settings.freq.as_secs_f64(),
            "updater started"
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.settings.freq).await;
        }
    }
}
