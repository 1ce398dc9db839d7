// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod channel;
pub mod clock;
pub mod config;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod notify;
pub mod seen;
pub mod stackexchange;
pub mod updater;

// ---- Re-exports for stable public API ----
pub use crate::channel::channel_for_tag;
pub use crate::errors::{ConfigError, FetchFailure};
pub use crate::notify::{ChatMessage, Notifier, SlackNotifier};
pub use crate::seen::SeenSet;
pub use crate::stackexchange::{Question, QuestionPage, QuestionSource, StackExchangeClient};
pub use crate::updater::{CycleReport, Updater, UpdaterSettings};
