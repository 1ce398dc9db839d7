// src/channel.rs

pub const DEFAULT_CHANNEL: &str = "random";

const TAG_TO_CHANNEL: &[(&str, &str)] = &[
    ("deep-learning", "deeplearning"),
    ("keras", "keras"),
    ("pandas", "pandas"),
    ("python", "python"),
    ("scikit-learn", "scikit-learn"),
];

/// Slack channel for a monitored tag; unmapped tags go to `random`.
pub fn channel_for_tag(tag: &str) -> &'static str {
    TAG_TO_CHANNEL
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, c)| *c)
        .unwrap_or(DEFAULT_CHANNEL)
}
