// src/stackexchange/types.rs
use serde::{Deserialize, Serialize};

use crate::errors::FetchFailure;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub question_id: u64,
    pub title: String,
    pub link: String,
    pub creation_date: i64, // unix seconds
    pub tags: Vec<String>,
}

/// Decoded `/questions/unanswered` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPage {
    pub items: Vec<Question>,
    pub quota_remaining: Option<i64>,
    pub quota_max: Option<i64>,
    pub has_more: Option<bool>,
    pub backoff: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    items: Option<Vec<Question>>,
    quota_remaining: Option<i64>,
    quota_max: Option<i64>,
    has_more: Option<bool>,
    backoff: Option<u64>,
    error_id: Option<i64>,
    error_name: Option<String>,
    error_message: Option<String>,
}

impl QuestionPage {
    /// Decode a response body. The API reports failures in-band with
    /// `error_id`/`error_name`/`error_message` instead of `items`.
    pub fn from_json(body: &str) -> Result<Self, FetchFailure> {
        let raw: RawPage =
            serde_json::from_str(body).map_err(|e| FetchFailure::Malformed(e.to_string()))?;

        if let Some(id) = raw.error_id {
            return Err(FetchFailure::Api {
                id,
                name: raw.error_name.unwrap_or_default(),
                message: raw.error_message.unwrap_or_default(),
            });
        }

        let items = raw
            .items
            .ok_or_else(|| FetchFailure::Malformed("missing field `items`".to_string()))?;

        Ok(Self {
            items,
            quota_remaining: raw.quota_remaining,
            quota_max: raw.quota_max,
            has_more: raw.has_more,
            backoff: raw.backoff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_items_and_quota() {
        let body = r#"{
            "items": [{
                "tags": ["python", "list"],
                "owner": {"display_name": "someone"},
                "is_answered": false,
                "question_id": 42,
                "creation_date": 1700000000,
                "link": "https://stackoverflow.com/q/42",
                "title": "Why is my list empty?"
            }],
            "has_more": true,
            "quota_max": 10000,
            "quota_remaining": 9876
        }"#;
        let page = QuestionPage::from_json(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].question_id, 42);
        assert_eq!(page.items[0].tags, vec!["python", "list"]);
        assert_eq!(page.quota_remaining, Some(9876));
        assert_eq!(page.quota_max, Some(10000));
        assert_eq!(page.has_more, Some(true));
        assert_eq!(page.backoff, None);
    }

    #[test]
    fn quota_is_optional() {
        let page = QuestionPage::from_json(r#"{"items": []}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.quota_remaining, None);
    }

    #[test]
    fn item_missing_field_is_malformed() {
        let body = r#"{"items": [{"question_id": 1, "title": "t", "link": "l", "tags": []}]}"#;
        let err = QuestionPage::from_json(body).unwrap_err();
        assert!(matches!(err, FetchFailure::Malformed(m) if m.contains("creation_date")));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = QuestionPage::from_json("<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.kind(), "malformed");
    }
}
