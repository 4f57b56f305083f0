//! Entity types returned by the API.
//!
//! Field names are lowercase snake case, matching the wire format once the
//! decoder has folded key case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::expression::RuleValue;

/// A tweet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    /// Resolved from `includes.users` after decoding; never read from the wire.
    #[serde(skip)]
    pub author: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// A filter rule registered on the filtered stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamInfo {
    pub id: String,
    pub value: RuleValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Result of liking or unliking a tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub liked: bool,
}

/// Side-car entities referenced by id from the primary payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Response metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub result_count: Option<u32>,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub sent: Option<DateTime<Utc>>,
}

/// Counters reported by rule mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub not_created: u32,
    #[serde(default)]
    pub deleted: u32,
    #[serde(default)]
    pub not_deleted: u32,
    #[serde(default)]
    pub valid: u32,
    #[serde(default)]
    pub invalid: u32,
}

/// One entry of the partial-error list sent next to `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub parameter: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// An entity that references its author by id.
pub trait HasAuthor {
    fn author_id(&self) -> Option<&str>;
    fn set_author(&mut self, author: Option<User>);
}

impl HasAuthor for Tweet {
    fn author_id(&self) -> Option<&str> {
        self.author_id.as_deref()
    }

    fn set_author(&mut self, author: Option<User>) {
        self.author = author;
    }
}
