//! Endpoint paths, query strings and request bodies.
//!
//! Caller-supplied values are URL-encoded one by one before they are
//! comma-joined, so an id or username can never add a parameter of its own.
//!
//! # Example
//!
//! ```rust
//! use birdwire_tw_api::{QueryBuilder, UserOption};
//!
//! let path = QueryBuilder::new("tweets")
//!     .list("ids", ["20", "1389189291582967809"])
//!     .author_fields(&[UserOption::CreatedAt, UserOption::Verified])
//!     .build();
//! assert_eq!(
//!     path,
//!     "tweets?ids=20,1389189291582967809&expansions=author_id&user.fields=created_at,verified"
//! );
//! ```

use serde::{Deserialize, Serialize};

use birdwire_tw_client::security::url;

use crate::expression::RuleValue;
use crate::options::UserOption;

/// Builds `path?name=value&...` strings relative to the API base URL.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    path: String,
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter whose value is the comma-joined, encoded `items`.
    pub fn list<I, S>(mut self, name: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params
            .push((name.to_string(), url::join_encoded(items)));
        self
    }

    /// Request the author expansion with the given user fields.
    ///
    /// Adds nothing at all when `options` is empty.
    pub fn author_fields(mut self, options: &[UserOption]) -> Self {
        if !options.is_empty() {
            self.params
                .push(("expansions".to_string(), "author_id".to_string()));
            self.params
                .push(("user.fields".to_string(), join_options(options)));
        }
        self
    }

    /// Request the given user fields, without any expansion.
    ///
    /// Adds nothing at all when `options` is empty.
    pub fn user_fields(mut self, options: &[UserOption]) -> Self {
        if !options.is_empty() {
            self.params
                .push(("user.fields".to_string(), join_options(options)));
        }
        self
    }

    pub fn build(self) -> String {
        if self.params.is_empty() {
            return self.path;
        }
        let query = self
            .params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

/// Encode a value used as a single path segment.
pub fn path_segment(value: &str) -> String {
    url::encode_param(value)
}

fn join_options(options: &[UserOption]) -> String {
    options
        .iter()
        .map(UserOption::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// A rule to add to the filtered stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRule {
    pub value: RuleValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl StreamRule {
    pub fn new(value: impl Into<RuleValue>) -> Self {
        Self {
            value: value.into(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Body of a rule-add request: `{"add":[...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct AddRules<'a> {
    pub add: &'a [StreamRule],
}

/// Body of a rule-delete request: `{"delete":{"ids":[...]}}`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteRules<'a> {
    pub delete: DeleteIds<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteIds<'a> {
    pub ids: &'a [&'a str],
}

/// Body of a like request: `{"tweet_id":"..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct LikeRequest<'a> {
    pub tweet_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;

    #[test]
    fn test_no_options_no_fields_params() {
        let path = QueryBuilder::new("tweets").list("ids", ["20"]).author_fields(&[]).build();
        assert_eq!(path, "tweets?ids=20");
        assert!(!path.contains("fields="));
        assert!(!path.contains("expansions="));

        let path = QueryBuilder::new("users/by")
            .list("usernames", ["jack"])
            .user_fields(&[])
            .build();
        assert_eq!(path, "users/by?usernames=jack");
    }

    #[test]
    fn test_options_lowercase_comma_joined() {
        let path = QueryBuilder::new("users/by")
            .list("usernames", ["jack", "TwitterDev"])
            .user_fields(&[UserOption::PublicMetrics, UserOption::ProfileImageUrl])
            .build();
        assert_eq!(
            path,
            "users/by?usernames=jack,TwitterDev&user.fields=public_metrics,profile_image_url"
        );
    }

    #[test]
    fn test_author_fields_without_list() {
        let path = QueryBuilder::new("users/42/tweets")
            .author_fields(&[UserOption::Username])
            .build();
        assert_eq!(path, "users/42/tweets?expansions=author_id&user.fields=username");

        assert_eq!(QueryBuilder::new("tweets/search/stream").build(), "tweets/search/stream");
    }

    #[test]
    fn test_items_are_encoded_individually() {
        let path = QueryBuilder::new("tweets").list("ids", ["20&x=1", "21"]).build();
        assert_eq!(path, "tweets?ids=20%26x%3D1,21");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("42"), "42");
        assert_eq!(path_segment("../likes"), "..%2Flikes");
    }

    #[test]
    fn test_add_rules_body() {
        let rules = [
            StreamRule::new("cat has:images").with_tag("cats"),
            StreamRule::new(Expression::hashtag("rust").or(Expression::keyword("ferris"))),
        ];
        let body = serde_json::to_value(AddRules { add: &rules }).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"add": [
                {"value": "cat has:images", "tag": "cats"},
                {"value": "(#rust OR ferris)"}
            ]})
        );
    }

    #[test]
    fn test_delete_rules_body() {
        let ids = ["1", "2"];
        let body = serde_json::to_value(DeleteRules {
            delete: DeleteIds { ids: &ids },
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"delete": {"ids": ["1", "2"]}}));
    }

    #[test]
    fn test_like_body() {
        let body = serde_json::to_value(LikeRequest { tweet_id: "20" }).unwrap();
        assert_eq!(body, serde_json::json!({"tweet_id": "20"}));
    }
}
