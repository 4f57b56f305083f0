//! Field-selection options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Optional user fields the server should include (`user.fields`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserOption {
    CreatedAt,
    Description,
    Entities,
    Id,
    Location,
    Name,
    PinnedTweetId,
    ProfileImageUrl,
    Protected,
    PublicMetrics,
    Url,
    Username,
    Verified,
    Withheld,
}

impl UserOption {
    /// Every option, in declaration order.
    pub const ALL: [UserOption; 14] = [
        UserOption::CreatedAt,
        UserOption::Description,
        UserOption::Entities,
        UserOption::Id,
        UserOption::Location,
        UserOption::Name,
        UserOption::PinnedTweetId,
        UserOption::ProfileImageUrl,
        UserOption::Protected,
        UserOption::PublicMetrics,
        UserOption::Url,
        UserOption::Username,
        UserOption::Verified,
        UserOption::Withheld,
    ];

    /// The wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserOption::CreatedAt => "created_at",
            UserOption::Description => "description",
            UserOption::Entities => "entities",
            UserOption::Id => "id",
            UserOption::Location => "location",
            UserOption::Name => "name",
            UserOption::PinnedTweetId => "pinned_tweet_id",
            UserOption::ProfileImageUrl => "profile_image_url",
            UserOption::Protected => "protected",
            UserOption::PublicMetrics => "public_metrics",
            UserOption::Url => "url",
            UserOption::Username => "username",
            UserOption::Verified => "verified",
            UserOption::Withheld => "withheld",
        }
    }
}

impl fmt::Display for UserOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_lowercase_snake() {
        for option in UserOption::ALL {
            let name = option.as_str();
            assert_eq!(name, name.to_lowercase());
            assert_eq!(
                serde_json::to_string(&option).unwrap(),
                format!("\"{name}\"")
            );
        }
        assert_eq!(UserOption::PublicMetrics.to_string(), "public_metrics");
    }
}
