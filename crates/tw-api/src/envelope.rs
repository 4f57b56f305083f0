//! Response envelope decoding.
//!
//! Every response body is an object with up to four interesting slots:
//! `data` (the payload), `includes` (side-car entities), `detail` (set
//! instead of `data` on failure) and `meta`. [`decode`] reads the text into
//! an [`Answer`]; [`Answer::into_many`] and [`Answer::into_one`] then check
//! for an error detail, attach authors and hand back the payload.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, ErrorKind, Result};
use crate::model::{Includes, Meta, Problem};
use crate::reconcile::Reconcile;

/// Options for [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Match object keys regardless of case by folding them to lowercase.
    pub case_insensitive_fields: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            case_insensitive_fields: true,
        }
    }
}

impl DecodeConfig {
    /// Match keys exactly.
    pub fn strict() -> Self {
        Self {
            case_insensitive_fields: false,
        }
    }
}

/// A decoded response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Answer<T> {
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub includes: Option<Includes>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub errors: Option<Vec<Problem>>,
}

fn none<T>() -> Option<T> {
    None
}

/// Decode a response body.
///
/// Pure: the result depends only on `text` and `config`. A `detail` in the
/// body is not an error at this stage; see [`Answer::check`].
pub fn decode<T: DeserializeOwned>(text: &str, config: &DecodeConfig) -> Result<Answer<T>> {
    if config.case_insensitive_fields {
        let mut value: Value = serde_json::from_str(text)?;
        fold_key_case(&mut value);
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(serde_json::from_str(text)?)
    }
}

/// Lowercase every object key. When keys collide after folding, the first
/// one in document order is kept.
fn fold_key_case(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let entries = std::mem::take(map);
            for (key, mut child) in entries {
                fold_key_case(&mut child);
                map.entry(key.to_lowercase()).or_insert(child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(fold_key_case),
        _ => {}
    }
}

impl<T> Answer<T> {
    /// Returns true if the server answered with an error detail.
    pub fn is_error(&self) -> bool {
        self.detail.is_some()
    }

    /// Fail with [`ErrorKind::Api`] if the envelope carries a `detail`.
    pub fn check(self) -> Result<Self> {
        match self.detail {
            Some(detail) => Err(Error::new(ErrorKind::Api {
                detail,
                title: self.title,
            })),
            None => {
                self.warn_partial_errors();
                Ok(self)
            }
        }
    }

    fn warn_partial_errors(&self) {
        if let Some(errors) = self.errors.as_deref().filter(|e| !e.is_empty()) {
            warn!(
                count = errors.len(),
                first = errors
                    .first()
                    .and_then(|p| p.detail.as_deref())
                    .unwrap_or_default(),
                "Response carried partial errors"
            );
        }
    }

    /// Rule-mutation counters, if reported.
    pub fn summary(&self) -> Option<&crate::model::Summary> {
        self.meta.as_ref()?.summary.as_ref()
    }
}

impl<T: Reconcile> Answer<Vec<T>> {
    /// Check, reconcile and return the items.
    ///
    /// A missing `data` slot is an empty result, not an error.
    pub fn into_many(self) -> Result<Vec<T>> {
        let answer = self.check()?;
        let mut items = answer.data.unwrap_or_default();
        if let Some(includes) = &answer.includes {
            T::reconcile_many(&mut items, includes);
        }
        Ok(items)
    }
}

impl<T: Reconcile> Answer<T> {
    /// Check, reconcile and return the single entity, if any.
    pub fn into_one(self) -> Result<Option<T>> {
        let answer = self.check()?;
        let mut data = answer.data;
        if let (Some(item), Some(includes)) = (data.as_mut(), &answer.includes) {
            item.reconcile_one(includes);
        }
        Ok(data)
    }
}
