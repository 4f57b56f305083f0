//! Filtered-stream rule values.
//!
//! A rule value is a query string on the wire, but callers may also build it
//! as an [`Expression`] tree. Decoding picks the variant from the JSON token
//! kind: a string becomes [`RuleValue::Query`], an object becomes
//! [`RuleValue::Expression`]. Encoding always produces the query string.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A structured search expression.
///
/// The object form is externally tagged: `{"keyword":"cat"}`,
/// `{"and":[{"hashtag":"rust"},{"not":{"author":"bot"}}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Keyword(String),
    /// `from:<username>`
    Author(String),
    /// `#<tag>`
    Hashtag(String),
    /// `@<username>`
    Mention(String),
    And(Vec<Expression>),
    Or(Vec<Expression>),
    Not(Box<Expression>),
}

impl Expression {
    pub fn keyword(word: impl Into<String>) -> Self {
        Expression::Keyword(word.into())
    }

    pub fn author(username: impl Into<String>) -> Self {
        Expression::Author(username.into())
    }

    pub fn hashtag(tag: impl Into<String>) -> Self {
        Expression::Hashtag(tag.into())
    }

    pub fn mention(username: impl Into<String>) -> Self {
        Expression::Mention(username.into())
    }

    pub fn and(self, other: Expression) -> Self {
        match self {
            Expression::And(mut items) => {
                items.push(other);
                Expression::And(items)
            }
            first => Expression::And(vec![first, other]),
        }
    }

    pub fn or(self, other: Expression) -> Self {
        match self {
            Expression::Or(mut items) => {
                items.push(other);
                Expression::Or(items)
            }
            first => Expression::Or(vec![first, other]),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Expression::Not(Box::new(self))
    }

    /// Render the rule query syntax.
    pub fn to_query(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Keyword(word) => write!(f, "{word}"),
            Expression::Author(name) => write!(f, "from:{name}"),
            Expression::Hashtag(tag) => write!(f, "#{tag}"),
            Expression::Mention(name) => write!(f, "@{name}"),
            Expression::And(items) => write_group(f, items, " "),
            Expression::Or(items) => write_group(f, items, " OR "),
            Expression::Not(inner) => write!(f, "-{inner}"),
        }
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, items: &[Expression], sep: &str) -> fmt::Result {
    match items {
        [] => Ok(()),
        [only] => write!(f, "{only}"),
        _ => {
            f.write_str("(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(sep)?;
                }
                write!(f, "{item}")?;
            }
            f.write_str(")")
        }
    }
}

/// The value of a stream rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    /// Raw rule syntax, as the server returns it.
    Query(String),
    /// A structured expression.
    Expression(Expression),
}

impl RuleValue {
    /// The rule syntax sent to the server.
    pub fn to_query(&self) -> String {
        match self {
            RuleValue::Query(query) => query.clone(),
            RuleValue::Expression(expr) => expr.to_query(),
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Query(query) => f.write_str(query),
            RuleValue::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl From<&str> for RuleValue {
    fn from(query: &str) -> Self {
        RuleValue::Query(query.to_string())
    }
}

impl From<String> for RuleValue {
    fn from(query: String) -> Self {
        RuleValue::Query(query)
    }
}

impl From<Expression> for RuleValue {
    fn from(expr: Expression) -> Self {
        RuleValue::Expression(expr)
    }
}

impl Serialize for RuleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_query())
    }
}

impl<'de> Deserialize<'de> for RuleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RuleValueVisitor)
    }
}

struct RuleValueVisitor;

impl<'de> Visitor<'de> for RuleValueVisitor {
    type Value = RuleValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rule query string or an expression object")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RuleValue, E> {
        Ok(RuleValue::Query(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<RuleValue, E> {
        Ok(RuleValue::Query(value))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<RuleValue, A::Error> {
        Expression::deserialize(de::value::MapAccessDeserializer::new(map))
            .map(RuleValue::Expression)
    }
}
