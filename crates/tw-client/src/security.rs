//! Encoding utilities for values placed in request URLs.
//!
//! Every caller-supplied value that ends up in a path segment or query
//! string MUST go through this module, so that a value like `20&ids=21`
//! or `../likes` cannot add parameters or change the resource addressed.
//!
//! ```rust
//! use birdwire_tw_client::security::url;
//!
//! let ids = url::join_encoded(["20", "1389189291582967809"]);
//! let path = format!("tweets?ids={}", ids);
//! assert_eq!(path, "tweets?ids=20,1389189291582967809");
//! ```

/// URL encoding.
pub mod url {
    /// URL-encode a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use birdwire_tw_client::security::url;
    ///
    /// assert_eq!(url::encode_param("20&x=1"), "20%26x%3D1");
    /// ```
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Encode each item and join them with a literal comma.
    ///
    /// The separator itself stays unencoded; commas inside an item do not.
    ///
    /// ```rust
    /// use birdwire_tw_client::security::url;
    ///
    /// assert_eq!(url::join_encoded(["a,b", "c"]), "a%2Cb,c");
    /// ```
    #[must_use]
    pub fn join_encoded<I, S>(items: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .map(|item| encode_param(item.as_ref()))
            .collect::<Vec<_>>()
            .join(",")
    }
}
