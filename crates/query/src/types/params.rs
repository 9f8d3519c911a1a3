//! Raw query parameters as delivered by the HTTP layer.

use std::collections::HashMap;

use url::form_urlencoded;

/// URL-decoded query parameters: name to one-or-more values.
///
/// Repeated keys keep their values in arrival order. Only the first value of a
/// parameter is ever consulted by the descriptor builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    params: HashMap<String, Vec<String>>,
}

impl RawParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a raw URL query string (without the leading `?`).
    ///
    /// # Example
    ///
    /// ```
    /// use apiql_query::types::RawParams;
    ///
    /// let params = RawParams::parse("limit=5&query=age%3A30");
    /// assert_eq!(params.first("limit"), Some("5"));
    /// assert_eq!(params.first("query"), Some("age:30"));
    /// ```
    pub fn parse(query: &str) -> Self {
        Self::from_pairs(
            form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned())),
        )
    }

    /// Builds a parameter set from already-decoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut result = Self::new();
        for (name, value) in pairs {
            result.push(name, value);
        }
        result
    }

    /// Appends a value to a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Returns the first value of a parameter when it is present and non-empty.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns every value of a parameter.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.params.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over parameter names with their first non-empty value.
    pub fn iter_first(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().filter_map(|(name, values)| {
            values
                .first()
                .filter(|value| !value.is_empty())
                .map(|value| (name.as_str(), value.as_str()))
        })
    }

    /// Returns true if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_values() {
        let params = RawParams::parse("fields=id%2Cname&query=created__between%3A1.5");
        assert_eq!(params.first("fields"), Some("id,name"));
        assert_eq!(params.first("query"), Some("created__between:1.5"));
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let params = RawParams::parse("order=desc&order=asc");
        assert_eq!(params.get_all("order"), ["desc", "asc"]);
        assert_eq!(params.first("order"), Some("desc"));
    }

    #[test]
    fn test_empty_first_value_is_ignored() {
        let params = RawParams::from_pairs([("limit", ""), ("limit", "5")]);
        assert_eq!(params.first("limit"), None);
        assert_eq!(params.iter_first().count(), 0);
    }

    #[test]
    fn test_missing_param() {
        let params = RawParams::new();
        assert!(params.is_empty());
        assert_eq!(params.first("query"), None);
        assert!(params.get_all("query").is_empty());
    }
}
