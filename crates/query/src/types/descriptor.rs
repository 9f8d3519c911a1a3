//! Request descriptor and filter group types.

use serde::{Deserialize, Serialize};

/// Default page size when `limit` is absent.
pub const DEFAULT_LIMIT: i64 = 10;

/// Default pagination offset when `offset` is absent.
pub const DEFAULT_OFFSET: i64 = 0;

/// One `,`-delimited cluster of `key:value` parts from a `query` segment.
///
/// Keys keep the order in which they were parsed: the condition compiler
/// chains them in that order and the result depends on it. Setting a key that
/// is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    /// 1-based sequence number in parse order.
    pub index: usize,
    entries: Vec<(String, String)>,
}

impl FilterGroup {
    /// Creates an empty group with the given sequence number.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            entries: Vec::new(),
        }
    }

    /// Sets a prefixed field key to a raw value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`FilterGroup::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over `(key, value)` pairs in parse order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys in the group.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the group has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Defaults applied when pagination parameters are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorDefaults {
    /// Page size used when `limit` is absent.
    pub limit: i64,
    /// Offset used when `offset` is absent.
    pub offset: i64,
}

impl Default for DescriptorDefaults {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Everything a list request asks for, parsed from its query parameters.
///
/// Built once per request by [`RequestDescriptor::from_params`] and discarded
/// once the query engine has answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Projection list. Empty means all fields.
    pub fields: Vec<String>,
    /// Group-by fields.
    pub group_by: Vec<String>,
    /// Sort fields, dotted paths already rewritten to `__`.
    pub sort_by: Vec<String>,
    /// Sort orders (`asc`/`desc`), paired with `sort_by` by the sort builder.
    pub order: Vec<String>,
    /// Pagination offset.
    pub offset: i64,
    /// Page size.
    pub limit: i64,
    /// Relations to load eagerly, dotted paths already rewritten to `__`.
    pub join: Vec<String>,
    /// Parsed `query` segments, in segment order.
    pub filter_groups: Vec<FilterGroup>,
}

impl Default for RequestDescriptor {
    fn default() -> Self {
        Self::with_defaults(DescriptorDefaults::default())
    }
}

impl RequestDescriptor {
    /// Creates an empty descriptor using the given pagination defaults.
    pub fn with_defaults(defaults: DescriptorDefaults) -> Self {
        Self {
            fields: Vec::new(),
            group_by: Vec::new(),
            sort_by: Vec::new(),
            order: Vec::new(),
            offset: defaults.offset,
            limit: defaults.limit,
            join: Vec::new(),
            filter_groups: Vec::new(),
        }
    }

    /// Relations to load eagerly, or `None` when nothing was requested.
    pub fn related(&self) -> Option<&[String]> {
        if self.join.is_empty() {
            None
        } else {
            Some(&self.join)
        }
    }

    /// Returns true when the request carries a filter expression.
    pub fn has_filter(&self) -> bool {
        !self.filter_groups.is_empty()
    }
}
