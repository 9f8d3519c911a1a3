//! Request descriptor builder.

use tracing::debug;

use super::{parse_filter_groups, split_list, split_path_list};
use crate::types::{DescriptorDefaults, RawParams, RequestDescriptor};

impl RequestDescriptor {
    /// Builds a descriptor from raw query parameters with the default
    /// pagination (`limit=10`, `offset=0`).
    pub fn from_params(params: &RawParams) -> Self {
        Self::from_params_with(params, DescriptorDefaults::default())
    }

    /// Builds a descriptor from raw query parameters.
    ///
    /// Only a non-empty first value of each parameter is considered. A
    /// `limit` or `offset` that is present but not an integer becomes `0`,
    /// not the default. Unknown parameters are ignored.
    pub fn from_params_with(params: &RawParams, defaults: DescriptorDefaults) -> Self {
        let mut descriptor = Self::with_defaults(defaults);

        for (name, value) in params.iter_first() {
            match name {
                "fields" => descriptor.fields = split_list(value),
                "groupby" => descriptor.group_by = split_list(value),
                "order" => descriptor.order = split_list(value),
                "join" => descriptor.join = split_path_list(value),
                "sortby" => descriptor.sort_by = split_path_list(value),
                "limit" => descriptor.limit = parse_lenient(value),
                "offset" => descriptor.offset = parse_lenient(value),
                "query" => descriptor.filter_groups = parse_filter_groups(value),
                _ => {}
            }
        }

        debug!(
            groups = descriptor.filter_groups.len(),
            limit = descriptor.limit,
            offset = descriptor.offset,
            "Built request descriptor"
        );

        descriptor
    }
}

/// Parses a pagination value, yielding `0` for anything that is not an `i64`.
///
/// Out-of-range values such as `99999999999999999999` also become `0` rather
/// than saturating. Negative values are kept as sent (`offset=-5` stays `-5`);
/// rejecting them is left to the executor.
fn parse_lenient(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(query: &str) -> RequestDescriptor {
        RequestDescriptor::from_params(&RawParams::parse(query))
    }

    #[test]
    fn test_out_of_range_limit_is_zero() {
        let d = descriptor("limit=99999999999999999999");
        assert_eq!(d.limit, 0);
    }

    #[test]
    fn test_negative_offset_is_kept() {
        let d = descriptor("offset=-5");
        assert_eq!(d.offset, -5);
    }

    #[test]
    fn test_empty_params() {
        let d = descriptor("");
        assert_eq!(d, RequestDescriptor::default());
    }

    #[test]
    fn test_lists() {
        let d = descriptor("fields=id,name&groupby=city&order=asc,desc");
        assert_eq!(d.fields, vec!["id", "name"]);
        assert_eq!(d.group_by, vec!["city"]);
        assert_eq!(d.order, vec!["asc", "desc"]);
    }

    #[test]
    fn test_join_and_sortby_nest_paths() {
        let d = descriptor("join=profile.address,orders&sortby=profile.age");
        assert_eq!(d.join, vec!["profile__address", "orders"]);
        assert_eq!(d.sort_by, vec!["profile__age"]);
    }

    #[test]
    fn test_fields_do_not_nest_paths() {
        let d = descriptor("fields=profile.age");
        assert_eq!(d.fields, vec!["profile.age"]);
    }

    #[test]
    fn test_pagination() {
        let d = descriptor("limit=25&offset=50");
        assert_eq!(d.limit, 25);
        assert_eq!(d.offset, 50);
    }

    #[test]
    fn test_non_numeric_limit_is_zero() {
        let d = descriptor("limit=abc&offset=x1");
        assert_eq!(d.limit, 0);
        assert_eq!(d.offset, 0);
    }

    #[test]
    fn test_empty_limit_keeps_default() {
        let d = descriptor("limit=");
        assert_eq!(d.limit, 10);
    }

    #[test]
    fn test_only_first_value_counts() {
        let d = descriptor("limit=5&limit=7");
        assert_eq!(d.limit, 5);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = DescriptorDefaults {
            limit: 50,
            offset: 5,
        };
        let d = RequestDescriptor::from_params_with(&RawParams::new(), defaults);
        assert_eq!(d.limit, 50);
        assert_eq!(d.offset, 5);
    }

    #[test]
    fn test_query_groups() {
        let d = descriptor("query=age:30,Or.city:NYC%7Cactive");
        assert_eq!(d.filter_groups.len(), 2);
        assert_eq!(d.filter_groups[0].len(), 2);
        assert_eq!(d.filter_groups[1].get("active"), Some("true"));
    }
}
