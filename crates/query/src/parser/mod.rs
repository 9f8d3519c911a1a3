//! Query-string tokenizer.
//!
//! Splits list parameters and the `query` filter expression:
//!
//! ```text
//! query = segment ( "|" segment )*
//! segment = part ( "," part )*
//! part = key ":" value | key
//! ```
//!
//! A bare `key` is a boolean flag and maps to `"true"`. Each segment becomes
//! one [`FilterGroup`], numbered from 1.

mod descriptor;

use crate::types::FilterGroup;

/// Separator the query engine uses for nested (related-entity) field paths.
pub const NESTED_SEPARATOR: &str = "__";

/// Value given to a part that has no `:`.
pub const FLAG_VALUE: &str = "true";

/// Rewrites every `.` in a field path to [`NESTED_SEPARATOR`].
pub fn nest_path(path: &str) -> String {
    path.replace('.', NESTED_SEPARATOR)
}

/// Splits a comma-separated list, keeping every item as-is.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(String::from).collect()
}

/// Splits a comma-separated list of field paths, nesting dotted paths first.
pub fn split_path_list(value: &str) -> Vec<String> {
    split_list(&nest_path(value))
}

/// Parses the `query` parameter into filter groups, one per `|` segment.
///
/// # Example
///
/// ```
/// use apiql_query::parser::parse_filter_groups;
///
/// let groups = parse_filter_groups("age:30,Or.city:NYC|active");
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].get("Or.city"), Some("NYC"));
/// assert_eq!(groups[1].get("active"), Some("true"));
/// ```
pub fn parse_filter_groups(query: &str) -> Vec<FilterGroup> {
    query
        .split('|')
        .enumerate()
        .map(|(i, segment)| {
            let mut group = FilterGroup::new(i + 1);
            for part in segment.split(',') {
                let (key, value) = split_part(part);
                group.insert(key, value);
            }
            group
        })
        .collect()
}

/// Splits one `key:value` part.
///
/// Values such as `12:30:00` contain colons of their own. When the part splits
/// into four or more fragments, fragments two to four are joined back with `:`.
/// Three fragments are not repaired and keep only the second fragment.
fn split_part(part: &str) -> (String, String) {
    let fragments: Vec<&str> = part.split(':').collect();
    match fragments.len() {
        1 => (part.to_string(), FLAG_VALUE.to_string()),
        2 | 3 => (fragments[0].to_string(), fragments[1].to_string()),
        _ => (fragments[0].to_string(), fragments[1..4].join(":")),
    }
}
