//! Identifier case conversion between API names and storage column names.
//!
//! Both conversions are total over ASCII identifiers and are not inverses of
//! each other.

/// Converts `UserName` to `user_name`.
///
/// An underscore is inserted before every uppercase ASCII letter that is not
/// the first character, once any non-underscore character has been seen. The
/// result is lowercased.
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    let mut seen_word = false;

    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() && seen_word {
            out.push('_');
        }
        if c != '_' {
            seen_word = true;
        }
        out.push(c);
    }

    out.to_lowercase()
}

/// Converts `user_name` to `UserName`.
///
/// The first lowercase letter of the identifier and every lowercase letter
/// following an underscore are uppercased, and those underscores dropped.
/// Leading underscores, and underscores not followed by a lowercase letter,
/// are kept. Already-camel input passes through.
pub fn camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    let mut started = false;

    for (i, &c) in chars.iter().enumerate() {
        let mut c = c;
        if !started && c.is_ascii_uppercase() {
            started = true;
        }
        if c.is_ascii_lowercase() && (upper_next || !started) {
            c = c.to_ascii_uppercase();
            upper_next = false;
            started = true;
        }
        if started
            && c == '_'
            && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase())
        {
            upper_next = true;
            continue;
        }
        out.push(c);
    }

    out
}
