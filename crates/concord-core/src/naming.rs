//! Identifier normalization for cross-system name matching.
//!
//! Source tables are usually `snake_case` while ORM models use `PascalCase` or
//! `camelCase`. Two names match when they are equal ignoring case, or when the
//! camel-case form of one equals the other ignoring case. There is no stemming:
//! `user_profile` matches `UserProfile` and `userProfile`, never `UserProfiles`.

use std::collections::HashMap;

/// Convert a `snake_case` or `kebab-case` identifier to `camelCase`.
///
/// The character after each `_` or `-` is upper-cased and the separator is
/// dropped, then the first character is lower-cased. A trailing separator is
/// kept as-is.
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if (c == '_' || c == '-') && chars.peek().is_some() {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(c);
        }
    }

    let mut result = String::with_capacity(out.len());
    let mut rest = out.chars();
    if let Some(first) = rest.next() {
        result.extend(first.to_lowercase());
        result.push_str(rest.as_str());
    }
    result
}

/// Canonical lookup key: the lower-cased camel-case form.
#[must_use]
pub fn normalize(name: &str) -> String {
    to_camel_case(name).to_lowercase()
}

/// Whether two identifiers refer to the same entity.
#[must_use]
pub fn matches(a: &str, b: &str) -> bool {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    a_lower == b_lower
        || to_camel_case(a).to_lowercase() == b_lower
        || a_lower == to_camel_case(b).to_lowercase()
}

/// Normalize, sort, and return a set of identifiers for order-independent
/// comparison.
#[must_use]
pub fn normalized_set<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut keys: Vec<String> = names.iter().map(|n| normalize(n.as_ref())).collect();
    keys.sort_unstable();
    keys
}

/// Lower-case and sort a set of identifiers without camel-case conversion.
#[must_use]
pub fn lowercased_set<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut keys: Vec<String> = names.iter().map(|n| n.as_ref().to_lowercase()).collect();
    keys.sort_unstable();
    keys
}

/// Immutable name lookup over a borrowed collection.
///
/// Built once per run. [`NameIndex::get`] accepts exactly the pairs
/// [`matches`] accepts: the lower-cased query against lower-cased names, then
/// the camel-case form of the query against lower-cased names, then the query
/// against the camel-case form of each name. When two entries share a key the
/// first one inserted wins.
#[derive(Debug)]
pub struct NameIndex<'a, T> {
    raw: HashMap<String, &'a T>,
    camel: HashMap<String, &'a T>,
}

impl<'a, T> NameIndex<'a, T> {
    /// Index `items` by the name returned from `name_of`.
    pub fn build<I, F>(items: I, name_of: F) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T) -> &str,
    {
        let mut raw = HashMap::new();
        let mut camel = HashMap::new();
        for item in items {
            let name = name_of(item);
            raw.entry(name.to_lowercase()).or_insert(item);
            camel.entry(normalize(name)).or_insert(item);
        }
        Self { raw, camel }
    }

    /// Resolve `name` against the index.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a T> {
        let lower = name.to_lowercase();
        self.raw
            .get(&lower)
            .or_else(|| self.raw.get(&normalize(name)))
            .or_else(|| self.camel.get(&lower))
            .copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct raw keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
