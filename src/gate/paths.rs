use serde::Serialize;

use crate::config::ConfigError;

/// Returns true iff `path` equals one of `prefixes` or is nested under one at
/// a segment boundary.
///
/// Comparison is byte-for-byte; `/Dashboard` does not match `/dashboard`.
pub fn is_protected<S: AsRef<str>>(path: &str, prefixes: &[S]) -> bool {
    if path.is_empty() {
        return false;
    }

    prefixes.iter().any(|prefix| {
        let prefix = prefix.as_ref();
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    })
}

/// The canonical, immutable set of protected path prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedPaths {
    prefixes: Vec<String>,
}

impl ProtectedPaths {
    /// Validate and freeze a prefix list. Order is preserved.
    pub fn new<I, S>(prefixes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for prefix in prefixes {
            let prefix = prefix.into();
            if !prefix.starts_with('/') || prefix == "/" || prefix.ends_with('/') {
                return Err(ConfigError::InvalidPrefix(prefix));
            }
            if !list.contains(&prefix) {
                list.push(prefix);
            }
        }
        Ok(Self { prefixes: list })
    }

    pub fn contains(&self, path: &str) -> bool {
        is_protected(path, self.prefixes.as_slice())
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Route-matching patterns for the host router, two per prefix: the exact
    /// prefix and its wildcard subtree.
    pub fn matcher_patterns(&self) -> Vec<String> {
        self.prefixes
            .iter()
            .flat_map(|prefix| [prefix.clone(), format!("{prefix}/*rest")])
            .collect()
    }

    /// True when `pattern` is a route the gate will cover, e.g. `/transactions/:id`.
    pub fn covers_route(&self, pattern: &str) -> bool {
        self.contains(pattern)
    }
}
