use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Superuser sentinel: a caller holding this sees every navigation item.
pub const SUPERUSER: &str = "admin:all";

/// Permission identifier in `resource:action` form (e.g. "sales:read").
///
/// Callers may still hand in legacy `RESOURCE_ACTION` strings; use
/// [`Permission::normalize`] (or [`PermissionSet::from_raw`]) to bring them
/// into the namespaced form before comparing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    /// Wrap an already-normalized permission name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Normalize a raw permission string.
    ///
    /// - `resource:action` strings are kept as they are (trimmed).
    /// - `RESOURCE_ACTION` strings are lower-cased and split at the first
    ///   underscore: `LEADS_BULK_UPLOAD` becomes `leads:bulk_upload`.
    /// - Anything else is lower-cased.
    ///
    /// Normalizing twice yields the same result as normalizing once.
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.contains(':') {
            return Self(Cow::Owned(trimmed.to_string()));
        }

        let lowered = trimmed.to_lowercase();
        let normalized = match lowered.split_once('_') {
            Some((resource, action)) => format!("{resource}:{action}"),
            None => lowered,
        };
        if normalized != trimmed {
            tracing::trace!(raw = %trimmed, normalized = %normalized, "normalized legacy permission");
        }
        Self(Cow::Owned(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_superuser(&self) -> bool {
        self.as_str() == SUPERUSER
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for Permission {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

/// The normalized permission set a caller holds.
///
/// Serialized as a plain list; deserializing normalizes every entry and drops
/// blank strings, so a session payload can be passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw (possibly legacy) permission strings.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            raw.into_iter()
                .filter(|s| !s.as_ref().trim().is_empty())
                .map(|s| Permission::normalize(s.as_ref()))
                .collect(),
        )
    }

    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    pub fn contains(&self, permission: &Permission) -> bool {
        self.0.contains(permission)
    }

    /// Whether the caller holds the `admin:all` sentinel.
    pub fn is_superuser(&self) -> bool {
        self.0.iter().any(Permission::is_superuser)
    }

    /// First permission of `candidates` the caller holds, in `candidates` order.
    pub fn first_held<'a>(&self, candidates: &'a BTreeSet<Permission>) -> Option<&'a Permission> {
        candidates.iter().find(|p| self.0.contains(*p))
    }

    /// OR semantics: true if any of `candidates` is held.
    pub fn holds_any(&self, candidates: &BTreeSet<Permission>) -> bool {
        self.first_held(candidates).is_some()
    }

    pub fn is_subset(&self, other: &PermissionSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(value: Vec<String>) -> Self {
        Self::from_raw(value)
    }
}

impl From<PermissionSet> for Vec<String> {
    fn from(value: PermissionSet) -> Self {
        value.0.into_iter().map(|p| p.as_str().to_string()).collect()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
