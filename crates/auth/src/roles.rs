use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role identifier as issued by the session layer (e.g. "sales_agent").
///
/// Roles are opaque strings; the [`RoleTable`] decides which navigation
/// domain a role belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Roles that legitimately carry no menu (anonymous/guest sessions).
    pub fn is_placeholder(&self) -> bool {
        matches!(self.as_str().trim(), "" | "guest")
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Role {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

/// Navigation domain: which part of the console a role works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Sales,
    Marketing,
    Finance,
    Hr,
    Academic,
    Student,
    System,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::Sales,
        Domain::Marketing,
        Domain::Finance,
        Domain::Hr,
        Domain::Academic,
        Domain::Student,
        Domain::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Sales => "sales",
            Domain::Marketing => "marketing",
            Domain::Finance => "finance",
            Domain::Hr => "hr",
            Domain::Academic => "academic",
            Domain::Student => "student",
            Domain::System => "system",
        }
    }
}

impl core::fmt::Display for Domain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown navigation domain '{0}'")]
pub struct UnknownDomain(pub String);

impl core::str::FromStr for Domain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDomain(s.to_string()))
    }
}

/// Role → domain lookup table.
///
/// Lookups never fail: a role missing from the table falls back to
/// [`Domain::Student`], the least privileged console surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleTable(BTreeMap<String, Domain>);

const BUILTIN_ROLES: &[(&str, Domain)] = &[
    ("sales", Domain::Sales),
    ("sales_agent", Domain::Sales),
    ("sales_lead", Domain::Sales),
    ("sales_head", Domain::Sales),
    ("sales_manager", Domain::Sales),
    ("marketing", Domain::Marketing),
    ("marketing_agent", Domain::Marketing),
    ("marketing_head", Domain::Marketing),
    ("finance", Domain::Finance),
    ("finance_agent", Domain::Finance),
    ("finance_head", Domain::Finance),
    ("hr", Domain::Hr),
    ("hr_agent", Domain::Hr),
    ("hr_head", Domain::Hr),
    ("placement_officer", Domain::Hr),
    ("tutor", Domain::Academic),
    ("mentor", Domain::Academic),
    ("lsm", Domain::Academic),
    ("programManager", Domain::Academic),
    ("academic_head", Domain::Academic),
    ("student", Domain::Student),
    ("learner", Domain::Student),
    ("admin", Domain::System),
    ("super_admin", Domain::System),
    ("it_admin", Domain::System),
    ("it_support", Domain::System),
];

static BUILTIN_TABLE: LazyLock<RoleTable> = LazyLock::new(|| {
    RoleTable(
        BUILTIN_ROLES
            .iter()
            .map(|(role, domain)| ((*role).to_string(), *domain))
            .collect(),
    )
});

impl RoleTable {
    pub const DEFAULT_DOMAIN: Domain = Domain::Student;

    /// The compiled-in table shared by every resolver.
    pub fn builtin() -> &'static RoleTable {
        &BUILTIN_TABLE
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Domain)>,
        S: Into<String>,
    {
        Self(entries.into_iter().map(|(r, d)| (r.into(), d)).collect())
    }

    /// Domain configured for `role`, if any.
    pub fn lookup(&self, role: &str) -> Option<Domain> {
        self.0.get(role).copied()
    }

    pub fn resolve(&self, role: &str) -> Domain {
        match self.lookup(role) {
            Some(domain) => domain,
            None => {
                tracing::debug!(role, default = %Self::DEFAULT_DOMAIN, "unknown role, using default domain");
                Self::DEFAULT_DOMAIN
            }
        }
    }

    /// Roles mapped to `domain`, sorted by name.
    pub fn roles_in(&self, domain: Domain) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, d)| **d == domain)
            .map(|(r, _)| r.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Domain)> {
        self.0.iter().map(|(r, d)| (r.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Resolve a role against the builtin table.
pub fn resolve_domain(role: &str) -> Domain {
    RoleTable::builtin().resolve(role)
}
