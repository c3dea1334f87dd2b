use std::collections::BTreeSet;

use crate::{Permission, PermissionSet};

/// Outcome of checking one item's permission gate against a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCheck<'a> {
    /// Caller holds `admin:all`; nothing else is consulted.
    Superuser,
    /// Caller holds an excluded permission.
    Vetoed(&'a Permission),
    /// No permission requirement declared.
    Ungated,
    /// Caller holds one of the required permissions.
    Granted(&'a Permission),
    /// Caller holds none of the required permissions.
    Missing,
}

impl GateCheck<'_> {
    pub fn passes(&self) -> bool {
        matches!(self, GateCheck::Superuser | GateCheck::Ungated | GateCheck::Granted(_))
    }
}

/// Evaluate a permission gate.
///
/// Precedence: superuser override, then the exclusion veto, then the
/// required set (OR semantics, an empty set means ungated).
///
/// - No IO
/// - No panics
pub fn check_permissions<'a>(
    held: &PermissionSet,
    required: &'a BTreeSet<Permission>,
    excluded: &'a BTreeSet<Permission>,
) -> GateCheck<'a> {
    if held.is_superuser() {
        return GateCheck::Superuser;
    }
    if let Some(veto) = held.first_held(excluded) {
        return GateCheck::Vetoed(veto);
    }
    if required.is_empty() {
        return GateCheck::Ungated;
    }
    match held.first_held(required) {
        Some(granted) => GateCheck::Granted(granted),
        None => GateCheck::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&'static str]) -> BTreeSet<Permission> {
        items.iter().copied().map(Permission::from).collect()
    }

    #[test]
    fn superuser_wins_over_veto() {
        let held = PermissionSet::from_raw(["admin:all", "finance:restricted"]);
        let required = set(&["x:y"]);
        let excluded = set(&["finance:restricted"]);
        let check = check_permissions(&held, &required, &excluded);
        assert_eq!(check, GateCheck::Superuser);
        assert!(check.passes());
    }

    #[test]
    fn veto_wins_over_grant() {
        let held = PermissionSet::from_raw(["x", "y"]);
        let required = set(&["y"]);
        let excluded = set(&["x"]);
        let check = check_permissions(&held, &required, &excluded);
        assert!(matches!(check, GateCheck::Vetoed(p) if p.as_str() == "x"));
        assert!(!check.passes());
    }

    #[test]
    fn empty_requirement_is_ungated() {
        let held = PermissionSet::new();
        let none = set(&[]);
        assert_eq!(check_permissions(&held, &none, &none), GateCheck::Ungated);
    }

    #[test]
    fn any_required_permission_grants() {
        let held = PermissionSet::from_raw(["leads:read"]);
        let none = set(&[]);
        let either = set(&["leads:write", "leads:read"]);
        let check = check_permissions(&held, &either, &none);
        assert!(matches!(check, GateCheck::Granted(p) if p.as_str() == "leads:read"));
        let write_only = set(&["leads:write"]);
        let check = check_permissions(&held, &write_only, &none);
        assert_eq!(check, GateCheck::Missing);
    }
}
