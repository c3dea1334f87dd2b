use serde::{Deserialize, Serialize};

use crate::{AttributeBag, PermissionSet, Role};

/// Everything the navigation resolver knows about the caller.
///
/// Built per resolution call from the authenticated session (outside this
/// crate) and discarded afterwards. Deserializes from
/// `{ "role": .., "permissions": [..], "attributes": {..} }`; permissions are
/// normalized on the way in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallerContext {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub permissions: PermissionSet,
    #[serde(default)]
    pub attributes: AttributeBag,
}

impl CallerContext {
    pub fn new<I, S>(role: impl Into<Role>, permissions: I, attributes: AttributeBag) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            role: role.into(),
            permissions: PermissionSet::from_raw(permissions),
            attributes,
        }
    }

    pub fn is_superuser(&self) -> bool {
        self.permissions.is_superuser()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Permission;
    use serde_json::json;

    #[test]
    fn deserializes_session_payload() {
        let ctx: CallerContext = serde_json::from_value(json!({
            "role": "sales_agent",
            "permissions": ["LEADS_READ", "sales:read"],
            "attributes": {"assignedLeads": ["l1"]}
        }))
        .unwrap();
        assert_eq!(ctx.role.as_str(), "sales_agent");
        assert!(ctx.permissions.contains(&Permission::from("leads:read")));
        assert!(ctx.attributes.is_present("assignedLeads"));
        assert!(!ctx.is_superuser());
    }

    #[test]
    fn missing_fields_default_to_nothing() {
        let ctx: CallerContext = serde_json::from_value(json!({})).unwrap();
        assert!(ctx.role.is_placeholder());
        assert!(ctx.permissions.is_empty());
        assert!(ctx.attributes.is_empty());
    }
}
