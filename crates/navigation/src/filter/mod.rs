//! Tree filters: permissions first, then attributes.

mod attribute;
mod permission;

pub use attribute::{filter_by_attributes, filter_by_attributes_with, missing_attributes};
pub use permission::{filter_by_permissions, filter_by_permissions_with};

use serde::{Deserialize, Serialize};

/// How a group's own gate relates to its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentGate {
    /// A group is shown whenever one of its children survives; its own
    /// `permissions`/`attributes` are not enforced. The exclusion veto still
    /// applies. Matches the behavior existing menu configurations rely on.
    #[default]
    Lenient,
    /// A group's own gate must pass as well.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default)]
    pub parent_gate: ParentGate,
}

impl FilterOptions {
    pub fn strict() -> Self {
        Self {
            parent_gate: ParentGate::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.parent_gate == ParentGate::Strict
    }
}
