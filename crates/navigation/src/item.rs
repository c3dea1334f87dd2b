//! Navigation item model.
//!
//! Trees are immutable values: filters read them and build new trees, they
//! never edit one in place.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use learnhub_auth::Permission;
use learnhub_core::{AttributeKey, ItemId};

/// Visibility requirements declared on an item.
///
/// Empty sets mean "no requirement".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gate {
    /// Any one of these grants the item (OR).
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub permissions: BTreeSet<Permission>,

    /// Holding any one of these hides the item.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub exclude_permissions: BTreeSet<Permission>,

    /// Every key must be present in the caller's attribute bag (AND).
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub attributes: BTreeSet<AttributeKey>,
}

impl Gate {
    pub fn is_open(&self) -> bool {
        self.permissions.is_empty()
            && self.exclude_permissions.is_empty()
            && self.attributes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Leaf,
    Group(Vec<NavigationItem>),
}

/// One entry of a navigation tree.
///
/// JSON form: `{ id, label, path?, permissions?, excludePermissions?,
/// attributes?, children? }`; an item with `children` is a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawItem", into = "RawItem")]
pub struct NavigationItem {
    pub id: ItemId,
    pub label: String,
    pub path: Option<String>,
    pub gate: Gate,
    pub kind: ItemKind,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    id: ItemId,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(flatten)]
    gate: Gate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<NavigationItem>>,
}

impl From<RawItem> for NavigationItem {
    fn from(raw: RawItem) -> Self {
        Self {
            id: raw.id,
            label: raw.label,
            path: raw.path,
            gate: raw.gate,
            kind: match raw.children {
                Some(children) => ItemKind::Group(children),
                None => ItemKind::Leaf,
            },
        }
    }
}

impl From<NavigationItem> for RawItem {
    fn from(item: NavigationItem) -> Self {
        Self {
            id: item.id,
            label: item.label,
            path: item.path,
            gate: item.gate,
            children: match item.kind {
                ItemKind::Leaf => None,
                ItemKind::Group(children) => Some(children),
            },
        }
    }
}

impl NavigationItem {
    pub fn leaf(id: impl Into<ItemId>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: Some(path.into()),
            gate: Gate::default(),
            kind: ItemKind::Leaf,
        }
    }

    pub fn group(id: impl Into<ItemId>, label: impl Into<String>, children: Vec<NavigationItem>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: None,
            gate: Gate::default(),
            kind: ItemKind::Group(children),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn requires<I, P>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        self.gate.permissions.extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn excludes<I, P>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        self.gate.exclude_permissions.extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn needs<I, K>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<AttributeKey>,
    {
        self.gate.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ItemKind::Group(_))
    }

    /// Children of a group; empty for a leaf.
    pub fn children(&self) -> &[NavigationItem] {
        match &self.kind {
            ItemKind::Leaf => &[],
            ItemKind::Group(children) => children,
        }
    }

    /// Copy of this group's header carrying `children` instead of its own.
    pub(crate) fn with_children(&self, children: Vec<NavigationItem>) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            path: self.path.clone(),
            gate: self.gate.clone(),
            kind: ItemKind::Group(children),
        }
    }
}

/// Dotted id paths (`leads.my-leads`) of every node, in pre-order.
pub fn item_paths(tree: &[NavigationItem]) -> Vec<String> {
    fn walk(items: &[NavigationItem], prefix: &str, out: &mut Vec<String>) {
        for item in items {
            let path = join_path(prefix, item.id.as_str());
            out.push(path.clone());
            walk(item.children(), &path, out);
        }
    }

    let mut out = Vec::new();
    walk(tree, "", &mut out);
    out
}

/// Look up a node by dotted id path.
pub fn find_item<'a>(tree: &'a [NavigationItem], path: &str) -> Option<&'a NavigationItem> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = tree.iter().find(|item| item.id.as_str() == first)?;
    for segment in segments {
        current = current.children().iter().find(|item| item.id.as_str() == segment)?;
    }
    Some(current)
}

/// Number of nodes in the tree, groups included.
pub fn count_items(tree: &[NavigationItem]) -> usize {
    tree.iter().map(|item| 1 + count_items(item.children())).sum()
}

pub(crate) fn join_path(prefix: &str, id: &str) -> String {
    if prefix.is_empty() {
        id.to_string()
    } else {
        format!("{prefix}.{id}")
    }
}
