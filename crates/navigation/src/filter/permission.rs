use learnhub_auth::{GateCheck, PermissionSet, check_permissions};

use super::FilterOptions;
use crate::item::{ItemKind, NavigationItem};

/// Prune `tree` to the items `permissions` can see, with default options.
pub fn filter_by_permissions(tree: &[NavigationItem], permissions: &PermissionSet) -> Vec<NavigationItem> {
    filter_by_permissions_with(tree, permissions, FilterOptions::default())
}

/// Prune `tree` to the items `permissions` can see.
///
/// - `admin:all` returns the tree unchanged.
/// - `excludePermissions` vetoes an item (and everything below it).
/// - Leaves need one of their `permissions` (or none declared).
/// - Groups survive only with at least one surviving child.
///
/// Sibling order is preserved.
pub fn filter_by_permissions_with(
    tree: &[NavigationItem],
    permissions: &PermissionSet,
    options: FilterOptions,
) -> Vec<NavigationItem> {
    if permissions.is_superuser() {
        return tree.to_vec();
    }
    filter_items(tree, permissions, options)
}

fn filter_items(items: &[NavigationItem], held: &PermissionSet, options: FilterOptions) -> Vec<NavigationItem> {
    items
        .iter()
        .filter_map(|item| filter_item(item, held, options))
        .collect()
}

fn filter_item(item: &NavigationItem, held: &PermissionSet, options: FilterOptions) -> Option<NavigationItem> {
    let check = check_permissions(held, &item.gate.permissions, &item.gate.exclude_permissions);
    if let GateCheck::Vetoed(permission) = check {
        tracing::debug!(item = %item.id, %permission, "navigation item vetoed");
        return None;
    }

    match &item.kind {
        ItemKind::Leaf => check.passes().then(|| item.clone()),
        ItemKind::Group(children) => {
            if options.is_strict() && !check.passes() {
                return None;
            }
            let kept = filter_items(children, held, options);
            if kept.is_empty() {
                return None;
            }
            if !check.passes() {
                tracing::debug!(
                    item = %item.id,
                    "group permission gate not satisfied; shown because children are visible"
                );
            }
            Some(item.with_children(kept))
        }
    }
}
