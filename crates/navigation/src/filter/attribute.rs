use learnhub_auth::AttributeBag;
use learnhub_core::AttributeKey;

use super::FilterOptions;
use crate::item::{Gate, ItemKind, NavigationItem};

/// Keys of `gate.attributes` that are not present in `attributes`.
pub fn missing_attributes<'a>(gate: &'a Gate, attributes: &AttributeBag) -> Vec<&'a AttributeKey> {
    gate.attributes
        .iter()
        .filter(|key| !attributes.is_present(key.as_str()))
        .collect()
}

pub fn filter_by_attributes(tree: &[NavigationItem], attributes: &AttributeBag) -> Vec<NavigationItem> {
    filter_by_attributes_with(tree, attributes, FilterOptions::default())
}

/// Prune `tree` to the items whose attribute requirements `attributes`
/// satisfies (every declared key present).
///
/// Runs on the output of the permission filter. Groups survive only with
/// at least one surviving child.
pub fn filter_by_attributes_with(
    tree: &[NavigationItem],
    attributes: &AttributeBag,
    options: FilterOptions,
) -> Vec<NavigationItem> {
    tree.iter()
        .filter_map(|item| filter_item(item, attributes, options))
        .collect()
}

fn filter_item(item: &NavigationItem, attributes: &AttributeBag, options: FilterOptions) -> Option<NavigationItem> {
    match &item.kind {
        ItemKind::Leaf => {
            let missing = missing_attributes(&item.gate, attributes);
            if missing.is_empty() {
                Some(item.clone())
            } else {
                tracing::debug!(item = %item.id, ?missing, "navigation item hidden by attributes");
                None
            }
        }
        ItemKind::Group(children) => {
            if options.is_strict() && !missing_attributes(&item.gate, attributes).is_empty() {
                return None;
            }
            let kept = filter_by_attributes_with(children, attributes, options);
            (!kept.is_empty()).then(|| item.with_children(kept))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::item_paths;
    use serde_json::json;

    fn tree() -> Vec<NavigationItem> {
        vec![
            NavigationItem::leaf("dashboard", "Dashboard", "/academic"),
            NavigationItem::group(
                "classes",
                "Classes",
                vec![
                    NavigationItem::leaf("mine", "My Classes", "/classes/mine").needs(["assignedClasses"]),
                    NavigationItem::leaf("graded", "Grading", "/classes/grading")
                        .needs(["assignedClasses", "assignedAssessments"]),
                ],
            ),
        ]
    }

    #[test]
    fn leaves_without_requirements_pass_through() {
        let out = filter_by_attributes(&tree(), &AttributeBag::new());
        assert_eq!(item_paths(&out), vec!["dashboard"]);
    }

    #[test]
    fn every_key_must_be_present() {
        let bag = AttributeBag::new()
            .with("assignedClasses", json!(["c1"]))
            .with("assignedAssessments", json!(["a1"]));
        let out = filter_by_attributes(&tree(), &bag);
        assert_eq!(item_paths(&out), vec!["dashboard", "classes", "classes.mine", "classes.graded"]);

        let mut partial = bag.clone();
        partial.remove("assignedAssessments");
        let out = filter_by_attributes(&tree(), &partial);
        assert_eq!(item_paths(&out), vec!["dashboard", "classes", "classes.mine"]);
    }

    #[test]
    fn empty_values_count_as_absent() {
        let bag = AttributeBag::new().with("assignedClasses", json!([]));
        let out = filter_by_attributes(&tree(), &bag);
        assert_eq!(item_paths(&out), vec!["dashboard"]);
    }

    #[test]
    fn parent_attributes_are_only_enforced_when_strict() {
        let tree = vec![
            NavigationItem::group(
                "placements",
                "Placements",
                vec![NavigationItem::leaf("drives", "Drives", "/drives")],
            )
            .needs(["assignedDrives"]),
        ];
        let bag = AttributeBag::new();
        assert_eq!(filter_by_attributes(&tree, &bag).len(), 1);
        assert!(filter_by_attributes_with(&tree, &bag, FilterOptions::strict()).is_empty());
    }

    #[test]
    fn missing_attributes_lists_absent_keys() {
        let tree = tree();
        let gate = &tree[1].children()[1].gate;
        let bag = AttributeBag::new().with("assignedClasses", json!(["c1"]));
        let missing: Vec<&str> = missing_attributes(gate, &bag).iter().map(|k| k.as_str()).collect();
        assert_eq!(missing, vec!["assignedAssessments"]);
    }
}
