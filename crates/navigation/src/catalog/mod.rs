//! Navigation catalog: every static table the resolver reads.
//!
//! The builtin catalog is compiled in and shared read-only. A catalog can
//! also be loaded from a JSON document, which is validated before use.

mod shortcuts;
mod trees;

pub use shortcuts::{Heading, PinnedItem, PinnedTable, TitleTable};

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use learnhub_auth::{Domain, Permission, RoleTable};
use learnhub_core::{CatalogError, CatalogResult};

use crate::item::{NavigationItem, join_path};
use crate::student::StudentVariant;

/// The three student menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentTrees {
    pub unenrolled: Vec<NavigationItem>,
    pub onboarding: Vec<NavigationItem>,
    pub full: Vec<NavigationItem>,
}

impl StudentTrees {
    pub fn get(&self, variant: StudentVariant) -> &[NavigationItem] {
        match variant {
            StudentVariant::Unenrolled => &self.unenrolled,
            StudentVariant::Onboarding => &self.onboarding,
            StudentVariant::Full => &self.full,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationCatalog {
    /// Role → domain table; the builtin table when omitted.
    #[serde(default)]
    pub roles: RoleTable,
    /// Base tree of every domain except `student`.
    pub trees: BTreeMap<Domain, Vec<NavigationItem>>,
    pub student: StudentTrees,
    #[serde(default)]
    pub pinned: PinnedTable,
    #[serde(default)]
    pub titles: TitleTable,
}

static BUILTIN: LazyLock<NavigationCatalog> = LazyLock::new(|| NavigationCatalog {
    roles: RoleTable::builtin().clone(),
    trees: BTreeMap::from([
        (Domain::Sales, trees::sales()),
        (Domain::Marketing, trees::marketing()),
        (Domain::Finance, trees::finance()),
        (Domain::Hr, trees::hr()),
        (Domain::Academic, trees::academic()),
        (Domain::System, trees::system()),
    ]),
    student: StudentTrees {
        unenrolled: trees::student_unenrolled(),
        onboarding: trees::student_onboarding(),
        full: trees::student_full(),
    },
    pinned: shortcuts::builtin_pinned(),
    titles: shortcuts::builtin_titles(),
});

impl NavigationCatalog {
    /// The compiled-in console catalog.
    pub fn builtin() -> &'static NavigationCatalog {
        &BUILTIN
    }

    /// Parse and validate a catalog document.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let catalog: NavigationCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::io(path.display().to_string(), e.to_string()))?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), roles = catalog.roles.len(), "loaded navigation catalog");
        Ok(catalog)
    }

    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Base tree of a non-student domain. Student callers go through
    /// [`Self::student_tree`].
    pub fn tree(&self, domain: Domain) -> &[NavigationItem] {
        self.trees.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn student_tree(&self, variant: StudentVariant) -> &[NavigationItem] {
        self.student.get(variant)
    }

    /// Structural checks:
    /// - every non-student domain has a tree, and `trees` has no student entry
    /// - ids are valid and unique among siblings
    /// - declared permissions are already normalized
    /// - attribute keys and pinned ids are valid
    pub fn validate(&self) -> CatalogResult<()> {
        for domain in Domain::ALL {
            match (domain, self.trees.contains_key(&domain)) {
                (Domain::Student, true) => {
                    return Err(CatalogError::validation(
                        "student navigation is configured per variant under `student`, not in `trees`",
                    ));
                }
                (Domain::Student, false) => {}
                (_, false) => return Err(CatalogError::missing_tree(format!("domain '{domain}'"))),
                (_, true) => {}
            }
        }

        for (domain, tree) in &self.trees {
            validate_items(tree, domain.as_str())?;
        }
        for variant in StudentVariant::ALL {
            let tree = self.student.get(variant);
            if tree.is_empty() {
                return Err(CatalogError::missing_tree(format!("student variant '{variant}'")));
            }
            validate_items(tree, &format!("student.{variant}"))?;
        }

        for (scope, items) in self.pinned.iter_all() {
            let mut seen = BTreeSet::new();
            for item in items {
                if !item.id.is_valid() {
                    return Err(CatalogError::invalid_id(format!("{scope}: {:?}", item.id.as_str())));
                }
                if !seen.insert(item.id.as_str()) {
                    return Err(CatalogError::duplicate(scope.clone(), item.id.as_str()));
                }
            }
        }

        Ok(())
    }
}

fn validate_items(items: &[NavigationItem], parent: &str) -> CatalogResult<()> {
    let mut seen = BTreeSet::new();
    for item in items {
        if !item.id.is_valid() {
            return Err(CatalogError::invalid_id(format!("{parent}: {:?}", item.id.as_str())));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::duplicate(parent, item.id.as_str()));
        }

        let path = join_path(parent, item.id.as_str());
        let declared = item.gate.permissions.iter().chain(&item.gate.exclude_permissions);
        for permission in declared {
            if Permission::normalize(permission.as_str()) != *permission {
                return Err(CatalogError::validation(format!(
                    "{path}: permission '{permission}' is not in resource:action form"
                )));
            }
        }
        if let Some(key) = item.gate.attributes.iter().find(|k| !k.is_valid()) {
            return Err(CatalogError::invalid_id(format!("{path}: attribute {:?}", key.as_str())));
        }

        validate_items(item.children(), &path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_catalog_is_valid() {
        NavigationCatalog::builtin().validate().unwrap();
    }

    #[test]
    fn builtin_catalog_round_trips_through_json() {
        let catalog = NavigationCatalog::builtin();
        let json = catalog.to_json_pretty().unwrap();
        let parsed = NavigationCatalog::from_json_str(&json).unwrap();
        assert_eq!(&parsed, catalog);
    }

    fn minimal() -> serde_json::Value {
        let leaf = json!([{"id": "home", "label": "Home", "path": "/"}]);
        json!({
            "trees": {
                "sales": leaf, "marketing": leaf, "finance": leaf,
                "hr": leaf, "academic": leaf, "system": leaf
            },
            "student": {"unenrolled": leaf, "onboarding": leaf, "full": leaf}
        })
    }

    #[test]
    fn minimal_document_uses_builtin_roles() {
        let catalog = NavigationCatalog::from_json_str(&minimal().to_string()).unwrap();
        assert_eq!(catalog.roles.resolve("tutor"), Domain::Academic);
        assert!(catalog.pinned.domains.is_empty());
    }

    #[test]
    fn missing_domain_tree_is_rejected() {
        let mut doc = minimal();
        doc["trees"].as_object_mut().unwrap().remove("hr");
        let err = NavigationCatalog::from_json_str(&doc.to_string()).unwrap_err();
        assert_eq!(err, CatalogError::missing_tree("domain 'hr'"));
    }

    #[test]
    fn student_tree_under_trees_is_rejected() {
        let mut doc = minimal();
        doc["trees"]["student"] = json!([]);
        let err = NavigationCatalog::from_json_str(&doc.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn duplicate_sibling_ids_are_rejected() {
        let mut doc = minimal();
        doc["trees"]["finance"] = json!([
            {"id": "payments", "label": "Payments", "children": [
                {"id": "list", "label": "A", "path": "/a"},
                {"id": "list", "label": "B", "path": "/b"}
            ]}
        ]);
        let err = NavigationCatalog::from_json_str(&doc.to_string()).unwrap_err();
        assert_eq!(err, CatalogError::duplicate("finance.payments", "list"));
    }

    #[test]
    fn legacy_permission_in_tree_is_rejected() {
        let mut doc = minimal();
        doc["trees"]["sales"] = json!([
            {"id": "leads", "label": "Leads", "path": "/leads", "permissions": ["LEADS_READ"]}
        ]);
        let err = NavigationCatalog::from_json_str(&doc.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(msg) if msg.contains("sales.leads")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = NavigationCatalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn unknown_domain_key_is_a_parse_error() {
        let mut doc = minimal();
        doc["trees"]["library"] = json!([]);
        let err = NavigationCatalog::from_json_str(&doc.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = NavigationCatalog::from_path("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
