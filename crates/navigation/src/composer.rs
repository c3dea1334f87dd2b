//! Role navigation composer.
//!
//! role + permissions + attributes → base tree → permission filter →
//! attribute filter → pinned shortcuts and heading.

use serde::{Deserialize, Serialize};

use learnhub_auth::{AttributeBag, CallerContext, Domain};

use crate::catalog::{NavigationCatalog, PinnedItem};
use crate::explain::{ItemDecision, explain_tree};
use crate::filter::{FilterOptions, filter_by_attributes_with, filter_by_permissions_with};
use crate::item::NavigationItem;
use crate::student::{StudentVariant, resolve_student_variant};

/// Render-ready navigation for one caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleNavigation {
    pub navigation: Vec<NavigationItem>,
    pub title: String,
    pub subtitle: String,
    pub pinned: Vec<PinnedItem>,
    pub domain: Domain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_variant: Option<StudentVariant>,
}

impl RoleNavigation {
    pub fn is_empty(&self) -> bool {
        self.navigation.is_empty()
    }
}

/// Per-item decisions for one caller, see [`Navigator::explain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationExplanation {
    pub domain: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_variant: Option<StudentVariant>,
    pub decisions: Vec<ItemDecision>,
}

/// Resolves navigation against a catalog.
///
/// Holds no state besides the borrowed catalog; resolving is pure and safe
/// to call from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'c> {
    catalog: &'c NavigationCatalog,
    options: FilterOptions,
}

impl Navigator<'static> {
    pub fn builtin() -> Self {
        Self::new(NavigationCatalog::builtin())
    }
}

impl<'c> Navigator<'c> {
    pub fn new(catalog: &'c NavigationCatalog) -> Self {
        Self {
            catalog,
            options: FilterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &'c NavigationCatalog {
        self.catalog
    }

    pub fn resolve_domain(&self, role: &str) -> Domain {
        self.catalog.roles.resolve(role)
    }

    /// Unfiltered tree for a domain; student trees depend on `attributes`.
    pub fn base_tree(&self, domain: Domain, attributes: &AttributeBag) -> (&'c [NavigationItem], Option<StudentVariant>) {
        match domain {
            Domain::Student => {
                let variant = resolve_student_variant(attributes);
                (self.catalog.student_tree(variant), Some(variant))
            }
            other => (self.catalog.tree(other), None),
        }
    }

    #[tracing::instrument(
        name = "resolve_navigation",
        skip_all,
        fields(role = %ctx.role, permissions = ctx.permissions.len())
    )]
    pub fn resolve(&self, ctx: &CallerContext) -> RoleNavigation {
        let role = ctx.role.as_str();
        let domain = self.resolve_domain(role);
        let (base, student_variant) = self.base_tree(domain, &ctx.attributes);

        let permitted = filter_by_permissions_with(base, &ctx.permissions, self.options);
        let navigation = filter_by_attributes_with(&permitted, &ctx.attributes, self.options);

        if navigation.is_empty() && !ctx.is_superuser() && !ctx.role.is_placeholder() {
            tracing::warn!(
                role,
                %domain,
                permissions = ctx.permissions.len(),
                "role resolved to an empty navigation; permissions are likely misconfigured"
            );
        }

        let heading = self.catalog.titles.select(domain, role);
        let pinned = self.catalog.pinned.select(domain, role, student_variant);

        tracing::debug!(%domain, ?student_variant, items = navigation.len(), "navigation resolved");

        RoleNavigation {
            navigation,
            title: heading.title,
            subtitle: heading.subtitle,
            pinned,
            domain,
            student_variant,
        }
    }

    /// Why each item of the caller's base tree is shown or hidden.
    pub fn explain(&self, ctx: &CallerContext) -> NavigationExplanation {
        let domain = self.resolve_domain(ctx.role.as_str());
        let (base, student_variant) = self.base_tree(domain, &ctx.attributes);
        NavigationExplanation {
            domain,
            student_variant,
            decisions: explain_tree(base, ctx, self.options),
        }
    }
}

/// Resolve navigation for a role against the builtin catalog.
///
/// `permissions` may mix `resource:action` and legacy `RESOURCE_ACTION`
/// strings.
pub fn get_role_navigation<I, S>(role: &str, permissions: I, attributes: &AttributeBag) -> RoleNavigation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ctx = CallerContext::new(role.to_string(), permissions, attributes.clone());
    Navigator::builtin().resolve(&ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{find_item, item_paths};
    use learnhub_auth::RoleTable;
    use serde_json::json;
    use tracing_test::traced_test;

    const NONE: [&str; 0] = [];

    #[test]
    fn sales_agent_with_assigned_leads() {
        let attrs = AttributeBag::new().with("assignedLeads", json!(["l1"]));
        let nav = get_role_navigation("sales_agent", ["SALES_READ", "leads:read"], &attrs);
        assert_eq!(nav.domain, Domain::Sales);
        assert!(find_item(&nav.navigation, "leads.my-leads").is_some());
        assert!(find_item(&nav.navigation, "leads.import").is_none());
        assert_eq!(nav.title, "Sales");
        assert_eq!(nav.pinned[0].id.as_str(), "my-leads");
    }

    #[test]
    fn attribute_filter_runs_after_permissions() {
        let nav = get_role_navigation("tutor", ["classes:read"], &AttributeBag::new());
        assert!(find_item(&nav.navigation, "classes.my-classes").is_none());
        assert!(find_item(&nav.navigation, "classes.schedule").is_some());
    }

    #[test]
    fn academic_subtitle_follows_role() {
        let tutor = get_role_navigation("tutor", ["academic:read"], &AttributeBag::new());
        let head = get_role_navigation("academic_head", ["academic:read"], &AttributeBag::new());
        assert_eq!(tutor.title, head.title);
        assert_ne!(tutor.subtitle, head.subtitle);
    }

    #[test]
    fn student_variant_is_reported() {
        let nav = get_role_navigation("learner", NONE, &AttributeBag::new());
        assert_eq!(nav.domain, Domain::Student);
        assert_eq!(nav.student_variant, Some(StudentVariant::Unenrolled));
        assert_eq!(nav.pinned[0].id.as_str(), "programs");
    }

    #[test]
    fn no_permissions_can_mean_no_menu() {
        let nav = get_role_navigation("finance_agent", NONE, &AttributeBag::new());
        assert!(nav.is_empty());
        assert_eq!(nav.title, "Finance");
        assert!(!nav.pinned.is_empty());
    }

    const EMPTY_MENU: &str = "role resolved to an empty navigation";

    #[test]
    #[traced_test]
    fn empty_menu_for_a_real_role_is_warned() {
        let nav = get_role_navigation("hr_agent", ["nothing:matches"], &AttributeBag::new());
        assert!(nav.is_empty());
        assert!(logs_contain(EMPTY_MENU));
        assert!(logs_contain("hr_agent"));
    }

    #[test]
    #[traced_test]
    fn superuser_menu_is_not_warned() {
        let nav = get_role_navigation("hr_agent", ["admin:all"], &AttributeBag::new());
        assert!(!nav.is_empty());
        assert!(!logs_contain(EMPTY_MENU));
    }

    #[test]
    #[traced_test]
    fn placeholder_roles_are_not_warned() {
        let mut catalog = NavigationCatalog::builtin().clone();
        catalog.roles = RoleTable::from_entries([("guest", Domain::Hr), ("", Domain::Hr)]);
        let navigator = Navigator::new(&catalog);
        for role in ["guest", ""] {
            let nav = navigator.resolve(&CallerContext::new(role, ["nothing:matches"], AttributeBag::new()));
            assert_eq!(nav.domain, Domain::Hr);
            assert!(nav.is_empty());
        }
        assert!(!logs_contain(EMPTY_MENU));
    }

    #[test]
    fn superuser_sees_full_system_tree_except_attribute_gated() {
        let nav = get_role_navigation("super_admin", ["admin:all"], &AttributeBag::new());
        let catalog = NavigationCatalog::builtin();
        assert_eq!(
            item_paths(&nav.navigation),
            item_paths(catalog.tree(Domain::System))
        );
    }

    #[test]
    fn strict_options_reach_the_filters() {
        let mut catalog = NavigationCatalog::builtin().clone();
        catalog.trees.insert(
            Domain::System,
            vec![
                NavigationItem::group(
                    "access",
                    "Access Control",
                    vec![NavigationItem::leaf("users", "Users", "/system/users").requires(["users:read"])],
                )
                .requires(["system:read"]),
            ],
        );
        let ctx = CallerContext::new("admin", ["users:read"], AttributeBag::new());

        let lenient = Navigator::new(&catalog).resolve(&ctx);
        assert!(find_item(&lenient.navigation, "access.users").is_some());

        let strict = Navigator::new(&catalog).with_options(FilterOptions::strict()).resolve(&ctx);
        assert!(strict.is_empty());
    }

    #[test]
    fn output_serializes_for_the_renderer() {
        let nav = get_role_navigation("student", NONE, &AttributeBag::new());
        let value = serde_json::to_value(&nav).unwrap();
        assert_eq!(value["domain"], json!("student"));
        assert_eq!(value["studentVariant"], json!("unenrolled"));
        assert!(value["navigation"].as_array().is_some_and(|items| !items.is_empty()));
    }
}
