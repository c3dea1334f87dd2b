//! `learnhub-navigation`: role-aware navigation resolution for the LearnHub
//! admin console.
//!
//! Given a caller's role, permissions and attributes this crate selects the
//! base menu for the caller's domain, prunes it with the permission and
//! attribute filters, and attaches pinned shortcuts and a heading. Rendering,
//! routing and session handling live elsewhere.

pub mod catalog;
pub mod composer;
pub mod explain;
pub mod filter;
pub mod item;
pub mod student;

pub use catalog::{Heading, NavigationCatalog, PinnedItem, PinnedTable, StudentTrees, TitleTable};
pub use composer::{NavigationExplanation, Navigator, RoleNavigation, get_role_navigation};
pub use explain::{ItemDecision, Verdict, explain_tree, visible_paths};
pub use filter::{
    FilterOptions, ParentGate, filter_by_attributes, filter_by_attributes_with, filter_by_permissions,
    filter_by_permissions_with,
};
pub use item::{Gate, ItemKind, NavigationItem, count_items, find_item, item_paths};
pub use student::{StudentVariant, resolve_student_variant};

pub use learnhub_auth::{AttributeBag, CallerContext, Domain, PermissionSet, resolve_domain};
