//! `learnhub-auth`: the caller side of navigation resolution.
//!
//! Models what an already-authenticated session hands to the resolver: a
//! role, a normalized permission set and an attribute bag. This crate is
//! intentionally decoupled from HTTP, storage and session handling.

pub mod attributes;
pub mod authorize;
pub mod permissions;
pub mod principal;
pub mod roles;

pub use attributes::{AttributeBag, is_present};
pub use authorize::{GateCheck, check_permissions};
pub use permissions::{Permission, PermissionSet, SUPERUSER};
pub use principal::CallerContext;
pub use roles::{Domain, Role, RoleTable, UnknownDomain, resolve_domain};
