//! Visibility explanations (audit trail for menu configuration).
//!
//! Answers "why is this item not in my menu?" for one caller. Decisions
//! mirror the permission filter followed by the attribute filter.

use serde::Serialize;

use learnhub_auth::{CallerContext, GateCheck, check_permissions};

use crate::filter::{FilterOptions, missing_attributes};
use crate::item::{ItemKind, NavigationItem, join_path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Caller holds `admin:all`.
    Superuser,
    /// Item declares no permission requirement.
    Ungated,
    /// Caller holds `permission`, one of the required ones.
    Granted { permission: String },
    /// Group shown although its own permission gate fails, because children
    /// are visible.
    ParentGateBypassed { any_of: Vec<String> },
    /// Caller holds the excluded `permission`.
    Vetoed { permission: String },
    /// Caller holds none of `any_of`.
    MissingPermission { any_of: Vec<String> },
    /// These attribute keys are absent from the caller's bag.
    MissingAttributes { keys: Vec<String> },
    /// Group whose children are all hidden.
    EmptyGroup,
    /// An ancestor is hidden.
    HiddenByParent { parent: String },
}

/// Decision for one node, addressed by dotted id path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDecision {
    pub path: String,
    pub visible: bool,
    pub verdict: Verdict,
}

/// Explain every node of `tree` for `ctx`, in pre-order.
pub fn explain_tree(tree: &[NavigationItem], ctx: &CallerContext, options: FilterOptions) -> Vec<ItemDecision> {
    let mut out = Vec::new();
    explain_items(tree, "", ctx, options, &mut out);
    out
}

/// Paths of the visible nodes in a set of decisions.
pub fn visible_paths(decisions: &[ItemDecision]) -> Vec<&str> {
    decisions
        .iter()
        .filter(|d| d.visible)
        .map(|d| d.path.as_str())
        .collect()
}

fn explain_items(
    items: &[NavigationItem],
    prefix: &str,
    ctx: &CallerContext,
    options: FilterOptions,
    out: &mut Vec<ItemDecision>,
) -> bool {
    let mut any_visible = false;
    for item in items {
        any_visible |= explain_item(item, prefix, ctx, options, out);
    }
    any_visible
}

fn explain_item(
    item: &NavigationItem,
    prefix: &str,
    ctx: &CallerContext,
    options: FilterOptions,
    out: &mut Vec<ItemDecision>,
) -> bool {
    let path = join_path(prefix, item.id.as_str());
    let check = check_permissions(&ctx.permissions, &item.gate.permissions, &item.gate.exclude_permissions);
    let missing: Vec<String> = missing_attributes(&item.gate, &ctx.attributes)
        .into_iter()
        .map(|k| k.to_string())
        .collect();

    match &item.kind {
        ItemKind::Leaf => {
            let visible = check.passes() && missing.is_empty();
            let verdict = match (check.passes(), missing.is_empty()) {
                (false, _) => denied(check, item),
                (true, false) => Verdict::MissingAttributes { keys: missing },
                (true, true) => granted(check),
            };
            out.push(ItemDecision { path, visible, verdict });
            visible
        }
        ItemKind::Group(children) => {
            let blocked = if matches!(check, GateCheck::Vetoed(_)) || (options.is_strict() && !check.passes()) {
                Some(denied(check, item))
            } else if options.is_strict() && !missing.is_empty() {
                Some(Verdict::MissingAttributes { keys: missing })
            } else {
                None
            };

            if let Some(verdict) = blocked {
                out.push(ItemDecision {
                    path: path.clone(),
                    visible: false,
                    verdict,
                });
                hide_descendants(children, &path, &path, out);
                return false;
            }

            let slot = out.len();
            out.push(ItemDecision {
                path: path.clone(),
                visible: false,
                verdict: Verdict::EmptyGroup,
            });
            if explain_items(children, &path, ctx, options, out) {
                out[slot].visible = true;
                out[slot].verdict = if check.passes() {
                    granted(check)
                } else {
                    Verdict::ParentGateBypassed {
                        any_of: required(item),
                    }
                };
                true
            } else {
                false
            }
        }
    }
}

fn hide_descendants(items: &[NavigationItem], prefix: &str, parent: &str, out: &mut Vec<ItemDecision>) {
    for item in items {
        let path = join_path(prefix, item.id.as_str());
        out.push(ItemDecision {
            path: path.clone(),
            visible: false,
            verdict: Verdict::HiddenByParent {
                parent: parent.to_string(),
            },
        });
        hide_descendants(item.children(), &path, parent, out);
    }
}

fn required(item: &NavigationItem) -> Vec<String> {
    item.gate.permissions.iter().map(|p| p.to_string()).collect()
}

fn granted(check: GateCheck<'_>) -> Verdict {
    match check {
        GateCheck::Superuser => Verdict::Superuser,
        GateCheck::Granted(permission) => Verdict::Granted {
            permission: permission.to_string(),
        },
        _ => Verdict::Ungated,
    }
}

fn denied(check: GateCheck<'_>, item: &NavigationItem) -> Verdict {
    match check {
        GateCheck::Vetoed(permission) => Verdict::Vetoed {
            permission: permission.to_string(),
        },
        _ => Verdict::MissingPermission {
            any_of: required(item),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnhub_auth::AttributeBag;
    use serde_json::json;

    fn tree() -> Vec<NavigationItem> {
        vec![
            NavigationItem::leaf("home", "Home", "/"),
            NavigationItem::group(
                "payments",
                "Payments",
                vec![
                    NavigationItem::leaf("list", "Payments", "/payments").requires(["payments:read"]),
                    NavigationItem::leaf("refunds", "Refunds", "/refunds")
                        .requires(["refunds:read"])
                        .excludes(["finance:restricted"]),
                    NavigationItem::leaf("mine", "My Collections", "/payments/mine")
                        .requires(["payments:read"])
                        .needs(["assignedAccounts"]),
                ],
            ),
            NavigationItem::group(
                "admin",
                "Admin",
                vec![NavigationItem::leaf("users", "Users", "/users")],
            )
            .excludes(["finance:restricted"]),
        ]
    }

    fn decision<'a>(decisions: &'a [ItemDecision], path: &str) -> &'a ItemDecision {
        decisions.iter().find(|d| d.path == path).unwrap()
    }

    #[test]
    fn reasons_for_a_restricted_caller() {
        let ctx = CallerContext::new(
            "finance_agent",
            ["payments:read", "refunds:read", "finance:restricted"],
            AttributeBag::new(),
        );
        let decisions = explain_tree(&tree(), &ctx, FilterOptions::default());

        assert_eq!(decision(&decisions, "home").verdict, Verdict::Ungated);
        assert_eq!(
            decision(&decisions, "payments.list").verdict,
            Verdict::Granted {
                permission: "payments:read".to_string()
            }
        );
        assert_eq!(
            decision(&decisions, "payments.refunds").verdict,
            Verdict::Vetoed {
                permission: "finance:restricted".to_string()
            }
        );
        assert_eq!(
            decision(&decisions, "payments.mine").verdict,
            Verdict::MissingAttributes {
                keys: vec!["assignedAccounts".to_string()]
            }
        );
        assert_eq!(
            decision(&decisions, "admin.users").verdict,
            Verdict::HiddenByParent {
                parent: "admin".to_string()
            }
        );
        assert_eq!(visible_paths(&decisions), vec!["home", "payments", "payments.list"]);
    }

    #[test]
    fn empty_group_is_reported() {
        let tree = vec![tree().remove(1)];

        let ctx = CallerContext::new("finance_agent", ["reports:read"], AttributeBag::new());
        let decisions = explain_tree(&tree, &ctx, FilterOptions::default());
        assert_eq!(decisions[0].verdict, Verdict::EmptyGroup);
        assert!(!decisions[0].visible);

        let ctx = CallerContext::new("finance_agent", ["refunds:read"], AttributeBag::new());
        let decisions = explain_tree(&tree, &ctx, FilterOptions::default());
        assert!(decisions[0].visible);
    }

    #[test]
    fn bypassed_parent_gate_is_called_out() {
        let tree = vec![
            NavigationItem::group(
                "ops",
                "Ops",
                vec![NavigationItem::leaf("jobs", "Jobs", "/jobs")],
            )
            .requires(["ops:read"]),
        ];
        let ctx = CallerContext::new("it_support", ["support:read"], AttributeBag::new());

        let lenient = explain_tree(&tree, &ctx, FilterOptions::default());
        assert_eq!(
            lenient[0].verdict,
            Verdict::ParentGateBypassed {
                any_of: vec!["ops:read".to_string()]
            }
        );
        assert!(lenient[0].visible);

        let strict = explain_tree(&tree, &ctx, FilterOptions::strict());
        assert_eq!(
            strict[0].verdict,
            Verdict::MissingPermission {
                any_of: vec!["ops:read".to_string()]
            }
        );
        assert_eq!(visible_paths(&strict), Vec::<&str>::new());
    }

    #[test]
    fn serializes_with_kind_tags() {
        let ctx = CallerContext::new("admin", ["admin:all"], AttributeBag::new());
        let decisions = explain_tree(&tree()[..1], &ctx, FilterOptions::default());
        assert_eq!(
            serde_json::to_value(&decisions).unwrap(),
            json!([{"path": "home", "visible": true, "verdict": {"kind": "superuser"}}])
        );
    }
}
