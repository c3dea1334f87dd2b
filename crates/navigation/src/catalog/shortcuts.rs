//! Pinned shortcuts and headings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use learnhub_auth::Domain;
use learnhub_core::ItemId;

use crate::student::StudentVariant;

/// A shortcut tile shown above the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedItem {
    pub id: ItemId,
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl PinnedItem {
    pub fn new(id: &'static str, label: &'static str, path: &'static str, icon: &'static str) -> Self {
        Self {
            id: id.into(),
            label: label.to_string(),
            path: path.to_string(),
            icon: Some(icon.to_string()),
        }
    }
}

/// Shortcut lists keyed by domain, role and student variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedTable {
    #[serde(default)]
    pub domains: BTreeMap<Domain, Vec<PinnedItem>>,
    #[serde(default)]
    pub roles: BTreeMap<String, Vec<PinnedItem>>,
    #[serde(default)]
    pub student: BTreeMap<StudentVariant, Vec<PinnedItem>>,
}

impl PinnedTable {
    /// Shortcuts for a caller.
    ///
    /// Students get their variant's list. Everyone else gets the role's own
    /// list, else the domain default. No configuration means no shortcuts.
    pub fn select(&self, domain: Domain, role: &str, variant: Option<StudentVariant>) -> Vec<PinnedItem> {
        let selected = match variant {
            Some(variant) => self.student.get(&variant),
            None => self.roles.get(role),
        };
        selected
            .or_else(|| self.domains.get(&domain))
            .cloned()
            .unwrap_or_default()
    }

    pub(super) fn iter_all(&self) -> impl Iterator<Item = (String, &[PinnedItem])> {
        let domains = self.domains.iter().map(|(d, items)| (format!("pinned.{d}"), items.as_slice()));
        let roles = self.roles.iter().map(|(r, items)| (format!("pinned.role.{r}"), items.as_slice()));
        let student = self
            .student
            .iter()
            .map(|(v, items)| (format!("pinned.student.{v}"), items.as_slice()));
        domains.chain(roles).chain(student)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

impl Heading {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// Titles per domain, with optional per-role subtitle overrides scoped to a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleTable {
    #[serde(default)]
    pub domains: BTreeMap<Domain, Heading>,
    #[serde(default)]
    pub role_subtitles: BTreeMap<Domain, BTreeMap<String, String>>,
}

impl TitleTable {
    pub fn select(&self, domain: Domain, role: &str) -> Heading {
        let mut heading = self
            .domains
            .get(&domain)
            .cloned()
            .unwrap_or_else(|| Heading::new(domain.as_str(), ""));
        if let Some(subtitle) = self.role_subtitles.get(&domain).and_then(|roles| roles.get(role)) {
            heading.subtitle = subtitle.clone();
        }
        heading
    }
}

pub(super) fn builtin_pinned() -> PinnedTable {
    let p = PinnedItem::new;

    let domains = BTreeMap::from([
        (
            Domain::Sales,
            vec![
                p("leads", "Leads", "/sales/leads", "users"),
                p("pipeline", "Pipeline", "/sales/pipeline", "funnel"),
                p("new-enrollment", "New Enrollment", "/sales/enrollments/new", "plus"),
            ],
        ),
        (
            Domain::Marketing,
            vec![
                p("campaigns", "Campaigns", "/marketing/campaigns", "megaphone"),
                p("analytics", "Analytics", "/marketing/analytics", "chart"),
            ],
        ),
        (
            Domain::Finance,
            vec![
                p("transactions", "Transactions", "/finance/payments", "wallet"),
                p("invoices", "Invoices", "/finance/invoices", "file"),
                p("reports", "Reports", "/finance/reports", "chart"),
            ],
        ),
        (
            Domain::Hr,
            vec![
                p("employees", "Employees", "/hr/employees", "users"),
                p("drives", "Placement Drives", "/hr/placements/drives", "briefcase"),
            ],
        ),
        (
            Domain::Academic,
            vec![
                p("schedule", "Schedule", "/academic/classes/schedule", "calendar"),
                p("courses", "Courses", "/academic/courses", "book"),
            ],
        ),
        (
            Domain::Student,
            vec![
                p("home", "Home", "/learn", "home"),
                p("support", "Support", "/learn/support", "help"),
            ],
        ),
        (
            Domain::System,
            vec![
                p("users", "Users", "/system/users", "users"),
                p("settings", "Settings", "/system/settings", "settings"),
                p("health", "System Health", "/system/health", "pulse"),
            ],
        ),
    ]);

    let roles = BTreeMap::from([
        (
            "sales_agent".to_string(),
            vec![
                p("my-leads", "My Leads", "/sales/leads/mine", "users"),
                p("follow-ups", "Follow-ups", "/sales/leads/follow-ups", "clock"),
                p("new-enrollment", "New Enrollment", "/sales/enrollments/new", "plus"),
            ],
        ),
        (
            "sales_head".to_string(),
            vec![
                p("performance", "Team Performance", "/sales/team/performance", "chart"),
                p("targets", "Targets", "/sales/team/targets", "target"),
                p("assign", "Lead Assignment", "/sales/leads/assign", "shuffle"),
                p("reports", "Reports", "/sales/reports", "file"),
            ],
        ),
        (
            "finance_head".to_string(),
            vec![
                p("approvals", "Approvals", "/finance/approvals", "check"),
                p("refunds", "Refunds", "/finance/payments/refunds", "undo"),
                p("reports", "Reports", "/finance/reports", "chart"),
            ],
        ),
        (
            "tutor".to_string(),
            vec![
                p("my-classes", "My Classes", "/academic/classes/mine", "video"),
                p("schedule", "Schedule", "/academic/classes/schedule", "calendar"),
                p("doubts", "Doubt Support", "/academic/doubts", "help"),
            ],
        ),
        (
            "mentor".to_string(),
            vec![
                p("my-mentees", "My Mentees", "/academic/learners/mentees", "users"),
                p("doubts", "Doubt Support", "/academic/doubts", "help"),
            ],
        ),
        (
            "lsm".to_string(),
            vec![
                p("at-risk", "At-risk Learners", "/academic/learners/at-risk", "alert"),
                p("directory", "Learner Directory", "/academic/learners", "users"),
            ],
        ),
        (
            "programManager".to_string(),
            vec![
                p("programs", "Programs", "/academic/programs", "layers"),
                p("batches", "Batches", "/academic/batches", "grid"),
                p("curriculum", "Curriculum Builder", "/academic/curriculum", "book"),
            ],
        ),
        (
            "it_support".to_string(),
            vec![
                p("tickets", "Tickets", "/system/support/tickets", "inbox"),
                p("health", "System Health", "/system/health", "pulse"),
            ],
        ),
    ]);

    let student = BTreeMap::from([
        (
            StudentVariant::Unenrolled,
            vec![
                p("programs", "Explore Programs", "/learn/programs", "compass"),
                p("assessment", "Scholarship Test", "/learn/assessment", "edit"),
                p("apply", "Apply Now", "/learn/apply", "send"),
            ],
        ),
        (
            StudentVariant::Onboarding,
            vec![
                p("onboarding", "Complete Onboarding", "/learn/onboarding", "checklist"),
                p("documents", "Documents", "/learn/onboarding/documents", "file"),
            ],
        ),
        (
            StudentVariant::Full,
            vec![
                p("courses", "My Courses", "/learn/courses", "book"),
                p("live-classes", "Live Classes", "/learn/live", "video"),
                p("assignments", "Assignments", "/learn/assignments", "edit"),
                p("jobs", "Job Board", "/learn/career/jobs", "briefcase"),
            ],
        ),
    ]);

    PinnedTable { domains, roles, student }
}

pub(super) fn builtin_titles() -> TitleTable {
    let domains = BTreeMap::from([
        (Domain::Sales, Heading::new("Sales", "Leads, pipeline and enrollments")),
        (Domain::Marketing, Heading::new("Marketing", "Campaigns, content and lead sources")),
        (Domain::Finance, Heading::new("Finance", "Payments, invoices and payouts")),
        (Domain::Hr, Heading::new("People & Placements", "Employees, hiring partners and drives")),
        (Domain::Academic, Heading::new("Academics", "Courses, classes and assessments")),
        (Domain::Student, Heading::new("Learning Hub", "Your programs in one place")),
        (Domain::System, Heading::new("Administration", "Users, tenants and platform settings")),
    ]);

    let academic = BTreeMap::from([
        ("tutor".to_string(), "Your classes and schedule".to_string()),
        ("mentor".to_string(), "Mentee progress and doubt support".to_string()),
        ("lsm".to_string(), "Learner success and retention".to_string()),
        ("programManager".to_string(), "Programs, batches and curriculum".to_string()),
    ]);
    let role_subtitles = BTreeMap::from([(Domain::Academic, academic)]);

    TitleTable { domains, role_subtitles }
}
