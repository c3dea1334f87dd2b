//! Compiled-in navigation trees, one per console domain.

use crate::item::NavigationItem as Nav;

pub(super) fn sales() -> Vec<Nav> {
    vec![
        Nav::leaf("dashboard", "Dashboard", "/sales/dashboard").requires(["sales:read"]),
        Nav::group(
            "leads",
            "Leads",
            vec![
                Nav::leaf("all-leads", "All Leads", "/sales/leads").requires(["leads:read"]),
                Nav::leaf("my-leads", "My Leads", "/sales/leads/mine")
                    .requires(["leads:read"])
                    .needs(["assignedLeads"]),
                Nav::leaf("follow-ups", "Follow-ups", "/sales/leads/follow-ups")
                    .requires(["leads:read"])
                    .needs(["assignedLeads"]),
                Nav::leaf("import", "Bulk Import", "/sales/leads/import").requires(["leads:bulk_upload"]),
                Nav::leaf("assign", "Lead Assignment", "/sales/leads/assign").requires(["leads:assign"]),
            ],
        ),
        Nav::leaf("pipeline", "Pipeline", "/sales/pipeline").requires(["deals:read"]),
        Nav::group(
            "enrollments",
            "Enrollments",
            vec![
                Nav::leaf("new", "New Enrollment", "/sales/enrollments/new").requires(["enrollments:create"]),
                Nav::leaf("list", "Enrollments", "/sales/enrollments").requires(["enrollments:read"]),
                Nav::leaf("payment-links", "Payment Links", "/sales/enrollments/payment-links")
                    .requires(["payments:create"]),
            ],
        ),
        Nav::group(
            "team",
            "Team",
            vec![
                Nav::leaf("performance", "Team Performance", "/sales/team/performance").requires(["sales:manage"]),
                Nav::leaf("targets", "Targets", "/sales/team/targets").requires(["sales:manage"]),
                Nav::leaf("leaderboard", "Leaderboard", "/sales/team/leaderboard").requires(["sales:read"]),
            ],
        ),
        Nav::leaf("incentives", "Incentives", "/sales/incentives")
            .requires(["sales:read"])
            .excludes(["sales:probation"]),
        Nav::leaf("reports", "Reports", "/sales/reports").requires(["reports:read"]),
    ]
}

pub(super) fn marketing() -> Vec<Nav> {
    vec![
        Nav::leaf("dashboard", "Dashboard", "/marketing/dashboard").requires(["marketing:read"]),
        Nav::group(
            "campaigns",
            "Campaigns",
            vec![
                Nav::leaf("all-campaigns", "Campaigns", "/marketing/campaigns").requires(["campaigns:read"]),
                Nav::leaf("new", "New Campaign", "/marketing/campaigns/new").requires(["campaigns:write"]),
                Nav::leaf("my-campaigns", "My Campaigns", "/marketing/campaigns/mine")
                    .requires(["campaigns:read"])
                    .needs(["assignedCampaigns"]),
            ],
        ),
        Nav::leaf("lead-sources", "Lead Sources", "/marketing/lead-sources").requires(["marketing:read"]),
        Nav::group(
            "content",
            "Content",
            vec![
                Nav::leaf("blog", "Blog", "/marketing/content/blog").requires(["content:read"]),
                Nav::leaf("webinars", "Webinars", "/marketing/content/webinars").requires(["webinars:read"]),
                Nav::leaf("landing-pages", "Landing Pages", "/marketing/content/landing-pages")
                    .requires(["content:write"]),
            ],
        ),
        Nav::leaf("budget", "Budget", "/marketing/budget")
            .requires(["marketing:manage"])
            .excludes(["marketing:agent"]),
        Nav::leaf("analytics", "Analytics", "/marketing/analytics").requires(["reports:read"]),
    ]
}

pub(super) fn finance() -> Vec<Nav> {
    vec![
        Nav::leaf("dashboard", "Dashboard", "/finance/dashboard").requires(["finance:read"]),
        Nav::group(
            "payments",
            "Payments",
            vec![
                Nav::leaf("transactions", "Transactions", "/finance/payments").requires(["payments:read"]),
                Nav::leaf("emi-plans", "EMI Plans", "/finance/payments/emi").requires(["payments:read"]),
                Nav::leaf("refunds", "Refunds", "/finance/payments/refunds")
                    .requires(["refunds:read", "refunds:approve"])
                    .excludes(["finance:restricted"]),
            ],
        ),
        Nav::leaf("invoices", "Invoices", "/finance/invoices").requires(["invoices:read"]),
        Nav::group(
            "payouts",
            "Payouts",
            vec![
                Nav::leaf("tutor-payouts", "Tutor Payouts", "/finance/payouts/tutors").requires(["payouts:read"]),
                Nav::leaf("incentive-payouts", "Incentive Payouts", "/finance/payouts/incentives")
                    .requires(["payouts:read"])
                    .excludes(["finance:restricted"]),
            ],
        ),
        Nav::leaf("approvals", "Approvals", "/finance/approvals").requires(["finance:approve"]),
        Nav::leaf("reports", "Reports", "/finance/reports").requires(["reports:read"]),
    ]
}

pub(super) fn hr() -> Vec<Nav> {
    vec![
        Nav::leaf("dashboard", "Dashboard", "/hr/dashboard").requires(["hr:read"]),
        Nav::group(
            "people",
            "People",
            vec![
                Nav::leaf("employees", "Employees", "/hr/employees").requires(["employees:read"]),
                Nav::leaf("onboarding", "Employee Onboarding", "/hr/employees/onboarding")
                    .requires(["employees:write"]),
                Nav::leaf("leave", "Leave Requests", "/hr/leave").requires(["leave:read"]),
            ],
        ),
        Nav::group(
            "placements",
            "Placements",
            vec![
                Nav::leaf("drives", "Placement Drives", "/hr/placements/drives").requires(["placements:read"]),
                Nav::leaf("my-drives", "My Drives", "/hr/placements/mine")
                    .requires(["placements:read"])
                    .needs(["assignedDrives"]),
                Nav::leaf("companies", "Hiring Partners", "/hr/placements/companies").requires(["companies:read"]),
                Nav::leaf("candidates", "Candidates", "/hr/placements/candidates").requires(["placements:write"]),
            ],
        ),
        Nav::leaf("payroll", "Payroll", "/hr/payroll")
            .requires(["payroll:read"])
            .excludes(["payroll:restricted"]),
        Nav::leaf("reports", "Reports", "/hr/reports").requires(["reports:read"]),
    ]
}

pub(super) fn academic() -> Vec<Nav> {
    vec![
        Nav::leaf("dashboard", "Dashboard", "/academic/dashboard").requires(["academic:read"]),
        Nav::group(
            "classes",
            "Classes",
            vec![
                Nav::leaf("my-classes", "My Classes", "/academic/classes/mine")
                    .requires(["classes:read"])
                    .needs(["assignedClasses"]),
                Nav::leaf("schedule", "Schedule", "/academic/classes/schedule").requires(["classes:read"]),
                Nav::leaf("all-classes", "All Classes", "/academic/classes").requires(["classes:manage"]),
                Nav::leaf("recordings", "Recordings", "/academic/classes/recordings").requires(["classes:read"]),
            ],
        ),
        Nav::group(
            "learners",
            "Learners",
            vec![
                Nav::leaf("my-mentees", "My Mentees", "/academic/learners/mentees")
                    .requires(["mentees:read"])
                    .needs(["assignedMentees"]),
                Nav::leaf("directory", "Learner Directory", "/academic/learners").requires(["learners:read"]),
                Nav::leaf("at-risk", "At-risk Learners", "/academic/learners/at-risk")
                    .requires(["learners:success"]),
            ],
        ),
        Nav::group(
            "content",
            "Courses",
            vec![
                Nav::leaf("courses", "Courses", "/academic/courses").requires(["courses:read"]),
                Nav::leaf("curriculum", "Curriculum Builder", "/academic/curriculum").requires(["curriculum:write"]),
                Nav::leaf("assessments", "Assessments", "/academic/assessments").requires(["assessments:read"]),
            ],
        ),
        Nav::group(
            "programs",
            "Programs",
            vec![
                Nav::leaf("programs", "Programs", "/academic/programs").requires(["programs:manage"]),
                Nav::leaf("batches", "Batches", "/academic/batches").requires(["batches:read"]),
            ],
        ),
        Nav::leaf("doubts", "Doubt Support", "/academic/doubts").requires(["doubts:read"]),
        Nav::leaf("reports", "Reports", "/academic/reports")
            .requires(["reports:read"])
            .excludes(["academic:probation"]),
    ]
}

pub(super) fn system() -> Vec<Nav> {
    vec![
        Nav::leaf("dashboard", "Dashboard", "/system/dashboard").requires(["system:read"]),
        Nav::group(
            "access",
            "Access Control",
            vec![
                Nav::leaf("users", "Users", "/system/users").requires(["users:read"]),
                Nav::leaf("roles", "Roles", "/system/roles").requires(["roles:manage"]),
                Nav::leaf("permissions", "Permissions", "/system/permissions").requires(["roles:manage"]),
            ],
        ),
        Nav::leaf("tenants", "Tenants", "/system/tenants").requires(["tenants:manage"]),
        Nav::group(
            "settings",
            "Settings",
            vec![
                Nav::leaf("general", "General", "/system/settings").requires(["settings:read"]),
                Nav::leaf("integrations", "Integrations", "/system/integrations").requires(["integrations:manage"]),
                Nav::leaf("notifications", "Notifications", "/system/notifications").requires(["settings:write"]),
            ],
        ),
        Nav::group(
            "support",
            "Support",
            vec![
                Nav::leaf("tickets", "Tickets", "/system/support/tickets").requires(["support:read"]),
                Nav::leaf("health", "System Health", "/system/health").requires(["system:read"]),
            ],
        ),
        Nav::leaf("audit", "Audit Log", "/system/audit")
            .requires(["audit:read"])
            .excludes(["support:agent"]),
    ]
}

pub(super) fn student_unenrolled() -> Vec<Nav> {
    vec![
        Nav::leaf("home", "Home", "/learn"),
        Nav::leaf("programs", "Explore Programs", "/learn/programs"),
        Nav::leaf("assessment", "Scholarship Test", "/learn/assessment"),
        Nav::leaf("apply", "Apply Now", "/learn/apply"),
        Nav::leaf("applications", "My Applications", "/learn/applications").needs(["applicationIds"]),
        Nav::leaf("profile", "Profile", "/learn/profile"),
    ]
}

pub(super) fn student_onboarding() -> Vec<Nav> {
    vec![
        Nav::leaf("onboarding", "Complete Onboarding", "/learn/onboarding"),
        Nav::leaf("documents", "Documents", "/learn/onboarding/documents"),
        Nav::leaf("fees", "Fee Payment", "/learn/onboarding/fees"),
        Nav::leaf("orientation", "Orientation", "/learn/onboarding/orientation").needs(["orientationSlot"]),
        Nav::leaf("profile", "Profile", "/learn/profile"),
        Nav::leaf("help", "Help", "/learn/help"),
    ]
}

pub(super) fn student_full() -> Vec<Nav> {
    vec![
        Nav::leaf("home", "Home", "/learn"),
        Nav::group(
            "learning",
            "Learning",
            vec![
                Nav::leaf("courses", "My Courses", "/learn/courses"),
                Nav::leaf("live-classes", "Live Classes", "/learn/live"),
                Nav::leaf("assignments", "Assignments", "/learn/assignments"),
                Nav::leaf("mentor", "My Mentor", "/learn/mentor").needs(["mentorId"]),
                Nav::leaf("certificates", "Certificates", "/learn/certificates").needs(["certificates"]),
            ],
        ),
        Nav::group(
            "career",
            "Career",
            vec![
                Nav::leaf("jobs", "Job Board", "/learn/career/jobs").excludes(["placements:opted_out"]),
                Nav::leaf("mock-interviews", "Mock Interviews", "/learn/career/mock-interviews"),
                Nav::leaf("resume", "Resume Builder", "/learn/career/resume"),
            ],
        ),
        Nav::leaf("payments", "Payments", "/learn/payments"),
        Nav::leaf("community", "Community", "/learn/community").excludes(["community:banned"]),
        Nav::leaf("support", "Support", "/learn/support"),
    ]
}
