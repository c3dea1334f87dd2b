//! Student navigation variants.
//!
//! Learners see one of three complete menus depending on where they are in
//! the enrollment funnel. The variant is recomputed from the attribute bag on
//! every call; nothing is remembered between calls.

use serde::{Deserialize, Serialize};

use learnhub_auth::AttributeBag;

pub const HAS_ENROLLMENT: &str = "hasEnrollment";
pub const ENROLLED_COURSES: &str = "enrolledCourses";
pub const ONBOARDING_STATUS: &str = "onboardingStatus";
pub const IS_ONBOARDING_COMPLETE: &str = "isOnboardingComplete";

pub const ONBOARDING_COMPLETED: &str = "COMPLETED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentVariant {
    /// No enrollment yet: program discovery and the admission flow.
    Unenrolled,
    /// Enrolled but onboarding is not finished.
    Onboarding,
    /// Regular learning-hub navigation.
    Full,
}

impl StudentVariant {
    pub const ALL: [StudentVariant; 3] = [
        StudentVariant::Unenrolled,
        StudentVariant::Onboarding,
        StudentVariant::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudentVariant::Unenrolled => "unenrolled",
            StudentVariant::Onboarding => "onboarding",
            StudentVariant::Full => "full",
        }
    }
}

impl core::fmt::Display for StudentVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either an explicit `hasEnrollment` flag or a non-empty `enrolledCourses`
/// list.
pub fn has_enrollment(attributes: &AttributeBag) -> bool {
    attributes.is_present(HAS_ENROLLMENT) || attributes.has_items(ENROLLED_COURSES)
}

/// Either `isOnboardingComplete == true` or `onboardingStatus == "COMPLETED"`.
pub fn is_onboarding_complete(attributes: &AttributeBag) -> bool {
    attributes.get_bool(IS_ONBOARDING_COMPLETE) == Some(true)
        || attributes.get_str(ONBOARDING_STATUS) == Some(ONBOARDING_COMPLETED)
}

pub fn resolve_student_variant(attributes: &AttributeBag) -> StudentVariant {
    if !has_enrollment(attributes) {
        StudentVariant::Unenrolled
    } else if !is_onboarding_complete(attributes) {
        StudentVariant::Onboarding
    } else {
        StudentVariant::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_bag_is_unenrolled() {
        assert_eq!(resolve_student_variant(&AttributeBag::new()), StudentVariant::Unenrolled);
    }

    #[test]
    fn enrolled_with_pending_onboarding() {
        let bag = AttributeBag::new()
            .with(HAS_ENROLLMENT, true)
            .with(ONBOARDING_STATUS, "IN_PROGRESS");
        assert_eq!(resolve_student_variant(&bag), StudentVariant::Onboarding);

        let no_status = AttributeBag::new().with(HAS_ENROLLMENT, true);
        assert_eq!(resolve_student_variant(&no_status), StudentVariant::Onboarding);
    }

    #[test]
    fn completed_status_gives_full_menu() {
        let bag = AttributeBag::new()
            .with(HAS_ENROLLMENT, true)
            .with(ONBOARDING_STATUS, "COMPLETED");
        assert_eq!(resolve_student_variant(&bag), StudentVariant::Full);
    }

    #[test]
    fn enrolled_courses_and_completion_flag() {
        let bag = AttributeBag::new()
            .with(ENROLLED_COURSES, json!(["c1"]))
            .with(IS_ONBOARDING_COMPLETE, true);
        assert_eq!(resolve_student_variant(&bag), StudentVariant::Full);
    }

    #[test]
    fn explicit_false_and_empty_lists_are_not_enrollment() {
        let bag = AttributeBag::new()
            .with(HAS_ENROLLMENT, false)
            .with(ENROLLED_COURSES, json!([]))
            .with(IS_ONBOARDING_COMPLETE, true);
        assert_eq!(resolve_student_variant(&bag), StudentVariant::Unenrolled);
    }

    #[test]
    fn status_comparison_is_exact() {
        let bag = AttributeBag::new()
            .with(HAS_ENROLLMENT, true)
            .with(ONBOARDING_STATUS, "completed")
            .with(IS_ONBOARDING_COMPLETE, false);
        assert_eq!(resolve_student_variant(&bag), StudentVariant::Onboarding);
    }
}
