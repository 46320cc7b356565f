//! Role gating for the dashboard areas.
//!
//! The real session/token lifecycle lives in an external auth service that
//! this frontend only consumes. Platforms provide the current role through
//! Dioxus context as a `Signal<Role>`; everything here is a pure allow-list
//! check over that value.

/// Who the current visitor is, as reported by the auth collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Recruiter,
    /// No authenticated session.
    Guest,
}

impl Role {
    /// Stable machine tag, used by the demo role switcher on `/auth`.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Recruiter => "recruiter",
            Role::Guest => "guest",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Role> {
        match tag {
            "student" => Some(Role::Student),
            "recruiter" => Some(Role::Recruiter),
            "guest" => Some(Role::Guest),
            _ => None,
        }
    }

    /// Display label for badges and the switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Recruiter => "Recruiter",
            Role::Guest => "Guest",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Guest
    }
}

/// Roles admitted to the student dashboard (`/dashboard/**`).
pub const STUDENT_AREA: &[Role] = &[Role::Student];

/// Roles admitted to the recruiter console (`/recruiter/**`).
pub const RECRUITER_AREA: &[Role] = &[Role::Recruiter];

/// Allow-list membership check. No side effects, no fallthrough rules.
pub fn authorize(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_area_admits_students_only() {
        assert!(authorize(Role::Student, STUDENT_AREA));
        assert!(!authorize(Role::Recruiter, STUDENT_AREA));
        assert!(!authorize(Role::Guest, STUDENT_AREA));
    }

    #[test]
    fn recruiter_area_admits_recruiters_only() {
        assert!(authorize(Role::Recruiter, RECRUITER_AREA));
        assert!(!authorize(Role::Student, RECRUITER_AREA));
        assert!(!authorize(Role::Guest, RECRUITER_AREA));
    }

    #[test]
    fn empty_allow_list_rejects_everyone() {
        for role in [Role::Student, Role::Recruiter, Role::Guest] {
            assert!(!authorize(role, &[]));
        }
    }

    #[test]
    fn tags_round_trip() {
        for role in [Role::Student, Role::Recruiter, Role::Guest] {
            assert_eq!(Role::from_tag(role.tag()), Some(role));
        }
        assert_eq!(Role::from_tag("admin"), None);
    }
}
