//! Recruiter console shells, one placeholder panel per route.

use dioxus::prelude::*;

use crate::components::PlaceholderPanel;

#[component]
pub fn RecruiterOverview() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Recruiter console",
            note: "Hiring overview and shortcuts will go here.",
        }
    }
}

#[component]
pub fn RecruiterJobs() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Job listings",
            note: "Your posted roles will go here.",
        }
    }
}

#[component]
pub fn RecruiterJobCreate() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Post a job",
            note: "The job composer will go here.",
        }
    }
}

#[component]
pub fn RecruiterJobEdit(id: String) -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Edit job {id}",
            note: "Listing edits will go here.",
        }
    }
}

#[component]
pub fn RecruiterCandidates() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Candidates",
            note: "The candidate pipeline will go here.",
        }
    }
}

#[component]
pub fn RecruiterInterviews() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Interviews",
            note: "Interview scheduling will go here.",
        }
    }
}

#[component]
pub fn RecruiterAnalytics() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Analytics",
            note: "Hiring analytics will go here.",
        }
    }
}

#[component]
pub fn RecruiterCompany() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Company",
            note: "Company profile management will go here.",
        }
    }
}

#[component]
pub fn RecruiterSettings() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Settings",
            note: "Settings will go here.",
        }
    }
}
