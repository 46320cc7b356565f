//! Student dashboard shells. Each page is a placeholder panel until the
//! matching backing service ships.

use dioxus::prelude::*;

use crate::components::PlaceholderPanel;

#[component]
pub fn DashboardHome() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Dashboard",
            note: "Your applications, saved roles, and recommendations will go here.",
        }
    }
}

#[component]
pub fn DashboardProfile() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Profile",
            note: "Profile editing will go here.",
        }
    }
}

#[component]
pub fn DashboardJobs() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Jobs",
            note: "Job search and applications will go here.",
        }
    }
}

#[component]
pub fn DashboardSettings() -> Element {
    rsx! {
        PlaceholderPanel {
            title: "Settings",
            note: "Settings will go here.",
        }
    }
}
