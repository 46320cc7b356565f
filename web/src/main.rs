use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::auth::{authorize, Role, RECRUITER_AREA, STUDENT_AREA};
use ui::views::{
    Auth, DashboardHome, DashboardJobs, DashboardProfile, DashboardSettings, Home,
    RecruiterAnalytics, RecruiterCandidates, RecruiterCompany, RecruiterInterviews,
    RecruiterJobCreate, RecruiterJobEdit, RecruiterJobs, RecruiterOverview, RecruiterSettings,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
        #[route("/")]
        Home {},
        #[route("/auth")]
        Auth {},
        #[nest("/dashboard")]
            #[layout(StudentGate)]
                #[route("/")]
                DashboardHome {},
                #[route("/profile")]
                DashboardProfile {},
                #[route("/jobs")]
                DashboardJobs {},
                #[route("/settings")]
                DashboardSettings {},
            #[end_layout]
        #[end_nest]
        #[nest("/recruiter")]
            #[layout(RecruiterGate)]
                #[route("/")]
                RecruiterOverview {},
                #[route("/jobs")]
                RecruiterJobs {},
                #[route("/jobs/create")]
                RecruiterJobCreate {},
                #[route("/jobs/:id/edit")]
                RecruiterJobEdit { id: String },
                #[route("/candidates")]
                RecruiterCandidates {},
                #[route("/interviews")]
                RecruiterInterviews {},
                #[route("/analytics")]
                RecruiterAnalytics {},
                #[route("/company")]
                RecruiterCompany {},
                #[route("/settings")]
                RecruiterSettings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_auth(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Auth {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::DashboardHome {},
        "{label}"
    })
}
fn nav_recruiter(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::RecruiterOverview {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The auth service is an external collaborator; until it exists the app
    // owns a plain role signal that /auth can flip for demo purposes.
    use_context_provider(|| Signal::new(Role::Guest));

    register_nav(NavBuilder {
        home: nav_home,
        auth: nav_auth,
        dashboard: nav_dashboard,
        recruiter: nav_recruiter,
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout wrapping every page with the shared `AppNavbar`,
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}

/// Role gates are placeholders over the injected role signal: render the
/// nested routes when the allow-list admits the current role, otherwise an
/// access notice. No redirects, no session machinery.
fn gate(area_label: &str, allowed: &[Role]) -> Result<bool, Role> {
    let role = try_use_context::<Signal<Role>>()
        .map(|r| r())
        .unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        println!(
            "[auth] {area_label} gate role={} admitted={}",
            role.tag(),
            authorize(role, allowed)
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = area_label;

    if authorize(role, allowed) {
        Ok(true)
    } else {
        Err(role)
    }
}

#[component]
fn StudentGate() -> Element {
    match gate("student", STUDENT_AREA) {
        Ok(_) => rsx! { Outlet::<Route> {} },
        Err(role) => rsx! {
            AccessNotice { area: "student dashboard", role }
        },
    }
}

#[component]
fn RecruiterGate() -> Element {
    match gate("recruiter", RECRUITER_AREA) {
        Ok(_) => rsx! { Outlet::<Route> {} },
        Err(role) => rsx! {
            AccessNotice { area: "recruiter console", role }
        },
    }
}

#[component]
fn AccessNotice(area: &'static str, role: Role) -> Element {
    rsx! {
        section { class: "panel panel--denied",
            h2 { class: "panel__title", "No access to the {area}" }
            p { class: "panel__note",
                "You are browsing as {role.label()}. Sign in with the right account to continue."
            }
            Link { class: "button button--primary", to: Route::Auth {}, "Go to sign in" }
        }
    }
}
