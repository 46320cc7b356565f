use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::scroll_watch::use_scroll_flag;
use crate::content;

// Navbar stylesheet (expanded + compact pill presentation)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
/// Each closure receives the label and returns a link that already contains
/// it as its child, preserving styling.
///
/// If no builder is registered, `AppNavbar` falls back to any raw `children`
/// passed by the caller.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub auth: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
    pub recruiter: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    // Scroll subscription lives and dies with this component.
    let compact = use_scroll_flag();
    let shell_class = if compact() {
        "navbar navbar--compact"
    } else {
        "navbar"
    };

    #[cfg(debug_assertions)]
    {
        println!("[scroll] AppNavbar render compact={}", compact());
    }

    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)("Home");
        let dashboard = (b.dashboard)("My dashboard");
        let recruiter = (b.recruiter)("For recruiters");
        let auth = (b.auth)("Sign in");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {dashboard}
                {recruiter}
                {auth}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "{shell_class}",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", {content::BRAND} }
                    }
                    span { class: "navbar__brand-subtitle", {content::TAGLINE} }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
