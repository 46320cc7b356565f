use dioxus::prelude::*;

use crate::content;

/// Landing-page hero banner. Call-to-action targets are plain hrefs so the
/// shared crate stays ignorant of platform route enums.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero__inner",
                span { class: "hero__badge", {content::TAGLINE} }
                h1 { class: "hero__headline", {content::HERO_HEADLINE} }
                p { class: "hero__subline", {content::HERO_SUBLINE} }
                div { class: "hero__actions",
                    a {
                        class: "button button--primary",
                        href: "/auth",
                        {content::HERO_PRIMARY_CTA}
                    }
                    a {
                        class: "button button--secondary",
                        href: "/recruiter",
                        {content::HERO_SECONDARY_CTA}
                    }
                }
            }
        }
    }
}
