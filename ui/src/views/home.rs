use dioxus::prelude::*;

use crate::components::AnimatedCounter;
use crate::content;
use crate::Hero;

/// Marketing landing page: hero, stats strip, feature grid, testimonials.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page page-home",
            Hero {}

            section { class: "stats",
                div { class: "stats__grid",
                    {content::STATS.iter().map(|stat| {
                        rsx! {
                            div { key: "{stat.label}", class: "stats__item",
                                AnimatedCounter {
                                    target: stat.value,
                                    suffix: stat.suffix.to_string(),
                                }
                                span { class: "stats__label", {stat.label} }
                            }
                        }
                    })}
                }
            }

            section { class: "features",
                h2 { class: "features__title", "Everything between you and your next role" }
                div { class: "features__grid",
                    {content::FEATURES.iter().map(|feature| {
                        rsx! {
                            article { key: "{feature.title}", class: "features__card",
                                span { class: "features__icon", aria_hidden: "true", {feature.icon} }
                                h3 { class: "features__card-title", {feature.title} }
                                p { class: "features__card-detail", {feature.detail} }
                            }
                        }
                    })}
                }
            }

            section { class: "testimonials",
                h2 { class: "testimonials__title", "People who found their match" }
                div { class: "testimonials__grid",
                    {content::TESTIMONIALS.iter().map(|entry| {
                        rsx! {
                            figure { key: "{entry.name}", class: "testimonials__card",
                                blockquote { class: "testimonials__quote", "“{entry.quote}”" }
                                figcaption { class: "testimonials__who",
                                    span { class: "testimonials__name", {entry.name} }
                                    span { class: "testimonials__role", {entry.role} }
                                }
                            }
                        }
                    })}
                }
            }

            section { class: "cta",
                h2 { class: "cta__title", "Ready when you are" }
                a { class: "button button--primary", href: "/auth", {content::HERO_PRIMARY_CTA} }
            }

            footer { class: "footer",
                p { {content::FOOTER_NOTE} }
            }
        }
    }
}
