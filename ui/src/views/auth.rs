use dioxus::prelude::*;

use crate::core::auth::Role;

/// Placeholder sign-in page. Real authentication lives in an external
/// service; until that lands, the role switcher below writes the
/// platform-provided `Signal<Role>` so the dashboard gates can be exercised.
#[component]
pub fn Auth() -> Element {
    let role_ctx: Option<Signal<Role>> = try_use_context::<Signal<Role>>();
    let current = role_ctx.as_ref().map(|r| r()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        if let Some(role) = Role::from_tag(&evt.value()) {
            if let Some(mut ctx) = role_ctx {
                ctx.set(role);
                #[cfg(debug_assertions)]
                println!("[auth] role switched to {}", role.tag());
            }
        }
    };

    rsx! {
        section { class: "page page-auth",
            div { class: "auth-card",
                h1 { class: "auth-card__title", "Sign in" }
                p { class: "auth-card__note",
                    "Account sign-in will go here once the authentication service is wired up."
                }

                div { class: "auth-card__switcher",
                    label {
                        class: "auth-card__switcher-label",
                        r#for: "role-select",
                        "Browse as"
                    }
                    select {
                        id: "role-select",
                        value: "{current.tag()}",
                        oninput: on_change,
                        {[Role::Guest, Role::Student, Role::Recruiter].iter().map(|role| {
                            let tag = role.tag();
                            rsx! {
                                option { key: "{tag}", value: "{tag}", {role.label()} }
                            }
                        })}
                    }
                }
            }
        }
    }
}
