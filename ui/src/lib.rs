//! Shared UI crate for HireHUB. Cross-platform components, pure core logic,
//! and static content live here; the route table stays in the platform crate.

pub mod content;
pub mod core;
pub mod views;

pub mod components {
    // Animated stat counter (components/animated_counter.rs)
    pub mod animated_counter;
    pub use animated_counter::AnimatedCounter;

    // Application navbar with platform-injected links (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Placeholder panel for unbuilt dashboard pages (components/placeholder.rs)
    pub mod placeholder;
    pub use placeholder::PlaceholderPanel;

    // Window scroll subscription hook (components/scroll_watch.rs)
    pub mod scroll_watch;
    pub use scroll_watch::use_scroll_flag;
}

mod hero;
pub use hero::Hero;
