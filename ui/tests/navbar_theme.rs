//! Ensures the navbar stylesheet stays present and keeps the selectors the
//! compact-mode class switch depends on.
//!
//! The component toggles `navbar`/`navbar--compact` from the scroll flag; if
//! the stylesheet loses those selectors the transform silently degrades at
//! runtime, so this fails the build early instead.

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

#[test]
fn navbar_css_exists_and_is_not_empty() {
    assert!(
        !NAVBAR_CSS.trim().is_empty(),
        "Navbar CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn navbar_css_contains_expected_selectors() {
    let required = [
        ".navbar {",
        ".navbar--compact",
        ".navbar__brand",
        ".navbar__links",
        ".navbar__link",
    ];
    for selector in required {
        assert!(
            NAVBAR_CSS.contains(selector),
            "Expected selector `{selector}` missing from navbar CSS"
        );
    }
}
