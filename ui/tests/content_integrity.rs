//! Sanity checks over the compiled-in marketing content. These arrays are
//! the closest thing the app has to configuration; a stray empty string or
//! duplicated key would only surface visually at runtime otherwise.

use ui::content;

#[test]
fn feature_grid_is_populated_and_unique() {
    assert!(!content::FEATURES.is_empty());
    for feature in content::FEATURES {
        assert!(!feature.title.trim().is_empty());
        assert!(!feature.detail.trim().is_empty());
        assert!(!feature.icon.trim().is_empty());
    }

    let mut titles: Vec<_> = content::FEATURES.iter().map(|f| f.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(
        titles.len(),
        content::FEATURES.len(),
        "feature titles double as render keys and must be unique"
    );
}

#[test]
fn testimonials_are_fully_attributed() {
    assert!(!content::TESTIMONIALS.is_empty());
    for entry in content::TESTIMONIALS {
        assert!(!entry.quote.trim().is_empty());
        assert!(!entry.name.trim().is_empty());
        assert!(!entry.role.trim().is_empty());
    }
}

#[test]
fn stats_have_labels_and_positive_targets() {
    assert!(!content::STATS.is_empty());
    for stat in content::STATS {
        assert!(!stat.label.trim().is_empty());
        assert!(stat.value > 0, "a zero stat would render as a frozen 0");
    }

    let mut labels: Vec<_> = content::STATS.iter().map(|s| s.label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), content::STATS.len());
}

#[test]
fn brand_copy_present() {
    for text in [
        content::BRAND,
        content::TAGLINE,
        content::HERO_HEADLINE,
        content::HERO_SUBLINE,
        content::HERO_PRIMARY_CTA,
        content::HERO_SECONDARY_CTA,
        content::FOOTER_NOTE,
    ] {
        assert!(!text.trim().is_empty());
    }
}
