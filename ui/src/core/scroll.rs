//! Scroll-position derivation for the compact navbar.

/// Offset (CSS pixels) past which the navbar collapses into its pill form.
pub const COMPACT_SCROLL_THRESHOLD: f64 = 20.0;

/// Whether a given vertical scroll offset puts the navbar in compact mode.
pub fn is_compact(offset: f64) -> bool {
    offset > COMPACT_SCROLL_THRESHOLD
}

/// Recomputes the compact flag from raw scroll samples and reports only
/// actual transitions, so consumers re-render once per flip rather than once
/// per scroll event.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollSampler {
    compact: bool,
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest scroll offset. Returns `Some(flag)` when the derived
    /// flag changed, `None` when it matches the previous sample.
    pub fn sample(&mut self, offset: f64) -> Option<bool> {
        let next = is_compact(offset);
        if next == self.compact {
            None
        } else {
            self.compact = next;
            Some(next)
        }
    }

    pub fn compact(&self) -> bool {
        self.compact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_tracks_threshold() {
        assert!(!is_compact(0.0));
        assert!(!is_compact(20.0));
        assert!(is_compact(20.5));
        assert!(is_compact(400.0));
    }

    #[test]
    fn offset_sequence_yields_expected_flags() {
        let flags: Vec<bool> = [0.0, 15.0, 25.0, 10.0]
            .iter()
            .map(|s| is_compact(*s))
            .collect();
        assert_eq!(flags, vec![false, false, true, false]);
    }

    #[test]
    fn sampler_reports_transitions_only() {
        let mut sampler = ScrollSampler::new();
        assert_eq!(sampler.sample(0.0), None);
        assert_eq!(sampler.sample(15.0), None);
        assert_eq!(sampler.sample(25.0), Some(true));
        assert_eq!(sampler.sample(120.0), None);
        assert_eq!(sampler.sample(10.0), Some(false));
        assert_eq!(sampler.sample(0.0), None);
    }
}
