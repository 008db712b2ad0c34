//! Deferred image loading decisions.

/// Attribute holding an image's real source until it is loaded.
pub const DEFERRED_SRC_ATTR: &str = "data-src";

/// Class added once the real source is in place.
pub const LOADED_CLASS: &str = "loaded";

/// How deferred images get their source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Nothing to do.
    Skip,
    /// Wait for each image to intersect the viewport.
    Observe,
    /// No observer available: load everything now.
    Eager,
}

impl LoadStrategy {
    /// Pick a strategy from the image count and observer support.
    pub fn choose(pending_images: usize, observer_supported: bool) -> Self {
        match (pending_images, observer_supported) {
            (0, _) => Self::Skip,
            (_, true) => Self::Observe,
            (_, false) => Self::Eager,
        }
    }
}

/// Source to promote, ignoring blank deferred attributes.
pub fn promotable_source(deferred: Option<String>) -> Option<String> {
    deferred.filter(|src| !src.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_degrades_without_observer() {
        assert_eq!(LoadStrategy::choose(0, true), LoadStrategy::Skip);
        assert_eq!(LoadStrategy::choose(0, false), LoadStrategy::Skip);
        assert_eq!(LoadStrategy::choose(3, true), LoadStrategy::Observe);
        assert_eq!(LoadStrategy::choose(3, false), LoadStrategy::Eager);
    }

    #[test]
    fn blank_sources_are_not_promoted() {
        assert_eq!(promotable_source(None), None);
        assert_eq!(promotable_source(Some("  ".into())), None);
        assert_eq!(
            promotable_source(Some("/images/cover.webp".into())).as_deref(),
            Some("/images/cover.webp")
        );
    }
}
