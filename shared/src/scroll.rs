//! Back-to-top visibility and in-page anchor resolution.

/// Whether the back-to-top control shows at `offset_px`.
///
/// Strictly greater than: sitting exactly on the threshold keeps it hidden.
pub fn back_to_top_visible(offset_px: f64, threshold_px: f64) -> bool {
    offset_px > threshold_px
}

/// Inline `display` value for the back-to-top control.
pub const fn display_for(visible: bool) -> &'static str {
    if visible {
        "flex"
    } else {
        "none"
    }
}

/// Element id targeted by a same-page anchor `href`.
///
/// Only `#fragment` hrefs with a non-empty fragment qualify; the fragment is
/// percent-decoded so `#%E7%AE%80%E4%BB%8B` finds `id="简介"`.
pub fn anchor_target_id(href: Option<&str>) -> Option<String> {
    let fragment = href?.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    let id = match urlencoding::decode(fragment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => fragment.to_string(),
    };
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strictly_greater_than() {
        assert!(!back_to_top_visible(0.0, 300.0));
        assert!(!back_to_top_visible(299.0, 300.0));
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(back_to_top_visible(300.5, 300.0));
        assert!(back_to_top_visible(1200.0, 300.0));
    }

    #[test]
    fn display_values() {
        assert_eq!(display_for(true), "flex");
        assert_eq!(display_for(false), "none");
    }

    #[test]
    fn bare_hash_and_external_links_are_ignored() {
        assert_eq!(anchor_target_id(None), None);
        assert_eq!(anchor_target_id(Some("#")), None);
        assert_eq!(anchor_target_id(Some("/posts/hello#intro")), None);
        assert_eq!(anchor_target_id(Some("https://example.com/#top")), None);
    }

    #[test]
    fn resolves_plain_and_encoded_fragments() {
        assert_eq!(anchor_target_id(Some("#intro")).as_deref(), Some("intro"));
        assert_eq!(
            anchor_target_id(Some("#%E7%AE%80%E4%BB%8B")).as_deref(),
            Some("简介")
        );
        assert_eq!(anchor_target_id(Some("#1-setup")).as_deref(), Some("1-setup"));
    }
}
