//! # Fallback Image Resolution
//!
//! The image used when an editor has not chosen one: the item's own
//! thumbnail, then the site logo, then the site icon.

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Returns the first non-empty candidate in priority order, or `None` when
/// all three are absent or empty.
pub fn resolve_fallback_image(
    item_thumbnail_url: Option<&str>,
    site_logo_url: Option<&str>,
    site_icon_url: Option<&str>,
) -> Option<String> {
    non_empty(item_thumbnail_url)
        .or_else(|| non_empty(site_logo_url))
        .or_else(|| non_empty(site_icon_url))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn thumbnail_wins_over_logo_and_icon() {
        let image = resolve_fallback_image(Some("thumb.png"), Some("logo.png"), Some("icon.png"));
        assert_eq!(image.as_deref(), Some("thumb.png"));
    }

    #[test]
    fn empty_candidates_are_skipped() {
        let image = resolve_fallback_image(Some(""), Some(""), Some("icon.png"));
        assert_eq!(image.as_deref(), Some("icon.png"));
        let image = resolve_fallback_image(None, Some("logo.png"), None);
        assert_eq!(image.as_deref(), Some("logo.png"));
    }

    #[test]
    fn nothing_resolves_to_none() {
        assert_eq!(resolve_fallback_image(None, Some(""), None), None);
    }

    fn candidate() -> impl Strategy<Value = Option<String>> {
        proptest::option::of("(|[a-z]{1,6}\\.png)")
    }

    proptest! {
        #[test]
        fn first_non_empty_candidate_wins(thumb in candidate(), logo in candidate(), icon in candidate()) {
            let expected = [&thumb, &logo, &icon]
                .into_iter()
                .flatten()
                .find(|url| !url.is_empty())
                .cloned();

            let resolved = resolve_fallback_image(thumb.as_deref(), logo.as_deref(), icon.as_deref());

            prop_assert_eq!(resolved.is_none(), expected.is_none());
            prop_assert_eq!(resolved, expected);
        }
    }
}
