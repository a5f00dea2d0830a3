//! # Webmaster Verification Tags
//!
//! Turns the SEO plugin's option bag into `name` meta tags for the webmaster
//! tools it knows about.

use crate::types::MetaTag;

/// Maps SEO plugin option names to the verification tag each one renders.
pub const VERIFICATION_SERVICES: [(&str, &str); 4] = [
    ("alexaverify", "alexaVerifyID"),
    ("googleverify", "google-site-verification"),
    ("msverify", "msvalidate.01"),
    ("yandexverify", "yandex-verification"),
];

const VERIFY_MARKER: &str = "verify";

/// Selects configured verification tokens from `raw_options`.
///
/// An option becomes a tag when its key is one of the known verification
/// options and its value is non-empty. Output order follows the iteration
/// order of `raw_options`.
pub fn collect_verification_tags<I, K, V>(raw_options: I) -> Vec<MetaTag>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    raw_options
        .into_iter()
        .filter_map(|(key, value)| {
            let (key, value) = (key.as_ref(), value.as_ref());
            if !key.contains(VERIFY_MARKER) || value.is_empty() {
                return None;
            }
            service_tag_name(key).map(|tag_name| MetaTag::name(tag_name, value))
        })
        .collect()
}

fn service_tag_name(option_key: &str) -> Option<&'static str> {
    VERIFICATION_SERVICES
        .iter()
        .find(|(key, _)| *key == option_key)
        .map(|(_, tag_name)| *tag_name)
}
