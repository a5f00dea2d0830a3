//! # Shared Constants
//!
//! Fixed strings and limits used by the resolvers. Keeping them here avoids
//! "magic strings" spread across the resolver and presenter code.

/// Maximum number of characters in a derived description.
pub const DESCRIPTION_CHAR_LIMIT: usize = 160;

/// Twitter card type used when the social settings do not configure one.
pub const DEFAULT_TWITTER_CARD: &str = "summary";

/// `og:type` for a single post.
pub const POST_OG_TYPE: &str = "article";

/// `og:type` and `twitter:card` for a collection page.
pub const COLLECTION_OG_TYPE: &str = "summary";

/// Identifier of the built-in blog post type.
pub const BLOG_POST_TYPE: &str = "post";

/// Label used for the built-in post type's collection page.
pub const BLOG_COLLECTION_LABEL: &str = "Blog";

/// Name of the REST field carrying a `MetadataResult`.
pub const META_FIELD_NAME: &str = "meta";

/// Hook point names, used in log output.
pub const HOOK_POST_OG_IMAGE: &str = "metadata_post_og_image";
pub const HOOK_POST_TWITTER_IMAGE: &str = "metadata_post_twitter_image";
pub const HOOK_COLLECTION_TITLE: &str = "metadata_collection_title";
