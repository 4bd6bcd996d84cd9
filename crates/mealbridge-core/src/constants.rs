//! Shared constants for the stories feature.

/// Document-store collection holding community stories.
pub const STORIES_COLLECTION: &str = "communityStories";

/// Object-store key prefix for story images.
pub const STORY_IMAGES_PREFIX: &str = "storyImages";

/// Maximum number of new images accepted per selection batch.
/// Extra files in a batch are silently dropped.
pub const MAX_STORY_IMAGES: usize = 3;

/// Minimum story content length in characters.
pub const MIN_STORY_CONTENT_CHARS: usize = 50;

/// Delay between a successful submission and the modal closing, in milliseconds.
pub const SUCCESS_CLOSE_DELAY_MS: u64 = 1500;
