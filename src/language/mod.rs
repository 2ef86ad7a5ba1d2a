pub mod core;
pub mod syllables;

// Re-export the main types for convenience
pub use self::core::{FamiliarWordList, BUNDLED_LIST};
pub use syllables::count_syllables;
