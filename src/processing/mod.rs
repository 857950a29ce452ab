pub mod dates;
pub mod extractors;
pub mod patterns;

pub use dates::DateDisambiguator;
pub use extractors::FieldMatcher;
