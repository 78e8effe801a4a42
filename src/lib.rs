//! Word/tag sentence encoding and context predicate generation.
//!
//! `postag-core` holds the pieces a maximum-entropy part-of-speech tagger
//! shares with its corpus readers: the [`TaggedSample`](sample::TaggedSample)
//! value type with its canonical `token_tag token_tag ...` text encoding, and
//! the [`ContextGenerator`](context::ContextGenerator) contract that turns an
//! input into the contextual predicates fed to a classifier.
//!
//! Parsing and rendering are exact inverses for canonical text:
//!
//! ```
//! use postag_core::sample::TaggedSample;
//!
//! let text = "the_DT stories_NNS about_IN well-heeled_JJ communities_NNS";
//! let sample = TaggedSample::parse(text).unwrap();
//!
//! assert_eq!(sample.tokens()[3], "well-heeled");
//! assert_eq!(sample.to_string(), text);
//! ```

pub mod context;
pub mod sample;
pub mod types;
