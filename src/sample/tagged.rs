use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::SampleDigest;

/// Separates a token from its tag inside a pair.
pub const TAG_DELIMITER: char = '_';

/// Separates pairs inside an encoded sentence.
pub const PAIR_SEPARATOR: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("Invalid format: pair {index} ({pair:?}) has no '_' tag delimiter")]
    InvalidFormat { index: usize, pair: String },

    #[error("Token and tag counts differ: {tokens} tokens, {tags} tags")]
    LengthMismatch { tokens: usize, tags: usize },
}

/// A sentence with one part-of-speech tag per token.
///
/// Tokens and tags are parallel sequences of equal length; `tags()[i]` is the
/// tag of `tokens()[i]`. Values are immutable once built and compare
/// structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "SampleParts")]
pub struct TaggedSample {
    tokens: Vec<String>,
    tags: Vec<String>,
}

/// Wire shape used to route deserialization through [`TaggedSample::new`].
#[derive(Deserialize)]
struct SampleParts {
    tokens: Vec<String>,
    tags: Vec<String>,
}

impl TryFrom<SampleParts> for TaggedSample {
    type Error = SampleError;

    fn try_from(parts: SampleParts) -> Result<Self, Self::Error> {
        TaggedSample::new(parts.tokens, parts.tags)
    }
}

impl TaggedSample {
    pub fn new(tokens: Vec<String>, tags: Vec<String>) -> Result<Self, SampleError> {
        if tokens.len() != tags.len() {
            return Err(SampleError::LengthMismatch {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }

        Ok(Self { tokens, tags })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the `token_tag token_tag ...` encoding.
    ///
    /// Pairs are separated by single spaces and split on their *last* `_`,
    /// so tokens may contain `_` while tags may not. Empty tokens and empty
    /// tags are accepted; a pair without any `_` is rejected, which also
    /// covers the empty pairs produced by doubled or trailing spaces. The
    /// empty string is the empty sentence.
    pub fn parse(text: &str) -> Result<Self, SampleError> {
        if text.is_empty() {
            return Ok(Self::empty());
        }

        let mut tokens = Vec::new();
        let mut tags = Vec::new();

        for (index, pair) in text.split(PAIR_SEPARATOR).enumerate() {
            let (token, tag) = pair
                .rsplit_once(TAG_DELIMITER)
                .ok_or_else(|| SampleError::InvalidFormat {
                    index,
                    pair: pair.to_string(),
                })?;

            tokens.push(token.to_string());
            tags.push(tag.to_string());
        }

        Ok(Self { tokens, tags })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate `(token, tag)` pairs in sentence order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tokens
            .iter()
            .zip(&self.tags)
            .map(|(token, tag)| (token.as_str(), tag.as_str()))
    }

    /// Whether rendering this sample and parsing it back yields an equal sample.
    ///
    /// The encoding has no escaping: a space anywhere, or a `_` inside a
    /// tag, cannot survive the trip.
    pub fn is_canonical(&self) -> bool {
        self.tokens.iter().all(|token| !token.contains(PAIR_SEPARATOR))
            && self
                .tags
                .iter()
                .all(|tag| !tag.contains(PAIR_SEPARATOR) && !tag.contains(TAG_DELIMITER))
    }

    pub fn digest(&self) -> SampleDigest {
        SampleDigest::from_pairs(self.pairs())
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.tokens, self.tags)
    }
}

/// Renders the canonical encoding; `to_string()` is the inverse of `parse`.
impl fmt::Display for TaggedSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (token, tag)) in self.pairs().enumerate() {
            if i > 0 {
                write!(f, "{PAIR_SEPARATOR}")?;
            }
            write!(f, "{token}{TAG_DELIMITER}{tag}")?;
        }
        Ok(())
    }
}

impl FromStr for TaggedSample {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
