use serde::{Deserialize, Serialize};

use super::tagged::{SampleError, TaggedSample};

/// What a [`SampleStream`] does with a line that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Drop the line, count it, and keep reading.
    Skip,
    /// Yield the error and end the stream.
    #[default]
    Fail,
}

/// Turns encoded sentences, one per item, into [`TaggedSample`]s.
///
/// The stream does no I/O itself; callers hand it lines from wherever the
/// corpus lives.
pub struct SampleStream<I> {
    lines: I,
    policy: MalformedPolicy,
    line_number: usize,
    skipped: usize,
    done: bool,
}

impl<I, S> SampleStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I, policy: MalformedPolicy) -> Self {
        Self {
            lines,
            policy,
            line_number: 0,
            skipped: 0,
            done: false,
        }
    }

    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Lines dropped so far under [`MalformedPolicy::Skip`].
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<I, S> Iterator for SampleStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<TaggedSample, SampleError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_number += 1;

            match TaggedSample::parse(line.as_ref()) {
                Ok(sample) => return Some(Ok(sample)),
                Err(err) => match self.policy {
                    MalformedPolicy::Skip => {
                        self.skipped += 1;
                        tracing::warn!(
                            line = self.line_number,
                            error = %err,
                            "Skipping malformed tagged sentence"
                        );
                    }
                    MalformedPolicy::Fail => {
                        self.done = true;
                        tracing::debug!(
                            line = self.line_number,
                            "Stopping at malformed tagged sentence"
                        );
                        return Some(Err(err));
                    }
                },
            }
        }

        self.done = true;
        None
    }
}

impl<I, S> std::iter::FusedIterator for SampleStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}
