use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("Type mismatch: expected {expected}")]
    TypeMismatch { expected: &'static str },

    #[error("Context separator must not be empty")]
    EmptySeparator,
}

/// Produces the contextual predicates a classifier sees for one input.
///
/// `I` is the input representation an implementation understands; a
/// generator accepting several representations implements the trait once for
/// each. Predicates come back in the order they were produced and may repeat.
pub trait ContextGenerator<I: ?Sized> {
    fn context(&self, input: &I) -> Result<Vec<String>, ContextError>;
}

impl<I: ?Sized, G: ContextGenerator<I> + ?Sized> ContextGenerator<I> for &G {
    fn context(&self, input: &I) -> Result<Vec<String>, ContextError> {
        (**self).context(input)
    }
}
