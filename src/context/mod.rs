pub mod basic;
pub mod generator;

pub use basic::{BasicContextGenerator, GeneratorConfig, DEFAULT_SEPARATOR};
pub use generator::{ContextError, ContextGenerator};
