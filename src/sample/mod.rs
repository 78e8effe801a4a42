pub mod stream;
pub mod tagged;

pub use stream::{MalformedPolicy, SampleStream};
pub use tagged::{SampleError, TaggedSample, PAIR_SEPARATOR, TAG_DELIMITER};
