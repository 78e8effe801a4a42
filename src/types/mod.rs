pub mod identifiers;

pub use identifiers::SampleDigest;
