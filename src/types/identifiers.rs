use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of a tagged sample.
///
/// Every token and tag is fed to the hasher with a length prefix, so two
/// samples share a digest only if they are equal, including samples whose
/// text encoding would be ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleDigest(String);

impl SampleDigest {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut hasher = Sha256::new();

        for (token, tag) in pairs {
            update_field(&mut hasher, token);
            update_field(&mut hasher, tag);
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SampleDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn update_field(hasher: &mut Sha256, field: &str) {
    hasher.update((field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}
