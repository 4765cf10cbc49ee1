//! Upload payload boundary
//!
//! Client uploaders submit batches of discovered paths as
//! `{"Entries": ["path", ...]}`. That schema is consumed here, not
//! defined here; transport and storage belong to outer services.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SqPathError;
use crate::key::PathKey;

/// A batch of game paths submitted for key resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadBatch {
    /// Ordered list of path strings
    #[serde(rename = "Entries")]
    pub entries: Vec<String>,
}

impl UploadBatch {
    /// Decode a batch from its JSON wire form
    ///
    /// The `Entries` field is required; anything else in the payload is
    /// ignored.
    pub fn from_json(content: &str) -> Result<Self, SqPathError> {
        let batch: Self = serde_json::from_str(content)?;
        debug!(entries = batch.entries.len(), "decoded upload batch");
        Ok(batch)
    }

    /// Encode the batch back to its JSON wire form
    pub fn to_json(&self) -> Result<String, SqPathError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Resolve every entry to a complete lookup key
    ///
    /// Fails on the first malformed entry; there is no partial result.
    pub fn keys(&self) -> Result<Vec<PathKey>, SqPathError> {
        self.entries
            .iter()
            .map(|path| {
                let key = PathKey::compute(path)?;
                trace!(%path, %key, "resolved path key");
                Ok(key)
            })
            .collect()
    }
}
