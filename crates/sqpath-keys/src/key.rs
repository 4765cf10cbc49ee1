//! Composite file-location keys
//!
//! A caller locating file data needs the category code and the path
//! checksums together; [`PathKey`] bundles one call's worth of both.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SqPathError;
use crate::{category, hash};

/// Complete lookup key for one archive path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathKey {
    /// Packed category code, base number in bits 16-23
    pub category_id: u32,
    /// CRC-32 of the lowercased folder component
    pub folder_hash: u32,
    /// CRC-32 of the lowercased file component
    pub file_hash: u32,
    /// CRC-32 of the path with its original case
    pub full_hash: u32,
}

impl PathKey {
    /// Compute the full key for a path
    ///
    /// Category matching is byte-literal, so the path is ASCII-lowercased
    /// for that step; the full hash still covers the original case.
    pub fn compute(path: &str) -> Result<Self, SqPathError> {
        let category_id = category::category_id(&path.to_ascii_lowercase())?;
        let hashes = hash::all_hashes(path)?;
        Ok(Self {
            category_id,
            folder_hash: hashes.folder,
            file_hash: hashes.file,
            full_hash: hashes.full,
        })
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:06x}:{:08x}:{:08x}:{:08x}",
            self.category_id, self.folder_hash, self.file_hash, self.full_hash
        )
    }
}
