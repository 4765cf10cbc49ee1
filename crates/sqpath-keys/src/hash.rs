//! Checksum lookup keys for archive paths
//!
//! The archive indexes files by CRC-32 of the lowercased folder and file
//! name components, split at the last `/`. A second, case-preserving
//! CRC-32 over the whole path serves the full-path index, and a CRC-64
//! "extended" hash covers arbitrary ASCII text.
//!
//! The checksum parameters are fixed by the archive format:
//! CRC-32/JAMCRC (the bitwise NOT of the common IEEE CRC-32) for the
//! 32-bit keys and CRC-64/ECMA-182 for the extended hash. Both come from
//! the `crc` crate; neither is reimplemented here.

use std::fmt;

use crc::{CRC_32_JAMCRC, CRC_64_ECMA_182, Crc};

use crate::error::SqPathError;

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_JAMCRC);
const CRC64: Crc<u64> = Crc::<u64>::new(&CRC_64_ECMA_182);

/// The three checksums the archive keys a path under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathHashes {
    /// CRC-32 of the lowercased folder component
    pub folder: u32,
    /// CRC-32 of the lowercased file component
    pub file: u32,
    /// CRC-32 of the full path with its original case
    pub full: u32,
}

impl fmt::Display for PathHashes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}:{:08x}:{:08x}", self.folder, self.file, self.full)
    }
}

/// CRC-32 over the exact bytes of the path, no case transformation
///
/// This is the case-sensitive full-path key; the folder/file keys from
/// [`split_hashes`] are case-normalized instead.
pub fn full_hash(path: &str) -> u32 {
    CRC32.checksum(path.as_bytes())
}

/// Folder and file hashes for a path
///
/// The path is ASCII-lowercased (locale rules never apply) and split at
/// the LAST `/`; each side is hashed independently. A path without a
/// separator has no folder component and is rejected.
///
/// # Examples
///
/// ```
/// use sqpath_keys::split_hashes;
///
/// let (folder, file) = split_hashes("exd/root.exl")?;
/// assert_eq!(folder, 0xE39B7999);
/// assert_eq!(file, 0x51B57EBC);
/// # Ok::<(), sqpath_keys::SqPathError>(())
/// ```
pub fn split_hashes(path: &str) -> Result<(u32, u32), SqPathError> {
    let lower = path.to_ascii_lowercase();
    let split = lower
        .rfind('/')
        .ok_or_else(|| SqPathError::InvalidPath(path.to_string()))?;

    let folder = &lower[..split];
    let file = &lower[split + 1..];

    Ok((
        CRC32.checksum(folder.as_bytes()),
        CRC32.checksum(file.as_bytes()),
    ))
}

/// All three path checksums
///
/// Folder and file hashes are computed on the lowercased path, the full
/// hash on the original case. The asymmetry is deliberate: the archive's
/// folder/file indices are case-normalized while the full-path index is
/// not.
pub fn all_hashes(path: &str) -> Result<PathHashes, SqPathError> {
    let (folder, file) = split_hashes(path)?;
    Ok(PathHashes {
        folder,
        file,
        full: full_hash(path),
    })
}

/// CRC-64 extended hash over ASCII text, case preserved
///
/// The checksum's big-endian byte serialization is re-read as a
/// little-endian integer, matching the reference byte order exactly.
/// Non-ASCII input is rejected rather than silently transcoded.
pub fn extended_hash(text: &str) -> Result<u64, SqPathError> {
    let digest = CRC64.checksum(ascii_bytes(text)?);
    Ok(u64::from_le_bytes(digest.to_be_bytes()))
}

/// CRC-64 extended hash over ASCII-lowercased text
pub fn extended_hash_lower(text: &str) -> Result<u64, SqPathError> {
    extended_hash(&text.to_ascii_lowercase())
}

fn ascii_bytes(text: &str) -> Result<&[u8], SqPathError> {
    if text.is_ascii() {
        Ok(text.as_bytes())
    } else {
        Err(SqPathError::NonAsciiInput(text.to_string()))
    }
}
