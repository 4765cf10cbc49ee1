//! Deterministic lookup keys for SqPack archive paths
//!
//! The packed archive locates file data by numbers derived from a file's
//! virtual path: a packed category code and a set of CRC checksums. This
//! crate computes both, bit-exactly matching the values the archive
//! format expects.
//!
//! # Components
//!
//! - **Categorizer**: [`category_id`] maps a path prefix to its category
//!   number (bits 16-23), with expansion/segment sub-ids for the
//!   background, cutscene and music families.
//! - **Hasher**: [`full_hash`], [`split_hashes`] and [`all_hashes`]
//!   produce the CRC-32 index keys; [`extended_hash`] and
//!   [`extended_hash_lower`] produce the CRC-64 text hash.
//!
//! The two are independent, stateless and safe to call concurrently;
//! [`PathKey`] composes them into one file-location key.
//!
//! # Examples
//!
//! ```
//! use sqpath_keys::{PathKey, category_id};
//!
//! assert_eq!(category_id("bg/ex2/03/field.lgb")?, 0x02_0203);
//!
//! let key = PathKey::compute("exd/root.exl")?;
//! assert_eq!(key.folder_hash, 0xE39B7999);
//! assert_eq!(key.file_hash, 0x51B57EBC);
//! # Ok::<(), sqpath_keys::SqPathError>(())
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod error;
pub mod hash;
pub mod key;
pub mod upload;

pub use error::SqPathError;

// Re-export commonly used types
pub use category::{Category, category_id};
pub use hash::{PathHashes, all_hashes, extended_hash, extended_hash_lower, full_hash, split_hashes};
pub use key::PathKey;
pub use upload::UploadBatch;
