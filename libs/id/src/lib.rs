//! # wms-id
//!
//! Label identifiers and location keys for warehouse management.
//!
//! ## Design Principles
//!
//! - Identifiers have exactly one canonical string form
//! - Equality, ordering and hashing work on the canonical string
//! - Normalization is a pure function of the input and a [`PaddingPolicy`]
//! - Each identifier type has its own process-wide policy, read as a snapshot
//!
//! ## Normalization
//!
//! A fixed-width identifier is padded to the configured length with a fill
//! character. Right alignment puts the padding in front of the content, left
//! alignment after it. Inputs already at or over the width pass through
//! unchanged; nothing is truncated.
//!
//! With the default policy (length 20, padder `'0'`, right-aligned):
//! - `TEST` becomes `0000000000000000TEST`
//! - `A123456789A123456789XY` stays as it is
//!
//! ## Location keys
//!
//! [`LocationPk`] addresses a storage location as `AREA/AISLE/X/Y/Z`.

mod cell;
mod config;
pub mod convert;
mod error;
mod fixed_width;
pub mod location;
mod macros;
mod policy;
mod types;

pub use cell::PolicyCell;
pub use config::ENV_PREFIX;
pub use error::IdError;
pub use fixed_width::FixedWidth;
pub use location::LocationPk;
pub use policy::{Alignment, PaddingPolicy, DEFAULT_LENGTH, DEFAULT_PAD_CHAR, MAX_LENGTH};
pub use types::*;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
