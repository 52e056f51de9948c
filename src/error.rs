//! Defines [`GeomError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeomError {
    /// The caller passed data that does not satisfy the documented contract, such as an ordinate
    /// count that does not match the layout stride or ring ends that fall outside the flat
    /// coordinate sequence.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested ordinate combination has no [`Layout`][crate::Layout].
    #[error("Unsupported layout: {0}")]
    UnsupportedLayout(String),
}

/// Crate-specific result type.
pub type GeomResult<T> = std::result::Result<T, GeomError>;
