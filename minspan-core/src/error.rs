//! Error types for the minspan core library.
//!
//! Defines the error enum exposed by the public API, its stable codes and a
//! convenient result alias.

use std::{collections::TryReserveError, fmt};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while computing a minimum spanning tree.
///
/// Fewer than two points is not an error: the builders report it as
/// `Ok(None)`.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MinSpanError {
    /// The interleaved coordinate buffer holds fewer than `2 * point_count`
    /// values.
    #[error("{point_count} points need {expected} coordinates but only {got} were given")]
    CoordinatesTooShort {
        /// Number of points the caller declared.
        point_count: usize,
        /// Number of coordinates required for `point_count` points.
        expected: usize,
        /// Number of coordinates supplied.
        got: usize,
    },
    /// A working or output buffer could not be allocated.
    #[error("failed to allocate {requested} slots for the {buffer} buffer")]
    AllocationFailed {
        /// Name of the buffer that could not be reserved.
        buffer: &'static str,
        /// Number of elements requested.
        requested: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("MST invariant violated in round {round}: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Zero-based selection round in which the violation was detected.
        round: usize,
    },
}

impl MinSpanError {
    pub(crate) fn allocation(
        buffer: &'static str,
        requested: usize,
    ) -> impl FnOnce(TryReserveError) -> Self {
        move |_| Self::AllocationFailed { buffer, requested }
    }
}

define_error_codes! {
    /// Stable codes describing [`MinSpanError`] variants.
    enum MinSpanErrorCode for MinSpanError {
        /// The interleaved coordinate buffer was too short.
        CoordinatesTooShort => CoordinatesTooShort { .. } => "COORDINATES_TOO_SHORT",
        /// A buffer could not be allocated.
        AllocationFailed => AllocationFailed { .. } => "ALLOCATION_FAILED",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "INVARIANT_VIOLATION",
    }
}

/// Convenient result alias for minspan operations.
pub type Result<T> = core::result::Result<T, MinSpanError>;
