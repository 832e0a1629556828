//! Bridge-specific error types.

use std::error::Error;
use std::fmt;

use tether_arena::ArenaError;

/// Errors that can occur while constructing bindings or extracting values.
///
/// Invariant violations (duplicate cache insert, delete of a missing
/// entry, stale entries) are deliberately *not* represented here: they
/// panic, because continuing with a broken identity invariant risks
/// handing out duplicate wrappers for one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BridgeError {
    /// Arena allocation failed while constructing a binding.
    Allocation(ArenaError),
    /// A host value was neither text nor bytes.
    UnsupportedValue,
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(err) => write!(f, "binding allocation failed: {err}"),
            Self::UnsupportedValue => write!(f, "host value is neither text nor bytes"),
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
            Self::UnsupportedValue => None,
        }
    }
}

impl From<ArenaError> for BridgeError {
    fn from(err: ArenaError) -> Self {
        Self::Allocation(err)
    }
}
