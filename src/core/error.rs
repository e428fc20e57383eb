//=========================================================================
// Utility Errors
//=========================================================================
//
// Precondition failures reported by the helper functions.
//
// Windowing failures are NOT wrapped here - they surface as the window's
// own associated error type (see `platform::window`).
//
//=========================================================================

//=== UtilError ===========================================================

/// Precondition violations detected at the call site.
///
/// Returned synchronously before any work is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// Range bounds were given as `min > max`.
    ///
    /// Bounds are carried pre-formatted so the error stays independent of
    /// the numeric type that produced it.
    InvertedRange { min: String, max: String },

    /// An optional supplier was absent when building a callback.
    MissingSupplier,
}

impl UtilError {
    pub(crate) fn inverted_range<T: std::fmt::Debug>(min: T, max: T) -> Self {
        Self::InvertedRange {
            min: format!("{:?}", min),
            max: format!("{:?}", max),
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for UtilError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedRange { min, max } => {
                write!(f, "Inverted range: min {} is greater than max {}", min, max)
            }
            Self::MissingSupplier => write!(f, "Supplier function is required"),
        }
    }
}

impl std::error::Error for UtilError {}

//=========================================================================
// Unit Tests
//=========================================================================
