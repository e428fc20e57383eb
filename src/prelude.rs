//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use sketch_utils::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Numeric helpers
pub use crate::core::numeric::{between, clamp, clamp_strict, square};

// Geometry
pub use crate::core::geometry::{union, union_all, Rect};

// Callbacks and contracts
pub use crate::core::callback::{ignore_arg, try_ignore_arg};
pub use crate::core::contracts::{BinaryFloatOperation, ChangeObserver};
pub use crate::core::observable::{ObservableValue, ObserverId};

// Window helpers
pub use crate::platform::{toggle_fullscreen, FullscreenWindow};

// Errors
pub use crate::core::error::UtilError;
