//=========================================================================
// Core Helpers
//=========================================================================
//
// Platform-independent helpers. Every function here is pure apart from
// the observer fan-out in `observable`.
//
// Modules:
// - `numeric`: square, clamp, range checks
// - `geometry`: axis-aligned rectangles and their union
// - `callback`: argument-discarding callback adapters
// - `contracts`: single-method behavioral traits
// - `observable`: value holder that drives `ChangeObserver`s
// - `error`: precondition errors
//
//=========================================================================

//=== Module Declarations =================================================

pub mod callback;
pub mod contracts;
pub mod error;
pub mod geometry;
pub mod numeric;
pub mod observable;

//=== Public API ==========================================================

pub use callback::{ignore_arg, try_ignore_arg};
pub use contracts::{BinaryFloatOperation, ChangeObserver};
pub use error::UtilError;
pub use geometry::{union, union_all, Rect};
pub use numeric::{between, clamp, clamp_strict, square};
pub use observable::{ObservableValue, ObserverId};
