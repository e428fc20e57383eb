//=========================================================================
// Numeric Helpers
//=========================================================================
//
// Scalar helpers shared by drawing and animation code.
//
// - `square`: x * x for any copyable multiplicative type
// - `clamp`: two-step max/min restriction (inverted ranges yield `max`)
// - `clamp_strict`: `clamp` that rejects inverted ranges
// - `between`: inclusive range test with a checked precondition
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::ops::Mul;

//=== Internal Dependencies ===============================================

use super::error::UtilError;

//=== square ==============================================================

/// Returns `x * x`.
///
/// Same semantics for integers and floats. Integer overflow follows the
/// host type: panics in debug builds, wraps in release builds.
///
/// ```
/// use sketch_utils::prelude::*;
///
/// assert_eq!(square(-3), 9);
/// assert_eq!(square(1.5_f32), 2.25);
/// ```
#[inline]
pub fn square<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}

//=== clamp ===============================================================

/// Restricts `x` to `[min, max]`.
///
/// Computed as `max(min, x)` followed by `min(that, max)`. When the range
/// is inverted (`min > max`) the result is always `max`, whatever `x` is.
/// Use [`clamp_strict`] to reject inverted ranges instead.
///
/// NaN fails every comparison: a NaN `x` yields `min`, a NaN `min`
/// yields `max`, and a NaN `max` yields NaN.
///
/// ```
/// use sketch_utils::prelude::*;
///
/// assert_eq!(clamp(12, 0, 10), 10);
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(3, 10, 0), 0); // inverted range
/// ```
#[inline]
pub fn clamp<T>(x: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy,
{
    let lower = if x > min { x } else { min };
    if lower < max { lower } else { max }
}

/// [`clamp`] with the range checked first.
///
/// # Errors
///
/// Returns [`UtilError::InvertedRange`] if `min > max`.
pub fn clamp_strict<T>(x: T, min: T, max: T) -> Result<T, UtilError>
where
    T: PartialOrd + Copy + Debug,
{
    if min > max {
        return Err(UtilError::inverted_range(min, max));
    }
    Ok(clamp(x, min, max))
}

//=== between =============================================================

/// Returns whether `min <= x <= max`.
///
/// The `min <= max` precondition is checked in every build mode.
///
/// # Errors
///
/// Returns [`UtilError::InvertedRange`] if `min > max`; `x` is not
/// compared in that case.
///
/// ```
/// use sketch_utils::prelude::*;
///
/// assert_eq!(between(5, 0, 10), Ok(true));
/// assert_eq!(between(10, 0, 10), Ok(true));
/// assert!(between(5, 10, 0).is_err());
/// ```
pub fn between<T>(x: T, min: T, max: T) -> Result<bool, UtilError>
where
    T: PartialOrd + Debug,
{
    if min > max {
        return Err(UtilError::inverted_range(min, max));
    }
    Ok(min <= x && x <= max)
}

//=========================================================================
// Unit Tests
//=========================================================================
