//=========================================================================
// Functional Contracts
//=========================================================================
//
// Single-method behavioral contracts.
//
// Both traits carry a blanket implementation for matching closures, so
// any plain function or closure conforms without a wrapper type.
//
//=========================================================================

//=== BinaryFloatOperation ================================================

/// Pluggable arithmetic strategy over two floats.
///
/// ```
/// use sketch_utils::prelude::*;
///
/// fn fold<O: BinaryFloatOperation>(op: &O, values: &[f32]) -> f32 {
///     values.iter().copied().reduce(|a, b| op.apply(a, b)).unwrap_or(0.0)
/// }
///
/// assert_eq!(fold(&|a: f32, b: f32| a + b, &[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(fold(&f32::max, &[1.0, 5.0, 3.0]), 5.0);
/// ```
pub trait BinaryFloatOperation {
    fn apply(&self, a: f32, b: f32) -> f32;
}

impl<F> BinaryFloatOperation for F
where
    F: Fn(f32, f32) -> f32,
{
    #[inline]
    fn apply(&self, a: f32, b: f32) -> f32 {
        self(a, b)
    }
}

//=== ChangeObserver ======================================================

/// Notified when a value owned by `O` changes from `old` to `new`.
///
/// Side effect only; nothing is returned to the owner.
pub trait ChangeObserver<O: ?Sized, V: ?Sized> {
    fn changed(&self, owner: &O, old: &V, new: &V);
}

impl<O, V, F> ChangeObserver<O, V> for F
where
    O: ?Sized,
    V: ?Sized,
    F: Fn(&O, &V, &V),
{
    #[inline]
    fn changed(&self, owner: &O, old: &V, new: &V) {
        self(owner, old, new)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
