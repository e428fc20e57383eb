//=========================================================================
// Callback Adapters
//=========================================================================
//
// Adapts zero-argument suppliers into one-argument callbacks, for APIs
// that hand an event or value to a handler that does not need it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::error::UtilError;

//=== ignore_arg ==========================================================

/// Wraps `supplier` in a one-argument callback that discards its argument.
///
/// Every invocation calls `supplier` and returns its result.
///
/// ```
/// use sketch_utils::prelude::*;
///
/// let answer = ignore_arg(|| 42);
/// assert_eq!(answer("ignored"), 42);
/// assert_eq!(answer("also ignored"), 42);
/// ```
pub fn ignore_arg<T, R, F>(supplier: F) -> impl Fn(T) -> R
where
    F: Fn() -> R,
{
    move |_| supplier()
}

/// Fail-fast form of [`ignore_arg`] for an optional supplier.
///
/// # Errors
///
/// Returns [`UtilError::MissingSupplier`] if `supplier` is `None`. The
/// check happens here, never when the callback is invoked.
pub fn try_ignore_arg<T, R, F>(supplier: Option<F>) -> Result<impl Fn(T) -> R, UtilError>
where
    F: Fn() -> R,
{
    let supplier = supplier.ok_or(UtilError::MissingSupplier)?;
    Ok(ignore_arg(supplier))
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn ignore_arg_returns_supplier_value() {
        let callback = ignore_arg(|| 42);
        assert_eq!(callback(0), 42);
        assert_eq!(callback(-17), 42);
        assert_eq!(callback(i32::MAX), 42);
    }

    #[test]
    fn ignore_arg_accepts_any_argument_type() {
        let callback = ignore_arg(|| "done");
        assert_eq!(callback(String::from("payload")), "done");

        let unit = ignore_arg(|| 1.5_f32);
        assert_eq!(unit(()), 1.5);
    }

    #[test]
    fn ignore_arg_invokes_supplier_each_call() {
        let calls = Cell::new(0);
        let callback = ignore_arg(|| {
            calls.set(calls.get() + 1);
            calls.get()
        });

        assert_eq!(callback('a'), 1);
        assert_eq!(callback('b'), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn ignore_arg_does_not_call_supplier_on_construction() {
        let calls = Cell::new(0);
        let _callback = ignore_arg::<u8, _, _>(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn try_ignore_arg_with_supplier() {
        let callback = try_ignore_arg(Some(|| 42)).unwrap();
        assert_eq!(callback("x"), 42);
        assert_eq!(callback("y"), 42);
    }

    #[test]
    fn try_ignore_arg_without_supplier_fails_immediately() {
        let result = try_ignore_arg::<i32, i32, fn() -> i32>(None);
        assert!(matches!(result, Err(UtilError::MissingSupplier)));
    }
}
