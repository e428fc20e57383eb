//=========================================================================
// Observable Value
//=========================================================================
//
// Owns a value and notifies registered ChangeObservers when it changes.
//
// Flow:
//   set(new) → compare with current → store new → notify observers
//                                                  (registration order)
//
// Observers receive `&ObservableValue<V>` as the owner, so reading
// `owner.get()` during notification already yields the new value.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::trace;

//=== Internal Dependencies ===============================================

use super::contracts::ChangeObserver;

//=== ObserverId ==========================================================

/// Handle returned by [`ObservableValue::add_observer`], used to remove
/// the observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

//=== ObservableValue =====================================================

type BoxedObserver<V> = Box<dyn ChangeObserver<ObservableValue<V>, V>>;

/// A value that reports changes to its observers.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use sketch_utils::prelude::*;
///
/// let last = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&last);
///
/// let mut radius = ObservableValue::new(10);
/// radius.add_observer(move |_: &ObservableValue<i32>, _old: &i32, new: &i32| {
///     sink.set(*new);
/// });
///
/// assert!(radius.set(25));
/// assert_eq!(last.get(), 25);
/// ```
pub struct ObservableValue<V> {
    value: V,
    observers: Vec<(ObserverId, BoxedObserver<V>)>,
    next_id: u64,
}

impl<V> ObservableValue<V> {
    //--- Construction -----------------------------------------------------

    /// Creates an observable holding `value` with no observers.
    pub fn new(value: V) -> Self {
        Self {
            value,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    //--- Value Access -----------------------------------------------------

    /// Returns the current value.
    pub fn get(&self) -> &V {
        &self.value
    }

    /// Stores `value` and notifies observers if it differs from the
    /// current one.
    ///
    /// Returns `true` if the value changed. Setting an equal value is a
    /// no-op and notifies nobody.
    pub fn set(&mut self, value: V) -> bool
    where
        V: PartialEq,
    {
        if self.value == value {
            return false;
        }

        let old = std::mem::replace(&mut self.value, value);

        trace!(
            target: "core::observable",
            "Value changed, notifying {} observer(s)",
            self.observers.len()
        );

        for (_, observer) in &self.observers {
            observer.changed(self, &old, &self.value);
        }

        true
    }

    /// Consumes the observable and returns its value.
    pub fn into_inner(self) -> V {
        self.value
    }

    //--- Observer Registration --------------------------------------------

    /// Registers an observer, notified on every subsequent change.
    pub fn add_observer<O>(&mut self, observer: O) -> ObserverId
    where
        O: ChangeObserver<ObservableValue<V>, V> + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));

        trace!(target: "core::observable", "Observer {:?} registered", id);
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `false` if `id` is unknown (already removed, or issued by
    /// another observable).
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|(existing, _)| *existing == id) {
            Some(index) => {
                self.observers.remove(index);
                trace!(target: "core::observable", "Observer {:?} removed", id);
                true
            }
            None => false,
        }
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

//--- Trait Implementations -----------------------------------------------

impl<V: fmt::Debug> fmt::Debug for ObservableValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableValue")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<V: Default> Default for ObservableValue<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    //--- Test Helpers -----------------------------------------------------

    fn recorder(log: &Log, tag: &'static str) -> impl Fn(&ObservableValue<i32>, &i32, &i32) {
        let log = Rc::clone(log);
        move |owner: &ObservableValue<i32>, old: &i32, new: &i32| {
            log.borrow_mut()
                .push(format!("{}:{}->{} (owner={})", tag, old, new, owner.get()));
        }
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn new_has_value_and_no_observers() {
        let value = ObservableValue::new(3);
        assert_eq!(*value.get(), 3);
        assert_eq!(value.observer_count(), 0);
    }

    #[test]
    fn set_without_observers_updates_value() {
        let mut value = ObservableValue::new(1);
        assert!(value.set(2));
        assert_eq!(*value.get(), 2);
    }

    #[test]
    fn set_notifies_with_old_and_new() {
        let log: Log = Rc::default();
        let mut value = ObservableValue::new(1);
        value.add_observer(recorder(&log, "a"));

        value.set(5);

        assert_eq!(*log.borrow(), vec!["a:1->5 (owner=5)".to_string()]);
    }

    #[test]
    fn set_equal_value_does_not_notify() {
        let log: Log = Rc::default();
        let mut value = ObservableValue::new(7);
        value.add_observer(recorder(&log, "a"));

        assert!(!value.set(7));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn observers_notified_in_registration_order() {
        let log: Log = Rc::default();
        let mut value = ObservableValue::new(0);
        value.add_observer(recorder(&log, "first"));
        value.add_observer(recorder(&log, "second"));

        value.set(1);

        let entries = log.borrow();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with("first"));
        assert!(entries[1].starts_with("second"));
    }

    #[test]
    fn removed_observer_is_not_notified() {
        let log: Log = Rc::default();
        let mut value = ObservableValue::new(0);
        let first = value.add_observer(recorder(&log, "first"));
        value.add_observer(recorder(&log, "second"));

        assert!(value.remove_observer(first));
        assert_eq!(value.observer_count(), 1);

        value.set(9);
        assert_eq!(*log.borrow(), vec!["second:0->9 (owner=9)".to_string()]);
    }

    #[test]
    fn remove_unknown_observer_returns_false() {
        let mut value = ObservableValue::new(0);
        let id = value.add_observer(|_: &ObservableValue<i32>, _: &i32, _: &i32| {});

        assert!(value.remove_observer(id));
        assert!(!value.remove_observer(id), "Second removal should fail");
    }

    #[test]
    fn observer_ids_are_unique() {
        let mut value = ObservableValue::new(0);
        let a = value.add_observer(|_: &ObservableValue<i32>, _: &i32, _: &i32| {});
        let b = value.add_observer(|_: &ObservableValue<i32>, _: &i32, _: &i32| {});
        assert_ne!(a, b);
    }

    #[test]
    fn debug_shows_value_and_observer_count() {
        let mut value = ObservableValue::new(42);
        value.add_observer(|_: &ObservableValue<i32>, _: &i32, _: &i32| {});
        let debug_str = format!("{:?}", value);
        assert!(debug_str.contains("42"));
        assert!(debug_str.contains("observers: 1"));
    }

    #[test]
    fn default_and_into_inner() {
        let value: ObservableValue<String> = ObservableValue::default();
        assert_eq!(value.into_inner(), "");
    }
}
