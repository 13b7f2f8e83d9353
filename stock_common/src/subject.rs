//! Reusable observer registry embedded by concrete subject types.
//!
//! `Subject` keeps an ordered list of observer handles and knows how to
//! attach, detach, and notify them. Concrete subjects such as
//! [`Stock`](crate::stock::Stock) embed a `Subject` and delegate to it
//! instead of inheriting behavior.
//!
//! Design notes:
//! - Observers are held as `Rc<dyn Observer>`: the registry shares them, it
//!   does not own their lifetime. An observer may outlive or be dropped
//!   independently of any registration.
//! - Insertion order is preserved and duplicates are allowed; attaching the
//!   same handle twice means two callbacks per notification.
//! - Everything is single-threaded and synchronous. If this registry is ever
//!   shared across threads it needs a lock around the list, and notification
//!   should iterate a snapshot to survive attach/detach during callbacks.

use std::rc::Rc;

use log::debug;

use crate::observer::Observer;

/// Ordered registry of observers with attach/detach/notify operations.
#[derive(Default)]
pub struct Subject {
    /// Attached observer handles, in attachment order. Duplicates permitted.
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Appends `observer` to the end of the registry.
    ///
    /// No uniqueness check is performed: attaching the same handle twice
    /// results in two `update` calls per notification.
    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
        debug!("Observer attached, {} now registered", self.observers.len());
    }

    /// Removes the first registered occurrence of `observer`, if any.
    ///
    /// Occurrences are matched by handle identity (`Rc::ptr_eq`). When the
    /// observer is not registered this is a silent no-op.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                debug!("Observer detached, {} remaining", self.observers.len());
            }
            None => debug!("Detach requested for an observer that is not registered"),
        }
    }

    /// Invokes `update(price)` on every registered observer, in order.
    ///
    /// Notification is synchronous and fail-fast: observers run one after
    /// another on the caller's thread, and a panic in one observer prevents
    /// the remaining ones from being notified.
    pub fn notify_observers(&self, price: f64) {
        for observer in &self.observers {
            observer.update(price);
        }
    }

    /// Number of registered observers, counting duplicates.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Recorder;

    #[test]
    fn notifies_all_observers_in_attachment_order() {
        struct Tagged {
            tag: &'static str,
            order: Rc<std::cell::RefCell<Vec<&'static str>>>,
        }
        impl Observer for Tagged {
            fn update(&self, _price: f64) {
                self.order.borrow_mut().push(self.tag);
            }
        }

        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        for tag in ["first", "second", "third"] {
            subject.attach(Rc::new(Tagged {
                tag,
                order: Rc::clone(&order),
            }));
        }

        subject.notify_observers(42.0);

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_attachment_notifies_twice() {
        let recorder = Recorder::new();
        let handle: Rc<dyn Observer> = Rc::clone(&recorder) as Rc<dyn Observer>;

        let mut subject = Subject::new();
        subject.attach(Rc::clone(&handle));
        subject.attach(Rc::clone(&handle));

        subject.notify_observers(10.0);

        assert_eq!(recorder.prices(), vec![10.0, 10.0]);
        assert_eq!(subject.observer_count(), 2);
    }

    #[test]
    fn detach_removes_only_the_first_occurrence() {
        let recorder = Recorder::new();
        let handle: Rc<dyn Observer> = Rc::clone(&recorder) as Rc<dyn Observer>;

        let mut subject = Subject::new();
        subject.attach(Rc::clone(&handle));
        subject.attach(Rc::clone(&handle));
        subject.detach(&handle);

        subject.notify_observers(5.0);

        assert_eq!(recorder.prices(), vec![5.0]);
        assert_eq!(subject.observer_count(), 1);
    }

    #[test]
    fn detached_observer_is_not_notified() {
        let kept = Recorder::new();
        let removed = Recorder::new();
        let removed_handle: Rc<dyn Observer> = Rc::clone(&removed) as Rc<dyn Observer>;

        let mut subject = Subject::new();
        subject.attach(Rc::clone(&removed_handle));
        subject.attach(Rc::clone(&kept) as Rc<dyn Observer>);
        subject.detach(&removed_handle);

        subject.notify_observers(200.0);

        assert!(removed.prices().is_empty());
        assert_eq!(kept.prices(), vec![200.0]);
    }

    #[test]
    fn detach_of_unregistered_observer_is_a_no_op() {
        let attached = Recorder::new();
        let stranger: Rc<dyn Observer> = Recorder::new() as Rc<dyn Observer>;

        let mut subject = Subject::new();
        subject.attach(Rc::clone(&attached) as Rc<dyn Observer>);
        subject.detach(&stranger);

        subject.notify_observers(1.0);

        assert_eq!(attached.prices(), vec![1.0]);
        assert_eq!(subject.observer_count(), 1);
    }

    #[test]
    fn notify_with_no_observers_does_nothing() {
        let subject = Subject::new();
        subject.notify_observers(123.0);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn negative_and_zero_prices_pass_through_unchanged() {
        let recorder = Recorder::new();

        let mut subject = Subject::new();
        subject.attach(Rc::clone(&recorder) as Rc<dyn Observer>);

        subject.notify_observers(0.0);
        subject.notify_observers(-3.25);

        assert_eq!(recorder.prices(), vec![0.0, -3.25]);
    }
}
