//! `Stock` — the concrete subject of the price feed.
//!
//! A `Stock` holds the last known price and an embedded [`Subject`] registry.
//! Setting the price stores the new value and immediately notifies every
//! attached observer, synchronously, before `set_price` returns.

use std::rc::Rc;

use crate::observer::Observer;
use crate::subject::Subject;

/// A stock whose price changes are broadcast to attached observers.
#[derive(Default)]
pub struct Stock {
    subject: Subject,
    price: f64,
}

impl Stock {
    /// Creates a stock with no observers and an initial price of `0.0`.
    ///
    /// The starting price is an explicit default; it is never broadcast
    /// until the first [`set_price`](Self::set_price) call.
    pub fn new() -> Self {
        Self {
            subject: Subject::new(),
            price: 0.0,
        }
    }

    /// Registers `observer` for future price changes.
    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.subject.attach(observer);
    }

    /// Removes the first registered occurrence of `observer`, if any.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        self.subject.detach(observer);
    }

    /// Stores `new_price` and notifies all attached observers exactly once.
    ///
    /// No validation is performed: negative, zero, and non-finite values are
    /// stored and forwarded as-is. The call blocks until every observer has
    /// been notified.
    pub fn set_price(&mut self, new_price: f64) {
        self.price = new_price;
        self.subject.notify_observers(new_price);
    }

    /// The last price set on this stock, or `0.0` before any update.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Number of attached observers, counting duplicates.
    pub fn observer_count(&self) -> usize {
        self.subject.observer_count()
    }
}
