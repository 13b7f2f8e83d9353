//! The `Observer` capability for price-update listeners.
//!
//! Anything that wants to hear about price changes implements this trait and
//! registers itself with a [`Subject`](crate::subject::Subject). The contract
//! is deliberately minimal: one callback, no return value, no failure channel.

/// Capability contract for entities that receive price updates.
pub trait Observer {
    /// Called with the new price whenever a watched subject changes.
    ///
    /// Invoked synchronously from the notifying subject, in attachment order.
    /// There is no isolation between observers: a panic here aborts
    /// notification of any observers attached later.
    fn update(&self, price: f64);
}
