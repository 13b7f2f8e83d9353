//! `Investor` — the concrete observer of the price feed.
//!
//! An investor has a display name and reacts to price updates by printing a
//! single human-readable line to standard output. That line is the system's
//! externally observable interface, so it goes to stdout directly rather
//! than through the `log` facade.

use crate::observer::Observer;

/// An investor that prints a notification line for every price update.
pub struct Investor {
    name: String,
}

impl Investor {
    /// Creates an investor with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The investor's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds the notification line for `price`.
    ///
    /// Kept separate from [`Observer::update`] so the exact text can be
    /// asserted in tests without capturing stdout.
    pub fn notification_line(&self, price: f64) -> String {
        format!(
            "Investor {} received notification: Stock price changed to {}",
            self.name, price
        )
    }
}

impl Observer for Investor {
    /// Prints the notification line. Never fails, whatever the price.
    fn update(&self, price: f64) {
        println!("{}", self.notification_line(price));
    }
}
