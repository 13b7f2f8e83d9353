//! Shared test doubles for the observer core.

use std::cell::RefCell;
use std::rc::Rc;

use crate::observer::Observer;

/// Observer that records every price it receives, in call order.
pub(crate) struct Recorder {
    prices: RefCell<Vec<f64>>,
}

impl Recorder {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            prices: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn prices(&self) -> Vec<f64> {
        self.prices.borrow().clone()
    }
}

impl Observer for Recorder {
    fn update(&self, price: f64) {
        self.prices.borrow_mut().push(price);
    }
}
