//! Fields and rules shared by every ride.
//!
//! `RideBase` never rejects input. A negative price or capacity is replaced by
//! its default, and an empty name becomes [`DEFAULT_RIDE_NAME`]. Variants embed
//! a `RideBase` and layer their own fail-fast checks on top.

use std::fmt;
use std::time::SystemTime;

use serde::Serialize;

use crate::config::{DEFAULT_CAPACITY, DEFAULT_PRICE, DEFAULT_RIDE_NAME};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideBase {
    name: String,
    price: f64,
    pub(crate) capacity: u32,
    last_repair: SystemTime,
}

impl RideBase {
    pub fn new(name: impl Into<String>, price: f64, capacity: i32) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                DEFAULT_RIDE_NAME.to_string()
            } else {
                name
            },
            price: clamp_price(price),
            capacity: clamp_capacity(capacity),
            last_repair: SystemTime::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// When the ride was last repaired. Set at construction and never updated.
    pub fn last_repair(&self) -> SystemTime {
        self.last_repair
    }

    /// Set the maximum number of riders. Negative values fall back to
    /// [`DEFAULT_CAPACITY`].
    pub fn set_capacity(&mut self, max_load: i32) -> &mut Self {
        self.capacity = clamp_capacity(max_load);
        self
    }

    /// Set the ticket price in USD. Negative values fall back to
    /// [`DEFAULT_PRICE`].
    pub fn set_price(&mut self, price: f64) -> &mut Self {
        self.price = clamp_price(price);
        self
    }
}

fn clamp_capacity(capacity: i32) -> u32 {
    u32::try_from(capacity).unwrap_or(DEFAULT_CAPACITY)
}

// NaN fails the comparison and is treated like a negative price.
fn clamp_price(price: f64) -> f64 {
    if price >= 0.0 {
        price
    } else {
        DEFAULT_PRICE
    }
}

impl fmt::Display for RideBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the fractional part on whole prices ("3.0", not "3").
        write!(
            f,
            "\"{}\" has capacity of {} and costs ${:?}",
            self.name, self.capacity, self.price
        )
    }
}
