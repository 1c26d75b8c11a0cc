use std::fmt;

use serde::Serialize;

use crate::announcements::Announcements;
use crate::base::RideBase;
use crate::error::RideError;
use crate::ride::{apply_max_speed, Ride};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollerCoaster {
    base: RideBase,
    /// Feet.
    track_length: u32,
    /// Knots.
    max_speed: u32,
    /// G-forces.
    whiplash_factor: f64,
}

impl RollerCoaster {
    /// Build a roller coaster. Track length, speed and whiplash factor are
    /// checked in that order; the first negative one fails construction.
    pub fn new(
        name: impl Into<String>,
        capacity: i32,
        price: f64,
        length: i32,
        speed: i32,
        whiplash_factor: f64,
    ) -> Result<Self, RideError> {
        let base = RideBase::new(name, price, capacity);
        let track_length =
            u32::try_from(length).map_err(|_| RideError::InvalidArgument("invalid length"))?;

        let mut coaster = Self {
            base,
            track_length,
            max_speed: 0,
            whiplash_factor: 0.0,
        };
        if !coaster.set_max_speed(speed) {
            return Err(RideError::InvalidArgument("invalid speed"));
        }
        if whiplash_factor.is_nan() || whiplash_factor < 0.0 {
            return Err(RideError::InvalidArgument("invalid factor"));
        }
        coaster.whiplash_factor = whiplash_factor;
        Ok(coaster)
    }

    /// Change the top speed. A negative speed is refused: the current value
    /// stays and `false` is returned.
    #[must_use]
    pub fn set_max_speed(&mut self, speed: i32) -> bool {
        apply_max_speed(&mut self.max_speed, speed)
    }

    pub fn max_speed(&self) -> u32 {
        self.max_speed
    }

    pub fn track_length(&self) -> u32 {
        self.track_length
    }

    pub fn whiplash_factor(&self) -> f64 {
        self.whiplash_factor
    }
}

impl Ride for RollerCoaster {
    fn base(&self) -> &RideBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RideBase {
        &mut self.base
    }

    fn start(&self, _out: &mut Announcements) -> bool {
        true
    }

    fn stop(&self, _out: &mut Announcements) -> bool {
        true
    }

    fn load(&self, _out: &mut Announcements) -> u32 {
        self.base.capacity()
    }
}

impl fmt::Display for RollerCoaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roller coaster {}\n...maxSpeed: {}; trackLength: {}; whiplashFactor: {:?}",
            self.base, self.max_speed, self.track_length, self.whiplash_factor
        )
    }
}
