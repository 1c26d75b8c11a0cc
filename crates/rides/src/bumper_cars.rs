use std::fmt;

use serde::Serialize;

use crate::announcements::Announcements;
use crate::base::RideBase;
use crate::config::MIN_BUMPER_CARS_CAPACITY;
use crate::error::RideError;
use crate::ride::{apply_max_speed, Ride};

/// Bumper cars. The only ride that announces its own lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BumperCars {
    base: RideBase,
    /// Kilograms.
    ride_weight: u32,
    /// Knots.
    max_speed: u32,
    /// Minutes.
    min_time: u32,
}

impl BumperCars {
    /// Build a bumper-car ride. Capacity must exceed
    /// [`MIN_BUMPER_CARS_CAPACITY`]; weight, speed and time must be
    /// non-negative. Checks run in that order.
    pub fn new(
        name: impl Into<String>,
        capacity: i32,
        price: f64,
        weight: i32,
        speed: i32,
        time: i32,
    ) -> Result<Self, RideError> {
        let mut base = RideBase::new(name, price, capacity);
        if capacity <= MIN_BUMPER_CARS_CAPACITY {
            return Err(RideError::InvalidArgument("invalid capacity"));
        }
        base.capacity = capacity.unsigned_abs();

        let ride_weight =
            u32::try_from(weight).map_err(|_| RideError::InvalidArgument("invalid weight"))?;
        let mut cars = Self {
            base,
            ride_weight,
            max_speed: 0,
            min_time: 0,
        };
        if !cars.set_max_speed(speed) {
            return Err(RideError::InvalidArgument("invalid speed"));
        }
        cars.min_time =
            u32::try_from(time).map_err(|_| RideError::InvalidArgument("invalid time"))?;
        Ok(cars)
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

    pub fn ride_weight(&self) -> u32 {
        self.ride_weight
    }

    pub fn min_time(&self) -> u32 {
        self.min_time
    }
}

impl Ride for BumperCars {
    fn base(&self) -> &RideBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RideBase {
        &mut self.base
    }

    fn start(&self, out: &mut Announcements) -> bool {
        out.push(format!("...{} has started", self.base.name()));
        true
    }

    fn stop(&self, out: &mut Announcements) -> bool {
        out.push(format!("...{} has stopped", self.base.name()));
        true
    }

    fn load(&self, out: &mut Announcements) -> u32 {
        out.push(format!("...{} has been loaded", self.base.name()));
        self.base.capacity()
    }
}

impl fmt::Display for BumperCars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bumper Cars {}\n...weight {}; speed: {}; time: {}",
            self.base, self.ride_weight, self.max_speed, self.min_time
        )
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;

    #[test]
    fn test_small_capacity_is_rejected() {
        for capacity in [4, 0, -3] {
            let err = BumperCars::new("Bumpers", capacity, 2.0, 10, 5, 2).unwrap_err();
            assert_eq!(err, RideError::InvalidArgument("invalid capacity"));
        }
        assert!(BumperCars::new("Bumpers", 5, 2.0, 10, 5, 2).is_ok());
    }

    #[test]
    fn test_each_negative_field_fails_independently() {
        assert_eq!(
            BumperCars::new("Bumpers", 10, 2.0, -1, 5, 2).unwrap_err(),
            RideError::InvalidArgument("invalid weight")
        );
        assert_eq!(
            BumperCars::new("Bumpers", 10, 2.0, 10, -1, 2).unwrap_err(),
            RideError::InvalidArgument("invalid speed")
        );
        assert_eq!(
            BumperCars::new("Bumpers", 10, 2.0, 10, 5, -1).unwrap_err(),
            RideError::InvalidArgument("invalid time")
        );
    }

    #[test]
    fn test_negative_price_still_clamps() {
        let cars = BumperCars::new("Bumpers", 10, -9.0, 10, 5, 2).unwrap();
        assert_eq!(cars.price(), 0.0);
    }

    #[test]
    fn test_set_max_speed_reject_keeps_previous_value() {
        let mut cars = BumperCars::new("Bumpers", 10, 2.0, 10, 5, 2).unwrap();
        assert!(!cars.set_max_speed(-1));
        assert_eq!(cars.max_speed(), 5);
        assert!(cars.set_max_speed(9));
        assert_eq!(cars.max_speed(), 9);
    }

    #[test]
    fn test_lifecycle_announces_each_step() {
        let cars = BumperCars::new("Crazy Bumper", 13, 6.28, 17, 8, 3).unwrap();
        let mut out = Announcements::default();

        assert_eq!(cars.load(&mut out), 13);
        assert_eq!(out.pending(), ["...Crazy Bumper has been loaded"]);

        assert!(cars.start(&mut out));
        assert!(cars.stop(&mut out));
        assert_eq!(
            out.pending(),
            [
                "...Crazy Bumper has been loaded",
                "...Crazy Bumper has started",
                "...Crazy Bumper has stopped",
            ]
        );
    }

    #[test]
    fn test_inherits_default_repair() {
        let cars = BumperCars::new("Crazy Bumper", 13, 6.28, 17, 8, 3).unwrap();
        let mut out = Announcements::default();
        cars.repair(&mut out);
        assert_eq!(out.pending(), ["mechanics are on strike"]);
    }

    #[test]
    fn test_description() {
        let cars = BumperCars::new("Crazy Bumper", 17, 6.28, 13, 8, 3).unwrap();
        assert_eq!(
            cars.describe(),
            "Bumper Cars \"Crazy Bumper\" has capacity of 17 and costs $6.28\n...weight 13; speed: 8; time: 3"
        );
    }
}
