//! The lifecycle interface every ride implements, and the closed set of ride
//! variants used by the ECS side of the crate.

use std::fmt;

use serde::Serialize;

use crate::announcements::Announcements;
use crate::base::RideBase;
use crate::bumper_cars::BumperCars;
use crate::ferris_wheel::FerrisWheel;
use crate::roller_coaster::RollerCoaster;

/// Text emitted by the default [`Ride::repair`].
pub const REPAIR_NOTICE: &str = "mechanics are on strike";

/// Lifecycle operations shared by all rides.
///
/// `start`, `stop` and `load` are required. `repair` has a default that every
/// variant inherits unless it supplies its own. Anything a ride wants to say
/// goes into the [`Announcements`] sink.
pub trait Ride: fmt::Display + Send + Sync {
    fn base(&self) -> &RideBase;

    fn base_mut(&mut self) -> &mut RideBase;

    /// Start the ride. Returns `true` when it is running.
    fn start(&self, out: &mut Announcements) -> bool;

    /// Stop the ride. Returns `true` when it came to a halt.
    fn stop(&self, out: &mut Announcements) -> bool;

    /// Load riders. Returns the number of riders loaded.
    fn load(&self, out: &mut Announcements) -> u32;

    fn repair(&self, out: &mut Announcements) {
        out.push(REPAIR_NOTICE);
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn price(&self) -> f64 {
        self.base().price()
    }

    fn capacity(&self) -> u32 {
        self.base().capacity()
    }

    fn set_capacity(&mut self, max_load: i32) -> &mut Self
    where
        Self: Sized,
    {
        self.base_mut().set_capacity(max_load);
        self
    }

    fn set_price(&mut self, price: f64) -> &mut Self
    where
        Self: Sized,
    {
        self.base_mut().set_price(price);
        self
    }

    /// Human-readable description, identical to the `Display` output.
    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Accept a new max speed only when it is non-negative. On rejection the
/// current value is left untouched.
pub(crate) fn apply_max_speed(max_speed: &mut u32, speed: i32) -> bool {
    match u32::try_from(speed) {
        Ok(speed) => {
            *max_speed = speed;
            true
        }
        Err(_) => false,
    }
}

// ---------------------------------------------------------------------------
// AnyRide
// ---------------------------------------------------------------------------

/// One of the known ride variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum AnyRide {
    FerrisWheel(FerrisWheel),
    RollerCoaster(RollerCoaster),
    BumperCars(BumperCars),
}

impl AnyRide {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyRide::FerrisWheel(_) => "Ferris wheel",
            AnyRide::RollerCoaster(_) => "Roller coaster",
            AnyRide::BumperCars(_) => "Bumper Cars",
        }
    }

    fn as_ride(&self) -> &dyn Ride {
        match self {
            AnyRide::FerrisWheel(ride) => ride,
            AnyRide::RollerCoaster(ride) => ride,
            AnyRide::BumperCars(ride) => ride,
        }
    }

    fn as_ride_mut(&mut self) -> &mut dyn Ride {
        match self {
            AnyRide::FerrisWheel(ride) => ride,
            AnyRide::RollerCoaster(ride) => ride,
            AnyRide::BumperCars(ride) => ride,
        }
    }
}

impl Ride for AnyRide {
    fn base(&self) -> &RideBase {
        self.as_ride().base()
    }

    fn base_mut(&mut self) -> &mut RideBase {
        self.as_ride_mut().base_mut()
    }

    fn start(&self, out: &mut Announcements) -> bool {
        self.as_ride().start(out)
    }

    fn stop(&self, out: &mut Announcements) -> bool {
        self.as_ride().stop(out)
    }

    fn load(&self, out: &mut Announcements) -> u32 {
        self.as_ride().load(out)
    }

    fn repair(&self, out: &mut Announcements) {
        self.as_ride().repair(out);
    }
}

impl fmt::Display for AnyRide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_ride(), f)
    }
}

impl From<FerrisWheel> for AnyRide {
    fn from(ride: FerrisWheel) -> Self {
        AnyRide::FerrisWheel(ride)
    }
}

impl From<RollerCoaster> for AnyRide {
    fn from(ride: RollerCoaster) -> Self {
        AnyRide::RollerCoaster(ride)
    }
}

impl From<BumperCars> for AnyRide {
    fn from(ride: BumperCars) -> Self {
        AnyRide::BumperCars(ride)
    }
}
