//! Amusement-park rides.
//!
//! [`RideBase`](base::RideBase) carries the fields every ride shares and
//! clamps bad input to defaults. The variants ([`FerrisWheel`],
//! [`RollerCoaster`], [`BumperCars`]) embed it, reject bad variant-specific
//! input at construction, and implement the [`Ride`] lifecycle. [`RidesPlugin`]
//! puts rides into a Bevy app and operates each one once, in lineup order.

pub mod announcements;
pub mod base;
pub mod bumper_cars;
pub mod config;
pub mod cycle;
pub mod error;
pub mod ferris_wheel;
pub mod park;
pub mod ride;
pub mod roller_coaster;

#[cfg(test)]
mod test_harness;

pub use announcements::Announcements;
pub use bumper_cars::BumperCars;
pub use error::RideError;
pub use ferris_wheel::FerrisWheel;
pub use park::{ParkConditions, RidesPlugin};
pub use ride::{AnyRide, Ride};
pub use roller_coaster::RollerCoaster;
