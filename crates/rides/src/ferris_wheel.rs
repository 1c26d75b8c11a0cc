use std::fmt;

use serde::Serialize;

use crate::announcements::Announcements;
use crate::base::RideBase;
use crate::config::DEFAULT_MAX_SPINS;
use crate::error::RideError;
use crate::ride::Ride;

/// A Ferris wheel. Runs silently: none of its lifecycle operations announce
/// anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FerrisWheel {
    base: RideBase,
    /// Height in feet. Always positive.
    height: u32,
    spin_count: u32,
}

impl FerrisWheel {
    /// Build a Ferris wheel. Fails when `height` is not positive.
    pub fn new(
        name: impl Into<String>,
        capacity: i32,
        price: f64,
        height: i32,
    ) -> Result<Self, RideError> {
        let base = RideBase::new(name, price, capacity);
        let height = u32::try_from(height)
            .ok()
            .filter(|h| *h > 0)
            .ok_or(RideError::InvalidArgument("invalid height"))?;
        Ok(Self {
            base,
            height,
            spin_count: 0,
        })
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn spin_count(&self) -> u32 {
        self.spin_count
    }

    /// The documented spin limit. `spin` does not enforce it.
    pub fn max_spins(&self) -> u32 {
        DEFAULT_MAX_SPINS
    }

    /// Spin the wheel once.
    pub fn spin(&mut self) {
        self.spin_count = self.spin_count.saturating_add(1);
    }
}

impl Ride for FerrisWheel {
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

impl fmt::Display for FerrisWheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ferris wheel {}\n...height: {}; # of spins: {}",
            self.base, self.height, self.spin_count
        )
    }
}
