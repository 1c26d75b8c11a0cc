//! One operating cycle of a ride: describe, load, start, then stop or repair.

use serde::Serialize;

use crate::announcements::Announcements;
use crate::ride::Ride;

/// How a cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CycleFinish {
    /// Started, then stopped normally.
    Stopped,
    /// Started, but `stop` reported failure.
    StopFailed,
    /// Did not start; sent to repair instead.
    SentToRepair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleOutcome {
    pub riders_loaded: u32,
    pub finish: CycleFinish,
}

/// Run a single cycle. The description goes out first so it precedes
/// whatever the ride itself announces.
pub fn run_ride_cycle<R: Ride + ?Sized>(ride: &R, out: &mut Announcements) -> CycleOutcome {
    out.push(ride.describe());
    let riders_loaded = ride.load(out);
    let finish = if ride.start(out) {
        if ride.stop(out) {
            CycleFinish::Stopped
        } else {
            CycleFinish::StopFailed
        }
    } else {
        ride.repair(out);
        CycleFinish::SentToRepair
    };
    CycleOutcome {
        riders_loaded,
        finish,
    }
}
