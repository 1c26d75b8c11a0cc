//! ECS side of the crate: rides as entities, operated once each in lineup
//! order, with their announcements printed afterwards.
//!
//! ```text
//! RideSet::Operate  →  RideSet::Report
//! ```
//!
//! * **Operate** – `operate_rides` runs one cycle for every attraction that
//!   has not been operated yet and tags it with [`Operated`].
//! * **Report** – `print_announcements` flushes the lines queued during
//!   `Operate` to stdout.

use bevy::prelude::*;

use crate::announcements::{print_announcements, Announcements};
use crate::config::DEFAULT_WIND_SPEED;
use crate::cycle::{run_ride_cycle, CycleFinish, CycleOutcome};
use crate::ride::{AnyRide, Ride};

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// A ride placed in the park.
#[derive(Component, Debug, Clone)]
pub struct Attraction(pub AnyRide);

/// Position in the lineup. Lower slots are operated first.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineupSlot(pub u32);

/// Marks an attraction whose cycle has already run.
#[derive(Component, Debug, Clone, Copy)]
pub struct Operated(pub CycleOutcome);

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Park-wide conditions shared by every ride. No ride reads them yet; they
/// are supplied by whoever assembles the app.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkConditions {
    /// Knots.
    pub wind_speed: i32,
}

impl Default for ParkConditions {
    fn default() -> Self {
        Self {
            wind_speed: DEFAULT_WIND_SPEED,
        }
    }
}

// ---------------------------------------------------------------------------
// Lineup
// ---------------------------------------------------------------------------

/// Spawn rides in the given order, after any rides already in the lineup.
pub fn spawn_lineup(world: &mut World, rides: impl IntoIterator<Item = AnyRide>) -> Vec<Entity> {
    let mut next = world
        .query::<&LineupSlot>()
        .iter(world)
        .map(|slot| slot.0 + 1)
        .max()
        .unwrap_or(0);

    rides
        .into_iter()
        .map(|ride| {
            let slot = LineupSlot(next);
            next += 1;
            world.spawn((Attraction(ride), slot)).id()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn open_gates(conditions: Res<ParkConditions>) {
    info!("Park open, wind speed {} knots", conditions.wind_speed);
}

/// Run one cycle for each attraction not yet operated, in lineup order.
pub fn operate_rides(
    mut commands: Commands,
    attractions: Query<(Entity, &Attraction, &LineupSlot), Without<Operated>>,
    mut announcements: ResMut<Announcements>,
) {
    let mut lineup: Vec<_> = attractions.iter().collect();
    lineup.sort_by_key(|(_, _, slot)| **slot);

    for (entity, attraction, slot) in lineup {
        let ride = &attraction.0;
        let outcome = run_ride_cycle(ride, &mut announcements);
        match outcome.finish {
            CycleFinish::Stopped => debug!(
                "{} '{}' (slot {}) cycled with {} riders",
                ride.kind(),
                ride.name(),
                slot.0,
                outcome.riders_loaded
            ),
            CycleFinish::StopFailed => warn!(
                "{} '{}' (slot {}) started but failed to stop",
                ride.kind(),
                ride.name(),
                slot.0
            ),
            CycleFinish::SentToRepair => warn!(
                "{} '{}' (slot {}) failed to start, sent to repair",
                ride.kind(),
                ride.name(),
                slot.0
            ),
        }
        commands.entity(entity).insert(Operated(outcome));
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RideSet {
    Operate,
    Report,
}

pub struct RidesPlugin;

impl Plugin for RidesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParkConditions>()
            .init_resource::<Announcements>()
            .configure_sets(Update, (RideSet::Operate, RideSet::Report).chain())
            .add_systems(Startup, open_gates)
            .add_systems(Update, operate_rides.in_set(RideSet::Operate))
            .add_systems(Update, print_announcements.in_set(RideSet::Report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ferris_wheel::FerrisWheel;

    #[test]
    fn test_spawn_lineup_assigns_consecutive_slots() {
        let mut world = World::new();
        let wheel = || AnyRide::from(FerrisWheel::new("Wheel", 10, 1.0, 30).unwrap());

        let first = spawn_lineup(&mut world, [wheel(), wheel()]);
        let second = spawn_lineup(&mut world, [wheel()]);

        let slot = |world: &World, e: Entity| world.get::<LineupSlot>(e).copied();
        assert_eq!(slot(&world, first[0]), Some(LineupSlot(0)));
        assert_eq!(slot(&world, first[1]), Some(LineupSlot(1)));
        assert_eq!(slot(&world, second[0]), Some(LineupSlot(2)));
    }

    #[test]
    fn test_park_conditions_default_wind() {
        assert_eq!(ParkConditions::default().wind_speed, 0);
    }
}
