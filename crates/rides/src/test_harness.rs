//! # TestPark — headless test harness for the rides plugin
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`RidesPlugin`] so tests
//! can place rides, advance the app, and inspect what was announced.

use bevy::app::App;
use bevy::prelude::*;

use crate::announcements::Announcements;
use crate::park::{spawn_lineup, Operated, ParkConditions, RidesPlugin};
use crate::ride::AnyRide;

pub struct TestPark {
    app: App,
}

impl Default for TestPark {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPark {
    /// An empty park with default conditions. Startup systems have not run
    /// yet; the first `tick` runs them.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RidesPlugin);
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Park setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Append a ride to the end of the lineup.
    pub fn with_ride(mut self, ride: impl Into<AnyRide>) -> Self {
        spawn_lineup(self.app.world_mut(), [ride.into()]);
        self
    }

    pub fn with_wind_speed(mut self, knots: i32) -> Self {
        self.app.insert_resource(ParkConditions { wind_speed: knots });
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Run `n` app updates.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    /// Every line printed so far, oldest first.
    pub fn printed_lines(&self) -> &[String] {
        self.resource::<Announcements>().history()
    }

    pub fn operated_count(&mut self) -> usize {
        self.app
            .world_mut()
            .query::<&Operated>()
            .iter(self.app.world())
            .count()
    }

    /// Outcomes of every operated ride, in no particular order.
    pub fn outcomes(&mut self) -> Vec<Operated> {
        self.app
            .world_mut()
            .query::<&Operated>()
            .iter(self.app.world())
            .copied()
            .collect()
    }
}
