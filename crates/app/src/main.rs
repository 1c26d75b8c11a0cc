#![allow(clippy::approx_constant)]

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use rides::park::spawn_lineup;
use rides::{AnyRide, BumperCars, FerrisWheel, RideError, RidesPlugin, RollerCoaster};

/// The three rides the park opens with. Any construction failure aborts
/// startup before a single ride runs.
fn opening_lineup() -> Result<Vec<AnyRide>, RideError> {
    Ok(vec![
        FerrisWheel::new("The Billy Preston", 50, 6.28, 100)?.into(),
        RollerCoaster::new("for(;;) Young", 32, 3.14, 25, 99, 1.618)?.into(),
        BumperCars::new("Crazy Bumper", 17, 6.28, 13, 8, 3)?.into(),
    ])
}

fn main() -> Result<(), RideError> {
    let lineup = opening_lineup()?;

    let mut app = App::new();

    // One update is enough: Startup opens the gates, Update operates every
    // ride once and prints what they announced. Logs go to stderr.
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_once()))
        .add_plugins(LogPlugin::default())
        .add_plugins(RidesPlugin);

    spawn_lineup(app.world_mut(), lineup);

    app.run();
    Ok(())
}
