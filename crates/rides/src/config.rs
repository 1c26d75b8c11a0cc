/// Name given to a ride constructed without one.
pub const DEFAULT_RIDE_NAME: &str = "Ride With No Name";
/// Ticket price substituted for a negative price, in USD.
pub const DEFAULT_PRICE: f64 = 0.0;
/// Capacity substituted for a negative capacity.
pub const DEFAULT_CAPACITY: u32 = 0;

/// Bumper cars need strictly more riders than this to be worth running.
pub const MIN_BUMPER_CARS_CAPACITY: i32 = 4;

/// Documented spin limit for a Ferris wheel. Not enforced by `spin()`.
pub const DEFAULT_MAX_SPINS: u32 = 100;

/// Wind speed in knots when nothing else has been configured.
pub const DEFAULT_WIND_SPEED: i32 = 0;

/// Number of printed announcement lines kept around for inspection.
pub const ANNOUNCEMENT_HISTORY_LEN: usize = 64;
