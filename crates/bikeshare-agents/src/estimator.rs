//! Waiting-time seed estimator.
//!
//! Docks do not open with a zero wait counter.  Each draws a starting
//! cumulative wait from a coarse city-wide demand estimate, so the metric
//! series begins at a plausible steady-state magnitude instead of ramping
//! up from nothing.

use bikeshare_core::SimRng;

/// Minutes one rider keeps a bike.
const RIDE_TIME_PER_USER: u64 = 50;

/// The demand estimate assumes a five-dock city and splits the fleet evenly
/// across it, whatever layout the grid actually runs.
const ESTIMATE_STATIONS: u32 = 5;

/// Draw an initial cumulative waiting time, in minutes.
///
/// Daily riders are drawn uniformly from `[100, 500]` and the city fleet
/// from `[100, 200]` bikes, both inclusive.  Riders beyond the per-dock
/// fleet capacity are turned away; the last served rider finishes one
/// minute short of the total ride budget.  With these ranges the result is
/// always in `[4999, 9999]`.
pub fn seed_waiting_time(rng: &mut SimRng) -> u64 {
    let users: u32 = rng.gen_range(100..=500);
    let total_bikes: u32 = rng.gen_range(100..=200);
    let bikes_per_station = total_bikes / ESTIMATE_STATIONS;

    let available_riders = users.min(bikes_per_station * ESTIMATE_STATIONS);
    // Unreachable with the ranges above (the fleet floor is 100 bikes);
    // guards the subtraction below.
    if available_riders == 0 {
        return 0;
    }

    u64::from(available_riders) * RIDE_TIME_PER_USER - 1
}
