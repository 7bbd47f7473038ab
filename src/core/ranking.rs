//! Driver ordering by current race position

use super::types::Driver;

/// Position used to rank a driver.
///
/// Taken from the most recent lap, falling back exactly one lap when the
/// most recent lap has no position yet. `None` when neither lap carries a
/// position, including an empty lap history.
pub(crate) fn effective_position(driver: &Driver) -> Option<u32> {
    driver
        .last_lap()
        .and_then(|lap| lap.position)
        .or_else(|| driver.previous_lap().and_then(|lap| lap.position))
}

/// Rank drivers by effective position, leader first.
///
/// The sort is stable: equal positions keep input order. Drivers without an
/// effective position rank after every positioned driver.
pub(crate) fn rank_drivers(drivers: &[Driver]) -> Vec<&Driver> {
    let mut ranked: Vec<&Driver> = drivers.iter().collect();
    ranked.sort_by_key(|driver| match effective_position(driver) {
        Some(position) => (false, position),
        None => (true, 0),
    });
    ranked
}
