//! Plain data row types written by metrics backends.

/// One sampled waiting-time value for one station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingTimeRow {
    pub station_id:   u32,
    pub tick:         u64,
    /// Cumulative rider-minutes waited at this station, as of entering `tick`.
    pub waiting_time: u64,
}

/// Fleet-wide waiting-time total for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTotalRow {
    pub tick:               u64,
    pub waiting_time_total: u64,
}
