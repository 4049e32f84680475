/// Turns a `T` tile lasts when the map gives no explicit count.
pub const DEFAULT_TIMED_TURNS: i32 = 3;

/// Generated-state budget for one search run.
pub const DEFAULT_MAX_GENERATED_STATES: usize = 150_000;

/// Bumped whenever the field list or layout of `StateKey` changes.
pub const STATE_KEY_VERSION: u8 = 1;
