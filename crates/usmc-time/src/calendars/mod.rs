//! Concrete market calendars.

/// United States equities and futures calendars.
pub mod united_states;
