//! Business-day convention used by [`Calendar::adjust`](crate::calendar::Calendar::adjust).

/// How to adjust a date that falls on a closed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Choose the first open day after the given closed day.
    Following,
    /// Choose the first open day after the given closed day unless it belongs
    /// to a different month; in that case choose the first open day before
    /// it.
    ModifiedFollowing,
    /// Choose the first open day before the given closed day.
    Preceding,
    /// Choose the first open day before the given closed day unless it
    /// belongs to a different month; in that case choose the first open day
    /// after it.
    ModifiedPreceding,
    /// Do not adjust (keep the original date).
    Unadjusted,
    /// Choose the nearest open day.  In case of a tie, use the following
    /// convention.
    Nearest,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Nearest => "Nearest",
        };
        write!(f, "{s}")
    }
}
