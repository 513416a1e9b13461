/// Minutes added to a journey every time consecutive segments use different lines
pub const CHANGE_PENALTY_MINUTES: f64 = 2.0;

/// Header of the first column in a network CSV export
pub const CSV_FROM_HEADER: &str = "From";
