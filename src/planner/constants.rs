/// Placeholder cost estimate shown in the plan summary, in rupees.
/// There is no pricing engine behind it.
pub const ESTIMATED_COST_INR: u64 = 2500;

/// Totals are rounded to a billionth before display, so summation noise
/// such as `0.08499999999999999` formats like the intended `0.085`.
pub const DISPLAY_SNAP_SCALE: f64 = 1e9;

/// Decimal places used for non-whole totals.
pub const DISPLAY_DECIMALS: usize = 2;

/// Minimum Jaro-Winkler score for a typed dish name to be offered as a match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Maximum number of fuzzy candidates offered at once.
pub const FUZZY_MATCH_LIMIT: usize = 5;
