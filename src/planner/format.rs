use crate::planner::constants::{DISPLAY_DECIMALS, DISPLAY_SNAP_SCALE};

/// Format an ingredient total for display.
///
/// Whole numbers print without decimals; anything else is rounded half away
/// from zero to two decimals. Only the displayed string is rounded.
pub fn format_total(total: f64) -> String {
    let snapped = (total * DISPLAY_SNAP_SCALE).round() / DISPLAY_SNAP_SCALE;
    if snapped.fract() == 0.0 {
        return format!("{:.0}", snapped);
    }

    let scale = 10f64.powi(DISPLAY_DECIMALS as i32);
    let rounded = (snapped * scale).round() / scale;
    format!("{:.*}", DISPLAY_DECIMALS, rounded)
}

/// Format a rupee amount with thousands separators, e.g. `₹2,500`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{}", grouped)
}
