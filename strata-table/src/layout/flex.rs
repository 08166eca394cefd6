//! Shared flex distribution logic for column widths.
//!
//! Both the committed pass and the intrinsic height query size columns the
//! same way: every column starts at its own preferred contribution, then the
//! space left over is handed to flexible columns in proportion to their
//! weights. That second step lives here.

/// Grow flexible columns to fill `available_space`.
///
/// `widths` holds each column's starting width and is updated in place.
/// `flex` holds each column's weight (0 for inflexible columns). This is a
/// single proportional pass: nothing is clamped or redistributed, and when
/// there is no space left (or no flexible column) nothing changes.
///
/// # Returns
/// The total width added.
pub fn distribute_leftover(widths: &mut [f32], flex: &[f32], available_space: f32) -> f32 {
    debug_assert_eq!(widths.len(), flex.len());

    let total_flex: f32 = flex.iter().sum();
    if total_flex <= 0.0 || available_space.is_nan() || available_space <= 0.0 {
        return 0.0;
    }

    let mut added = 0.0f32;
    for (width, &weight) in widths.iter_mut().zip(flex) {
        if weight > 0.0 {
            let share = available_space * (weight / total_flex);
            *width += share;
            added += share;
        }
    }
    added
}

// =========================================================================
// Tests
// =========================================================================
