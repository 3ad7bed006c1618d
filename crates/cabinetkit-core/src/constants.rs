//! Standard cabinet dimensions, in inches.
//!
//! These are the defaults behind [`crate::Dimensions`]; configuration may
//! override any of them per project.

// Panels
pub const PANEL_THICKNESS: f64 = 0.75;
pub const BACK_THICKNESS: f64 = PANEL_THICKNESS / 2.0;
pub const SHELF_SETBACK: f64 = 1.0;

// Toe kick
pub const TOE_KICK_HEIGHT: f64 = 4.0;
pub const TOE_KICK_DEPTH: f64 = 3.0;

// Reveals and overlays
pub const REVEAL: f64 = 0.125;
pub const FRAMELESS_REVEAL: f64 = 0.0625;
pub const CENTER_REVEAL: f64 = 0.125;
pub const OVERLAY: f64 = 0.5;

// Face frame
pub const FRAME_STILE_WIDTH: f64 = 1.5;
pub const FRAME_RAIL_WIDTH: f64 = 1.5;
pub const FRAME_THICKNESS: f64 = 0.75;

pub const FRONT_THICKNESS: f64 = 0.75;

// Appliances
pub const VENTILATION_CLEARANCE: f64 = 1.0;
pub const UTILITY_CLEARANCE: f64 = 0.25;
pub const COOKTOP_THICKNESS: f64 = 1.0;
pub const BURNER_RADIUS: f64 = 3.5;
pub const OVEN_OPENING_HEIGHT: f64 = 28.5;
pub const OVEN_OPENING_BOTTOM: f64 = 32.0;

// Shelving
pub const SHELF_THRESHOLD: f64 = 24.0;
pub const DISPLAY_SHELF_SPACING: f64 = 16.0;
pub const DISPLAY_SHELF_MIN_SPACING: f64 = 14.0;
pub const DISPLAY_SHELF_MAX_SPACING: f64 = 18.0;

// Corners
pub const CORNER_SIZE_SMALL: f64 = 24.0;
pub const CORNER_SIZE_LARGE: f64 = 36.0;

// Wall stacks
pub const STACK_LOWER_HEIGHT: f64 = 42.0;
pub const STACK_UNIT_HEIGHT: f64 = 12.0;
pub const STACK_REVEAL: f64 = 0.125;

// Countertops
pub const COUNTERTOP_THICKNESS: f64 = 1.5;
pub const COUNTERTOP_FRONT_OVERHANG: f64 = 1.0;
pub const COUNTERTOP_BACK_OVERHANG: f64 = 0.0;
pub const COUNTERTOP_SIDE_OVERHANG: f64 = 1.0;
pub const SEATING_EXTRA_DEPTH: f64 = 12.0;
pub const BACKSPLASH_HEIGHT: f64 = 4.0;
pub const BACKSPLASH_THICKNESS: f64 = 0.75;

// Hardware markers
pub const HANDLE_LENGTH: f64 = 4.0;
pub const HANDLE_WIDTH: f64 = 0.5;
pub const HANDLE_PROJECTION: f64 = 1.0;
pub const HANDLE_EDGE_INSET: f64 = 2.0;
pub const PULL_LENGTH: f64 = 6.0;
pub const PULL_TOP_INSET: f64 = 1.5;

// Front counts are capped so every slot keeps at least this much
pub const MIN_DRAWER_HEIGHT: f64 = 3.0;
pub const MIN_DOOR_WIDTH: f64 = 3.0;

// Runs
pub const WALL_MOUNT_HEIGHT: f64 = 54.0;
pub const STANDARD_WIDTHS: [f64; 10] = [36.0, 33.0, 30.0, 27.0, 24.0, 21.0, 18.0, 15.0, 12.0, 9.0];
pub const FILLER_THRESHOLD: f64 = 0.5;
pub const PLACEMENT_HEIGHT_TOLERANCE: f64 = 1.0;

/// Smallest extent a panel may have before it is treated as degenerate.
pub const DEGENERATE_EPSILON: f64 = 1e-3;

/// Graduated drawer splits, bottom drawer first. Counts above the table
/// fall back to equal splits.
pub const DRAWER_GRADUATIONS: [&[f64]; 5] = [
    &[1.0],
    &[0.55, 0.45],
    &[0.45, 0.30, 0.25],
    &[0.30, 0.25, 0.25, 0.20],
    &[0.25, 0.22, 0.20, 0.18, 0.15],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graduations_sum_to_one() {
        for row in DRAWER_GRADUATIONS {
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "row {:?} sums to {}", row, sum);
        }
    }

    #[test]
    fn test_graduations_largest_first() {
        for row in DRAWER_GRADUATIONS {
            assert!(row.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_standard_widths_descending() {
        assert!(STANDARD_WIDTHS.windows(2).all(|w| w[0] > w[1]));
    }
}
