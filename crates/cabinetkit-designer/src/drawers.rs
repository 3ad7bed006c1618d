//! Drawer height algorithms
//!
//! Graduated banks are largest at the bottom. Heights are always returned
//! bottom first.

use cabinetkit_core::Dimensions;
use tracing::warn;

use crate::front_config::{Section, Sizing};

/// Split `total_height` into `count` drawer slots.
///
/// Uses the graduation table for 1-5 drawers unless `equal_sizing` is set;
/// six or more drawers are always equal.
pub fn calculate_drawer_heights(count: usize, total_height: f64, equal_sizing: bool) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    match Dimensions::drawer_graduation(count).filter(|_| !equal_sizing) {
        Some(fractions) => fractions.iter().map(|f| f * total_height).collect(),
        None => vec![total_height / count as f64; count],
    }
}

/// Slot heights for a drawer section of height `total_height`.
///
/// Custom heights are used as given, scaled down only when they overflow
/// the section.
pub fn section_drawer_heights(section: &Section, total_height: f64) -> Vec<f64> {
    match (&section.sizing, &section.custom_heights) {
        (Sizing::Custom, Some(heights)) if !heights.is_empty() => {
            let sum: f64 = heights.iter().sum();
            if sum > total_height + 1e-9 && sum > 0.0 {
                warn!(
                    "custom drawer heights total {:.3} exceed {:.3}, scaling down",
                    sum, total_height
                );
                let scale = total_height / sum;
                heights.iter().map(|h| h * scale).collect()
            } else {
                heights.clone()
            }
        }
        (sizing, _) => calculate_drawer_heights(
            section.item_count,
            total_height,
            *sizing != Sizing::Graduated,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_config::SectionRole;

    fn assert_heights(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{a} != {e}");
        }
    }

    #[test]
    fn test_three_graduated() {
        let heights = calculate_drawer_heights(3, 30.0, false);
        assert_heights(&heights, &[13.5, 9.0, 7.5]);
        assert!((heights.iter().sum::<f64>() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_and_large_counts() {
        assert_heights(&calculate_drawer_heights(3, 30.0, true), &[10.0; 3]);
        assert_heights(&calculate_drawer_heights(6, 30.0, false), &[5.0; 6]);
        assert!(calculate_drawer_heights(0, 30.0, false).is_empty());
    }

    #[test]
    fn test_custom_heights_scale_down() {
        let section = Section {
            role: SectionRole::Drawer,
            height_ratio: 1.0,
            item_count: 2,
            sizing: Sizing::Custom,
            custom_heights: Some(vec![20.0, 20.0]),
        };
        assert_heights(&section_drawer_heights(&section, 30.0), &[15.0, 15.0]);
        assert_heights(&section_drawer_heights(&section, 50.0), &[20.0, 20.0]);
    }
}
