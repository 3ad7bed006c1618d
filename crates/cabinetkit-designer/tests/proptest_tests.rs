//! Property-based tests for front sectioning and run layout using `proptest`.

use proptest::prelude::*;

use cabinetkit_core::Dimensions;
use cabinetkit_designer::{
    calculate_drawer_heights, section_drawer_heights, ApplianceGap, CabinetRun, FrontConfig,
    RunLayoutOptions, SectionContext,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Every preset key plus a few counted drawer keys.
fn arb_preset_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("door".to_string()),
        Just("doors".to_string()),
        Just("drawers".to_string()),
        Just("drawer_bank_3".to_string()),
        Just("3_doors_graduated".to_string()),
        Just("drawer_over_doors".to_string()),
        Just("custom_drawers".to_string()),
        Just("dishwasher".to_string()),
        (1usize..8).prop_map(|n| format!("{}_drawers", n)),
        (1usize..8).prop_map(|n| format!("{}_equal_drawers", n)),
    ]
}

/// One composite part such as `"2 drawers"` or `"door"`.
fn arb_part() -> impl Strategy<Value = String> {
    (0usize..5, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(count, drawer, plural, equal)| {
            let word = match (drawer, plural) {
                (true, true) => "drawers",
                (true, false) => "drawer",
                (false, true) => "doors",
                (false, false) => "door",
            };
            let equal = if drawer && equal { "equal " } else { "" };
            if count == 0 {
                format!("{}{}", equal, word)
            } else {
                format!("{} {}{}", count, equal, word)
            }
        },
    )
}

fn arb_composite() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_part(), 1..5).prop_map(|parts| parts.join(" + "))
}

fn arb_custom_heights() -> impl Strategy<Value = Option<Vec<f64>>> {
    prop::option::of(prop::collection::vec(3.0f64..12.0, 1..4))
}

/// Run length with at most one appliance gap that fits inside it.
fn arb_run() -> impl Strategy<Value = (f64, Option<(f64, f64)>)> {
    (30.0f64..240.0).prop_flat_map(|total| {
        let gap = prop::option::of(
            prop_oneof![Just(24.0), Just(30.0), Just(36.0)]
                .prop_filter("gap must fit", move |w| *w < total)
                .prop_flat_map(move |w| (0.0f64..(total - w), Just(w))),
        );
        (Just(total), gap)
    })
}

fn laid_out(total: f64, gap: Option<(f64, f64)>, options: &RunLayoutOptions) -> CabinetRun {
    let gaps = gap
        .map(|(position, width)| vec![ApplianceGap::new(position, width, "Range")])
        .unwrap_or_default();
    let mut run = CabinetRun::new("Run 1", total, gaps).unwrap();
    run.auto_layout(options, &Dimensions::default()).unwrap();
    run
}

// ---------------------------------------------------------------------------
// Section ratios
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn preset_ratios_sum_to_one(key in arb_preset_key(), custom in arb_custom_heights()) {
        let ctx = SectionContext {
            interior_height: Some(30.5),
            custom_drawer_heights: custom.as_deref(),
        };
        let parsed = FrontConfig::parse(&key).sections(&ctx);
        prop_assert!(!parsed.is_empty());
        prop_assert!((parsed.ratio_sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn composite_ratios_sum_to_one(raw in arb_composite(), custom in arb_custom_heights()) {
        let ctx = SectionContext {
            interior_height: Some(30.5),
            custom_drawer_heights: custom.as_deref(),
        };
        let config = FrontConfig::parse(&raw);
        prop_assert!(!config.is_fallback());
        let parsed = config.sections(&ctx);
        prop_assert!(!parsed.is_empty());
        prop_assert!((parsed.ratio_sum() - 1.0).abs() < 1e-6);
        prop_assert!(parsed.sections.iter().all(|s| s.height_ratio > 0.0 && s.item_count > 0));
    }

    #[test]
    fn drawer_heights_fill_their_band(count in 1usize..9, total in 4.0f64..40.0, equal in any::<bool>()) {
        let heights = calculate_drawer_heights(count, total, equal);
        prop_assert_eq!(heights.len(), count);
        prop_assert!((heights.iter().sum::<f64>() - total).abs() < 1e-6);
        prop_assert!(heights.iter().all(|h| *h > 0.0));
    }

    #[test]
    fn section_heights_never_overflow(raw in arb_composite(), custom in arb_custom_heights()) {
        let interior = 30.5;
        let ctx = SectionContext {
            interior_height: Some(interior),
            custom_drawer_heights: custom.as_deref(),
        };
        let parsed = FrontConfig::parse(&raw).sections(&ctx);
        for section in &parsed.sections {
            let band = interior * section.height_ratio;
            let heights = section_drawer_heights(section, band);
            prop_assert!(heights.iter().sum::<f64>() <= band + 1e-6);
        }
    }
}

// ---------------------------------------------------------------------------
// Run layout
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn run_layout_conserves_length((total, gap) in arb_run()) {
        let options = RunLayoutOptions::default();
        let run = laid_out(total, gap, &options);

        for cabinet in &run.cabinets {
            prop_assert!(options.standard_widths.contains(&cabinet.width));
        }
        for filler in &run.filler_strips {
            prop_assert!(filler.width > options.filler_threshold);
        }

        // At most one unfilled sliver per free segment.
        let segments = if gap.is_some() { 2.0 } else { 1.0 };
        let slack = run.unallocated();
        prop_assert!(slack > -1e-6);
        prop_assert!(slack <= options.filler_threshold * segments + 1e-6);

        let sum = run.cabinet_width_sum() + run.gap_width_sum() + run.filler_width_sum();
        prop_assert!((sum + slack - total).abs() < 1e-6);
    }

    #[test]
    fn run_layout_is_idempotent((total, gap) in arb_run()) {
        let options = RunLayoutOptions::default();
        let mut run = laid_out(total, gap, &options);
        let cabinets = run.cabinets.clone();
        let fillers = run.filler_strips.clone();

        run.auto_layout(&options, &Dimensions::default()).unwrap();
        prop_assert_eq!(&run.cabinets, &cabinets);
        prop_assert_eq!(&run.filler_strips, &fillers);
    }

    #[test]
    fn run_cabinets_never_overlap((total, gap) in arb_run()) {
        let run = laid_out(total, gap, &RunLayoutOptions::default());
        let mut spans: Vec<(f64, f64)> = run
            .cabinets
            .iter()
            .map(|c| (c.position.x, c.position.x + c.width))
            .chain(run.appliance_gaps.iter().map(|g| (g.position, g.end())))
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));
        for pair in spans.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0 + 1e-6);
        }
        prop_assert!(spans.iter().all(|s| s.0 >= -1e-6 && s.1 <= total + 1e-6));
    }
}
