use super::*;
use proptest::prelude::*;

fn axis_strategy() -> impl Strategy<Value = BoundedAxis> {
    (-10_000i64..10_000, 0i64..50_000, 1i64..500, 0.5f32..64.0).prop_map(
        |(min, extent, unit, gap)| {
            BoundedAxis::new(min, min + extent, unit, gap).expect("valid axis")
        },
    )
}

proptest! {
    #[test]
    fn grid_values_round_trip(axis in axis_strategy(), fraction in 0.0f64..=1.0) {
        let units = (axis.unit_count() as f64 * fraction).floor() as i64;
        let value = axis.min() + units * axis.unit();
        let position = axis.space().value_to_position(value);
        prop_assert_eq!(axis.space().position_to_value(position), value);
        prop_assert_eq!(
            axis.space().value_to_position(axis.space().position_to_value(position)),
            position
        );
    }

    #[test]
    fn snap_is_on_grid_in_range_and_idempotent(
        axis in axis_strategy(),
        position in -1.0e6f32..1.0e6,
    ) {
        let snapped = SnapResolver::snap(&axis, position);
        prop_assert!(axis.contains(snapped.value));
        prop_assert_eq!((snapped.value - axis.min()) % axis.unit(), 0);
        prop_assert_eq!(SnapResolver::snap(&axis, snapped.position), snapped);
    }

    #[test]
    fn value_at_stays_in_range(axis in axis_strategy(), position in proptest::num::f32::ANY) {
        let value = axis.value_at(position);
        prop_assert!(axis.contains(value));
    }

    #[test]
    fn larger_scale_never_selects_a_coarser_tier(a in 0.0f32..10.0, b in 0.0f32..10.0) {
        let quantizer = ZoomTierQuantizer::default();
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(quantizer.tier_index(low) >= quantizer.tier_index(high));
    }

    #[test]
    fn tier_index_brackets_the_scale(scale in 0.015f32..=6.0) {
        let quantizer = ZoomTierQuantizer::default();
        let index = quantizer.tier_index(scale);
        prop_assert!(quantizer.tier(index).threshold <= scale);
        if index > 0 {
            prop_assert!(scale < quantizer.tier(index - 1).threshold);
        }
    }

    #[test]
    fn tick_windows_stay_inside_the_axis(
        axis in axis_strategy(),
        fraction in 0.0f32..=1.0,
        width in 1.0f32..4_000.0,
    ) {
        let position = axis.total_span() * fraction;
        let window = TickWindow::new(
            &axis,
            position,
            width,
            2,
            axis.unit() * 10,
            LabelFormat::Decimal(DecimalScale::INTEGER),
        );
        for tick in &window {
            prop_assert!(axis.contains(tick.raw));
            prop_assert!(tick.pixel_offset >= -4.0 * axis.pixels_per_unit());
            prop_assert!(tick.pixel_offset <= width + 4.0 * axis.pixels_per_unit());
        }
    }
}
