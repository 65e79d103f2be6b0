//! Property tests over the whole non-negative input domain.

use proptest::prelude::*;
use roi_core::{BusinessInputs, GainCategory, ModelAssumptions};
use roi_engine::{compute, Report, ResolvedSelection};
use std::collections::BTreeSet;

fn inputs_strategy() -> impl Strategy<Value = BusinessInputs> {
    (
        0.0..500.0f64,
        0.0..2_000.0f64,
        0.0..40.0f64,
        0.0..150.0f64,
        0.0..100.0f64,
        0.0..=100.0f64,
        0.0..=100.0f64,
    )
        .prop_map(|(b, v, s, h, m, n, c)| BusinessInputs {
            monthly_bookings: b,
            avg_job_value: v,
            scheduling_time: s,
            hourly_rate: h,
            missed_calls_per_week: m,
            no_show_rate: n,
            conversion_rate: c,
        })
}

fn assumptions_strategy() -> impl Strategy<Value = ModelAssumptions> {
    (
        0.0..=100.0f64,
        0.0..=100.0f64,
        0.0..1_000.0f64,
        0.0..=100.0f64,
        0.0..=100.0f64,
        0.0..=100.0f64,
        0.0..=100.0f64,
        0.0..=100.0f64,
        0.0..=100.0f64,
    )
        .prop_map(|(a, b, c, d, e, f, g, h, i)| ModelAssumptions {
            call_to_booking_rate: a,
            voicemail_callback_rate: b,
            monthly_leads: c,
            target_conversion_rate: d,
            service_pro_capture_rate: e,
            scheduling_time_reduction: f,
            target_no_show_rate: g,
            conversion_lift: h,
            after_hours_booking_rate: i,
        })
}

fn resolved_strategy() -> impl Strategy<Value = ResolvedSelection> {
    (
        proptest::sample::subsequence(GainCategory::ALL.to_vec(), 0..=5),
        prop_oneof![Just(0.0), 0.0..500.0f64],
        prop_oneof![Just(0.0), 0.0..10_000.0f64],
    )
        .prop_map(|(gains, monthly_cost, one_time_cost)| ResolvedSelection {
            active_gains: gains.into_iter().collect::<BTreeSet<_>>(),
            monthly_cost,
            one_time_cost,
        })
}

fn all_finite(report: &Report) -> bool {
    let json = serde_json::to_value(report).unwrap();
    ["current", "gains", "summary"].iter().all(|section| {
        json[section]
            .as_object()
            .unwrap()
            .values()
            .all(|v| v.as_f64().is_some_and(f64::is_finite))
    })
}

proptest! {
    #[test]
    fn compute_is_pure(
        inputs in inputs_strategy(),
        assumptions in assumptions_strategy(),
        resolved in resolved_strategy(),
    ) {
        let a = compute(&inputs, &assumptions, &resolved);
        let b = compute(&inputs, &assumptions, &resolved);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn totals_are_additive(
        inputs in inputs_strategy(),
        assumptions in assumptions_strategy(),
        resolved in resolved_strategy(),
    ) {
        let r = compute(&inputs, &assumptions, &resolved);
        let c = r.current;
        prop_assert_eq!(
            c.total_current_cost,
            c.labor_cost_scheduling + c.lost_bookings + c.lost_revenue_no_shows + c.opportunity_cost
        );
        let g = r.gains;
        prop_assert_eq!(
            g.total_monthly_gain,
            g.time_savings_gain + g.calls_captured_gain + g.no_show_reduction_gain
                + g.conversion_lift_gain + g.after_hours_bookings_gain
        );
    }

    #[test]
    fn inactive_gains_are_zero(
        inputs in inputs_strategy(),
        assumptions in assumptions_strategy(),
        resolved in resolved_strategy(),
    ) {
        let r = compute(&inputs, &assumptions, &resolved);
        for gain in GainCategory::ALL {
            if !resolved.is_active(gain) {
                prop_assert_eq!(r.gains.get(gain), 0.0);
            }
        }
    }

    #[test]
    fn floors_hold(
        inputs in inputs_strategy(),
        assumptions in assumptions_strategy(),
        resolved in resolved_strategy(),
    ) {
        let r = compute(&inputs, &assumptions, &resolved);
        prop_assert!(r.current.opportunity_cost >= 0.0);
        prop_assert!(r.gains.no_show_reduction_gain >= 0.0);
    }

    #[test]
    fn zero_guards_hold(
        inputs in inputs_strategy(),
        assumptions in assumptions_strategy(),
        resolved in resolved_strategy(),
    ) {
        let r = compute(&inputs, &assumptions, &resolved);
        if resolved.monthly_cost == 0.0 {
            prop_assert_eq!(r.summary.roi_percentage, 0.0);
        }
        if resolved.one_time_cost == 0.0 || r.gains.total_monthly_gain <= 0.0 {
            prop_assert_eq!(r.summary.payback_period_days, 0.0);
        }
        if inputs.avg_job_value == 0.0 {
            prop_assert_eq!(r.summary.break_even_bookings, 0.0);
        }
        prop_assert!(all_finite(&r));
    }
}
