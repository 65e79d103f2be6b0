//! ROI computation
//!
//! Three passes over one immutable snapshot: what the business loses
//! today, what the selected products recover, and how that compares to
//! what they cost.

use crate::report::{CurrentCosts, Gains, Report, RoiSummary};
use crate::resolver::ResolvedSelection;
use roi_core::{BusinessInputs, GainCategory, ModelAssumptions};

/// Haircut applied to every gain estimate (35% reduction).
pub const CONSERVATIVE_FACTOR: f64 = 0.65;

/// Weeks-per-month approximation for weekly figures
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Days-per-month used to turn monthly gain into a daily rate
pub const DAYS_PER_MONTH: f64 = 30.0;

/// One-time cost is spread straight-line over this many months
pub const AMORTIZATION_MONTHS: f64 = 12.0;

/// Percentage fields converted to fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fractions {
    pub call_to_booking: f64,
    pub voicemail_callback: f64,
    pub target_conversion: f64,
    pub service_capture: f64,
    pub scheduling_time_reduction: f64,
    pub target_no_show: f64,
    pub conversion_lift: f64,
    pub after_hours_booking: f64,
    pub current_no_show: f64,
    pub current_conversion: f64,
}

impl Fractions {
    pub fn new(inputs: &BusinessInputs, assumptions: &ModelAssumptions) -> Self {
        Self {
            call_to_booking: assumptions.call_to_booking_rate / 100.0,
            voicemail_callback: assumptions.voicemail_callback_rate / 100.0,
            target_conversion: assumptions.target_conversion_rate / 100.0,
            service_capture: assumptions.service_pro_capture_rate / 100.0,
            scheduling_time_reduction: assumptions.scheduling_time_reduction / 100.0,
            target_no_show: assumptions.target_no_show_rate / 100.0,
            conversion_lift: assumptions.conversion_lift / 100.0,
            after_hours_booking: assumptions.after_hours_booking_rate / 100.0,
            current_no_show: inputs.no_show_rate / 100.0,
            current_conversion: inputs.conversion_rate / 100.0,
        }
    }
}

/// Compute the full report for one snapshot
pub fn compute(
    inputs: &BusinessInputs,
    assumptions: &ModelAssumptions,
    resolved: &ResolvedSelection,
) -> Report {
    let fractions = Fractions::new(inputs, assumptions);
    let current = current_costs(inputs, assumptions, &fractions);
    let gains = gains(inputs, assumptions, &fractions, &current, resolved);
    let summary = summary(inputs, &gains, resolved);

    Report {
        current,
        gains,
        summary,
    }
}

fn current_costs(
    inputs: &BusinessInputs,
    assumptions: &ModelAssumptions,
    f: &Fractions,
) -> CurrentCosts {
    let job = inputs.avg_job_value;
    let missed_per_month = inputs.missed_calls_per_week * WEEKS_PER_MONTH;

    let current_monthly_revenue = inputs.monthly_bookings * job;
    let labor_cost_scheduling = (inputs.scheduling_time * WEEKS_PER_MONTH) * inputs.hourly_rate;
    let lost_bookings = missed_per_month * (1.0 - f.voicemail_callback) * f.call_to_booking * job;
    let lost_revenue_no_shows = inputs.monthly_bookings * f.current_no_show * job;
    let opportunity_cost = assumptions.monthly_leads
        * (f.target_conversion - f.current_conversion).max(0.0)
        * job;

    CurrentCosts {
        current_monthly_revenue,
        labor_cost_scheduling,
        lost_bookings,
        lost_revenue_no_shows,
        opportunity_cost,
        total_current_cost: labor_cost_scheduling
            + lost_bookings
            + lost_revenue_no_shows
            + opportunity_cost,
    }
}

fn gains(
    inputs: &BusinessInputs,
    assumptions: &ModelAssumptions,
    f: &Fractions,
    current: &CurrentCosts,
    resolved: &ResolvedSelection,
) -> Gains {
    let job = inputs.avg_job_value;
    let gated = |gain: GainCategory, raw: f64| {
        if resolved.is_active(gain) {
            raw * CONSERVATIVE_FACTOR
        } else {
            0.0
        }
    };

    let time_savings_gain = gated(
        GainCategory::TimeSavings,
        current.labor_cost_scheduling * f.scheduling_time_reduction,
    );
    // Negative when callbacks already beat the capture rate; kept signed.
    let calls_captured_gain = gated(
        GainCategory::CallsCaptured,
        (inputs.missed_calls_per_week * WEEKS_PER_MONTH * job * f.call_to_booking)
            * (f.service_capture - f.voicemail_callback),
    );
    let no_show_reduction_gain = gated(
        GainCategory::NoShowReduction,
        inputs.monthly_bookings * (f.current_no_show - f.target_no_show).max(0.0) * job,
    );
    let conversion_lift_gain = gated(
        GainCategory::ConversionLift,
        assumptions.monthly_leads
            * (f.current_conversion * (1.0 + f.conversion_lift) - f.current_conversion)
            * job,
    );
    let after_hours_bookings_gain = gated(
        GainCategory::AfterHoursBookings,
        inputs.monthly_bookings * f.after_hours_booking * job,
    );

    Gains {
        time_savings_gain,
        calls_captured_gain,
        no_show_reduction_gain,
        conversion_lift_gain,
        after_hours_bookings_gain,
        total_monthly_gain: time_savings_gain
            + calls_captured_gain
            + no_show_reduction_gain
            + conversion_lift_gain
            + after_hours_bookings_gain,
    }
}

fn summary(inputs: &BusinessInputs, gains: &Gains, resolved: &ResolvedSelection) -> RoiSummary {
    let monthly_cost = resolved.monthly_cost;
    let one_time_cost = resolved.one_time_cost;
    let total_gain = gains.total_monthly_gain;

    let amortized_one_time_cost = one_time_cost / AMORTIZATION_MONTHS;
    let net_monthly_profit = total_gain - (monthly_cost + amortized_one_time_cost);

    // Only the recurring cost offsets the ROI ratio; one-time cost shows up
    // in payback and break-even.
    let roi_percentage = if monthly_cost > 0.0 {
        ((total_gain - monthly_cost) / monthly_cost) * 100.0
    } else {
        0.0
    };
    let payback_period_days = if one_time_cost > 0.0 && total_gain > 0.0 {
        one_time_cost / (total_gain / DAYS_PER_MONTH)
    } else {
        0.0
    };
    let break_even_bookings = if inputs.avg_job_value > 0.0 {
        (monthly_cost + one_time_cost) / inputs.avg_job_value
    } else {
        0.0
    };

    RoiSummary {
        monthly_cost,
        one_time_cost,
        amortized_one_time_cost,
        net_monthly_profit,
        roi_percentage,
        payback_period_days,
        break_even_bookings,
    }
}
