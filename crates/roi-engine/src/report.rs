//! Computed report
use roi_core::{fingerprint, GainCategory};
use serde::{Deserialize, Serialize};

/// Full engine output, recomputed fresh on every change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub current: CurrentCosts,
    pub gains: Gains,
    pub summary: RoiSummary,
}

impl Report {
    /// Content hash of the report, stable across identical recomputes
    pub fn fingerprint(&self) -> String {
        fingerprint(self)
    }
}

/// What the business loses per month today, independent of any product
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCosts {
    pub current_monthly_revenue: f64,
    pub labor_cost_scheduling: f64,
    pub lost_bookings: f64,
    pub lost_revenue_no_shows: f64,
    pub opportunity_cost: f64,
    pub total_current_cost: f64,
}

/// Monthly gains per category; zero for inactive categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gains {
    pub time_savings_gain: f64,
    pub calls_captured_gain: f64,
    pub no_show_reduction_gain: f64,
    pub conversion_lift_gain: f64,
    pub after_hours_bookings_gain: f64,
    pub total_monthly_gain: f64,
}

impl Gains {
    pub fn get(&self, gain: GainCategory) -> f64 {
        match gain {
            GainCategory::TimeSavings => self.time_savings_gain,
            GainCategory::CallsCaptured => self.calls_captured_gain,
            GainCategory::NoShowReduction => self.no_show_reduction_gain,
            GainCategory::ConversionLift => self.conversion_lift_gain,
            GainCategory::AfterHoursBookings => self.after_hours_bookings_gain,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiSummary {
    /// Recurring product cost
    pub monthly_cost: f64,
    /// Up-front product cost
    pub one_time_cost: f64,
    pub amortized_one_time_cost: f64,
    pub net_monthly_profit: f64,
    pub roi_percentage: f64,
    pub payback_period_days: f64,
    pub break_even_bookings: f64,
}
