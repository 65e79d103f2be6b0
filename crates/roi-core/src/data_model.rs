//! Data Model: BusinessInputs, ModelAssumptions, GainCategory, ProfilePatch
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RoiError;

/// Operational metrics of the business being evaluated.
///
/// Percentages (`no_show_rate`, `conversion_rate`) are whole numbers 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInputs {
    /// Jobs booked per month
    pub monthly_bookings: f64,
    /// Average revenue of a single job
    pub avg_job_value: f64,
    /// Hours per week spent on scheduling
    pub scheduling_time: f64,
    /// Blended hourly labor cost
    pub hourly_rate: f64,
    /// Calls per week that go unanswered
    pub missed_calls_per_week: f64,
    /// Percentage of booked jobs that no-show
    pub no_show_rate: f64,
    /// Percentage of inquiries that convert
    pub conversion_rate: f64,
}

impl Default for BusinessInputs {
    fn default() -> Self {
        Self {
            monthly_bookings: 50.0,
            avg_job_value: 200.0,
            scheduling_time: 4.0,
            hourly_rate: 50.0,
            missed_calls_per_week: 10.0,
            no_show_rate: 15.0,
            conversion_rate: 65.0,
        }
    }
}

impl BusinessInputs {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::MonthlyBookings => self.monthly_bookings,
            InputField::AvgJobValue => self.avg_job_value,
            InputField::SchedulingTime => self.scheduling_time,
            InputField::HourlyRate => self.hourly_rate,
            InputField::MissedCallsPerWeek => self.missed_calls_per_week,
            InputField::NoShowRate => self.no_show_rate,
            InputField::ConversionRate => self.conversion_rate,
        }
    }

    pub fn set(&mut self, field: InputField, value: f64) {
        let slot = match field {
            InputField::MonthlyBookings => &mut self.monthly_bookings,
            InputField::AvgJobValue => &mut self.avg_job_value,
            InputField::SchedulingTime => &mut self.scheduling_time,
            InputField::HourlyRate => &mut self.hourly_rate,
            InputField::MissedCallsPerWeek => &mut self.missed_calls_per_week,
            InputField::NoShowRate => &mut self.no_show_rate,
            InputField::ConversionRate => &mut self.conversion_rate,
        };
        *slot = value;
    }

    /// Return a copy with every field present in `patch` overwritten.
    pub fn merged(&self, patch: &ProfilePatch) -> Self {
        let mut merged = *self;
        for (field, value) in patch.fields() {
            merged.set(field, value as f64);
        }
        merged
    }
}

/// Tunable assumptions of the automation model.
///
/// Every field except `monthly_leads` is a whole-number percentage 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAssumptions {
    pub call_to_booking_rate: f64,
    pub voicemail_callback_rate: f64,
    /// Inquiries per month (a count, not a percentage)
    pub monthly_leads: f64,
    pub target_conversion_rate: f64,
    pub service_pro_capture_rate: f64,
    pub scheduling_time_reduction: f64,
    pub target_no_show_rate: f64,
    pub conversion_lift: f64,
    pub after_hours_booking_rate: f64,
}

impl Default for ModelAssumptions {
    fn default() -> Self {
        Self {
            call_to_booking_rate: 50.0,
            voicemail_callback_rate: 50.0,
            monthly_leads: 100.0,
            target_conversion_rate: 85.0,
            service_pro_capture_rate: 95.0,
            scheduling_time_reduction: 75.0,
            target_no_show_rate: 5.0,
            conversion_lift: 25.0,
            after_hours_booking_rate: 20.0,
        }
    }
}

impl ModelAssumptions {
    pub fn get(&self, field: AssumptionField) -> f64 {
        match field {
            AssumptionField::CallToBookingRate => self.call_to_booking_rate,
            AssumptionField::VoicemailCallbackRate => self.voicemail_callback_rate,
            AssumptionField::MonthlyLeads => self.monthly_leads,
            AssumptionField::TargetConversionRate => self.target_conversion_rate,
            AssumptionField::ServiceProCaptureRate => self.service_pro_capture_rate,
            AssumptionField::SchedulingTimeReduction => self.scheduling_time_reduction,
            AssumptionField::TargetNoShowRate => self.target_no_show_rate,
            AssumptionField::ConversionLift => self.conversion_lift,
            AssumptionField::AfterHoursBookingRate => self.after_hours_booking_rate,
        }
    }

    pub fn set(&mut self, field: AssumptionField, value: f64) {
        let slot = match field {
            AssumptionField::CallToBookingRate => &mut self.call_to_booking_rate,
            AssumptionField::VoicemailCallbackRate => &mut self.voicemail_callback_rate,
            AssumptionField::MonthlyLeads => &mut self.monthly_leads,
            AssumptionField::TargetConversionRate => &mut self.target_conversion_rate,
            AssumptionField::ServiceProCaptureRate => &mut self.service_pro_capture_rate,
            AssumptionField::SchedulingTimeReduction => &mut self.scheduling_time_reduction,
            AssumptionField::TargetNoShowRate => &mut self.target_no_show_rate,
            AssumptionField::ConversionLift => &mut self.conversion_lift,
            AssumptionField::AfterHoursBookingRate => &mut self.after_hours_booking_rate,
        };
        *slot = value;
    }
}

/// Automation benefit classes a product can unlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GainCategory {
    TimeSavings,
    CallsCaptured,
    NoShowReduction,
    ConversionLift,
    AfterHoursBookings,
}

impl GainCategory {
    pub const ALL: [GainCategory; 5] = [
        GainCategory::TimeSavings,
        GainCategory::CallsCaptured,
        GainCategory::NoShowReduction,
        GainCategory::ConversionLift,
        GainCategory::AfterHoursBookings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GainCategory::TimeSavings => "Time Savings",
            GainCategory::CallsCaptured => "Calls Captured",
            GainCategory::NoShowReduction => "No-Show Reduction",
            GainCategory::ConversionLift => "Conversion Lift",
            GainCategory::AfterHoursBookings => "After-Hours Bookings",
        }
    }
}

impl std::fmt::Display for GainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identifies one field of [`BusinessInputs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    MonthlyBookings,
    AvgJobValue,
    SchedulingTime,
    HourlyRate,
    MissedCallsPerWeek,
    NoShowRate,
    ConversionRate,
}

impl InputField {
    pub const ALL: [InputField; 7] = [
        InputField::MonthlyBookings,
        InputField::AvgJobValue,
        InputField::SchedulingTime,
        InputField::HourlyRate,
        InputField::MissedCallsPerWeek,
        InputField::NoShowRate,
        InputField::ConversionRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::MonthlyBookings => "monthlyBookings",
            InputField::AvgJobValue => "avgJobValue",
            InputField::SchedulingTime => "schedulingTime",
            InputField::HourlyRate => "hourlyRate",
            InputField::MissedCallsPerWeek => "missedCallsPerWeek",
            InputField::NoShowRate => "noShowRate",
            InputField::ConversionRate => "conversionRate",
        }
    }
}

impl FromStr for InputField {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| RoiError::InputError(format!("unknown input field '{}'", s)))
    }
}

/// Identifies one field of [`ModelAssumptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssumptionField {
    CallToBookingRate,
    VoicemailCallbackRate,
    MonthlyLeads,
    TargetConversionRate,
    ServiceProCaptureRate,
    SchedulingTimeReduction,
    TargetNoShowRate,
    ConversionLift,
    AfterHoursBookingRate,
}

impl AssumptionField {
    pub const ALL: [AssumptionField; 9] = [
        AssumptionField::CallToBookingRate,
        AssumptionField::VoicemailCallbackRate,
        AssumptionField::MonthlyLeads,
        AssumptionField::TargetConversionRate,
        AssumptionField::ServiceProCaptureRate,
        AssumptionField::SchedulingTimeReduction,
        AssumptionField::TargetNoShowRate,
        AssumptionField::ConversionLift,
        AssumptionField::AfterHoursBookingRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssumptionField::CallToBookingRate => "callToBookingRate",
            AssumptionField::VoicemailCallbackRate => "voicemailCallbackRate",
            AssumptionField::MonthlyLeads => "monthlyLeads",
            AssumptionField::TargetConversionRate => "targetConversionRate",
            AssumptionField::ServiceProCaptureRate => "serviceProCaptureRate",
            AssumptionField::SchedulingTimeReduction => "schedulingTimeReduction",
            AssumptionField::TargetNoShowRate => "targetNoShowRate",
            AssumptionField::ConversionLift => "conversionLift",
            AssumptionField::AfterHoursBookingRate => "afterHoursBookingRate",
        }
    }
}

impl FromStr for AssumptionField {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssumptionField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| RoiError::InputError(format!("unknown assumption field '{}'", s)))
    }
}

/// Partial set of input fields produced by a profile generator.
///
/// Absent fields leave the current value untouched when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_bookings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_job_value: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduling_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_calls_per_week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_show_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<u32>,
}

impl ProfilePatch {
    /// Present fields in declaration order
    pub fn fields(&self) -> Vec<(InputField, u32)> {
        [
            (InputField::MonthlyBookings, self.monthly_bookings),
            (InputField::AvgJobValue, self.avg_job_value),
            (InputField::SchedulingTime, self.scheduling_time),
            (InputField::HourlyRate, self.hourly_rate),
            (InputField::MissedCallsPerWeek, self.missed_calls_per_week),
            (InputField::NoShowRate, self.no_show_rate),
            (InputField::ConversionRate, self.conversion_rate),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    pub fn set(&mut self, field: InputField, value: u32) {
        let slot = match field {
            InputField::MonthlyBookings => &mut self.monthly_bookings,
            InputField::AvgJobValue => &mut self.avg_job_value,
            InputField::SchedulingTime => &mut self.scheduling_time,
            InputField::HourlyRate => &mut self.hourly_rate,
            InputField::MissedCallsPerWeek => &mut self.missed_calls_per_week,
            InputField::NoShowRate => &mut self.no_show_rate,
            InputField::ConversionRate => &mut self.conversion_rate,
        };
        *slot = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}
