//! Slider bounds for inputs and assumptions
//!
//! Each adjustable value has a label, a value kind for display, and a
//! `[min, max]` range walked in fixed steps.

use once_cell::sync::Lazy;
use roi_core::{AssumptionField, BusinessInputs, InputField, ModelAssumptions, ProfilePatch};
use serde::{Deserialize, Serialize};

static BUILTIN: Lazy<SliderTable> = Lazy::new(SliderTable::servicepro);

/// How a slider value is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Currency,
    Percentage,
    Number,
    Hours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig<F> {
    pub id: F,
    pub label: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl<F> SliderConfig<F> {
    fn new(id: F, label: &str, description: &str, kind: ValueKind, min: f64, max: f64, step: f64) -> Self {
        Self {
            id,
            label: label.to_string(),
            description: description.to_string(),
            kind,
            min,
            max,
            step,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Snap `value` onto the step grid and into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        let snapped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }
}

/// A value that falls outside its slider range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundViolation {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for BoundViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} = {} is outside [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderTable {
    pub inputs: Vec<SliderConfig<InputField>>,
    pub assumptions: Vec<SliderConfig<AssumptionField>>,
}

impl SliderTable {
    pub fn builtin() -> &'static SliderTable {
        &BUILTIN
    }

    pub fn input(&self, field: InputField) -> Option<&SliderConfig<InputField>> {
        self.inputs.iter().find(|s| s.id == field)
    }

    pub fn assumption(&self, field: AssumptionField) -> Option<&SliderConfig<AssumptionField>> {
        self.assumptions.iter().find(|s| s.id == field)
    }

    pub fn validate_inputs(&self, inputs: &BusinessInputs) -> Vec<BoundViolation> {
        self.inputs
            .iter()
            .filter_map(|s| violation(s, s.id.as_str(), inputs.get(s.id)))
            .collect()
    }

    pub fn validate_assumptions(&self, assumptions: &ModelAssumptions) -> Vec<BoundViolation> {
        self.assumptions
            .iter()
            .filter_map(|s| violation(s, s.id.as_str(), assumptions.get(s.id)))
            .collect()
    }

    /// Clamp every field of a generated patch into its slider range
    pub fn clamp_patch(&self, patch: &ProfilePatch) -> ProfilePatch {
        let mut clamped = patch.clone();
        for (field, value) in patch.fields() {
            if let Some(slider) = self.input(field) {
                clamped.set(field, slider.clamp(value as f64) as u32);
            }
        }
        clamped
    }

    fn servicepro() -> Self {
        use ValueKind::*;

        Self {
            inputs: vec![
                SliderConfig::new(InputField::MonthlyBookings, "Monthly Bookings", "Average number of jobs booked per month.", Number, 10.0, 375.0, 5.0),
                SliderConfig::new(InputField::AvgJobValue, "Avg Job Value", "Average revenue from a single job.", Currency, 50.0, 1500.0, 10.0),
                SliderConfig::new(InputField::SchedulingTime, "Scheduling Time (hrs/wk)", "Hours your team spends on scheduling, reminders, and follow-ups per week.", Hours, 0.0, 30.0, 1.0),
                SliderConfig::new(InputField::HourlyRate, "Blended Hourly Rate", "Average hourly cost of an employee handling scheduling.", Currency, 20.0, 115.0, 5.0),
                SliderConfig::new(InputField::MissedCallsPerWeek, "Missed Calls Per Week", "Number of potential customer calls that go to voicemail or are missed.", Number, 0.0, 75.0, 1.0),
                SliderConfig::new(InputField::NoShowRate, "Current No-Show Rate", "Percentage of booked jobs that are no-shows.", Percentage, 0.0, 40.0, 1.0),
                SliderConfig::new(InputField::ConversionRate, "Current Conversion Rate", "Percentage of inquiries that turn into booked jobs.", Percentage, 10.0, 100.0, 1.0),
            ],
            assumptions: vec![
                SliderConfig::new(AssumptionField::CallToBookingRate, "Call-to-Booking Rate", "Percentage of qualified calls that should result in a booking.", Percentage, 10.0, 100.0, 1.0),
                SliderConfig::new(AssumptionField::VoicemailCallbackRate, "Voicemail Callback Rate", "Percentage of missed calls where the customer calls back or you successfully reconnect.", Percentage, 0.0, 100.0, 1.0),
                SliderConfig::new(AssumptionField::ServiceProCaptureRate, "ServicePro Capture Rate", "Percentage of missed calls captured and engaged by the AI assistant.", Percentage, 80.0, 100.0, 1.0),
                SliderConfig::new(AssumptionField::MonthlyLeads, "Monthly Leads", "Total inquiries used for conversion lift calculation.", Number, 20.0, 750.0, 10.0),
                SliderConfig::new(AssumptionField::TargetConversionRate, "Target Conversion Rate", "The achievable conversion rate with ServicePro's instant engagement.", Percentage, 50.0, 100.0, 1.0),
                SliderConfig::new(AssumptionField::ConversionLift, "Conversion Lift", "The percentage increase in booking conversion from instant, 24/7 responses.", Percentage, 5.0, 40.0, 1.0),
                SliderConfig::new(AssumptionField::SchedulingTimeReduction, "Scheduling Time Reduction", "Percentage of manual scheduling time automated by ServicePro.", Percentage, 50.0, 100.0, 1.0),
                SliderConfig::new(AssumptionField::TargetNoShowRate, "Target No-Show Rate", "The new, lower no-show rate achieved with automated reminders and deposits.", Percentage, 0.0, 15.0, 1.0),
                SliderConfig::new(AssumptionField::AfterHoursBookingRate, "After-Hours Booking %", "Percentage of total bookings that could be captured outside of business hours.", Percentage, 5.0, 40.0, 1.0),
            ],
        }
    }
}

fn violation<F>(slider: &SliderConfig<F>, field: &'static str, value: f64) -> Option<BoundViolation> {
    if slider.contains(value) {
        None
    } else {
        Some(BoundViolation {
            field,
            value,
            min: slider.min,
            max: slider.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_slider() {
        let table = SliderTable::builtin();
        for field in InputField::ALL {
            assert!(table.input(field).is_some(), "missing {}", field.as_str());
        }
        for field in AssumptionField::ALL {
            assert!(table.assumption(field).is_some(), "missing {}", field.as_str());
        }
    }

    #[test]
    fn test_defaults_are_in_range() {
        let table = SliderTable::builtin();
        assert!(table.validate_inputs(&BusinessInputs::default()).is_empty());
        assert!(table
            .validate_assumptions(&ModelAssumptions::default())
            .is_empty());
    }

    #[test]
    fn test_clamp_snaps_to_step() {
        let slider = SliderTable::builtin()
            .input(InputField::MonthlyBookings)
            .unwrap();
        assert_eq!(slider.clamp(52.0), 50.0);
        assert_eq!(slider.clamp(53.0), 55.0);
        assert_eq!(slider.clamp(1.0), 10.0);
        assert_eq!(slider.clamp(9_000.0), 375.0);
    }

    #[test]
    fn test_validate_reports_out_of_range() {
        let inputs = BusinessInputs {
            no_show_rate: 55.0,
            ..Default::default()
        };
        let violations = SliderTable::builtin().validate_inputs(&inputs);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "noShowRate");
        assert_eq!(violations[0].max, 40.0);
    }

    #[test]
    fn test_clamp_patch() {
        let mut patch = ProfilePatch::default();
        patch.set(InputField::HourlyRate, 400);
        patch.set(InputField::SchedulingTime, 6);

        let clamped = SliderTable::builtin().clamp_patch(&patch);
        assert_eq!(clamped.hourly_rate, Some(115));
        assert_eq!(clamped.scheduling_time, Some(6));
        assert_eq!(clamped.avg_job_value, None);
    }

    #[test]
    fn test_serialized_kind_field_is_named_type() {
        let json = serde_json::to_value(SliderTable::builtin()).unwrap();
        assert_eq!(json["inputs"][1]["type"], "currency");
        assert_eq!(json["inputs"][1]["id"], "avgJobValue");
    }
}
