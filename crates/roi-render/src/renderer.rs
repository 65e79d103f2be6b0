//! Handlebars rendering for ROI reports.
//!
//! Registered helpers, all taking a number:
//! - currency: whole dollars with thousands separators
//! - percent: value that is already a percentage
//! - days: rounded day count
//! - jobs: one decimal job count

use handlebars::{handlebars_helper, no_escape, Handlebars};
use roi_engine::Report;
use serde_json::Value;

use crate::format;
use crate::templates::TemplatesFile;
use crate::RenderError;

handlebars_helper!(currency_helper: |v: f64| format::currency(v));
handlebars_helper!(percent_helper: |v: f64| format::percent(v));
handlebars_helper!(days_helper: |v: f64| format::days(v));
handlebars_helper!(jobs_helper: |v: f64| format::jobs(v));

/// Compiled templates with the report helpers registered
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
    templates: TemplatesFile,
}

impl ReportRenderer {
    pub fn new(templates: TemplatesFile) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        // Plain text output, nothing to escape.
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("currency", Box::new(currency_helper));
        handlebars.register_helper("percent", Box::new(percent_helper));
        handlebars.register_helper("days", Box::new(days_helper));
        handlebars.register_helper("jobs", Box::new(jobs_helper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| RenderError::Template(format!("{}: {}", name, e)))?;
        }

        Ok(Self {
            handlebars,
            templates,
        })
    }

    /// Renderer over the templates compiled into the crate
    pub fn builtin() -> Result<Self, RenderError> {
        Self::new(TemplatesFile::builtin().map_err(RenderError::Template)?)
    }

    pub fn load(path: &str) -> Result<Self, RenderError> {
        Self::new(TemplatesFile::load(path).map_err(RenderError::Template)?)
    }

    /// Render a named template for `report`
    pub fn render(&self, template_name: &str, report: &Report) -> Result<String, RenderError> {
        if !self.handlebars.has_template(template_name) {
            return Err(RenderError::Template(format!(
                "unknown template '{}'",
                template_name
            )));
        }
        self.handlebars
            .render(template_name, &report_data(report)?)
            .map_err(|e| RenderError::Render(e.to_string()))
    }

    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}

/// Serialized report plus the flags the templates branch on.
///
/// ROI is only meaningful with a recurring cost and payback only with a
/// one-time cost.
fn report_data(report: &Report) -> Result<Value, RenderError> {
    let mut data = serde_json::to_value(report).map_err(|e| RenderError::Render(e.to_string()))?;
    if let Value::Object(map) = &mut data {
        map.insert(
            "hasMonthlyCost".to_string(),
            Value::Bool(report.summary.monthly_cost > 0.0),
        );
        map.insert(
            "hasOneTimeCost".to_string(),
            Value::Bool(report.summary.one_time_cost > 0.0),
        );
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roi_engine::{CurrentCosts, Gains, RoiSummary};

    fn report(monthly_cost: f64, one_time_cost: f64) -> Report {
        Report {
            current: CurrentCosts {
                current_monthly_revenue: 10_000.0,
                labor_cost_scheduling: 800.0,
                lost_bookings: 2_000.0,
                lost_revenue_no_shows: 1_500.0,
                opportunity_cost: 4_000.0,
                total_current_cost: 8_300.0,
            },
            gains: Gains {
                time_savings_gain: 390.0,
                calls_captured_gain: 117.0,
                no_show_reduction_gain: 650.0,
                conversion_lift_gain: 2_112.5,
                after_hours_bookings_gain: 1_300.0,
                total_monthly_gain: 4_569.5,
            },
            summary: RoiSummary {
                monthly_cost,
                one_time_cost,
                amortized_one_time_cost: one_time_cost / 12.0,
                net_monthly_profit: 4_569.5 - monthly_cost - one_time_cost / 12.0,
                roi_percentage: 1_234.4,
                payback_period_days: 16.4,
                break_even_bookings: 12.79,
            },
        }
    }

    #[test]
    fn test_report_data_flags() {
        let data = report_data(&report(59.0, 0.0)).unwrap();
        assert_eq!(data["hasMonthlyCost"], Value::Bool(true));
        assert_eq!(data["hasOneTimeCost"], Value::Bool(false));
        assert_eq!(data["summary"]["monthlyCost"], 59.0);
    }

    #[test]
    fn test_summary_sections() {
        let renderer = ReportRenderer::builtin().unwrap();
        let text = renderer.render("report_summary", &report(59.0, 2_499.0)).unwrap();
        assert!(text.starts_with("ROI Summary"));
        assert!(text.contains("Monthly ROI: 1234%"));
        assert!(text.contains("Payback: 16 days"));
        assert!(text.contains("Break-Even: 12.8 jobs"));
        assert!(text.contains("Conversion Lift: $2,113"));
        assert!(text.contains("Total Hidden Costs: $8,300"));
    }

    #[test]
    fn test_hides_roi_and_payback_without_costs() {
        let renderer = ReportRenderer::builtin().unwrap();
        let text = renderer.render("report_summary", &report(0.0, 0.0)).unwrap();
        assert!(!text.contains("Monthly ROI"));
        assert!(!text.contains("Payback"));
        assert!(text.contains("Net Monthly Profit: $4,570"));
    }

    #[test]
    fn test_unknown_template() {
        let renderer = ReportRenderer::builtin().unwrap();
        let err = renderer.render("missing", &report(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, RenderError::Template(_)));
    }

    #[test]
    fn test_bad_template_source() {
        let file = TemplatesFile::from_yaml(
            "version: \"1.0\"\ntemplates:\n  broken:\n    description: x\n    template: \"{{#if}}\"\n",
        )
        .unwrap();
        assert!(ReportRenderer::new(file).is_err());
    }
}
