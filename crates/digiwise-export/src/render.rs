use digiwise_core::models::result::{AssessmentResult, CategoryScores};
use digiwise_scoring::recommendations::{RecommendedAction, recommended_actions};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Name under which the built-in template is registered.
pub const DEFAULT_TEMPLATE_NAME: &str = "results.txt";

/// The downloadable results summary.
pub const DEFAULT_TEMPLATE: &str = "\
DigiWise Digital Wellness Assessment Results
=============================================
Name: {{ name }}
Date: {{ date }}
Overall Score: {{ overall_score }}%
Risk Level: {{ risk_level | capitalize }}
Category Breakdown:
{% for category, score in category_scores -%}
- {{ category }}: {{ score }}%
{% endfor -%}
Recommended Actions:
{% for item in actions -%}
- {{ item.action }} ({{ item.timeframe }})
{% endfor -%}
Thank you for completing the DigiWise Digital Wellness Assessment.
";

/// Everything a results report shows.
#[derive(Debug, Clone)]
pub struct ResultReport {
    pub examinee_name: String,
    pub completed_on: jiff::civil::Date,
    pub result: AssessmentResult,
}

/// Template context. Field names are the variables templates can use.
#[derive(Serialize)]
struct ReportContext<'a> {
    name: &'a str,
    date: String,
    overall_score: u8,
    risk_level: &'static str,
    category_scores: &'a CategoryScores,
    actions: &'static [RecommendedAction],
}

impl<'a> From<&'a ResultReport> for ReportContext<'a> {
    fn from(report: &'a ResultReport) -> Self {
        Self {
            name: &report.examinee_name,
            date: report.completed_on.to_string(),
            overall_score: report.result.overall_score,
            risk_level: report.result.risk_level.as_str(),
            category_scores: &report.result.category_scores,
            actions: recommended_actions(report.result.risk_level),
        }
    }
}

/// Render the built-in results template.
pub fn render_report(report: &ResultReport) -> Result<String, ExportError> {
    render_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, report)
}

/// Render a Tera template with a results report.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// Available variables: `name`, `date`, `overall_score`, `risk_level`,
/// `category_scores` (map) and `actions` (list of `action`/`timeframe`).
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &ResultReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ReportContext::from(report))?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Download file name for a report completed on `date`.
pub fn report_filename(date: jiff::civil::Date) -> String {
    format!("DigiWise_Results_{date}.txt")
}
