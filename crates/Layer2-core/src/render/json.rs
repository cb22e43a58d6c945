//! JSON report (serde_json)

use super::{plugin_rows, PluginRow, ReportRenderer};
use crate::report::{PluginReport, ReportStats, RequiredCore};
use chrono::{DateTime, Utc};
use reportcard_foundation::Result;
use serde::Serialize;

/// 템플릿 식별자
pub const JSON_TEMPLATE_ID: &str = "plugin_report_card.json";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    now: DateTime<Utc>,
    required_cores: &'a [RequiredCore],
    plugins: Vec<PluginRow>,
    stats: &'a ReportStats,
}

/// JSON 렌더러
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for JsonRenderer {
    fn template_id(&self) -> &'static str {
        JSON_TEMPLATE_ID
    }

    fn render(&self, report: &PluginReport, generated_at: DateTime<Utc>) -> Result<String> {
        let document = JsonReport {
            now: generated_at,
            required_cores: &report.required_cores,
            plugins: plugin_rows(report),
            stats: &report.stats,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_render_empty_report_json() {
        let rendered = JsonRenderer::new()
            .render(&PluginReport::empty(), Utc::now())
            .unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["plugins"].as_array().map(Vec::len), Some(0));
        let cores = value["requiredCores"].as_array().unwrap();
        assert_eq!(cores.len(), 301);
        assert_eq!(cores[0]["name"], "1.300");
        assert_eq!(cores[0]["count"], 0);
        assert_eq!(value["stats"]["repositories"], 0);
        assert!(value["now"].is_string());
    }
}
