//! HTML report (askama)

use super::{plugin_rows, PluginRow, ReportRenderer};
use crate::report::{PluginReport, ReportStats, RequiredCore};
use askama::Template;
use chrono::{DateTime, Utc};
use reportcard_foundation::{Error, Result};

/// 템플릿 식별자
pub const HTML_TEMPLATE_ID: &str = "plugin_report_card.html";

/// 플러그인 하나당 막대 길이 (px)
const BAR_UNIT_PX: u32 = 4;
const MAX_BAR_PX: u32 = 800;

#[derive(Template)]
#[template(path = "plugin_report_card.html")]
struct PluginReportCardTemplate<'a> {
    now: String,
    required_cores: Vec<CoreRow<'a>>,
    plugins: Vec<PluginRow>,
    stats: &'a ReportStats,
}

/// histogram 한 줄
struct CoreRow<'a> {
    name: &'a str,
    count: u32,
    bar_width: u32,
}

impl<'a> From<&'a RequiredCore> for CoreRow<'a> {
    fn from(core: &'a RequiredCore) -> Self {
        Self {
            name: core.name(),
            count: core.count(),
            bar_width: bar_width(core.count()),
        }
    }
}

fn bar_width(count: u32) -> u32 {
    count.saturating_mul(BAR_UNIT_PX).min(MAX_BAR_PX)
}

/// askama 템플릿 렌더러
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for HtmlRenderer {
    fn template_id(&self) -> &'static str {
        HTML_TEMPLATE_ID
    }

    fn render(&self, report: &PluginReport, generated_at: DateTime<Utc>) -> Result<String> {
        let template = PluginReportCardTemplate {
            now: generated_at.format("%a, %d %b %Y %H:%M:%S UTC").to_string(),
            required_cores: report.required_cores.iter().map(CoreRow::from).collect(),
            plugins: plugin_rows(report),
            stats: &report.stats,
        };

        template
            .render()
            .map_err(|e| Error::Render(format!("{}: {}", HTML_TEMPLATE_ID, e)))
    }
}
