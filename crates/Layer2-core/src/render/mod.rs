//! # Report Rendering
//!
//! 정렬된 플러그인 목록 + histogram + 생성 시각을 최종 텍스트로 변환합니다.
//!
//! - `html.rs`: askama 템플릿 (`plugin_report_card.html`)
//! - `json.rs`: serde_json 출력 (`plugin_report_card.json`)

mod html;
mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

use crate::plugin::Plugin;
use crate::report::PluginReport;
use chrono::{DateTime, Utc};
use reportcard_foundation::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// ReportRenderer
// ============================================================================

/// 리포트 렌더러
pub trait ReportRenderer: Send + Sync {
    /// 고정 템플릿 식별자
    fn template_id(&self) -> &'static str;

    /// 리포트 텍스트 생성
    fn render(&self, report: &PluginReport, generated_at: DateTime<Utc>) -> Result<String>;
}

// ============================================================================
// ReportFormat
// ============================================================================

/// 출력 형식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
}

impl ReportFormat {
    /// 형식에 맞는 렌더러
    pub fn renderer(&self) -> Box<dyn ReportRenderer> {
        match self {
            ReportFormat::Html => Box::new(HtmlRenderer::new()),
            ReportFormat::Json => Box::new(JsonRenderer::new()),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            other => Err(Error::InvalidInput(format!(
                "Unknown report format '{}', expected html or json",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

// ============================================================================
// PluginRow - 출력용 플러그인 한 줄
// ============================================================================

/// 렌더링용 플러그인 값 (effective 필드, 없는 값은 빈 문자열)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRow {
    pub name: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub required_core: String,
    pub repository_url: String,
}

impl From<&Plugin> for PluginRow {
    fn from(plugin: &Plugin) -> Self {
        let text = |value: Option<&str>| value.unwrap_or_default().to_string();

        Self {
            name: text(plugin.effective_name()),
            group_id: text(plugin.effective_group_id()),
            artifact_id: text(plugin.effective_artifact_id()),
            version: text(plugin.effective_version()),
            required_core: text(plugin.parent_version()),
            repository_url: text(plugin.repository_url()),
        }
    }
}

pub(crate) fn plugin_rows(report: &PluginReport) -> Vec<PluginRow> {
    report.plugins.iter().map(PluginRow::from).collect()
}
