//! reportcard-core: Core Pipeline for ReportCard
//!
//! Layer2 - 플러그인 리포트 집계 레이어
//!
//! # 주요 모듈
//!
//! - `plugin`: descriptor → `Plugin` 해석, effective 필드, 플러그인 규칙 판별
//! - `report`: 정렬된 플러그인 집합, required core histogram, `ReportAssembler`
//! - `render`: HTML(askama) / JSON 렌더러
//!
//! # 사용 예시
//!
//! ```ignore
//! use reportcard_core::{ReportAssembler, ReportFormat};
//!
//! let assembler = ReportAssembler::new(Arc::new(fetcher)).with_concurrency(8);
//! let report = assembler.generate_for_organization(&github, "jenkinsci").await?;
//!
//! let html = ReportFormat::Html.renderer().render(&report, chrono::Utc::now())?;
//! ```

pub mod plugin;
pub mod render;
pub mod report;

// Re-exports: Plugin
pub use plugin::{
    Plugin, PluginConvention, HUDSON_PLUGIN_GROUP_ID, JENKINS_PLUGIN_GROUP_ID,
    PLUGIN_PARENT_ARTIFACT_ID,
};

// Re-exports: Report
pub use report::{
    PluginOrdering, PluginReport, PluginSet, ReportAssembler, ReportStats, RequiredCore,
    RequiredCoreHistogram, REQUIRED_CORE_PREFIX, REQUIRED_CORE_SEED_RANGE, UNKNOWN_REQUIRED_CORE,
};

// Re-exports: Render
pub use render::{HtmlRenderer, JsonRenderer, PluginRow, ReportFormat, ReportRenderer};
