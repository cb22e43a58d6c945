//! Config - 통합 설정 관리
//!
//! - `report.rs` - ReportConfig 통합 설정 (GitHub, fetch, output)

mod report;

pub use report::{
    FetchConfig, GitHubConfig, OutputConfig, ReportConfig, DEFAULT_DESCRIPTOR_PATH,
    DEFAULT_GITHUB_API_URL, DEFAULT_ORGANIZATION, GITHUB_TOKEN_ENV, REPORT_CONFIG_FILE,
};
