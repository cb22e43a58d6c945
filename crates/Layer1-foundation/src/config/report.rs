//! Report Config - 통합 설정
//!
//! 글로벌(`<config_dir>/reportcard/config.json`)과
//! 프로젝트(`.reportcard/config.json`) 설정을 병합하여 사용

use crate::storage::JsonStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// 설정 파일명
pub const REPORT_CONFIG_FILE: &str = "config.json";

/// 기본 조직
pub const DEFAULT_ORGANIZATION: &str = "jenkinsci";

/// 기본 GitHub API 주소
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// 저장소 URL 뒤에 붙는 descriptor 경로
pub const DEFAULT_DESCRIPTOR_PATH: &str = "/raw/master/pom.xml";

/// GitHub 토큰 환경 변수
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// GitHub API 한 페이지 최대 크기
const MAX_PER_PAGE: u32 = 100;

// ============================================================================
// Report Config (통합)
// ============================================================================

/// ReportCard 통합 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// 버전 (마이그레이션용)
    #[serde(default = "default_version")]
    pub version: u32,

    /// 리포트 대상 조직
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// GitHub 설정
    #[serde(default)]
    pub github: GitHubConfig,

    /// Descriptor fetch 설정
    #[serde(default)]
    pub fetch: FetchConfig,

    /// 출력 설정
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            organization: None,
            github: GitHubConfig::default(),
            fetch: FetchConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드 (환경 변수 적용 포함)
    pub fn load() -> Result<Self> {
        let mut config = Self::new();

        // 1. 글로벌 설정
        if let Ok(global) = JsonStore::global() {
            if let Some(global_config) = global.load_optional::<ReportConfig>(REPORT_CONFIG_FILE)? {
                config.merge(global_config);
            }
        }

        // 2. 프로젝트 설정
        let project = JsonStore::current_project()?;
        if let Some(project_config) = project.load_optional::<ReportConfig>(REPORT_CONFIG_FILE)? {
            config.merge(project_config);
        }

        // 3. 환경 변수
        config.apply_env(std::env::var(GITHUB_TOKEN_ENV).ok());

        Ok(config)
    }

    /// 특정 저장소에서만 로드
    pub fn load_from(store: &JsonStore) -> Result<Self> {
        let mut config = Self::new();
        if let Some(stored) = store.load_optional::<ReportConfig>(REPORT_CONFIG_FILE)? {
            config.merge(stored);
        }
        Ok(config)
    }

    /// 토큰이 설정되지 않았으면 환경 변수 값 사용
    pub fn apply_env(&mut self, token: Option<String>) {
        if self.github.token.is_none() {
            self.github.token = token.filter(|t| !t.trim().is_empty());
        }
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: ReportConfig) {
        if other.organization.is_some() {
            self.organization = other.organization;
        }

        self.github.merge(other.github);
        self.fetch.merge(other.fetch);
        self.output.merge(other.output);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// 실제 사용할 조직 이름
    pub fn organization(&self) -> &str {
        self.organization.as_deref().unwrap_or(DEFAULT_ORGANIZATION)
    }

    /// 설정 값 검증
    pub fn validate(&self) -> Result<()> {
        if self.organization().trim().is_empty() {
            return Err(Error::Config("organization must not be empty".to_string()));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(Error::Config("fetch.timeoutSecs must be positive".to_string()));
        }
        if !self.fetch.descriptor_path.starts_with('/') {
            return Err(Error::Config(format!(
                "fetch.descriptorPath must start with '/': {}",
                self.fetch.descriptor_path
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn organization_name(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.github.token = Some(token.into());
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.fetch.concurrency = concurrency;
        self
    }
}

// ============================================================================
// GitHub Config
// ============================================================================

/// GitHub 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubConfig {
    /// API 주소
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// 인증 토큰 (없으면 익명 요청)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// 페이지 크기
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            per_page: default_per_page(),
        }
    }
}

impl GitHubConfig {
    fn merge(&mut self, other: GitHubConfig) {
        if other.api_url != default_api_url() {
            self.api_url = other.api_url;
        }
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.per_page != default_per_page() {
            self.per_page = other.per_page;
        }
    }

    /// 1..=100 범위로 보정된 페이지 크기
    pub fn effective_per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

// ============================================================================
// Fetch Config
// ============================================================================

/// Descriptor fetch 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchConfig {
    /// 저장소 URL 뒤에 붙일 경로
    #[serde(default = "default_descriptor_path")]
    pub descriptor_path: String,

    /// 요청 타임아웃 (초)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// 동시 fetch 수 (1 = 순차 처리)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// 저장소 목록 조회 재시도 횟수
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            descriptor_path: default_descriptor_path(),
            timeout_secs: default_timeout_secs(),
            concurrency: default_concurrency(),
            max_retries: default_max_retries(),
        }
    }
}

impl FetchConfig {
    fn merge(&mut self, other: FetchConfig) {
        if other.descriptor_path != default_descriptor_path() {
            self.descriptor_path = other.descriptor_path;
        }
        if other.timeout_secs != default_timeout_secs() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.concurrency != default_concurrency() {
            self.concurrency = other.concurrency;
        }
        if other.max_retries != default_max_retries() {
            self.max_retries = other.max_retries;
        }
    }
}

// ============================================================================
// Output Config
// ============================================================================

/// 출력 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// 출력 형식 (html, json)
    #[serde(default = "default_format")]
    pub format: String,

    /// 출력 파일 (없으면 stdout)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, other: OutputConfig) {
        if other.format != default_format() {
            self.format = other.format;
        }
        if other.path.is_some() {
            self.path = other.path;
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn default_version() -> u32 {
    1
}

fn default_api_url() -> String {
    DEFAULT_GITHUB_API_URL.to_string()
}

fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

fn default_descriptor_path() -> String {
    DEFAULT_DESCRIPTOR_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_concurrency() -> usize {
    1
}

fn default_max_retries() -> u32 {
    3
}

fn default_format() -> String {
    "html".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_config_default() {
        let config = ReportConfig::new();
        assert_eq!(config.version, 1);
        assert_eq!(config.organization(), "jenkinsci");
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.fetch.descriptor_path, "/raw/master/pom.xml");
        assert_eq!(config.fetch.concurrency, 1);
        assert_eq!(config.output.format, "html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_merge() {
        let mut base = ReportConfig::new().organization_name("hudson");
        base.fetch.timeout_secs = 10;

        let mut overlay = ReportConfig::new().organization_name("jenkinsci").concurrency(8);
        overlay.output.path = Some("report.html".to_string());

        base.merge(overlay);

        assert_eq!(base.organization(), "jenkinsci");
        assert_eq!(base.fetch.concurrency, 8);
        // overlay의 기본값은 base 값을 덮어쓰지 않음
        assert_eq!(base.fetch.timeout_secs, 10);
        assert_eq!(base.output.path.as_deref(), Some("report.html"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ReportConfig =
            serde_json::from_str(r#"{ "fetch": { "concurrency": 4 } }"#).unwrap();
        assert_eq!(config.fetch.concurrency, 4);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.github.per_page, 100);
    }

    #[test]
    fn test_env_token_does_not_override_config() {
        let mut config = ReportConfig::new().token("from-config");
        config.apply_env(Some("from-env".to_string()));
        assert_eq!(config.github.token.as_deref(), Some("from-config"));

        let mut config = ReportConfig::new();
        config.apply_env(Some("   ".to_string()));
        assert!(config.github.token.is_none());

        config.apply_env(Some("from-env".to_string()));
        assert_eq!(config.github.token.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_per_page_is_clamped() {
        let mut github = GitHubConfig::default();
        github.per_page = 500;
        assert_eq!(github.effective_per_page(), 100);
        github.per_page = 0;
        assert_eq!(github.effective_per_page(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ReportConfig::new();
        config.fetch.descriptor_path = "raw/master/pom.xml".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = ReportConfig::new();
        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());

        let config = ReportConfig::new().organization_name("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::project(dir.path());
        store
            .save(
                REPORT_CONFIG_FILE,
                &ReportConfig::new().organization_name("hudson"),
            )
            .unwrap();

        let loaded = ReportConfig::load_from(&store).unwrap();
        assert_eq!(loaded.organization(), "hudson");
    }
}
