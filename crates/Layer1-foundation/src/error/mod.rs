//! Error types for ReportCard
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// ReportCard 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 저장소 관련
    // ========================================================================
    #[error("Storage error: {0}")]
    Storage(String),

    // ========================================================================
    // 외부 서비스 (GitHub) 관련
    // ========================================================================
    #[error("API error: {service} - {message}")]
    Api { service: String, message: String },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    // ========================================================================
    // Descriptor / Report 관련
    // ========================================================================
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Render error: {0}")]
    Render(String),

    // ========================================================================
    // 실행 관련
    // ========================================================================
    #[error("Timeout: {0}")]
    Timeout(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl Error {
    /// 재시도 가능한 에러인지 확인
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Timeout(_) | Error::RateLimited(_) | Error::Http(_)
        )
    }

    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::OrganizationNotFound(_)
                | Error::InvalidInput(_)
                | Error::Config(_)
        )
    }

    /// API 에러 생성 헬퍼
    pub fn api(service: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Api {
            service: service.into(),
            message: message.into(),
        }
    }
}
