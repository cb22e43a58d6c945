//! GitHub / descriptor fetch error types
//!
//! GitHubError는 GitHub API 호출의 세부 에러를 관리합니다.
//! reportcard_foundation::Error와의 변환을 지원합니다.

use crate::retry::{RetryClassification, RetryableError};
use reportcard_foundation::Error as FoundationError;
use thiserror::Error;

/// GitHub API 호출 중 발생하는 에러
#[derive(Error, Debug, Clone)]
pub enum GitHubError {
    /// 토큰이 없거나 잘못됨
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit 초과
    #[error("Rate limit exceeded{}", .retry_after_ms.map(|ms| format!(", retry after {}ms", ms)).unwrap_or_default())]
    RateLimited { retry_after_ms: Option<u64> },

    /// 조직 없음 (404)
    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    /// Server error (5xx)
    #[error("Server error: {0}")]
    ServerError(String),

    /// 연결 실패, DNS 등
    #[error("Network error: {0}")]
    Network(String),

    /// 요청 타임아웃
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// 잘못된 요청 URL
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 응답 JSON 해석 실패
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl RetryableError for GitHubError {
    fn classify(&self) -> RetryClassification {
        match self {
            GitHubError::RateLimited { retry_after_ms } => RetryClassification::RateLimited {
                retry_after_ms: *retry_after_ms,
            },

            GitHubError::ServerError(_) | GitHubError::Network(_) | GitHubError::Timeout(_) => {
                RetryClassification::Retry
            }

            GitHubError::Authentication(_)
            | GitHubError::OrganizationNotFound(_)
            | GitHubError::InvalidRequest(_)
            | GitHubError::InvalidResponse(_)
            | GitHubError::Unknown(_) => RetryClassification::NoRetry,
        }
    }
}

impl GitHubError {
    /// HTTP 상태 코드와 응답에서 생성
    ///
    /// `remaining`은 `x-ratelimit-remaining` 헤더, `retry_after_secs`는
    /// `retry-after` 헤더 값입니다. GitHub은 rate limit에 403도 사용합니다.
    pub fn from_http_status(
        status: u16,
        body: &str,
        remaining: Option<u64>,
        retry_after_secs: Option<u64>,
    ) -> Self {
        let retry_after_ms = retry_after_secs.map(|secs| secs.saturating_mul(1000));
        match status {
            403 if remaining == Some(0) || body.contains("rate limit") => {
                GitHubError::RateLimited { retry_after_ms }
            }
            429 => GitHubError::RateLimited { retry_after_ms },
            401 | 403 => GitHubError::Authentication(extract_message(body)),
            404 => GitHubError::OrganizationNotFound(extract_message(body)),
            500..=599 => GitHubError::ServerError(extract_message(body)),
            _ => GitHubError::Unknown(format!("HTTP {}: {}", status, extract_message(body))),
        }
    }
}

impl From<reqwest::Error> for GitHubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GitHubError::Timeout(err.to_string())
        } else if err.is_decode() {
            GitHubError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            GitHubError::InvalidRequest(err.to_string())
        } else {
            GitHubError::Network(err.to_string())
        }
    }
}

/// GitHub 에러 응답의 `message` 필드 추출 (없으면 본문 그대로)
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}

// ============================================================================
// reportcard_foundation::Error 변환
// ============================================================================

impl From<GitHubError> for FoundationError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Authentication(msg) => {
                FoundationError::api("github", format!("Authentication failed: {}", msg))
            }
            GitHubError::RateLimited { retry_after_ms } => FoundationError::RateLimited(
                retry_after_ms
                    .map(|ms| format!("Retry after {}ms", ms))
                    .unwrap_or_else(|| "Rate limited".to_string()),
            ),
            GitHubError::OrganizationNotFound(msg) => FoundationError::OrganizationNotFound(msg),
            GitHubError::ServerError(msg) => {
                FoundationError::api("github", format!("Server error: {}", msg))
            }
            GitHubError::Network(msg) => FoundationError::Http(msg),
            GitHubError::Timeout(msg) => FoundationError::Timeout(msg),
            GitHubError::InvalidRequest(msg) => FoundationError::InvalidInput(msg),
            GitHubError::InvalidResponse(msg) => {
                FoundationError::Parse(format!("Invalid GitHub response: {}", msg))
            }
            GitHubError::Unknown(msg) => FoundationError::api("github", msg),
        }
    }
}
