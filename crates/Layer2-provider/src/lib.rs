//! # reportcard-provider
//!
//! 외부 협력자 구현 레이어
//!
//! ## Features
//! - GitHub 조직 저장소 목록 (페이지네이션, 재시도)
//! - 저장소별 pom.xml fetch 및 관대한 파싱
//! - Exponential backoff retry

pub mod error;
pub mod fetcher;
pub mod github;
pub mod pom;
pub mod retry;

pub use fetcher::PomFetcher;
pub use github::GitHubClient;
pub use pom::parse_pom;

// Error and retry
pub use error::GitHubError;
pub use retry::{with_retry, RetryClassification, RetryConfig, RetryableError};
