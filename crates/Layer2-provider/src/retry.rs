//! Retry logic with exponential backoff
//!
//! GitHub 목록 조회처럼 실패하면 전체 리포트가 실패하는 요청에만 사용합니다.
//! Descriptor fetch는 실패를 "플러그인 아님"으로 취급하므로 재시도하지 않습니다.

use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// 재시도 설정
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// 최대 재시도 횟수
    pub max_retries: u32,

    /// 첫 재시도 전 대기 (ms)
    pub initial_delay_ms: u64,

    pub backoff_multiplier: f64,

    /// 최대 대기 (ms)
    pub max_delay_ms: u64,

    /// ±20% jitter 적용 여부
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 1000,
            backoff_multiplier: 2.0,
            max_delay_ms: 30000,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// 최대 재시도 횟수만 지정
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// attempt(0부터)에 대한 대기 시간
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(attempt as i32);
        let capped = base.min(self.max_delay_ms as f64);

        let delay = if self.jitter {
            capped * (0.8 + jitter_fraction() * 0.4)
        } else {
            capped
        };

        Duration::from_millis(delay as u64)
    }
}

/// 0.0 ~ 1.0 사이의 단순 jitter
fn jitter_fraction() -> f64 {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    (nanos % 1000) as f64 / 1000.0
}

/// 재시도 판단 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryClassification {
    /// 일시적 에러
    Retry,

    /// 영구적 에러
    NoRetry,

    /// Rate limit - 서버가 알려준 대기 시간 우선
    RateLimited { retry_after_ms: Option<u64> },
}

/// 재시도 분류가 가능한 에러
pub trait RetryableError {
    fn classify(&self) -> RetryClassification;
}

/// 재시도 로직으로 비동기 작업 실행
pub async fn with_retry<T, E, F, Fut>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    E: RetryableError + std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
{
    let mut attempt = 0;

    loop {
        let err = match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => e,
        };

        let classification = err.classify();
        if classification == RetryClassification::NoRetry {
            debug!(
                "{}: non-retryable error on attempt {}: {}",
                operation_name,
                attempt + 1,
                err
            );
            return Err(err);
        }

        if attempt >= config.max_retries {
            warn!(
                "{}: max retries ({}) exceeded: {}",
                operation_name, config.max_retries, err
            );
            return Err(err);
        }

        let delay = match classification {
            RetryClassification::RateLimited {
                retry_after_ms: Some(ms),
            } => Duration::from_millis(ms.min(config.max_delay_ms)),
            _ => config.delay_for_attempt(attempt),
        };

        warn!(
            "{}: attempt {} failed, retrying in {:?}: {}",
            operation_name,
            attempt + 1,
            delay,
            err
        );

        sleep(delay).await;
        attempt += 1;
    }
}
