//! pom.xml descriptor fetcher
//!
//! 저장소 URL 뒤에 descriptor 경로를 붙여 HTTP GET 합니다.
//! 어떤 실패(URL 없음, 연결 실패, 타임아웃, 2xx 아닌 응답, 파싱 실패)도
//! 에러가 아니라 `None`입니다.

use crate::pom::parse_pom;
use async_trait::async_trait;
use reportcard_foundation::{
    DescriptorFetcher, Error, FetchConfig, ProjectDescriptor, RepositoryHandle, Result,
    DEFAULT_DESCRIPTOR_PATH,
};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("reportcard/", env!("CARGO_PKG_VERSION"));

/// HTTP 기반 pom.xml fetcher
pub struct PomFetcher {
    client: Client,
    descriptor_path: String,
}

impl PomFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            descriptor_path: DEFAULT_DESCRIPTOR_PATH.to_string(),
        })
    }

    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        Ok(Self::new(Duration::from_secs(config.timeout_secs))?
            .with_descriptor_path(config.descriptor_path.clone()))
    }

    /// 저장소 URL 뒤에 붙일 경로 (예: `/raw/master/pom.xml`)
    pub fn with_descriptor_path(mut self, path: impl Into<String>) -> Self {
        self.descriptor_path = path.into();
        self
    }

    pub fn descriptor_path(&self) -> &str {
        &self.descriptor_path
    }

    /// 저장소의 descriptor URL. URL이 없거나 비어 있으면 None
    pub fn descriptor_url(&self, repository: &RepositoryHandle) -> Option<String> {
        let base = repository.url()?.trim_end_matches('/');
        Some(format!("{}{}", base, self.descriptor_path))
    }

    async fn fetch_text(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Failed to fetch {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("Failed to fetch {}: HTTP {}", url, status.as_u16());
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!("Failed to read {}: {}", url, e);
                None
            }
        }
    }
}

#[async_trait]
impl DescriptorFetcher for PomFetcher {
    async fn fetch_descriptor(&self, repository: &RepositoryHandle) -> Option<ProjectDescriptor> {
        let url = self.descriptor_url(repository)?;
        let body = self.fetch_text(&url).await?;

        let descriptor = parse_pom(&body);
        if descriptor.is_none() {
            debug!("Not a pom.xml: {}", url);
        }
        descriptor
    }
}
