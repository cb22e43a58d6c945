//! GitHub organization repository listing
//!
//! `GET {api}/orgs/{org}/repos?per_page=N&page=n`를 한 페이지가
//! `per_page`보다 적게 올 때까지 호출합니다. 각 페이지 요청은 재시도됩니다.

use crate::error::GitHubError;
use crate::retry::{with_retry, RetryConfig};
use async_trait::async_trait;
use reportcard_foundation::{Error, ReportConfig, RepositoryHandle, RepositorySource, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!("reportcard/", env!("CARGO_PKG_VERSION"));
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const DEFAULT_PER_PAGE: u32 = 100;

/// `/orgs/{org}/repos` 응답 항목 (필요한 필드만)
#[derive(Debug, Deserialize)]
struct GitHubRepository {
    name: String,
    #[serde(default)]
    html_url: Option<String>,
}

impl From<GitHubRepository> for RepositoryHandle {
    fn from(repo: GitHubRepository) -> Self {
        RepositoryHandle {
            name: repo.name,
            url: repo.html_url,
        }
    }
}

/// GitHub REST API 기반 저장소 목록 조회기
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
    per_page: u32,
    retry: RetryConfig,
}

impl GitHubClient {
    pub fn with_api_url(
        api_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            token: token.filter(|t| !t.is_empty()),
            per_page: DEFAULT_PER_PAGE,
            retry: RetryConfig::default(),
        })
    }

    /// 설정에서 생성 (api URL, 토큰, 페이지 크기, 타임아웃, 재시도 횟수)
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        Ok(Self::with_api_url(
            config.github.api_url.clone(),
            config.github.token.clone(),
            Duration::from_secs(config.fetch.timeout_secs),
        )?
        .with_per_page(config.github.effective_per_page())
        .with_retry(RetryConfig::with_max_retries(config.fetch.max_retries)))
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, DEFAULT_PER_PAGE);
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// 한 페이지의 요청 URL
    fn repos_url(&self, organization: &str, page: u32) -> std::result::Result<Url, GitHubError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| GitHubError::InvalidRequest(format!("{}: {}", self.api_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidRequest(format!("not a base URL: {}", self.api_url)))?
            .pop_if_empty()
            .extend(["orgs", organization, "repos"]);

        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("page", &page.to_string());

        Ok(url)
    }

    async fn fetch_page(
        &self,
        organization: &str,
        page: u32,
    ) -> std::result::Result<Vec<RepositoryHandle>, GitHubError> {
        let url = self.repos_url(organization, page)?;
        debug!("GET {}", url);

        let mut request = self.client.get(url).header(ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            if status.as_u16() == 404 {
                return Err(GitHubError::OrganizationNotFound(organization.to_string()));
            }
            let remaining = header_u64(&response, "x-ratelimit-remaining");
            let retry_after = header_u64(&response, "retry-after");
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::from_http_status(
                status.as_u16(),
                &body,
                remaining,
                retry_after,
            ));
        }

        let repositories: Vec<GitHubRepository> = response.json().await?;
        Ok(repositories.into_iter().map(RepositoryHandle::from).collect())
    }
}

fn header_u64(response: &reqwest::Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn list_repositories(&self, organization: &str) -> Result<Vec<RepositoryHandle>> {
        if organization.trim().is_empty() {
            return Err(Error::InvalidInput("organization must not be empty".to_string()));
        }

        info!("Listing repositories of {}", organization);

        let mut repositories = Vec::new();
        let mut page = 1;

        loop {
            let batch = with_retry(&self.retry, "list_repositories", move || {
                self.fetch_page(organization, page)
            })
            .await?;

            let count = batch.len();
            repositories.extend(batch);
            debug!("Page {}: {} repositories", page, count);

            if count < self.per_page as usize {
                break;
            }
            page += 1;
        }

        info!("Found {} repositories in {}", repositories.len(), organization);
        Ok(repositories)
    }
}
