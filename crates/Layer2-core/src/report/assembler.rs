//! Report Assembler - 리포트 생성 오케스트레이션
//!
//! 저장소마다 fetch → resolve → classify → record/insert.
//! 한 저장소의 실패는 그 저장소만 제외하며 전체 실행을 멈추지 않습니다.

use super::{PluginReport, PluginSet, ReportStats, RequiredCoreHistogram};
use crate::plugin::Plugin;
use futures::stream::{self, StreamExt};
use reportcard_foundation::{
    DescriptorFetcher, ProjectDescriptor, RepositoryHandle, RepositorySource, Result,
};
use std::sync::Arc;
use tracing::{debug, info};

// ============================================================================
// ReportAssembler
// ============================================================================

/// 리포트 생성기
///
/// `generate` 호출마다 새 플러그인 집합과 histogram을 만들며
/// 호출 사이에 공유되는 가변 상태는 없습니다.
pub struct ReportAssembler {
    fetcher: Arc<dyn DescriptorFetcher>,
    concurrency: usize,
}

impl ReportAssembler {
    /// 순차 처리 assembler
    pub fn new(fetcher: Arc<dyn DescriptorFetcher>) -> Self {
        Self {
            fetcher,
            concurrency: 1,
        }
    }

    /// 동시 fetch 수 설정 (0은 1로 취급)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// 조직의 저장소 목록을 조회한 뒤 리포트 생성
    ///
    /// 목록 조회 실패만 에러로 전달됩니다.
    pub async fn generate_for_organization(
        &self,
        source: &dyn RepositorySource,
        organization: &str,
    ) -> Result<PluginReport> {
        let repositories = source.list_repositories(organization).await?;
        debug!(
            "Listed {} repositories in organization {}",
            repositories.len(),
            organization
        );
        Ok(self.generate(repositories).await)
    }

    /// 리포트 생성
    ///
    /// `None::<Vec<_>>`처럼 비어 있는 입력이면 시드 버킷만 있는 빈 리포트를 반환합니다.
    pub async fn generate<I>(&self, repositories: I) -> PluginReport
    where
        I: IntoIterator<Item = RepositoryHandle>,
    {
        let mut builder = ReportBuilder::new();

        if self.concurrency <= 1 {
            for repository in repositories {
                let descriptor = self.fetcher.fetch_descriptor(&repository).await;
                builder.accept(&repository, descriptor);
            }
        } else {
            // fetch만 병렬로, 결과는 입력 순서대로 단일 writer가 반영
            let fetcher = &self.fetcher;
            let fetched = stream::iter(repositories)
                .map(|repository| async move {
                    let descriptor = fetcher.fetch_descriptor(&repository).await;
                    (repository, descriptor)
                })
                .buffered(self.concurrency);
            let mut fetched = std::pin::pin!(fetched);

            while let Some((repository, descriptor)) = fetched.next().await {
                builder.accept(&repository, descriptor);
            }
        }

        let report = builder.finish();
        info!(
            "Report assembled: {} repositories, {} descriptors, {} plugins ({} duplicates)",
            report.stats.repositories,
            report.stats.descriptors,
            report.plugins.len(),
            report.stats.duplicates
        );
        report
    }
}

// ============================================================================
// ReportBuilder - 한 번의 생성 동안의 작업 상태
// ============================================================================

struct ReportBuilder {
    plugins: PluginSet,
    histogram: RequiredCoreHistogram,
    stats: ReportStats,
}

impl ReportBuilder {
    fn new() -> Self {
        Self {
            plugins: PluginSet::new(),
            histogram: RequiredCoreHistogram::new(),
            stats: ReportStats::default(),
        }
    }

    fn accept(&mut self, repository: &RepositoryHandle, descriptor: Option<ProjectDescriptor>) {
        debug!("Processing {}", repository);
        self.stats.repositories += 1;

        let Some(descriptor) = descriptor else {
            debug!("No descriptor for {}, skipping", repository);
            return;
        };
        self.stats.descriptors += 1;

        let plugin = Plugin::resolve(Some(repository), &descriptor);
        if !plugin.is_recognized_plugin() {
            return;
        }
        self.stats.recognized += 1;

        self.histogram.record(plugin.parent_version());
        if !self.plugins.insert(plugin) {
            self.stats.duplicates += 1;
        }
    }

    fn finish(self) -> PluginReport {
        PluginReport {
            plugins: self.plugins.into_vec(),
            required_cores: self.histogram.into_buckets(),
            stats: self.stats,
        }
    }
}
