//! Core Traits - 외부 협력자 인터페이스
//!
//! 네트워크/포맷 의존 구현은 Layer2-provider에 있고,
//! Layer2-core는 이 trait만 보고 동작합니다 (테스트에서는 fake 사용).

use crate::core::types::{ProjectDescriptor, RepositoryHandle};
use crate::Result;
use async_trait::async_trait;

// ============================================================================
// RepositorySource - 저장소 목록
// ============================================================================

/// 조직의 저장소 목록 제공자
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// 조직의 모든 저장소 조회
    ///
    /// 목록 자체를 못 가져오는 것은 치명적 에러이며 호출자에게 전달됩니다.
    async fn list_repositories(&self, organization: &str) -> Result<Vec<RepositoryHandle>>;
}

// ============================================================================
// DescriptorFetcher - descriptor 조회
// ============================================================================

/// 저장소의 프로젝트 descriptor 조회
#[async_trait]
pub trait DescriptorFetcher: Send + Sync {
    /// Descriptor를 가져와 파싱
    ///
    /// 네트워크 오류, 타임아웃, 파싱 실패는 모두 `None`입니다.
    async fn fetch_descriptor(&self, repository: &RepositoryHandle) -> Option<ProjectDescriptor>;
}
