//! # Report Assembly
//!
//! 저장소 목록에서 리포트 데이터(정렬된 플러그인 + required core histogram)를 만듭니다.
//!
//! - `ordering.rs`: `PluginOrdering`, `PluginSet`
//! - `histogram.rs`: `RequiredCore`, `RequiredCoreHistogram`
//! - `assembler.rs`: `ReportAssembler` - fetch → resolve → classify → record/insert

mod assembler;
mod histogram;
mod ordering;

pub use assembler::ReportAssembler;
pub use histogram::{
    RequiredCore, RequiredCoreHistogram, REQUIRED_CORE_PREFIX, REQUIRED_CORE_SEED_RANGE,
    UNKNOWN_REQUIRED_CORE,
};
pub use ordering::{PluginOrdering, PluginSet};

use crate::plugin::Plugin;
use serde::Serialize;

// ============================================================================
// PluginReport - 리포트 결과
// ============================================================================

/// 한 번의 리포트 생성 결과
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginReport {
    /// `PluginOrdering` 오름차순, 좌표 기준 중복 없음
    pub plugins: Vec<Plugin>,

    /// 이름 오름차순 (시드 버킷 항상 포함)
    pub required_cores: Vec<RequiredCore>,

    /// 처리 통계
    pub stats: ReportStats,
}

impl PluginReport {
    /// 저장소가 하나도 없을 때의 결과
    pub fn empty() -> Self {
        Self {
            plugins: Vec::new(),
            required_cores: RequiredCoreHistogram::new().into_buckets(),
            stats: ReportStats::default(),
        }
    }

    /// 특정 버전 버킷의 플러그인 수
    pub fn required_core_count(&self, name: &str) -> Option<u32> {
        self.required_cores
            .iter()
            .find(|core| core.name() == name)
            .map(RequiredCore::count)
    }
}

/// 처리 통계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    /// 처리한 저장소 수
    pub repositories: usize,
    /// Descriptor를 가져온 저장소 수
    pub descriptors: usize,
    /// 인정된 플러그인 수 (중복 포함)
    pub recognized: usize,
    /// 좌표 중복으로 흡수된 플러그인 수
    pub duplicates: usize,
}

impl ReportStats {
    /// Fetch/파싱 실패로 제외된 저장소 수
    pub fn skipped(&self) -> usize {
        self.repositories - self.descriptors
    }
}
