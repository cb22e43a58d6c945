//! Core Module - 핵심 인터페이스 및 타입
//!
//! 리포트 파이프라인이 외부 협력자(저장소 목록, descriptor fetch)와
//! 주고받는 타입과 인터페이스를 정의합니다.
//!
//! ## 타입 계층
//!
//! - `types.rs`: 데이터 타입 (RepositoryHandle, ProjectDescriptor 등)
//! - `traits.rs`: 인터페이스 (RepositorySource, DescriptorFetcher)
//!
//! ## 데이터 흐름
//!
//! ```text
//! RepositorySource ──► [RepositoryHandle] ──► DescriptorFetcher
//!                                                   │
//!                                                   ▼
//!                                     Option<ProjectDescriptor>
//!                                                   │
//!                                                   ▼
//!                                   Layer2-core (resolve / classify)
//! ```

pub mod traits;
pub mod types;

// ============================================================================
// Types - 데이터 타입 (types.rs)
// ============================================================================

pub use types::{ParentCoordinates, ProjectDescriptor, RepositoryHandle};

// ============================================================================
// Traits - 인터페이스 (traits.rs)
// ============================================================================

pub use traits::{DescriptorFetcher, RepositorySource};
