//! # reportcard-foundation
//!
//! Foundation layer for ReportCard:
//! - Core: 핵심 타입 및 Trait 정의 (RepositoryHandle, ProjectDescriptor, DescriptorFetcher)
//! - Config: 통합 설정 (ReportConfig)
//! - Storage: JsonStore (설정 파일)
//! - Error: 공용 에러 타입
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Layer4-cli        (clap, logging, 출력)                 │
//! │                     │                                   │
//! │          ┌─────────┴─────────┐                         │
//! │          ▼                   ▼                         │
//! │   Layer2-core         Layer2-provider                  │
//! │   (resolve/order/     (GitHub, pom.xml fetch)          │
//! │    histogram/render)                                   │
//! │          └─────────┬─────────┘                         │
//! │                    ▼                                   │
//! │          Layer1-foundation (types, traits, config)     │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Core (핵심 Trait 및 타입)
// ============================================================================
pub use self::core::{
    // Traits (traits.rs)
    DescriptorFetcher,
    // Types (types.rs)
    ParentCoordinates,
    ProjectDescriptor,
    RepositoryHandle,
    RepositorySource,
};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    FetchConfig, GitHubConfig, OutputConfig, ReportConfig, DEFAULT_DESCRIPTOR_PATH,
    DEFAULT_GITHUB_API_URL, DEFAULT_ORGANIZATION, GITHUB_TOKEN_ENV, REPORT_CONFIG_FILE,
};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::JsonStore;
