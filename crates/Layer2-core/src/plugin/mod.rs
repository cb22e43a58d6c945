//! # Plugin Resolution
//!
//! 저장소 하나의 descriptor에서 플러그인 정체성을 결정합니다.
//!
//! ## 개요
//!
//! - `model.rs`: `Plugin` - descriptor + 저장소 URL에서 만든 불변 레코드,
//!   parent fallback을 적용한 effective 필드
//! - `convention.rs`: `PluginConvention` - 인정되는 parent 좌표 규칙
//!   (현재 `org.jenkins-ci.plugins:plugin`, 레거시 `org.jvnet.hudson.plugins:plugin`)
//!
//! ## 흐름
//!
//! ```text
//! (RepositoryHandle, ProjectDescriptor)
//!              │  Plugin::resolve
//!              ▼
//!           Plugin ──► is_recognized_plugin() ──► false: 버림
//!                                 │
//!                                 ▼ true
//!                   histogram.record + plugins.insert
//! ```

mod convention;
mod model;

pub use convention::{
    PluginConvention, HUDSON_PLUGIN_GROUP_ID, JENKINS_PLUGIN_GROUP_ID, PLUGIN_PARENT_ARTIFACT_ID,
};
pub use model::Plugin;
