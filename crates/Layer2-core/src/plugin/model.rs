//! Plugin - 해석된 플러그인 정체성

use super::convention::PluginConvention;
use reportcard_foundation::{ProjectDescriptor, RepositoryHandle};
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// 해석된 플러그인 (생성 후 불변)
///
/// 원본 필드는 descriptor 값을 그대로 보관하고, effective 필드는 접근할 때마다
/// parent 값으로 fallback하여 계산합니다.
///
/// 동등성은 `version`, `groupId`, `artifactId`, `parentVersion`,
/// `parentGroupId`, `parentArtifactId` 여섯 좌표로만 판단합니다.
/// `name`과 `repositoryUrl`은 제외되므로, 다른 저장소에 있는 같은 좌표의
/// 플러그인은 같은 것으로 취급됩니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    artifact_id: Option<String>,
    group_id: Option<String>,
    name: Option<String>,
    version: Option<String>,
    parent_group_id: Option<String>,
    parent_artifact_id: Option<String>,
    parent_version: Option<String>,
    repository_url: Option<String>,
}

impl Plugin {
    /// Descriptor와 저장소에서 플러그인 생성
    ///
    /// 실패하지 않습니다. 없는 필드는 `None`으로 남습니다.
    pub fn resolve(repository: Option<&RepositoryHandle>, descriptor: &ProjectDescriptor) -> Self {
        let parent = descriptor.parent.as_ref();

        Self {
            artifact_id: descriptor.artifact_id.clone(),
            group_id: descriptor.group_id.clone(),
            name: descriptor.name.clone(),
            version: descriptor.version.clone(),
            parent_group_id: parent.and_then(|p| p.group_id.clone()),
            parent_artifact_id: parent.and_then(|p| p.artifact_id.clone()),
            parent_version: parent.and_then(|p| p.version.clone()),
            repository_url: repository.and_then(|r| r.url.clone()),
        }
    }

    // ========================================================================
    // 원본 필드
    // ========================================================================

    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn parent_group_id(&self) -> Option<&str> {
        self.parent_group_id.as_deref()
    }

    pub fn parent_artifact_id(&self) -> Option<&str> {
        self.parent_artifact_id.as_deref()
    }

    /// 선언된 required core 버전
    pub fn parent_version(&self) -> Option<&str> {
        self.parent_version.as_deref()
    }

    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    // ========================================================================
    // Effective 필드 (parent fallback)
    // ========================================================================

    pub fn effective_group_id(&self) -> Option<&str> {
        non_empty(&self.group_id).or(self.parent_group_id())
    }

    pub fn effective_artifact_id(&self) -> Option<&str> {
        non_empty(&self.artifact_id).or(self.parent_artifact_id())
    }

    pub fn effective_version(&self) -> Option<&str> {
        non_empty(&self.version).or(self.parent_version())
    }

    /// Parent에는 name이 없으므로 effective artifactId로 fallback
    pub fn effective_name(&self) -> Option<&str> {
        non_empty(&self.name).or_else(|| self.effective_artifact_id())
    }

    // ========================================================================
    // 분류
    // ========================================================================

    /// `org.jenkins-ci.plugins:plugin` parent
    pub fn is_jenkins_plugin(&self) -> bool {
        PluginConvention::Current.matches(self)
    }

    /// `org.jvnet.hudson.plugins:plugin` parent
    pub fn is_legacy_hudson_plugin(&self) -> bool {
        PluginConvention::Legacy.matches(self)
    }

    /// 두 규칙 중 하나라도 맞으면 리포트 대상
    pub fn is_recognized_plugin(&self) -> bool {
        PluginConvention::classify(self).is_some()
    }

    /// `groupId:artifactId:version` (effective)
    pub fn coordinates(&self) -> String {
        format!(
            "{}:{}:{}",
            self.effective_group_id().unwrap_or_default(),
            self.effective_artifact_id().unwrap_or_default(),
            self.effective_version().unwrap_or_default()
        )
    }
}

/// 빈 문자열도 없는 것으로 취급 (공백 문자열은 값이 있는 것)
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ============================================================================
// 동등성 (좌표 6개)
// ============================================================================

impl PartialEq for Plugin {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.parent_version == other.parent_version
            && self.parent_group_id == other.parent_group_id
            && self.parent_artifact_id == other.parent_artifact_id
    }
}

impl Eq for Plugin {}

impl Hash for Plugin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
        self.group_id.hash(state);
        self.artifact_id.hash(state);
        self.parent_version.hash(state);
        self.parent_group_id.hash(state);
        self.parent_artifact_id.hash(state);
    }
}

impl std::fmt::Display for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coordinates())
    }
}
