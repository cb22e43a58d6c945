//! Plugin Convention - 플러그인 parent 좌표 규칙

use super::model::Plugin;

/// 현재 플러그인 parent groupId
pub const JENKINS_PLUGIN_GROUP_ID: &str = "org.jenkins-ci.plugins";

/// 레거시 플러그인 parent groupId
pub const HUDSON_PLUGIN_GROUP_ID: &str = "org.jvnet.hudson.plugins";

/// 두 규칙 공통 parent artifactId
pub const PLUGIN_PARENT_ARTIFACT_ID: &str = "plugin";

/// 인정되는 parent 좌표 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginConvention {
    /// `org.jenkins-ci.plugins:plugin`
    Current,
    /// `org.jvnet.hudson.plugins:plugin`
    Legacy,
}

impl PluginConvention {
    /// 검사 순서
    pub const ALL: [PluginConvention; 2] = [PluginConvention::Current, PluginConvention::Legacy];

    /// 규칙의 parent groupId
    pub fn parent_group_id(&self) -> &'static str {
        match self {
            PluginConvention::Current => JENKINS_PLUGIN_GROUP_ID,
            PluginConvention::Legacy => HUDSON_PLUGIN_GROUP_ID,
        }
    }

    /// 규칙의 parent artifactId
    pub fn parent_artifact_id(&self) -> &'static str {
        PLUGIN_PARENT_ARTIFACT_ID
    }

    /// ASCII 대소문자 무시 비교. parent 필드가 없으면 false
    pub fn matches(&self, plugin: &Plugin) -> bool {
        let group_matches = plugin
            .parent_group_id()
            .is_some_and(|g| g.eq_ignore_ascii_case(self.parent_group_id()));
        let artifact_matches = plugin
            .parent_artifact_id()
            .is_some_and(|a| a.eq_ignore_ascii_case(self.parent_artifact_id()));

        group_matches && artifact_matches
    }

    /// 플러그인이 따르는 규칙 (없으면 None)
    pub fn classify(plugin: &Plugin) -> Option<PluginConvention> {
        Self::ALL.into_iter().find(|convention| convention.matches(plugin))
    }
}

impl std::fmt::Display for PluginConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.parent_group_id(), self.parent_artifact_id())
    }
}
