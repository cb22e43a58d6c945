//! Plugin Ordering - 플러그인 전순서와 정렬된 중복 없는 집합
//!
//! 비교 순서: parentVersion → parentGroupId → parentArtifactId →
//! groupId → artifactId → version → repositoryUrl.
//! 없는 값(`None`)은 모든 문자열보다 앞에 옵니다.

use crate::plugin::Plugin;
use std::cmp::Ordering;

/// 비교에 쓰는 필드 추출자
type FieldExtractor = fn(&Plugin) -> Option<&str>;

/// 비교 필드 (우선순위 순)
const ORDER_FIELDS: [(&str, FieldExtractor); 7] = [
    ("parentVersion", Plugin::parent_version),
    ("parentGroupId", Plugin::parent_group_id),
    ("parentArtifactId", Plugin::parent_artifact_id),
    ("groupId", Plugin::group_id),
    ("artifactId", Plugin::artifact_id),
    ("version", Plugin::version),
    ("repositoryUrl", Plugin::repository_url),
];

// ============================================================================
// PluginOrdering
// ============================================================================

/// 리포트 출력 순서를 정하는 비교자
pub struct PluginOrdering;

impl PluginOrdering {
    /// 필드를 순서대로 비교하여 처음 다른 필드의 결과 반환
    pub fn compare(a: &Plugin, b: &Plugin) -> Ordering {
        ORDER_FIELDS
            .iter()
            .map(|(_, field)| field(a).cmp(&field(b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// 비교 필드 이름 (우선순위 순)
    pub fn field_names() -> impl Iterator<Item = &'static str> {
        ORDER_FIELDS.iter().map(|(name, _)| *name)
    }
}

// ============================================================================
// PluginSet
// ============================================================================

/// `PluginOrdering` 순으로 정렬된, 좌표 기준 중복 없는 플러그인 집합
///
/// 같은 좌표의 플러그인이 이미 있으면 새 플러그인은 버려집니다 (먼저 들어온 것 유지).
#[derive(Debug, Clone, Default)]
pub struct PluginSet {
    plugins: Vec<Plugin>,
}

impl PluginSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 삽입. 새로 들어갔으면 true
    pub fn insert(&mut self, plugin: Plugin) -> bool {
        match self
            .plugins
            .binary_search_by(|existing| PluginOrdering::compare(existing, &plugin))
        {
            Ok(_) => false,
            Err(index) => {
                // 좌표가 같은 플러그인은 repositoryUrl만 다르므로 삽입 위치 바로 옆에 있음
                let before = index.checked_sub(1).and_then(|i| self.plugins.get(i));
                let after = self.plugins.get(index);
                if before.is_some_and(|p| *p == plugin) || after.is_some_and(|p| *p == plugin) {
                    return false;
                }

                self.plugins.insert(index, plugin);
                true
            }
        }
    }

    pub fn contains(&self, plugin: &Plugin) -> bool {
        self.plugins.iter().any(|p| p == plugin)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.iter()
    }

    /// 오름차순 Vec으로 변환
    pub fn into_vec(self) -> Vec<Plugin> {
        self.plugins
    }
}

impl Extend<Plugin> for PluginSet {
    fn extend<I: IntoIterator<Item = Plugin>>(&mut self, iter: I) {
        for plugin in iter {
            self.insert(plugin);
        }
    }
}

impl FromIterator<Plugin> for PluginSet {
    fn from_iter<I: IntoIterator<Item = Plugin>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportcard_foundation::{ParentCoordinates, ProjectDescriptor, RepositoryHandle};

    fn plugin(parent_version: &str, artifact: &str, url: &str) -> Plugin {
        Plugin::resolve(
            Some(&RepositoryHandle::new(artifact, url)),
            &ProjectDescriptor::new()
                .group_id("org.jenkins-ci.plugins")
                .artifact_id(artifact)
                .version("1.0")
                .parent(ParentCoordinates::new(
                    "org.jenkins-ci.plugins",
                    "plugin",
                    parent_version,
                )),
        )
    }

    #[test]
    fn test_field_priority() {
        let names: Vec<_> = PluginOrdering::field_names().collect();
        assert_eq!(
            names,
            vec![
                "parentVersion",
                "parentGroupId",
                "parentArtifactId",
                "groupId",
                "artifactId",
                "version",
                "repositoryUrl"
            ]
        );
    }

    #[test]
    fn test_parent_version_dominates_artifact() {
        let older = plugin("1.400", "zzz", "https://github.com/jenkinsci/zzz");
        let newer = plugin("1.450", "aaa", "https://github.com/jenkinsci/aaa");
        assert_eq!(PluginOrdering::compare(&older, &newer), Ordering::Less);
        assert_eq!(PluginOrdering::compare(&newer, &older), Ordering::Greater);
    }

    #[test]
    fn test_absent_sorts_before_present() {
        let no_parent = Plugin::resolve(None, &ProjectDescriptor::new().artifact_id("zzz"));
        let with_parent = plugin("1.300", "aaa", "https://github.com/jenkinsci/aaa");
        assert_eq!(PluginOrdering::compare(&no_parent, &with_parent), Ordering::Less);

        let empty_version = Plugin::resolve(
            None,
            &ProjectDescriptor::new().parent(ParentCoordinates::new("g", "a", "")),
        );
        assert_eq!(PluginOrdering::compare(&no_parent, &empty_version), Ordering::Less);
    }

    #[test]
    fn test_repository_url_breaks_ties() {
        let a = plugin("1.450", "git", "https://github.com/jenkinsci/a");
        let b = plugin("1.450", "git", "https://github.com/jenkinsci/b");
        assert_eq!(PluginOrdering::compare(&a, &b), Ordering::Less);
        assert_eq!(PluginOrdering::compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_transitive() {
        let a = plugin("1.400", "x", "u1");
        let b = plugin("1.450", "a", "u2");
        let c = plugin("1.450", "b", "u0");

        assert_eq!(PluginOrdering::compare(&a, &b), Ordering::Less);
        assert_eq!(PluginOrdering::compare(&b, &c), Ordering::Less);
        assert_eq!(PluginOrdering::compare(&a, &c), Ordering::Less);
    }

    #[test]
    fn test_set_keeps_sorted_order() {
        let set: PluginSet = vec![
            plugin("1.500", "c", "u3"),
            plugin("1.300", "b", "u2"),
            plugin("1.450", "a", "u1"),
            plugin("1.300", "a", "u4"),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = set
            .iter()
            .map(|p| (p.parent_version().unwrap_or_default(), p.artifact_id().unwrap_or_default()))
            .collect();
        assert_eq!(
            order,
            vec![("1.300", "a"), ("1.300", "b"), ("1.450", "a"), ("1.500", "c")]
        );
    }

    #[test]
    fn test_set_absorbs_equal_plugins_from_other_repositories() {
        let mut set = PluginSet::new();
        assert!(set.insert(plugin("1.450", "git", "https://github.com/jenkinsci/zz-fork")));
        assert!(!set.insert(plugin("1.450", "git", "https://github.com/jenkinsci/aa-fork")));
        assert!(!set.insert(plugin("1.450", "git", "https://github.com/jenkinsci/zz-fork")));

        assert_eq!(set.len(), 1);
        let kept = set.into_vec().remove(0);
        assert_eq!(kept.repository_url(), Some("https://github.com/jenkinsci/zz-fork"));
    }

    #[test]
    fn test_set_absorbs_duplicate_between_neighbors() {
        let mut set = PluginSet::new();
        set.insert(plugin("1.450", "a", "u"));
        set.insert(plugin("1.450", "git", "m"));
        set.insert(plugin("1.450", "z", "u"));

        assert!(!set.insert(plugin("1.450", "git", "a")));
        assert!(!set.insert(plugin("1.450", "git", "z")));
        assert_eq!(set.len(), 3);
        assert!(set.contains(&plugin("1.450", "git", "other")));
    }
}
