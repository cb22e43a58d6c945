//! 리포트 시나리오 통합 테스트
//!
//! `cargo test -p reportcard-core --test report_scenario`

use async_trait::async_trait;
use reportcard_core::{
    Plugin, PluginOrdering, PluginSet, ReportAssembler, ReportFormat, RequiredCoreHistogram,
};
use reportcard_foundation::{
    DescriptorFetcher, ParentCoordinates, ProjectDescriptor, RepositoryHandle,
};
use std::cmp::Ordering;
use std::sync::Arc;

/// repo1: 플러그인, repo2: fetch 실패, repo3: 관련 없는 parent
struct ScenarioFetcher;

#[async_trait]
impl DescriptorFetcher for ScenarioFetcher {
    async fn fetch_descriptor(&self, repository: &RepositoryHandle) -> Option<ProjectDescriptor> {
        match repository.name.as_str() {
            "repo1" => Some(
                ProjectDescriptor::new()
                    .group_id("g")
                    .artifact_id("a")
                    .version("1.0")
                    .parent(ParentCoordinates::new(
                        "org.jenkins-ci.plugins",
                        "plugin",
                        "1.450",
                    )),
            ),
            "repo3" => Some(
                ProjectDescriptor::new()
                    .artifact_id("x")
                    .parent(ParentCoordinates::new("unrelated", "thing", "1.450")),
            ),
            _ => None,
        }
    }
}

fn repositories() -> Vec<RepositoryHandle> {
    ["repo1", "repo2", "repo3"]
        .iter()
        .map(|name| RepositoryHandle::new(*name, format!("https://github.com/jenkinsci/{}", name)))
        .collect()
}

#[tokio::test]
async fn test_three_repository_scenario() {
    let assembler = ReportAssembler::new(Arc::new(ScenarioFetcher));
    let report = assembler.generate(repositories()).await;

    assert_eq!(report.plugins.len(), 1);
    let plugin = &report.plugins[0];
    assert_eq!(plugin.group_id(), Some("g"));
    assert_eq!(plugin.artifact_id(), Some("a"));
    assert_eq!(plugin.version(), Some("1.0"));
    assert_eq!(
        plugin.repository_url(),
        Some("https://github.com/jenkinsci/repo1")
    );

    for core in &report.required_cores {
        let expected = if core.name() == "1.450" { 1 } else { 0 };
        assert_eq!(core.count(), expected, "bucket {}", core.name());
    }
    assert_eq!(report.required_cores.len(), 301);
}

#[tokio::test]
async fn test_scenario_renders_in_both_formats() {
    let report = ReportAssembler::new(Arc::new(ScenarioFetcher))
        .with_concurrency(3)
        .generate(repositories())
        .await;
    let now = chrono::Utc::now();

    let html = ReportFormat::Html.renderer().render(&report, now).unwrap();
    assert!(html.contains("repo1"));
    assert!(!html.contains("repo3"));

    let json = ReportFormat::Json.renderer().render(&report, now).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["plugins"][0]["artifactId"], "a");
    assert_eq!(value["plugins"][0]["requiredCore"], "1.450");
}

#[test]
fn test_ordering_is_total_over_mixed_plugins() {
    let descriptors = vec![
        ProjectDescriptor::new().artifact_id("no-parent"),
        ProjectDescriptor::new()
            .artifact_id("b")
            .parent(ParentCoordinates::new("org.jenkins-ci.plugins", "plugin", "1.400")),
        ProjectDescriptor::new()
            .group_id("")
            .artifact_id("a")
            .parent(ParentCoordinates::new("org.jenkins-ci.plugins", "plugin", "1.400")),
        ProjectDescriptor::new()
            .artifact_id("a")
            .parent(ParentCoordinates::new("org.jvnet.hudson.plugins", "plugin", "1.400")),
        ProjectDescriptor::new()
            .artifact_id("c")
            .version("2.0")
            .parent(ParentCoordinates::new("org.jenkins-ci.plugins", "plugin", "1.300")),
    ];
    let plugins: Vec<Plugin> = descriptors
        .iter()
        .enumerate()
        .map(|(i, d)| {
            Plugin::resolve(
                Some(&RepositoryHandle::new(format!("r{}", i), format!("u{}", i))),
                d,
            )
        })
        .collect();

    for a in &plugins {
        assert_eq!(PluginOrdering::compare(a, a), Ordering::Equal);
        for b in &plugins {
            assert_eq!(
                PluginOrdering::compare(a, b),
                PluginOrdering::compare(b, a).reverse()
            );
            for c in &plugins {
                if PluginOrdering::compare(a, b) == Ordering::Less
                    && PluginOrdering::compare(b, c) == Ordering::Less
                {
                    assert_eq!(PluginOrdering::compare(a, c), Ordering::Less);
                }
            }
        }
    }

    let set: PluginSet = plugins.into_iter().collect();
    let names: Vec<_> = set
        .iter()
        .map(|p| p.artifact_id().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["no-parent", "c", "b", "a", "a"]);
}

#[test]
fn test_histogram_seed_names() {
    let buckets = RequiredCoreHistogram::new().into_buckets();
    let expected: Vec<String> = (300..=600).map(|n| format!("1.{}", n)).collect();
    let names: Vec<String> = buckets.iter().map(|b| b.name().to_string()).collect();
    assert_eq!(names, expected);
}
