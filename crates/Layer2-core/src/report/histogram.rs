//! Required Core Histogram - required core 버전별 플러그인 수
//!
//! `"1.300"`..=`"1.600"` 구간을 0으로 미리 채워 두고, 구간 밖 버전은
//! 처음 나올 때 버킷을 만듭니다.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// 미리 채우는 버전 접두어
pub const REQUIRED_CORE_PREFIX: &str = "1.";

/// 미리 채우는 minor 버전 구간
pub const REQUIRED_CORE_SEED_RANGE: RangeInclusive<u32> = 300..=600;

/// Parent version이 없는 플러그인이 들어가는 버킷 이름
pub const UNKNOWN_REQUIRED_CORE: &str = "";

// ============================================================================
// RequiredCore - 버킷 하나
// ============================================================================

/// Histogram 버킷 (동등성/순서는 name 기준)
#[derive(Debug, Clone, Serialize)]
pub struct RequiredCore {
    name: String,
    count: u32,
}

impl RequiredCore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

impl PartialEq for RequiredCore {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RequiredCore {}

impl PartialOrd for RequiredCore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RequiredCore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

// ============================================================================
// RequiredCoreHistogram
// ============================================================================

/// 버전 문자열 → 버킷
#[derive(Debug, Clone)]
pub struct RequiredCoreHistogram {
    buckets: BTreeMap<String, RequiredCore>,
}

impl Default for RequiredCoreHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl RequiredCoreHistogram {
    /// 시드 구간 전체를 0으로 채운 histogram
    pub fn new() -> Self {
        let buckets = REQUIRED_CORE_SEED_RANGE
            .map(|minor| format!("{}{}", REQUIRED_CORE_PREFIX, minor))
            .map(|name| (name.clone(), RequiredCore::new(name)))
            .collect();

        Self { buckets }
    }

    /// 버전 하나 기록 (버킷이 없으면 만든 뒤 증가)
    pub fn record(&mut self, parent_version: Option<&str>) {
        let name = parent_version.unwrap_or(UNKNOWN_REQUIRED_CORE);
        self.buckets
            .entry(name.to_string())
            .or_insert_with(|| RequiredCore::new(name))
            .increment();
    }

    /// 버킷 수
    pub fn count(&self, name: &str) -> Option<u32> {
        self.buckets.get(name).map(RequiredCore::count)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// 기록된 총 플러그인 수
    pub fn total(&self) -> u32 {
        self.buckets.values().map(RequiredCore::count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RequiredCore> {
        self.buckets.values()
    }

    /// 이름 오름차순 버킷 목록
    pub fn into_buckets(self) -> Vec<RequiredCore> {
        self.buckets.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_buckets() {
        let histogram = RequiredCoreHistogram::new();
        assert_eq!(histogram.len(), 301);
        assert_eq!(histogram.total(), 0);

        let buckets = histogram.into_buckets();
        assert_eq!(buckets.first().map(RequiredCore::name), Some("1.300"));
        assert_eq!(buckets.last().map(RequiredCore::name), Some("1.600"));
        assert!(buckets.iter().all(|b| b.count() == 0));
        assert!(buckets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_record_in_range() {
        let mut histogram = RequiredCoreHistogram::new();
        histogram.record(Some("1.450"));
        histogram.record(Some("1.450"));

        assert_eq!(histogram.count("1.450"), Some(2));
        assert_eq!(histogram.count("1.451"), Some(0));
        assert_eq!(histogram.len(), 301);
    }

    #[test]
    fn test_record_out_of_range_creates_bucket() {
        let mut histogram = RequiredCoreHistogram::new();
        histogram.record(Some("1.999"));

        assert_eq!(histogram.count("1.999"), Some(1));
        assert_eq!(histogram.len(), 302);
        assert_eq!(histogram.count("1.300"), Some(0));
        assert_eq!(histogram.count("1.600"), Some(0));
    }

    #[test]
    fn test_lexicographic_output_order() {
        let mut histogram = RequiredCoreHistogram::new();
        histogram.record(Some("2.0"));
        histogram.record(Some("1.1000"));
        histogram.record(Some("1.299"));

        let names: Vec<_> = histogram
            .iter()
            .map(|b| b.name().to_string())
            .filter(|n| !n.starts_with("1.3") && !n.starts_with("1.4") && !n.starts_with("1.5"))
            .collect();
        assert_eq!(names, vec!["1.1000", "1.299", "1.600", "2.0"]);
    }

    #[test]
    fn test_absent_version_bucket_sorts_first() {
        let mut histogram = RequiredCoreHistogram::new();
        histogram.record(None);

        assert_eq!(histogram.count(UNKNOWN_REQUIRED_CORE), Some(1));
        assert_eq!(
            histogram.iter().next().map(RequiredCore::name),
            Some(UNKNOWN_REQUIRED_CORE)
        );
    }

    #[test]
    fn test_required_core_equality_by_name() {
        let mut a = RequiredCore::new("1.450");
        a.increment();
        let b = RequiredCore::new("1.450");
        assert_eq!(a, b);
        assert!(RequiredCore::new("1.300") < RequiredCore::new("1.301"));
    }
}
