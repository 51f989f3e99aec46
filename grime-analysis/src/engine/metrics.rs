//! Per-file timing records and the aggregates derived from them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing record for one successfully parsed file. Created once, never
/// mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetrics {
    /// Relative path of the measured file.
    pub file: String,
    #[serde(with = "duration_millis")]
    pub parse_time: Duration,
    /// Sum across all analyzers run on the file.
    #[serde(with = "duration_millis")]
    pub analysis_time: Duration,
    /// Wall-clock time for the whole file iteration.
    #[serde(with = "duration_millis")]
    pub total_time: Duration,
    pub issues_found: usize,
    pub analyzers_run: usize,
}

/// Run-level aggregates, recomputed on demand from a set of [`FileMetrics`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Sum of per-file total times.
    #[serde(with = "duration_millis")]
    pub total_duration: Duration,
    #[serde(with = "duration_millis")]
    pub average_time_per_file: Duration,
    pub fastest_file: Option<FileMetrics>,
    pub slowest_file: Option<FileMetrics>,
    #[serde(with = "duration_millis")]
    pub total_parse_time: Duration,
    #[serde(with = "duration_millis")]
    pub total_analysis_time: Duration,
}

impl PerformanceSummary {
    /// Zero aggregates with no fastest or slowest record.
    pub fn empty() -> Self {
        Self {
            total_duration: Duration::ZERO,
            average_time_per_file: Duration::ZERO,
            fastest_file: None,
            slowest_file: None,
            total_parse_time: Duration::ZERO,
            total_analysis_time: Duration::ZERO,
        }
    }

    /// Derive aggregates from per-file records. An empty slice yields
    /// [`PerformanceSummary::empty`]; there is no division by zero.
    pub fn from_file_metrics(metrics: &[FileMetrics]) -> Self {
        if metrics.is_empty() {
            return Self::empty();
        }

        let total_duration: Duration = metrics.iter().map(|m| m.total_time).sum();
        let total_parse_time: Duration = metrics.iter().map(|m| m.parse_time).sum();
        let total_analysis_time: Duration = metrics.iter().map(|m| m.analysis_time).sum();

        // Ties keep the earliest record for both extremes.
        let mut fastest = &metrics[0];
        let mut slowest = &metrics[0];
        for metric in metrics {
            if metric.total_time < fastest.total_time {
                fastest = metric;
            }
            if metric.total_time > slowest.total_time {
                slowest = metric;
            }
        }

        Self {
            total_duration,
            average_time_per_file: total_duration / metrics.len() as u32,
            fastest_file: Some(fastest.clone()),
            slowest_file: Some(slowest.clone()),
            total_parse_time,
            total_analysis_time,
        }
    }
}

/// Render a duration as `12ms`, `1.24s`, or `2m 5s`.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1_000 {
        format!("{millis}ms")
    } else if millis < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

// Custom serialization for Duration as milliseconds
pub(crate) mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
