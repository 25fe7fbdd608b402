use std::fmt;

use serde::Serialize;
use tracing::info;

use super::probe::{EffectiveType, EnvironmentProbe};

/// Coarse device capability class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    High,
    Medium,
    Low,
}

impl PerformanceTier {
    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceTier::High => "high",
            PerformanceTier::Medium => "medium",
            PerformanceTier::Low => "low",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Low-end if any signal says so: few cores, little memory, a slow network
/// or a data-saver preference. Missing core count counts as a single core.
pub fn is_low_end_device(probe: &dyn EnvironmentProbe) -> bool {
    if !probe.is_available() {
        return false;
    }

    let cores = probe.hardware_concurrency().unwrap_or(1);
    if cores < 4 {
        return true;
    }

    if probe.device_memory().is_some_and(|memory| memory < 4.0) {
        return true;
    }

    if let Some(connection) = probe.connection() {
        if connection.effective_type.is_some_and(EffectiveType::is_slow) {
            return true;
        }
        if connection.save_data {
            return true;
        }
    }

    false
}

/// Classify the device; Medium when there is nothing to inspect
pub fn device_performance_tier(probe: &dyn EnvironmentProbe) -> PerformanceTier {
    if !probe.is_available() {
        return PerformanceTier::Medium;
    }

    let cores = probe.hardware_concurrency().unwrap_or(2);
    let memory = probe.device_memory().unwrap_or(4.0);

    if cores >= 6 && memory >= 8.0 {
        PerformanceTier::High
    } else if cores < 4 || memory < 4.0 {
        PerformanceTier::Low
    } else {
        PerformanceTier::Medium
    }
}

pub fn prefers_reduced_motion(probe: &dyn EnvironmentProbe) -> bool {
    probe.is_available() && probe.prefers_reduced_motion()
}

/// Which gallery presentation to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryMode {
    /// Eased slide transitions
    Animated,
    /// Slides snap into place without transitions
    Reduced,
}

/// Snapshot of every signal used to pick a gallery mode
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    pub available: bool,
    pub hardware_concurrency: Option<u32>,
    pub device_memory: Option<f64>,
    pub effective_type: Option<EffectiveType>,
    pub save_data: bool,
    pub tier: PerformanceTier,
    pub low_end: bool,
    pub reduced_motion: bool,
    pub mode: GalleryMode,
}

impl EnvironmentReport {
    pub fn collect(probe: &dyn EnvironmentProbe) -> Self {
        let tier = device_performance_tier(probe);
        let low_end = is_low_end_device(probe);
        let reduced_motion = prefers_reduced_motion(probe);
        let connection = probe.connection().unwrap_or_default();

        let mode = if low_end || reduced_motion || tier == PerformanceTier::Low {
            GalleryMode::Reduced
        } else {
            GalleryMode::Animated
        };

        Self {
            available: probe.is_available(),
            hardware_concurrency: probe.hardware_concurrency(),
            device_memory: probe.device_memory(),
            effective_type: connection.effective_type,
            save_data: connection.save_data,
            tier,
            low_end,
            reduced_motion,
            mode,
        }
    }

    /// Log the chosen mode with the signals behind it
    pub fn log(&self) {
        info!(
            tier = %self.tier,
            low_end = self.low_end,
            reduced_motion = self.reduced_motion,
            cores = ?self.hardware_concurrency,
            memory = ?self.device_memory,
            mode = ?self.mode,
            "Gallery mode selected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::probe::{NoEnvironment, StaticProbe};

    #[test]
    fn test_tier_examples() {
        assert_eq!(device_performance_tier(&StaticProbe::device(8, 16.0)), PerformanceTier::High);
        assert_eq!(device_performance_tier(&StaticProbe::device(2, 2.0)), PerformanceTier::Low);
        assert_eq!(device_performance_tier(&StaticProbe::device(4, 4.0)), PerformanceTier::Medium);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(device_performance_tier(&StaticProbe::device(6, 8.0)), PerformanceTier::High);
        assert_eq!(device_performance_tier(&StaticProbe::device(12, 4.0)), PerformanceTier::Medium);
        assert_eq!(device_performance_tier(&StaticProbe::device(8, 2.0)), PerformanceTier::Low);
    }

    #[test]
    fn test_tier_defaults_when_signals_missing() {
        // cores default to 2
        assert_eq!(device_performance_tier(&StaticProbe::new()), PerformanceTier::Low);
        // memory defaults to 4
        assert_eq!(
            device_performance_tier(&StaticProbe::new().with_cores(6)),
            PerformanceTier::Medium
        );
        assert_eq!(device_performance_tier(&NoEnvironment), PerformanceTier::Medium);
    }

    #[test]
    fn test_low_end_signals() {
        assert!(is_low_end_device(&StaticProbe::device(2, 16.0)));
        assert!(is_low_end_device(&StaticProbe::device(8, 2.0)));
        assert!(is_low_end_device(
            &StaticProbe::device(8, 16.0).with_connection(EffectiveType::TwoG, false)
        ));
        assert!(is_low_end_device(
            &StaticProbe::device(8, 16.0).with_connection(EffectiveType::FourG, true)
        ));
        assert!(!is_low_end_device(
            &StaticProbe::device(8, 16.0).with_connection(EffectiveType::ThreeG, false)
        ));
    }

    #[test]
    fn test_low_end_missing_signals() {
        // Unknown core count is treated as one core
        assert!(is_low_end_device(&StaticProbe::new()));
        // Unknown memory is not held against the device
        assert!(!is_low_end_device(&StaticProbe::new().with_cores(8)));
        assert!(!is_low_end_device(&NoEnvironment));
    }

    #[test]
    fn test_report_picks_mode() {
        let report = EnvironmentReport::collect(&StaticProbe::device(8, 16.0));
        assert_eq!(report.mode, GalleryMode::Animated);
        assert_eq!(report.tier, PerformanceTier::High);

        let report = EnvironmentReport::collect(&StaticProbe::device(8, 16.0).with_reduced_motion());
        assert_eq!(report.mode, GalleryMode::Reduced);

        let report = EnvironmentReport::collect(&StaticProbe::device(2, 16.0));
        assert_eq!(report.mode, GalleryMode::Reduced);
        assert!(report.low_end);
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PerformanceTier::High).unwrap(), "\"high\"");
        assert_eq!(PerformanceTier::Medium.to_string(), "medium");
    }
}
