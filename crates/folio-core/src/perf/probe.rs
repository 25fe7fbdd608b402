//! Environment capability probes.
//!
//! Device heuristics never touch the host directly; they ask an
//! [`EnvironmentProbe`]. [`NoEnvironment`] answers like a context with no
//! device information at all, [`StaticProbe`] returns fixed values, and
//! [`SystemProbe`] inspects the machine it runs on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::PerformanceConfig;
use crate::Error;

/// Network quality bucket, slowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EffectiveType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
}

impl EffectiveType {
    /// The two slowest tiers
    pub fn is_slow(self) -> bool {
        matches!(self, EffectiveType::Slow2g | EffectiveType::TwoG)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EffectiveType::Slow2g => "slow-2g",
            EffectiveType::TwoG => "2g",
            EffectiveType::ThreeG => "3g",
            EffectiveType::FourG => "4g",
        }
    }
}

impl fmt::Display for EffectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectiveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow-2g" => Ok(EffectiveType::Slow2g),
            "2g" => Ok(EffectiveType::TwoG),
            "3g" => Ok(EffectiveType::ThreeG),
            "4g" => Ok(EffectiveType::FourG),
            other => Err(Error::InvalidEffectiveType(other.to_string())),
        }
    }
}

/// Network information, when the environment exposes any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub effective_type: Option<EffectiveType>,
    pub save_data: bool,
}

/// Source of device and environment signals
pub trait EnvironmentProbe {
    /// False when there is no environment to inspect at all
    fn is_available(&self) -> bool;

    /// Logical CPU cores
    fn hardware_concurrency(&self) -> Option<u32>;

    /// Device memory in GiB
    fn device_memory(&self) -> Option<f64>;

    fn connection(&self) -> Option<ConnectionInfo>;

    fn prefers_reduced_motion(&self) -> bool;

    /// Whether visibility changes can be observed
    fn supports_intersection_observer(&self) -> bool;
}

/// Probe for a context with nothing to inspect
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnvironment;

impl EnvironmentProbe for NoEnvironment {
    fn is_available(&self) -> bool {
        false
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        None
    }

    fn device_memory(&self) -> Option<f64> {
        None
    }

    fn connection(&self) -> Option<ConnectionInfo> {
        None
    }

    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    fn supports_intersection_observer(&self) -> bool {
        false
    }
}

/// Probe with fixed answers
#[derive(Debug, Clone, PartialEq)]
pub struct StaticProbe {
    pub available: bool,
    pub hardware_concurrency: Option<u32>,
    pub device_memory: Option<f64>,
    pub connection: Option<ConnectionInfo>,
    pub reduced_motion: bool,
    pub intersection_observer: bool,
}

impl Default for StaticProbe {
    fn default() -> Self {
        Self {
            available: true,
            hardware_concurrency: None,
            device_memory: None,
            connection: None,
            reduced_motion: false,
            intersection_observer: true,
        }
    }
}

impl StaticProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the common cores + memory case
    pub fn device(cores: u32, memory: f64) -> Self {
        Self::new().with_cores(cores).with_memory(memory)
    }

    pub fn with_cores(mut self, cores: u32) -> Self {
        self.hardware_concurrency = Some(cores);
        self
    }

    pub fn with_memory(mut self, memory: f64) -> Self {
        self.device_memory = Some(memory);
        self
    }

    pub fn with_connection(mut self, effective_type: EffectiveType, save_data: bool) -> Self {
        self.connection = Some(ConnectionInfo {
            effective_type: Some(effective_type),
            save_data,
        });
        self
    }

    pub fn with_reduced_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }

    pub fn without_intersection_observer(mut self) -> Self {
        self.intersection_observer = false;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

impl EnvironmentProbe for StaticProbe {
    fn is_available(&self) -> bool {
        self.available
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        self.hardware_concurrency
    }

    fn device_memory(&self) -> Option<f64> {
        self.device_memory
    }

    fn connection(&self) -> Option<ConnectionInfo> {
        self.connection
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn supports_intersection_observer(&self) -> bool {
        self.intersection_observer
    }
}

/// Probe for the local machine, with config overrides taking precedence
#[derive(Debug, Clone)]
pub struct SystemProbe {
    cores: Option<u32>,
    memory: Option<f64>,
    connection: Option<ConnectionInfo>,
    reduced_motion: bool,
}

impl SystemProbe {
    pub fn from_config(config: &PerformanceConfig) -> Self {
        let cores = config.hardware_concurrency.or_else(|| {
            std::thread::available_parallelism()
                .ok()
                .and_then(|n| u32::try_from(n.get()).ok())
        });
        let memory = config.device_memory.or_else(system_memory);
        let connection = (config.effective_type.is_some() || config.save_data).then_some(
            ConnectionInfo {
                effective_type: config.effective_type,
                save_data: config.save_data,
            },
        );

        tracing::debug!(?cores, ?memory, ?connection, "Probed system environment");

        Self {
            cores,
            memory,
            connection,
            reduced_motion: config.reduced_motion,
        }
    }
}

impl EnvironmentProbe for SystemProbe {
    fn is_available(&self) -> bool {
        true
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        self.cores
    }

    fn device_memory(&self) -> Option<f64> {
        self.memory
    }

    fn connection(&self) -> Option<ConnectionInfo> {
        self.connection
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn supports_intersection_observer(&self) -> bool {
        true
    }
}

/// Total memory of this machine, bucketed
fn system_memory() -> Option<f64> {
    let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
    parse_meminfo_gib(&meminfo).map(memory_bucket)
}

/// `MemTotal` from `/proc/meminfo` contents, in GiB
pub(crate) fn parse_meminfo_gib(meminfo: &str) -> Option<f64> {
    let line = meminfo.lines().find(|l| l.starts_with("MemTotal:"))?;
    let kib: f64 = line
        .trim_start_matches("MemTotal:")
        .split_whitespace()
        .next()?
        .parse()
        .ok()?;
    Some(kib / (1024.0 * 1024.0))
}

/// Round down to a power of two, at least 0.25 GiB.
///
/// Reported sizes sit slightly under the nominal value (kernel reservations),
/// so values within 10% of the next power of two round up to it.
pub(crate) fn memory_bucket(gib: f64) -> f64 {
    if gib <= 0.25 {
        return 0.25;
    }
    let lower = 2f64.powf(gib.log2().floor());
    let upper = lower * 2.0;
    if gib >= upper * 0.9 {
        upper
    } else {
        lower
    }
}
