//! Performance utilities
//!
//! # Rate limiting
//! - `throttle` - leading-edge throttle on a [`Clock`](crate::clock::Clock)
//! - `frame` - frame-aligned throttles driven by the host render loop
//! - `debounce` - trailing-edge debounce
//! - `timing` - recommended intervals per input source
//!
//! # Environment heuristics
//! - `probe` - injectable capability probes
//! - `tier` - low-end detection, performance tier, gallery mode
//! - `lazy` - one-shot visibility observer

pub mod debounce;
pub mod frame;
pub mod lazy;
pub mod probe;
pub mod throttle;
pub mod tier;
pub mod timing;

pub use debounce::{debounce, Debounce};
pub use frame::{double_raf_throttle, raf_throttle, FrameThrottle};
pub use lazy::{create_lazy_observer, Bounds, IntersectionEntry, LazyObserver, ObserverOptions};
pub use probe::{
    ConnectionInfo, EffectiveType, EnvironmentProbe, NoEnvironment, StaticProbe, SystemProbe,
};
pub use throttle::{throttle, Throttle};
pub use tier::{
    device_performance_tier, is_low_end_device, prefers_reduced_motion, EnvironmentReport,
    GalleryMode, PerformanceTier,
};
