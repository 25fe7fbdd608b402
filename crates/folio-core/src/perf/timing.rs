//! Recommended wait and interval values for common input sources.

use std::time::Duration;

/// Debounce windows
pub mod debounce {
    use super::Duration;

    /// User typing in a search box
    pub const SEARCH: Duration = Duration::from_millis(300);
    pub const RESIZE: Duration = Duration::from_millis(150);
    pub const SCROLL: Duration = Duration::from_millis(100);
    /// Form input validation
    pub const INPUT: Duration = Duration::from_millis(200);
}

/// Throttle intervals
pub mod throttle {
    use super::Duration;

    /// ~60fps
    pub const SCROLL: Duration = Duration::from_millis(16);
    pub const MOUSEMOVE: Duration = Duration::from_millis(16);
    pub const RESIZE: Duration = Duration::from_millis(100);
    pub const WHEEL: Duration = Duration::from_millis(16);
}
