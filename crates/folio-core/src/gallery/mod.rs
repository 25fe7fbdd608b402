//! Achievements gallery engine
//!
//! - `models` - gallery items and the JSON content loader
//! - `variant` - slide positions, direction and animation poses
//! - `projection` - the deduplicated left/center/right window
//! - `gesture` - swipe power and drag tracking
//! - `autoplay` - the self re-arming advance timer
//! - `carousel` - the state machine tying them together

pub mod autoplay;
pub mod carousel;
pub mod gesture;
pub mod models;
pub mod projection;
pub mod variant;

pub use autoplay::Autoplay;
pub use carousel::{Carousel, Indicator, NavigationSource, Transition};
pub use gesture::{
    classify_release, swipe_power, DragRelease, DragTracker, SwipeIntent,
    SWIPE_CONFIDENCE_THRESHOLD,
};
pub use models::{load_items, parse_items, GalleryItem};
pub use projection::{project, VisibleSlide};
pub use variant::{PageDirection, Pose, SlidePosition, SlideVariant};
